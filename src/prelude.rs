//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use singleton_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::error::{Result, SingletonError};

// Global systems and context
pub use crate::core::globals::{GlobalContext, GlobalSystems, TickControl};

// Scene graph
pub use crate::core::graph::{GameObject, ObjectId, SceneGraph};

// Scene system
pub use crate::core::scene::{Scene, SceneKey, SceneTransition};

// Singleton holders
pub use crate::core::singleton::{AttachOutcome, LazyHolder, Persistence, Singleton, SingletonRegistry};

// Managers
pub use crate::managers::{
    AudioManager, FileSystem, GameManagerOne, GameManagerThree, GameManagerTwo, LogWriter,
    LogWriterFn, PlayerManager, PlayerStateManager,
};
