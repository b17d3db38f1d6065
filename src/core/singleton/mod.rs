//=========================================================================
// Singleton Holders
//=========================================================================
//
// Two kinds of holder guarantee at most one live instance per type:
//
//   LazyHolder<T>      process-wide, value constructed on first access
//   SingletonRegistry  scene-bound, one slot per TypeId pointing at the
//                      scene object that carries the instance
//
// Scene-bound slots follow a Persistence policy:
//   AcrossScenes  object survives scene loads, slot is never cleared
//   SceneScoped   object dies with its scene, slot cleared on teardown
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::graph::Component;

//=== Module Declarations =================================================

mod lazy;
mod registry;

//=== Public API ==========================================================

pub use lazy::LazyHolder;
pub use registry::{AttachOutcome, SingletonRegistry};

//=== Persistence =========================================================

/// Lifetime policy of a scene-bound singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// The instance is kept alive across scene loads.
    AcrossScenes,

    /// The instance is torn down with its scene; the next access after a
    /// scene load builds a fresh one.
    SceneScoped,
}

//=== Singleton Trait =====================================================

/// A component type managed by a [`SingletonRegistry`].
///
/// # Example
///
/// ```rust
/// use singleton_engine::core::singleton::{Persistence, Singleton};
///
/// struct ScoreBoard { points: u32 }
///
/// impl Singleton for ScoreBoard {
///     const NAME: &'static str = "Score Board";
///     const PERSISTENCE: Persistence = Persistence::SceneScoped;
///
///     fn create() -> Self {
///         ScoreBoard { points: 0 }
///     }
/// }
/// ```
pub trait Singleton: Component + Sized {
    /// Name given to the scene object created to carry the instance.
    const NAME: &'static str;

    /// Whether the instance survives scene loads.
    const PERSISTENCE: Persistence;

    /// Builds the instance when none exists yet.
    fn create() -> Self;
}
