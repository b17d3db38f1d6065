//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Contains systems that drive scenes and react to their requests.
// Systems operate on GlobalContext data.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::scene::{SceneKey, SceneManager};

//=== TickControl =========================================================

/// Control flow signalled by one engine tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `scene_manager`: scene registration and loading
pub struct GlobalSystems<S: SceneKey> {
    /// The scene manager for scene lifecycle and loading.
    ///
    /// Manages scene registration, activation, updates, and transitions.
    /// Processes the transition queue from GlobalContext.
    pub scene_manager: SceneManager<S>,
}

impl<S: SceneKey> GlobalSystems<S> {
    /// Creates a new systems container with default-initialized systems.
    ///
    /// This is typically called internally by the engine. Users should access
    /// systems via [`crate::Engine::init`] instead.
    pub(crate) fn new() -> Self {
        Self {
            scene_manager: SceneManager::new(),
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates all engine systems for the current tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Scene Update**: Updates the active scene with the current context
    /// 2. **Transition Processing**: Applies queued scene transitions
    pub(crate) fn update(&mut self, context: &mut GlobalContext<S>) -> TickControl {
        self.scene_manager.update(context);

        if self.scene_manager.process_transitions(context) {
            TickControl::Exit
        } else {
            TickControl::Continue
        }
    }
}
