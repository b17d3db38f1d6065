//=========================================================================
// Scene System
//=========================================================================
//
// Manages scene registration and single-scene loading.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<S, Box<dyn Scene>>
//     └─ active: Option<S>
//
// Flow:
//   update()              → active Scene::update()
//   process_transitions() → Load(K): on_exit → unload graph → on_enter
//
// Loading a scene is what produces teardown events: every object not
// marked persistent is destroyed and scoped singleton slots are cleared.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;

//=== Module Declarations =================================================

mod scene_manager;

//=== Public API ==========================================================

pub use scene_manager::{SceneKey, SceneManager, SceneTransition};

//=== Scene Trait =========================================================

/// Defines scene behavior with lifecycle hooks and update logic.
///
/// Scenes are registered in SceneManager and become active when loaded.
/// The scene value itself outlives loads and unloads; only the objects it
/// spawned into the graph are torn down.
///
/// # Minimal Implementation
///
/// Only `update()` is required. Lifecycle hooks have default empty implementations:
///
/// ```rust
/// # use singleton_engine::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum GameScene { Main }
/// # impl SceneKey for GameScene {}
/// struct MyScene;
///
/// impl Scene<GameScene> for MyScene {
///     fn update(&mut self, context: &mut GlobalContext<GameScene>) {
///         // Only this method is required
///     }
/// }
/// ```
pub trait Scene<S: SceneKey>: Send {
    /// Called when the scene is loaded, after the previous scene's objects
    /// have been torn down.
    ///
    /// Default implementation does nothing. Override to spawn scene objects.
    fn on_enter(&mut self, _context: &mut GlobalContext<S>) {}

    /// Called before the scene's objects are torn down.
    ///
    /// Default implementation does nothing.
    fn on_exit(&mut self, _context: &mut GlobalContext<S>) {}

    /// Called every tick while the scene is active.
    fn update(&mut self, context: &mut GlobalContext<S>);
}
