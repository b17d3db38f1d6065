//=========================================================================
// Singleton Engine
//
// Main entry point and owner of every singleton slot.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Loop]
//         │                          │
//         ├─ with_frame_budget()     ├─ initialize_subsystems()
//         ├─ with_log_path()         ├─ tick() × N
//         └─ with_initial_scene()    └─ shutdown_subsystems()
// ```
//
// The engine is the application root: it owns the GlobalContext, so
// the singleton registry is reached through an explicit reference and
// never through a static.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::globals::{GlobalContext, GlobalSystems, TickControl};
use crate::core::scene::SceneKey;
use crate::core::singleton::AttachOutcome;
use crate::error::Result;
use crate::managers::LogWriter;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Frame budget**: 600 ticks per [`Engine::run`]
/// - **Log path**: none (log writer lines are discarded on flush)
/// - **Initial scene**: none
///
/// # Examples
///
/// ```no_run
/// use singleton_engine::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameScene { Main }
/// impl SceneKey for GameScene {}
///
/// struct MainScene;
/// impl Scene<GameScene> for MainScene {
///     fn update(&mut self, context: &mut GlobalContext<GameScene>) {
///         context.instance::<GameManagerOne>().test_singleton();
///         context.request_quit();
///     }
/// }
///
/// let mut engine = EngineBuilder::<GameScene>::new()
///     .with_frame_budget(120)
///     .with_log_path("player_data.log")
///     .with_initial_scene(GameScene::Main)
///     .build()
///     .init(|systems, _context| {
///         systems.scene_manager.register_scene(GameScene::Main, MainScene);
///     });
///
/// engine.run().expect("log writer flush failed");
/// ```
pub struct EngineBuilder<S: SceneKey> {
    frame_budget: u64,
    log_path: Option<PathBuf>,
    initial_scene: Option<S>,
}

impl<S: SceneKey> EngineBuilder<S> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            frame_budget: 600,
            log_path: None,
            initial_scene: None,
        }
    }

    /// Sets the maximum number of ticks a single [`Engine::run`] executes.
    ///
    /// Default: 600
    ///
    /// # Panics
    ///
    /// Panics if `frames == 0`.
    pub fn with_frame_budget(mut self, frames: u64) -> Self {
        assert!(frames > 0, "Frame budget must be positive");
        self.frame_budget = frames;
        self
    }

    /// Sets the file the [`LogWriter`] appends to on flush.
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Sets the scene loaded by [`Engine::initialize_subsystems`].
    pub fn with_initial_scene(mut self, key: S) -> Self {
        self.initial_scene = Some(key);
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine<S> {
        info!(
            "Building engine (frame budget: {}, log path: {:?}, initial scene: {:?})",
            self.frame_budget, self.log_path, self.initial_scene
        );

        Engine {
            systems: GlobalSystems::new(),
            context: GlobalContext::new(),
            frame_budget: self.frame_budget,
            log_path: self.log_path,
            initial_scene: self.initial_scene,
            frames: 0,
            running: false,
        }
    }
}

impl<S: SceneKey> Default for EngineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Single-threaded engine loop driving scene and singleton lifecycles.
///
/// # Lifecycle
///
/// 1. [`Engine::initialize_subsystems`]: spawn the log writer, load the
///    initial scene
/// 2. [`Engine::tick`]: update the active scene, apply transitions
/// 3. [`Engine::shutdown_subsystems`]: unload the scene, flush the log
///    writer, tear down every object and slot
///
/// [`Engine::run`] performs all three.
pub struct Engine<S: SceneKey> {
    systems: GlobalSystems<S>,
    context: GlobalContext<S>,
    frame_budget: u64,
    log_path: Option<PathBuf>,
    initial_scene: Option<S>,
    frames: u64,
    running: bool,
}

impl<S: SceneKey> Engine<S> {
    //--- Initialization ---------------------------------------------------

    /// Configures systems and context before the engine starts.
    ///
    /// Singletons spawned here take precedence over the ones the engine
    /// spawns itself in [`Engine::initialize_subsystems`].
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems<S>, &mut GlobalContext<S>),
    {
        info!("Initializing engine systems");
        init_fn(&mut self.systems, &mut self.context);
        info!("Engine initialization complete");
        self
    }

    /// Spawns engine-owned singletons and loads the initial scene.
    ///
    /// Calling it on a running engine does nothing.
    pub fn initialize_subsystems(&mut self) {
        if self.running {
            warn!("Engine subsystems already initialized");
            return;
        }

        info!("Starting engine subsystems");

        let writer = match &self.log_path {
            Some(path) => LogWriter::with_path(path.clone()),
            None => LogWriter::new(),
        };
        if let AttachOutcome::Discarded { kept, .. } = self.context.spawn_singleton(writer) {
            debug!("Log writer already present at {}; keeping it", kept);
        }

        if let Some(key) = self.initial_scene {
            if !self.systems.scene_manager.load(key, &mut self.context) {
                warn!("Initial scene {:?} could not be loaded", key);
            }
        }

        self.frames = 0;
        self.running = true;
    }

    //--- Execution --------------------------------------------------------

    /// Runs one tick: updates the active scene, then applies queued
    /// transitions.
    ///
    /// Returns [`TickControl::Exit`] once a quit has been processed or if
    /// the engine is not running.
    pub fn tick(&mut self) -> TickControl {
        if !self.running {
            return TickControl::Exit;
        }

        self.frames += 1;
        self.systems.update(&mut self.context)
    }

    /// Initializes, ticks until quit or the frame budget is spent, then
    /// shuts down.
    ///
    /// Returns the number of ticks executed.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing the log writer fails during shutdown.
    /// Teardown still completes in that case.
    pub fn run(&mut self) -> Result<u64> {
        self.initialize_subsystems();

        while self.frames < self.frame_budget {
            if self.tick() == TickControl::Exit {
                break;
            }
        }

        let frames = self.frames;
        info!("Engine loop finished after {} tick(s)", frames);

        self.shutdown_subsystems()?;
        Ok(frames)
    }

    //--- Shutdown ---------------------------------------------------------

    /// Unloads the active scene, flushes the log writer, and tears down
    /// every object and singleton slot.
    ///
    /// Returns the number of log lines flushed.
    ///
    /// # Errors
    ///
    /// Returns the log writer's flush error after teardown has completed.
    pub fn shutdown_subsystems(&mut self) -> Result<usize> {
        info!("Shutting down engine subsystems");

        self.systems.scene_manager.unload(&mut self.context);

        let flushed = match self.context.singletons.get_mut::<LogWriter>(&mut self.context.graph) {
            Some(writer) => writer.flush(),
            None => Ok(0),
        };

        let destroyed = self.context.teardown_all();
        self.running = false;

        info!("Engine shutdown complete ({} object(s) torn down)", destroyed.len());
        flushed
    }

    //--- Accessors --------------------------------------------------------

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks executed since the last [`Engine::initialize_subsystems`].
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn frame_budget(&self) -> u64 {
        self.frame_budget
    }

    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    pub fn context(&self) -> &GlobalContext<S> {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut GlobalContext<S> {
        &mut self.context
    }

    pub fn systems_mut(&mut self) -> &mut GlobalSystems<S> {
        &mut self.systems
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::Scene;
    use crate::managers::{GameManagerOne, GameManagerTwo, PlayerManager};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Menu,
        Level,
    }

    impl SceneKey for TestScene {}

    /// Tests both game managers on enter, then moves to the level.
    struct MenuScene;

    impl Scene<TestScene> for MenuScene {
        fn on_enter(&mut self, context: &mut GlobalContext<TestScene>) {
            context.instance::<GameManagerOne>().test_singleton();
            context.instance::<GameManagerTwo>().test_singleton();
        }

        fn update(&mut self, context: &mut GlobalContext<TestScene>) {
            context.request_load(TestScene::Level);
        }
    }

    /// Writes one line per tick through a decoupled PlayerManager, quits
    /// after three.
    struct LevelScene {
        player: PlayerManager,
        ticks: u32,
    }

    impl Scene<TestScene> for LevelScene {
        fn on_enter(&mut self, context: &mut GlobalContext<TestScene>) {
            self.player.start(context);
        }

        fn update(&mut self, context: &mut GlobalContext<TestScene>) {
            self.ticks += 1;
            self.player.write_player_data_two(&format!("tick {}", self.ticks));
            if self.ticks == 3 {
                context.request_quit();
            }
        }
    }

    struct Idle;

    impl Scene<TestScene> for Idle {
        fn update(&mut self, _context: &mut GlobalContext<TestScene>) {}
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::<TestScene>::new();
        assert_eq!(builder.frame_budget, 600);
        assert!(builder.log_path.is_none());
        assert!(builder.initial_scene.is_none());
    }

    #[test]
    fn builder_with_frame_budget() {
        let builder = EngineBuilder::<TestScene>::new().with_frame_budget(10);
        assert_eq!(builder.frame_budget, 10);
    }

    #[test]
    #[should_panic(expected = "Frame budget must be positive")]
    fn builder_with_frame_budget_panics_on_zero() {
        EngineBuilder::<TestScene>::new().with_frame_budget(0);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::<TestScene>::new()
            .with_frame_budget(5)
            .with_log_path("out.log")
            .with_initial_scene(TestScene::Menu)
            .build();

        assert_eq!(engine.frame_budget(), 5);
        assert_eq!(engine.log_path(), Some(Path::new("out.log")));
        assert!(!engine.is_running());
    }

    //=====================================================================
    // Engine Lifecycle Tests
    //=====================================================================

    #[test]
    fn initialize_spawns_log_writer_and_loads_scene() {
        let mut engine = EngineBuilder::<TestScene>::new()
            .with_initial_scene(TestScene::Menu)
            .build()
            .init(|systems, _context| {
                systems.scene_manager.register_scene(TestScene::Menu, MenuScene);
            });

        engine.initialize_subsystems();

        assert!(engine.is_running());
        assert!(engine.context().find::<LogWriter>().is_some());
        assert_eq!(engine.context().find::<GameManagerOne>().map(|m| m.tests_run()), Some(1));
        assert_eq!(engine.context().find::<GameManagerTwo>().map(|m| m.tests_run()), Some(1));
    }

    #[test]
    fn writer_spawned_in_init_takes_precedence() {
        let mut engine = EngineBuilder::<TestScene>::new()
            .build()
            .init(|_systems, context| {
                context.spawn_singleton(LogWriter::with_path("custom.log"));
            });

        engine.initialize_subsystems();

        let writer = engine.context().find::<LogWriter>().unwrap();
        assert_eq!(writer.path(), Some(Path::new("custom.log")));
        assert_eq!(engine.context().graph.find_objects_of_type::<LogWriter>().len(), 1);
    }

    #[test]
    fn tick_before_initialize_exits() {
        let mut engine = EngineBuilder::<TestScene>::new().build();
        assert_eq!(engine.tick(), TickControl::Exit);
        assert_eq!(engine.frames(), 0);
    }

    #[test]
    fn scene_load_rebuilds_scoped_manager_only() {
        let mut engine = EngineBuilder::<TestScene>::new()
            .with_initial_scene(TestScene::Menu)
            .build()
            .init(|systems, _context| {
                systems.scene_manager.register_scene(TestScene::Menu, MenuScene);
                systems.scene_manager.register_scene(TestScene::Level, Idle);
            });

        engine.initialize_subsystems();
        assert_eq!(engine.tick(), TickControl::Continue);

        let context = engine.context_mut();
        assert_eq!(context.instance::<GameManagerOne>().tests_run(), 1);
        assert_eq!(context.instance::<GameManagerTwo>().tests_run(), 0);
    }

    #[test]
    fn run_stops_on_quit_and_flushes_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("player.log");

        let mut engine = EngineBuilder::<TestScene>::new()
            .with_log_path(&path)
            .with_initial_scene(TestScene::Menu)
            .build()
            .init(|systems, _context| {
                systems.scene_manager.register_scene(TestScene::Menu, MenuScene);
                systems.scene_manager.register_scene(
                    TestScene::Level,
                    LevelScene { player: PlayerManager::new(), ticks: 0 },
                );
            });

        let frames = engine.run().unwrap();

        // One tick in the menu, three in the level.
        assert_eq!(frames, 4);
        assert!(!engine.is_running());
        assert!(engine.context().graph.is_empty());
        assert_eq!(engine.context().singletons.occupied(), 0);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "tick 1\ntick 2\ntick 3\n"
        );
    }

    #[test]
    fn run_respects_frame_budget() {
        let mut engine = EngineBuilder::<TestScene>::new()
            .with_frame_budget(7)
            .with_initial_scene(TestScene::Level)
            .build()
            .init(|systems, _context| {
                systems.scene_manager.register_scene(TestScene::Level, Idle);
            });

        assert_eq!(engine.run().unwrap(), 7);
    }

    #[test]
    fn shutdown_reports_flush_error_after_teardown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("player.log");

        let mut engine = EngineBuilder::<TestScene>::new()
            .with_log_path(path)
            .build();
        engine.initialize_subsystems();
        engine.context_mut().instance::<LogWriter>().write_to_file("lost");

        assert!(engine.shutdown_subsystems().is_err());
        assert!(engine.context().graph.is_empty());
        assert!(!engine.is_running());
    }
}
