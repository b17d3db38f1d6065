//=========================================================================
// Singleton Tour
//
// Runs every singleton variant once:
//   1. FileSystem      plain lazy singleton
//   2. Menu scene      GameManagerOne (persistent) + GameManagerTwo (scoped)
//   3. Level scene     same managers after a scene load, master manager,
//                      PlayerManager writing through a stored function
//
// Usage:
//   singleton_engine [LOG_FILE]
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, info, LevelFilter};

//=== Internal Dependencies ===============================================

use singleton_engine::prelude::*;

//=== Scenes ==============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TourScene {
    Menu,
    Level,
}

impl SceneKey for TourScene {}

struct MenuScene;

impl Scene<TourScene> for MenuScene {
    fn on_enter(&mut self, context: &mut GlobalContext<TourScene>) {
        context.instance::<GameManagerOne>().test_singleton();
        context.instance::<GameManagerTwo>().test_singleton();

        // A second manager placed in the scene is discarded on attach.
        let outcome = context.spawn_singleton(GameManagerOne::default());
        info!("Spawning a second GameManagerOne: {:?}", outcome);
    }

    fn update(&mut self, context: &mut GlobalContext<TourScene>) {
        context.request_load(TourScene::Level);
    }
}

struct LevelScene {
    player: PlayerManager,
    ticks: u32,
}

impl Scene<TourScene> for LevelScene {
    fn on_enter(&mut self, context: &mut GlobalContext<TourScene>) {
        let one = context.instance::<GameManagerOne>().tests_run();
        let two = context.instance::<GameManagerTwo>().tests_run();
        info!("After scene load: GameManagerOne tested {} time(s), GameManagerTwo {} time(s)", one, two);

        let master = context.instance::<GameManagerThree>();
        info!("{}", master.player_manager().report());
        master.audio_manager().play("level_theme");

        self.player.start(context);
    }

    fn update(&mut self, context: &mut GlobalContext<TourScene>) {
        self.ticks += 1;
        self.player.write_player_data(context, &format!("tick {} (direct)", self.ticks));
        self.player.write_player_data_two(&format!("tick {} (stored fn)", self.ticks));

        if self.ticks == 3 {
            context.request_quit();
        }
    }
}

//=== Entry Point =========================================================

fn init_logger() {
    // RUST_LOG is applied on top of the default filter.
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn main() {
    init_logger();

    FileSystem::instance().test_singleton();
    FileSystem::instance().test_singleton();
    info!("FileSystem greeted {} time(s)", FileSystem::instance().greetings());

    let mut builder = EngineBuilder::<TourScene>::new()
        .with_frame_budget(60)
        .with_initial_scene(TourScene::Menu);
    if let Some(path) = std::env::args_os().nth(1) {
        builder = builder.with_log_path(path);
    }

    let mut engine = builder.build().init(|systems, _context| {
        systems.scene_manager.register_scene(TourScene::Menu, MenuScene);
        systems.scene_manager.register_scene(
            TourScene::Level,
            LevelScene {
                player: PlayerManager::new(),
                ticks: 0,
            },
        );
    });

    match engine.run() {
        Ok(frames) => info!("Tour finished after {} tick(s)", frames),
        Err(e) => {
            error!("Tour failed: {}", e);
            std::process::exit(1);
        }
    }
}
