//=========================================================================
// Game Managers
//=========================================================================
//
// Two scene-bound singletons differing only in lifetime policy:
//
//   GameManagerOne  persists across scene loads
//   GameManagerTwo  lives for one scene; rebuilt after each load
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::singleton::{Persistence, Singleton};

//=== GameManagerOne ======================================================

/// Game manager that survives scene loads.
#[derive(Debug, Default)]
pub struct GameManagerOne {
    tests_run: u32,
}

impl GameManagerOne {
    pub fn test_singleton(&mut self) {
        self.tests_run += 1;
        info!("Hello this is Singleton");
    }

    /// How many times this instance has been tested.
    pub fn tests_run(&self) -> u32 {
        self.tests_run
    }
}

impl Singleton for GameManagerOne {
    const NAME: &'static str = "Game Manager One";
    const PERSISTENCE: Persistence = Persistence::AcrossScenes;

    fn create() -> Self {
        Self::default()
    }
}

//=== GameManagerTwo ======================================================

/// Game manager scoped to a single scene.
#[derive(Debug, Default)]
pub struct GameManagerTwo {
    tests_run: u32,
}

impl GameManagerTwo {
    pub fn test_singleton(&mut self) {
        self.tests_run += 1;
        info!("Hello this is Singleton");
    }

    pub fn tests_run(&self) -> u32 {
        self.tests_run
    }
}

impl Singleton for GameManagerTwo {
    const NAME: &'static str = "Game Manager Two";
    const PERSISTENCE: Persistence = Persistence::SceneScoped;

    fn create() -> Self {
        Self::default()
    }
}

//=== Tests ===============================================================
