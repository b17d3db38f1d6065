//=========================================================================
// Master Game Manager
//=========================================================================
//
// One persistent singleton owning the sub-managers, so callers reach
// them through a single access point instead of one singleton each.
//
//   GameManagerThree
//     ├─ PlayerStateManager
//     └─ AudioManager
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::singleton::{Persistence, Singleton};

//=== Sub-managers ========================================================

/// Player state, reached through [`GameManagerThree::player_manager`].
#[derive(Debug, Default)]
pub struct PlayerStateManager {
    players: Vec<String>,
}

impl PlayerStateManager {
    pub fn with_players<I, P>(players: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
        }
    }

    /// One-line summary of the tracked players.
    pub fn report(&self) -> String {
        format!("{} player(s): {}", self.players.len(), self.players.join(", "))
    }
}

/// Audio playback, reached through [`GameManagerThree::audio_manager`].
#[derive(Debug, Default)]
pub struct AudioManager;

impl AudioManager {
    /// Plays a clip, returning the line that was logged.
    pub fn play(&self, clip: &str) -> String {
        let line = format!("Playing {}", clip);
        info!("{}", line);
        line
    }
}

//=== GameManagerThree ====================================================

/// Persistent singleton composing the player and audio managers.
#[derive(Debug, Default)]
pub struct GameManagerThree {
    player_manager: PlayerStateManager,
    audio_manager: AudioManager,
}

impl GameManagerThree {
    pub fn new(player_manager: PlayerStateManager, audio_manager: AudioManager) -> Self {
        Self {
            player_manager,
            audio_manager,
        }
    }

    pub fn player_manager(&self) -> &PlayerStateManager {
        &self.player_manager
    }

    pub fn audio_manager(&self) -> &AudioManager {
        &self.audio_manager
    }
}

impl Singleton for GameManagerThree {
    const NAME: &'static str = "Game Manager Three";
    const PERSISTENCE: Persistence = Persistence::AcrossScenes;

    fn create() -> Self {
        Self::default()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::globals::GlobalContext;
    use crate::core::scene::SceneKey;

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        Level,
    }

    impl SceneKey for TestScene {}

    #[test]
    fn sub_managers_are_reachable_after_creation() {
        let mut context = GlobalContext::<TestScene>::new();
        let master = context.instance::<GameManagerThree>();

        assert_eq!(master.player_manager().report(), "0 player(s): ");
        assert_eq!(master.audio_manager().play("theme"), "Playing theme");
    }

    #[test]
    fn spawned_master_exposes_its_sub_managers() {
        let mut context = GlobalContext::<TestScene>::new();
        context.spawn_singleton(GameManagerThree::new(
            PlayerStateManager::with_players(["ada", "linus"]),
            AudioManager,
        ));

        let master = context.instance::<GameManagerThree>();
        assert_eq!(master.player_manager().report(), "2 player(s): ada, linus");
    }

    #[test]
    fn master_persists_across_scene_unload() {
        let mut context = GlobalContext::<TestScene>::new();
        context.spawn_singleton(GameManagerThree::new(
            PlayerStateManager::with_players(["ada"]),
            AudioManager,
        ));

        context.unload_scene();

        let master = context.find::<GameManagerThree>().unwrap();
        assert_eq!(master.player_manager().report(), "1 player(s): ada");
    }
}
