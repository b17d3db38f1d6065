//=========================================================================
// Player Manager
//=========================================================================
//
// Consumer of the LogWriter singleton, showing two ways to reach it:
//
//   write_player_data()      names LogWriter at the call site (coupled)
//   write_player_data_two()  calls a LogWriterFn resolved once in start()
//
// Swapping the writer for the second path means changing start() (or
// calling set_log_writer_fn) and nothing else.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::log_writer::{LogWriter, LogWriterFn};
use crate::core::globals::GlobalContext;
use crate::core::scene::SceneKey;

//=== PlayerManager =======================================================

/// Writes player data through the log writer.
#[derive(Default)]
pub struct PlayerManager {
    log_writer_fn: Option<LogWriterFn>,
}

impl PlayerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the log writer once and keeps a callable reference to it.
    pub fn start<S: SceneKey>(&mut self, context: &mut GlobalContext<S>) {
        self.log_writer_fn = Some(context.instance::<LogWriter>().writer_fn());
    }

    pub fn is_started(&self) -> bool {
        self.log_writer_fn.is_some()
    }

    /// Redirects [`PlayerManager::write_player_data_two`] to another writer.
    pub fn set_log_writer_fn(&mut self, log_writer_fn: LogWriterFn) {
        self.log_writer_fn = Some(log_writer_fn);
    }

    /// Writes through the singleton, looked up on every call.
    pub fn write_player_data<S: SceneKey>(&self, context: &mut GlobalContext<S>, msg: &str) {
        context.instance::<LogWriter>().write_to_file(msg);
    }

    /// Writes through the function stored by [`PlayerManager::start`].
    pub fn write_player_data_two(&self, msg: &str) {
        match &self.log_writer_fn {
            Some(write) => write(msg),
            None => warn!("PlayerManager not started; dropping {:?}", msg),
        }
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        Level,
    }

    impl SceneKey for TestScene {}

    #[test]
    fn both_paths_reach_the_same_writer() {
        let mut context = GlobalContext::<TestScene>::new();
        let mut player = PlayerManager::new();
        player.start(&mut context);
        assert!(player.is_started());

        player.write_player_data(&mut context, "coupled");
        player.write_player_data_two("decoupled");

        let lines = context.find::<LogWriter>().unwrap().drain();
        assert_eq!(lines, vec!["coupled", "decoupled"]);
    }

    #[test]
    fn start_uses_existing_writer() {
        let mut context = GlobalContext::<TestScene>::new();
        context.spawn_singleton(LogWriter::new());
        let writer = context.singletons.instance_id::<LogWriter>(&context.graph);

        let mut player = PlayerManager::new();
        player.start(&mut context);
        player.write_player_data_two("hello");

        assert_eq!(context.singletons.instance_id::<LogWriter>(&context.graph), writer);
        assert_eq!(context.find::<LogWriter>().unwrap().pending(), 1);
    }

    #[test]
    fn unstarted_manager_drops_messages() {
        let mut context = GlobalContext::<TestScene>::new();
        let player = PlayerManager::new();
        player.write_player_data_two("lost");

        assert!(!player.is_started());
        assert_eq!(context.instance::<LogWriter>().pending(), 0);
    }

    #[test]
    fn redirecting_the_stored_function_changes_one_place() {
        let mut context = GlobalContext::<TestScene>::new();
        let mut player = PlayerManager::new();
        player.start(&mut context);

        let (tx, rx) = unbounded::<String>();
        player.set_log_writer_fn(Box::new(move |msg: &str| {
            let _ = tx.send(format!("audit: {}", msg));
        }));
        player.write_player_data_two("score 10");

        assert_eq!(rx.try_recv().unwrap(), "audit: score 10");
        assert_eq!(context.instance::<LogWriter>().pending(), 0);
    }

    #[test]
    fn stored_function_survives_scene_unload() {
        let mut context = GlobalContext::<TestScene>::new();
        let mut player = PlayerManager::new();
        player.start(&mut context);

        context.unload_scene();
        player.write_player_data_two("after load");

        assert_eq!(context.instance::<LogWriter>().drain(), vec!["after load"]);
    }
}
