//=========================================================================
// Managers
//=========================================================================
//
// Concrete singletons built on the holders in `core::singleton`.
//
//   FileSystem        plain lazy singleton (process-wide)
//   GameManagerOne    scene-bound, persists across scene loads
//   GameManagerTwo    scene-bound, rebuilt per scene
//   GameManagerThree  persistent master owning player + audio managers
//   LogWriter         persistent writer consumed by PlayerManager
//
//=========================================================================

//=== Module Declarations =================================================

mod file_system;
mod game_manager;
mod log_writer;
mod master;
mod player_manager;

//=== Public API ==========================================================

pub use file_system::FileSystem;
pub use game_manager::{GameManagerOne, GameManagerTwo};
pub use log_writer::{LogWriter, LogWriterFn};
pub use master::{AudioManager, GameManagerThree, PlayerStateManager};
pub use player_manager::PlayerManager;
