//=========================================================================
// File System (plain singleton)
//=========================================================================
//
// A process-wide singleton with no engine involvement: the constructor
// is private to this module and the only way in is `FileSystem::instance`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::singleton::LazyHolder;

//=== FileSystem ==========================================================

static INSTANCE: LazyHolder<FileSystem> = LazyHolder::new(FileSystem::new);

/// Lazily-created, process-wide file system handle.
#[derive(Debug)]
pub struct FileSystem {
    greetings: AtomicUsize,
}

impl FileSystem {
    fn new() -> Self {
        Self {
            greetings: AtomicUsize::new(0),
        }
    }

    /// Returns the sole instance, creating it on first call.
    pub fn instance() -> &'static FileSystem {
        INSTANCE.get_instance()
    }

    /// Whether [`FileSystem::instance`] has been called yet.
    pub fn is_initialized() -> bool {
        INSTANCE.is_initialized()
    }

    pub fn test_singleton(&self) {
        self.greetings.fetch_add(1, Ordering::Relaxed);
        info!("Hello this is Singleton");
    }

    /// How many times [`FileSystem::test_singleton`] has run.
    pub fn greetings(&self) -> usize {
        self.greetings.load(Ordering::Relaxed)
    }
}

//=== Tests ===============================================================
