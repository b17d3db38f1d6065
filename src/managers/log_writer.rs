//=========================================================================
// Log Writer
//=========================================================================
//
// Persistent singleton that writes message lines to a file.
//
// Architecture:
//   write_to_file() ─┐
//   writer_fn()  ────┼─► crossbeam Sender<String> ─► Receiver ─► flush() ─► file
//                    │
//   (callers holding a LogWriterFn only hold a Sender clone)
//
// Lines are buffered until `flush`; without a configured path they are
// counted and dropped.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::singleton::{Persistence, Singleton};
use crate::error::Result;

//=== LogWriterFn =========================================================

/// Callable reference to [`LogWriter::write_to_file`].
pub type LogWriterFn = Box<dyn Fn(&str) + Send + Sync>;

//=== LogWriter ===========================================================

/// Buffered message writer.
pub struct LogWriter {
    sender: Sender<String>,
    receiver: Receiver<String>,
    path: Option<PathBuf>,
    lines_written: usize,
}

impl LogWriter {
    /// Creates a writer that discards lines on flush.
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            path: None,
            lines_written: 0,
        }
    }

    /// Creates a writer appending to `path` on flush.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::new()
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    //--- Writing ----------------------------------------------------------

    /// Queues `msg` as one line of output.
    pub fn write_to_file(&self, msg: &str) {
        // The receiver lives in `self`, so the channel cannot be disconnected.
        let _ = self.sender.send(msg.to_owned());
    }

    /// Returns a function with the same effect as
    /// [`LogWriter::write_to_file`] that can be stored by consumers.
    ///
    /// Once the writer is destroyed, calls to the function are dropped
    /// with a warning.
    pub fn writer_fn(&self) -> LogWriterFn {
        let sender = self.sender.clone();
        Box::new(move |msg: &str| {
            if sender.send(msg.to_owned()).is_err() {
                warn!("Log writer is gone; dropping {:?}", msg);
            }
        })
    }

    //--- Output -----------------------------------------------------------

    /// Number of lines waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Takes buffered lines without writing them.
    pub fn drain(&self) -> Vec<String> {
        self.receiver.try_iter().collect()
    }

    /// Writes buffered lines to the configured file, one per line.
    ///
    /// Returns the number of lines flushed.
    ///
    /// # Errors
    ///
    /// Returns [`SingletonError::Io`](crate::SingletonError::Io) if the file
    /// cannot be opened or written. Nothing is taken from the buffer when
    /// the open fails; lines taken for a failed write are queued again, so
    /// a later flush retries them.
    pub fn flush(&mut self) -> Result<usize> {
        if self.receiver.is_empty() {
            return Ok(0);
        }

        let Some(path) = self.path.clone() else {
            let count = self.drain().len();
            debug!("Discarded {} line(s); no log path configured", count);
            self.lines_written += count;
            return Ok(count);
        };

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let lines = self.drain();

        if let Err(e) = write_lines(file, &lines) {
            warn!("Writing to {} failed; requeueing {} line(s)", path.display(), lines.len());
            self.requeue(lines);
            return Err(e.into());
        }

        debug!("Flushed {} line(s) to {}", lines.len(), path.display());
        self.lines_written += lines.len();
        Ok(lines.len())
    }

    // Requeued lines land behind anything sent during the failed flush.
    fn requeue(&self, lines: Vec<String>) {
        for line in lines {
            let _ = self.sender.send(line);
        }
    }

    /// Total lines flushed over this writer's lifetime.
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }
}

fn write_lines(file: File, lines: &[String]) -> std::io::Result<()> {
    let mut out = BufWriter::new(file);
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Singleton for LogWriter {
    const NAME: &'static str = "Log Writer";
    const PERSISTENCE: Persistence = Persistence::AcrossScenes;

    fn create() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
