//! Coalescing write-behind persistence queue
//!
//! Ledger mutations apply to in-memory state synchronously; the snapshot is
//! handed to a background thread that writes it to disk off the interaction
//! path. Rapid successive writes coalesce: only the newest pending snapshot
//! is written. Write failures are logged and dropped; in-memory state stays
//! the source of truth for the session.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use serde::Serialize;
use tracing::warn;

use super::file_io::write_json_atomic;

enum Message<T> {
    Write(T),
    Shutdown,
}

/// Background writer that flushes the latest snapshot of a document to disk
pub struct WriteBehind<T> {
    sender: mpsc::Sender<Message<T>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl<T> WriteBehind<T>
where
    T: Serialize + Send + 'static,
{
    /// Spawn the writer thread for the given document path
    pub fn new(path: PathBuf) -> Self {
        let (sender, receiver) = mpsc::channel::<Message<T>>();

        let handle = thread::spawn(move || {
            loop {
                let first = match receiver.recv() {
                    Ok(msg) => msg,
                    Err(_) => break,
                };

                let mut latest = None;
                let mut shutdown = false;
                match first {
                    Message::Write(snapshot) => latest = Some(snapshot),
                    Message::Shutdown => shutdown = true,
                }

                // Coalesce: drain everything already queued, keep the newest
                while let Ok(msg) = receiver.try_recv() {
                    match msg {
                        Message::Write(snapshot) => latest = Some(snapshot),
                        Message::Shutdown => shutdown = true,
                    }
                }

                if let Some(snapshot) = latest {
                    if let Err(e) = write_json_atomic(&path, &snapshot) {
                        warn!("write-behind flush failed for {}: {}", path.display(), e);
                    }
                }

                if shutdown {
                    break;
                }
            }
        });

        Self {
            sender,
            handle: Some(handle),
        }
    }
}

// enqueue/shutdown need no bounds; keeping them unbounded lets Drop call
// shutdown for any T
impl<T> WriteBehind<T> {
    /// Queue a snapshot for writing (fire-and-forget)
    pub fn enqueue(&self, snapshot: T) {
        if self.sender.send(Message::Write(snapshot)).is_err() {
            warn!("write-behind worker is gone; dropping snapshot");
        }
    }

    /// Flush any pending snapshot and stop the worker
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.sender.send(Message::Shutdown);
            let _ = handle.join();
        }
    }
}

impl<T> Drop for WriteBehind<T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
