//! The periodic driver: a background thread that ticks a shared session.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use crate::controller::Controller;

/// Lock a shared session.
///
/// Every controller command completes before its guard drops, so a poisoned
/// lock still holds a whole generation and is safe to keep using.
pub fn lock(session: &Mutex<Controller>) -> MutexGuard<'_, Controller> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to a running tick loop. Dropping it stops the loop.
pub struct TickLoop {
    shutdown: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TickLoop {
    /// Start ticking `session` on a dedicated thread.
    ///
    /// The interval is re-read before every sleep, so speed changes apply from
    /// the next tick on without restarting the loop.
    pub fn spawn(session: Arc<Mutex<Controller>>) -> Self {
        let (shutdown, signal) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            log::info!("tick loop started");
            loop {
                let interval = lock(&session).interval();
                match signal.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        lock(&session).tick();
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            log::info!("tick loop stopped");
        });

        Self {
            shutdown: Some(shutdown),
            handle: Some(handle),
        }
    }

    /// Wake the loop, ask it to exit and wait for the thread to finish.
    pub fn stop(mut self) {
        self.shutdown_and_join();
    }

    fn shutdown_and_join(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("tick loop thread panicked");
            }
        }
    }
}

impl Drop for TickLoop {
    fn drop(&mut self) {
        self.shutdown_and_join();
    }
}
