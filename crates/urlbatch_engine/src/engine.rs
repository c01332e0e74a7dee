use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use urlbatch_logging::urlbatch_info;

use crate::dispatch::{launch_paced, Pacer};
use crate::BrowserLauncher;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    Opened { index: usize, url: String },
    Finished { opened: usize, cancelled: bool },
}

/// Opens a batch of URLs on a worker thread so the caller stays responsive.
///
/// Launches stay sequential and at least `delay` apart. [`DispatchHandle::cancel`]
/// stops the run before the next launch; dropping the handle lets it finish.
pub struct DispatchHandle {
    cancel_tx: mpsc::Sender<()>,
    event_rx: mpsc::Receiver<DispatchEvent>,
}

impl DispatchHandle {
    pub fn spawn(urls: Vec<String>, delay: Duration, launcher: Arc<dyn BrowserLauncher>) -> Self {
        let (cancel_tx, cancel_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            urlbatch_info!("Opening {} links, {:?} apart", urls.len(), delay);
            let pacer = CancellablePacer { cancel_rx };
            let report = launch_paced(&urls, delay, launcher.as_ref(), &pacer, |index, url| {
                let _ = event_tx.send(DispatchEvent::Opened {
                    index,
                    url: url.to_string(),
                });
            });
            let _ = event_tx.send(DispatchEvent::Finished {
                opened: report.opened,
                cancelled: report.cancelled,
            });
        });

        Self {
            cancel_tx,
            event_rx,
        }
    }

    pub fn cancel(&self) {
        let _ = self.cancel_tx.send(());
    }

    pub fn try_recv(&self) -> Option<DispatchEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks for the next event; `None` once the worker is gone.
    pub fn recv(&self) -> Option<DispatchEvent> {
        self.event_rx.recv().ok()
    }
}

struct CancellablePacer {
    cancel_rx: mpsc::Receiver<()>,
}

impl Pacer for CancellablePacer {
    fn pause(&self, delay: Duration) -> bool {
        match self.cancel_rx.recv_timeout(delay) {
            Ok(()) => false,
            Err(RecvTimeoutError::Timeout) => true,
            // Handle dropped: keep pacing without a way to cancel.
            Err(RecvTimeoutError::Disconnected) => {
                thread::sleep(delay);
                true
            }
        }
    }
}
