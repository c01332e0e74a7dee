use std::thread;
use std::time::Duration;

use urlbatch_core::{confirmation_message, DispatchConfig};
use urlbatch_logging::{urlbatch_debug, urlbatch_info};

use crate::BrowserLauncher;

/// Asks the user a yes/no question before a large batch is opened.
pub trait ConfirmPrompt {
    fn ask(&mut self, message: &str) -> bool;
}

/// Waits between two launches. Returns `false` if the run should stop instead.
pub trait Pacer {
    fn pause(&self, delay: Duration) -> bool;
}

/// Blocks the calling thread for the whole delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&self, delay: Duration) -> bool {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The batch-size confirmation was refused; nothing was opened.
    Declined,
    Completed { opened: usize },
    Cancelled { opened: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchReport {
    pub opened: usize,
    pub cancelled: bool,
}

/// Confirms large batches, then opens `urls` in order with the configured delay
/// between launches. Blocks until done.
pub fn dispatch(
    urls: &[String],
    config: &DispatchConfig,
    prompt: &mut dyn ConfirmPrompt,
    launcher: &dyn BrowserLauncher,
) -> DispatchOutcome {
    dispatch_with_pacer(urls, config, prompt, launcher, &ThreadPacer)
}

pub fn dispatch_with_pacer(
    urls: &[String],
    config: &DispatchConfig,
    prompt: &mut dyn ConfirmPrompt,
    launcher: &dyn BrowserLauncher,
    pacer: &dyn Pacer,
) -> DispatchOutcome {
    if config.requires_confirmation(urls.len()) && !prompt.ask(&confirmation_message(urls.len())) {
        urlbatch_info!("Opening {} links declined", urls.len());
        return DispatchOutcome::Declined;
    }

    let report = launch_paced(urls, config.delay(), launcher, pacer, |_, _| {});
    if report.cancelled {
        DispatchOutcome::Cancelled {
            opened: report.opened,
        }
    } else {
        DispatchOutcome::Completed {
            opened: report.opened,
        }
    }
}

/// Launches strictly one after another, pausing `delay` between consecutive launches.
/// `on_opened` sees the index and URL of every launch.
pub fn launch_paced(
    urls: &[String],
    delay: Duration,
    launcher: &dyn BrowserLauncher,
    pacer: &dyn Pacer,
    mut on_opened: impl FnMut(usize, &str),
) -> LaunchReport {
    let mut opened = 0;
    for (index, url) in urls.iter().enumerate() {
        if index > 0 && !pacer.pause(delay) {
            urlbatch_info!("Stopped after {} of {} links", opened, urls.len());
            return LaunchReport {
                opened,
                cancelled: true,
            };
        }
        urlbatch_debug!("Opening {}/{}: {}", index + 1, urls.len(), url);
        launcher.launch(url);
        opened += 1;
        on_opened(index, url);
    }
    LaunchReport {
        opened,
        cancelled: false,
    }
}
