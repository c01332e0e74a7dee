use std::sync::{mpsc, Arc};
use std::time::Duration;

use urlbatch_core::{Effect, Msg};
use urlbatch_engine::{BrowserLauncher, ConfirmPrompt, DispatchEvent, DispatchHandle};
use urlbatch_logging::{urlbatch_error, urlbatch_info, urlbatch_warn};

use super::persistence::SettingsStore;

/// Dry-run launcher: prints each URL on stdout instead of opening it.
#[derive(Debug, Default)]
pub struct StdoutLauncher;

impl BrowserLauncher for StdoutLauncher {
    fn launch(&self, url: &str) {
        println!("{url}");
    }
}

/// Carries out core effects and reports back through `msg_tx`.
pub struct EffectRunner {
    msg_tx: mpsc::Sender<Msg>,
    prompt: Box<dyn ConfirmPrompt>,
    launcher: Arc<dyn BrowserLauncher>,
    store: SettingsStore,
    dispatch: Option<DispatchHandle>,
}

impl EffectRunner {
    pub fn new(
        msg_tx: mpsc::Sender<Msg>,
        prompt: Box<dyn ConfirmPrompt>,
        launcher: Arc<dyn BrowserLauncher>,
        store: SettingsStore,
    ) -> Self {
        Self {
            msg_tx,
            prompt,
            launcher,
            store,
            dispatch: None,
        }
    }

    /// Blocks for the next message from a running launch sequence.
    /// `None` when nothing is being dispatched.
    pub fn next_dispatch_msg(&mut self) -> Option<Msg> {
        let event = self.dispatch.as_ref()?.recv();
        match event {
            Some(DispatchEvent::Opened { index, url }) => Some(Msg::UrlOpened { index, url }),
            Some(DispatchEvent::Finished { opened, cancelled }) => {
                self.dispatch = None;
                Some(Msg::DispatchFinished { opened, cancelled })
            }
            None => {
                urlbatch_error!("Dispatch worker stopped without reporting completion");
                self.dispatch = None;
                None
            }
        }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::AskConfirmation { message } => {
                    let accepted = self.prompt.ask(&message);
                    let _ = self.msg_tx.send(Msg::ConfirmationAnswered(accepted));
                }
                Effect::LaunchUrls { urls, delay_ms } => {
                    urlbatch_info!("LaunchUrls count={} delay_ms={}", urls.len(), delay_ms);
                    let handle = DispatchHandle::spawn(
                        urls,
                        Duration::from_millis(delay_ms),
                        self.launcher.clone(),
                    );
                    self.dispatch = Some(handle);
                }
                Effect::PersistSettings(settings) => {
                    if let Err(err) = self.store.save(&settings) {
                        urlbatch_error!("{:#}", err);
                        let _ = self.msg_tx.send(Msg::SettingsSaveFailed {
                            message: format!("{err:#}"),
                        });
                    }
                }
                Effect::RememberLastFile(path) => {
                    if let Err(err) = self.store.remember_last_file(&path) {
                        urlbatch_warn!("{:#}", err);
                    }
                }
            }
        }
    }
}
