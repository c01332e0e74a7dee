use crate::{confirmation_message, run_pipeline, AppState, Effect, Msg, Phase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RecordsLoaded { path, records } => {
            if state.phase().is_busy() {
                return (state, Vec::new());
            }
            state.load_records(path.clone(), records);
            state.remember_source(path.clone());
            vec![Effect::RememberLastFile(path)]
        }
        Msg::LoadFailed { path, message } => {
            if state.phase().is_busy() {
                return (state, Vec::new());
            }
            state.clear_records();
            state.fail(format!("Could not read {}: {}", path.display(), message));
            Vec::new()
        }
        Msg::FilterChanged(filter) => {
            if state.phase().is_busy() {
                return (state, Vec::new());
            }
            state.set_filter(filter);
            Vec::new()
        }
        Msg::SettingsChanged(settings) => {
            state.set_settings(settings.clone());
            vec![Effect::PersistSettings(settings)]
        }
        Msg::SettingsSaveFailed { message } => {
            state.report_error(format!("Could not save settings: {message}"));
            Vec::new()
        }
        Msg::OpenClicked => match state.phase() {
            Phase::Idle | Phase::Done => open_selection(&mut state),
            Phase::AwaitingConfirmation | Phase::Dispatching => Vec::new(),
        },
        Msg::ConfirmationAnswered(accepted) => {
            if state.phase() != Phase::AwaitingConfirmation {
                return (state, Vec::new());
            }
            if accepted {
                let urls = state.take_pending();
                launch(&mut state, urls)
            } else {
                state.decline();
                Vec::new()
            }
        }
        Msg::UrlOpened { index, url } => {
            if state.phase() == Phase::Dispatching {
                state.record_opened(index, &url);
            }
            Vec::new()
        }
        Msg::DispatchFinished { opened, cancelled } => {
            if state.phase() == Phase::Dispatching {
                state.finish_dispatch(opened, cancelled);
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Runs the pipeline over the loaded records. Every failure is reported before
/// any effect is produced.
fn open_selection(state: &mut AppState) -> Vec<Effect> {
    if state.source().is_none() {
        state.fail("No link list loaded");
        return Vec::new();
    }

    let policy = state.settings().sanitize_policy();
    let urls = match run_pipeline(state.records(), state.filter(), policy) {
        Ok(urls) => urls,
        Err(err) => {
            state.fail(err.to_string());
            return Vec::new();
        }
    };

    if urls.is_empty() {
        state.set_status("Nothing to open");
        return Vec::new();
    }

    let config = state.settings().dispatch_config();
    if config.requires_confirmation(urls.len()) {
        let message = confirmation_message(urls.len());
        state.await_confirmation(urls);
        vec![Effect::AskConfirmation { message }]
    } else {
        launch(state, urls)
    }
}

fn launch(state: &mut AppState, urls: Vec<String>) -> Vec<Effect> {
    state.start_dispatch(urls.len());
    vec![Effect::LaunchUrls {
        urls,
        delay_ms: state.settings().delay_ms,
    }]
}
