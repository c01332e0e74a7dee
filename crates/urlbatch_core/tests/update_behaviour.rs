use std::path::PathBuf;
use std::sync::Once;

use urlbatch_core::{parse_text, update, AppState, Effect, FilterSpec, Msg, Phase, Settings};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(urlbatch_logging::initialize_for_tests);
}

fn settings(batch_warning: u32, ignore_dashes: bool) -> Settings {
    Settings {
        batch_warning,
        delay_ms: 25,
        ignore_dashes,
        ..Settings::default()
    }
}

fn loaded(settings: Settings, text: &str) -> AppState {
    let (mut state, _) = update(
        AppState::with_settings(settings),
        Msg::RecordsLoaded {
            path: PathBuf::from("links.txt"),
            records: parse_text(text),
        },
    );
    state.consume_dirty();
    state
}

#[test]
fn loading_records_remembers_the_file() {
    init_logging();
    let (mut state, effects) = update(
        AppState::new(),
        Msg::RecordsLoaded {
            path: PathBuf::from("links.txt"),
            records: parse_text("a.com\nb.com\n"),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::RememberLastFile(PathBuf::from("links.txt"))]
    );
    assert_eq!(state.settings().last_file, Some(PathBuf::from("links.txt")));
    let view = state.view();
    assert_eq!(view.record_count, 2);
    assert_eq!(view.source, Some(PathBuf::from("links.txt")));
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn open_below_threshold_launches_directly() {
    init_logging();
    let state = loaded(settings(5, true), "a.com hello\nb.com--\tworld\nc.com");

    let (state, effects) = update(state, Msg::OpenClicked);

    assert_eq!(
        effects,
        vec![Effect::LaunchUrls {
            urls: vec!["a.com".to_string(), "c.com".to_string()],
            delay_ms: 25,
        }]
    );
    assert_eq!(state.phase(), Phase::Dispatching);
    assert_eq!(state.view().total, 2);
}

#[test]
fn open_at_threshold_asks_first() {
    init_logging();
    let state = loaded(settings(2, false), "a.com\nb.com--\nc.com");

    let (state, effects) = update(state, Msg::OpenClicked);
    assert_eq!(
        effects,
        vec![Effect::AskConfirmation {
            message: "You are about to open 3 URLs. Continue?".to_string(),
        }]
    );
    assert_eq!(state.phase(), Phase::AwaitingConfirmation);

    let (state, effects) = update(state, Msg::ConfirmationAnswered(true));
    assert_eq!(
        effects,
        vec![Effect::LaunchUrls {
            urls: vec!["a.com".into(), "b.com".into(), "c.com".into()],
            delay_ms: 25,
        }]
    );
    assert_eq!(state.phase(), Phase::Dispatching);
}

#[test]
fn declined_confirmation_opens_nothing() {
    init_logging();
    let state = loaded(settings(2, true), "a.com\nb.com\nc.com");

    let (state, _) = update(state, Msg::OpenClicked);
    let (state, effects) = update(state, Msg::ConfirmationAnswered(false));

    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.view().opened, 0);

    // A stray answer after the prompt closed does nothing.
    let (state, effects) = update(state, Msg::ConfirmationAnswered(true));
    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Idle);
}

#[test]
fn zero_threshold_never_asks() {
    init_logging();
    let text: String = (0..50).map(|i| format!("site{i}.com\n")).collect();
    let state = loaded(settings(0, true), &text);

    let (_state, effects) = update(state, Msg::OpenClicked);

    assert!(matches!(
        effects.as_slice(),
        [Effect::LaunchUrls { urls, .. }] if urls.len() == 50
    ));
}

#[test]
fn range_error_is_reported_without_effects() {
    init_logging();
    let state = loaded(settings(0, true), "a.com\nb.com");

    let range = FilterSpec::LineRange { start: 2, end: 3 };
    let (state, _) = update(state, Msg::FilterChanged(range));
    let (state, effects) = update(state, Msg::OpenClicked);

    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(
        state.view().last_error.as_deref(),
        Some("line range 2-3 is outside 1-2")
    );
}

#[test]
fn no_match_is_reported_distinctly() {
    init_logging();
    let state = loaded(settings(0, true), "a.com hello");

    let (state, _) = update(state, Msg::FilterChanged(FilterSpec::Phrase("bye".into())));
    let (state, effects) = update(state, Msg::OpenClicked);

    assert!(effects.is_empty());
    assert_eq!(
        state.view().last_error.as_deref(),
        Some("no comment contains \"bye\"")
    );
}

#[test]
fn open_without_a_list_fails() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::OpenClicked);
    assert!(effects.is_empty());
    assert!(state.view().last_error.is_some());
}

#[test]
fn fully_disabled_selection_opens_nothing() {
    init_logging();
    let state = loaded(settings(0, true), "a.com--\nb.com--");

    let (state, effects) = update(state, Msg::OpenClicked);

    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.view().status.as_deref(), Some("Nothing to open"));
    assert_eq!(state.view().last_error, None);
}

#[test]
fn dispatch_progress_and_completion() {
    init_logging();
    let state = loaded(settings(0, true), "a.com\nb.com");
    let (state, _) = update(state, Msg::OpenClicked);

    let (state, _) = update(
        state,
        Msg::UrlOpened {
            index: 0,
            url: "a.com".into(),
        },
    );
    assert_eq!(state.view().opened, 1);
    assert_eq!(state.view().status.as_deref(), Some("Opened 1/2: a.com"));

    // Further input is ignored while links are being opened.
    let (state, effects) = update(state, Msg::OpenClicked);
    assert!(effects.is_empty());
    let (state, _) = update(state, Msg::FilterChanged(FilterSpec::Domain("b".into())));
    assert_eq!(state.filter(), &FilterSpec::None);

    let (state, _) = update(
        state,
        Msg::DispatchFinished {
            opened: 2,
            cancelled: false,
        },
    );
    assert_eq!(state.phase(), Phase::Done);
    assert_eq!(state.view().opened, 2);

    // A finished run can be repeated.
    let (state, effects) = update(state, Msg::OpenClicked);
    assert_eq!(effects.len(), 1);
    assert_eq!(state.phase(), Phase::Dispatching);
}

#[test]
fn cancelled_dispatch_reports_partial_progress() {
    init_logging();
    let state = loaded(settings(0, true), "a.com\nb.com\nc.com");
    let (state, _) = update(state, Msg::OpenClicked);
    let (state, _) = update(
        state,
        Msg::DispatchFinished {
            opened: 1,
            cancelled: true,
        },
    );

    assert_eq!(state.phase(), Phase::Done);
    assert_eq!(
        state.view().status.as_deref(),
        Some("Stopped after 1 of 3 links")
    );
}

#[test]
fn load_failure_clears_previous_list() {
    init_logging();
    let state = loaded(settings(0, true), "a.com");

    let (state, effects) = update(
        state,
        Msg::LoadFailed {
            path: PathBuf::from("gone.txt"),
            message: "not found".into(),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.record_count, 0);
    assert_eq!(view.source, None);
    assert_eq!(
        view.last_error.as_deref(),
        Some("Could not read gone.txt: not found")
    );
}

#[test]
fn settings_change_applies_and_persists() {
    init_logging();
    let state = loaded(settings(0, true), "a.com--");
    let changed = settings(0, false);

    let (state, effects) = update(state, Msg::SettingsChanged(changed.clone()));
    assert_eq!(effects, vec![Effect::PersistSettings(changed)]);

    let (_state, effects) = update(state, Msg::OpenClicked);
    assert_eq!(
        effects,
        vec![Effect::LaunchUrls {
            urls: vec!["a.com".into()],
            delay_ms: 25,
        }]
    );
}

#[test]
fn settings_save_failure_is_reported_without_leaving_the_phase() {
    init_logging();
    let state = loaded(settings(0, true), "a.com\nb.com");
    let (state, _) = update(state, Msg::OpenClicked);

    let (state, effects) = update(
        state,
        Msg::SettingsSaveFailed {
            message: "disk full".into(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Dispatching);
    assert_eq!(
        state.view().last_error.as_deref(),
        Some("Could not save settings: disk full")
    );
}

#[test]
fn no_op_leaves_loaded_state_untouched() {
    init_logging();
    let state = loaded(settings(0, true), "a.com note");

    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(next, state);
    assert!(effects.is_empty());
}
