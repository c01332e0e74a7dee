use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};

use anyhow::Context;
use clap::Parser;
use urlbatch_core::{
    select_records, update, AppState, AppViewModel, FilterSpec, Msg, SanitizePolicy, Settings,
};
use urlbatch_engine::{read_records, BrowserLauncher, LoadError, ProcessLauncher};
use urlbatch_logging::{urlbatch_debug, urlbatch_info, urlbatch_warn};

use super::effects::{EffectRunner, StdoutLauncher};
use super::logging::{self, LogDestination};
use super::persistence::SettingsStore;
use super::prompt::TerminalPrompt;
use super::render;
use crate::cli::{Cli, Commands, ConfigCommand, ListArgs, OpenArgs};

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let destination = if cli.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    logging::initialize(logging::level_for_verbosity(cli.verbose), destination);

    let store = SettingsStore::new(cli.settings);
    urlbatch_debug!("Using settings file {:?}", store.path());

    match cli.command {
        Commands::Open(args) => run_open(args, store),
        Commands::List(args) => run_list(args, &store),
        Commands::Config(command) => run_config(command, store),
    }
}

fn run_open(args: OpenArgs, store: SettingsStore) -> anyhow::Result<()> {
    let settings = args.overrides.apply(store.load());
    let filter = args.filter.to_spec()?;
    let path = resolve_file(args.file, &settings)?;

    let launcher: Arc<dyn BrowserLauncher> = if args.dry_run {
        Arc::new(StdoutLauncher)
    } else {
        Arc::new(ProcessLauncher::new(settings.browser.clone()))
    };
    let prompt = Box::new(TerminalPrompt::new(args.yes));

    let mut session = Session::new(settings, |msg_tx| {
        EffectRunner::new(msg_tx, prompt, launcher, store)
    });
    open_list(&mut session, filter, &path)
}

/// Loads `path`, then opens the selection. A load or filter error stops before any launch.
fn open_list(session: &mut Session, filter: FilterSpec, path: &Path) -> anyhow::Result<()> {
    urlbatch_info!("Filter: {}", render::describe_filter(&filter));
    session.post(Msg::FilterChanged(filter));
    session.post(load_list(path));
    session.run().into_result()?;

    session.post(Msg::OpenClicked);
    session.run().into_result()
}

fn run_list(args: ListArgs, store: &SettingsStore) -> anyhow::Result<()> {
    let settings = store.load();
    let policy = SanitizePolicy {
        ignore_dashes: args.dashes.resolve(settings.ignore_dashes),
    };
    let filter = args.filter.to_spec()?;
    let path = resolve_file(args.file, &settings)?;

    let records = read_records(&path)?;
    if let Err(err) = store.remember_last_file(&canonical_list_path(&path)) {
        urlbatch_warn!("{:#}", err);
    }
    let selected = select_records(&records, &filter, policy)?;
    urlbatch_info!(
        "{} of {} links selected ({})",
        selected.len(),
        records.len(),
        render::describe_filter(&filter)
    );

    if args.json {
        let payload =
            serde_json::to_string_pretty(&selected).context("failed to serialize links")?;
        println!("{payload}");
    } else {
        for record in &selected {
            println!("{}", render::list_row(record));
        }
    }
    Ok(())
}

fn run_config(command: ConfigCommand, store: SettingsStore) -> anyhow::Result<()> {
    let mut settings = store.load();
    match command {
        ConfigCommand::Show => {
            println!("# {}", store.path().display());
            for (key, value) in settings.entries() {
                println!("{key} = {value}");
            }
        }
        ConfigCommand::Get { key } => println!("{}", settings.get(&key)?),
        ConfigCommand::Set { key, value } => {
            settings.set(&key, &value)?;
            let mut session = Session::new(settings.clone(), |msg_tx| {
                EffectRunner::new(
                    msg_tx,
                    Box::new(TerminalPrompt::new(false)),
                    Arc::new(StdoutLauncher),
                    store,
                )
            });
            session.post(Msg::SettingsChanged(settings));
            session.run().into_result()?;
            println!("{key} = {}", session.state.settings().get(&key)?);
        }
    }
    Ok(())
}

fn resolve_file(file: Option<PathBuf>, settings: &Settings) -> anyhow::Result<PathBuf> {
    file.or_else(|| settings.last_file.clone())
        .context("no link list given and no previous file to fall back to")
}

fn load_list(path: &Path) -> Msg {
    match read_records(path) {
        Ok(records) => Msg::RecordsLoaded {
            path: canonical_list_path(path),
            records,
        },
        Err(LoadError::Io { path, source }) => Msg::LoadFailed {
            path,
            message: source.to_string(),
        },
    }
}

/// Absolute form of an existing list path; anything else is kept as given.
fn canonical_list_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|err| {
        urlbatch_debug!("Keeping {:?} as given: {}", path, err);
        path.to_path_buf()
    })
}

/// Drives the core state machine: messages in, effects out, until nothing is left to do.
struct Session {
    state: AppState,
    runner: EffectRunner,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
    last_line: Option<String>,
}

impl Session {
    fn new(settings: Settings, runner: impl FnOnce(mpsc::Sender<Msg>) -> EffectRunner) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            state: AppState::with_settings(settings),
            runner: runner(msg_tx.clone()),
            msg_tx,
            msg_rx,
            last_line: None,
        }
    }

    fn post(&self, msg: Msg) {
        // The receiver lives in `self`, so sending cannot fail.
        let _ = self.msg_tx.send(msg);
    }

    /// Processes queued messages, then dispatch progress, and returns the final view.
    fn run(&mut self) -> RunResult {
        loop {
            let msg = match self.msg_rx.try_recv() {
                Ok(msg) => msg,
                Err(_) => match self.runner.next_dispatch_msg() {
                    Some(msg) => msg,
                    None => break,
                },
            };
            self.dispatch_msg(msg);
        }
        RunResult(self.state.view())
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.render(&state.view());
        }
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn render(&mut self, view: &AppViewModel) {
        let Some(line) = render::status_line(view) else {
            return;
        };
        if self.last_line.as_deref() != Some(line.as_str()) {
            eprintln!("{line}");
            self.last_line = Some(line);
        }
    }
}

/// Final view of a [`Session::run`]; an error left in the view fails the command.
struct RunResult(AppViewModel);

impl RunResult {
    fn into_result(self) -> anyhow::Result<()> {
        match self.0.last_error {
            Some(error) => Err(anyhow::anyhow!(error)),
            None => Ok(()),
        }
    }
}
