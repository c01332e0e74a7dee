//! urlbatch core: link-list parsing, filtering, sanitizing and the pure session state machine.
mod effect;
mod filter;
mod gate;
mod msg;
mod pipeline;
mod record;
mod sanitize;
mod settings;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{apply_filter, FilterError, FilterSpec, MatchKind};
pub use gate::{confirmation_message, DispatchConfig};
pub use msg::Msg;
pub use pipeline::{run_pipeline, select_records};
pub use record::{parse_line, parse_text, Record};
pub use sanitize::{sanitize, SanitizePolicy, DISABLED_MARKER};
pub use settings::{ConfigError, SettingKey, Settings, DEFAULT_BATCH_WARNING, DEFAULT_DELAY_MS};
pub use state::{AppState, Phase};
pub use update::update;
pub use view_model::AppViewModel;
