//! urlbatch engine: file input, browser launching and paced dispatch.
mod dispatch;
mod engine;
mod launcher;
mod load;
mod persist;

pub use dispatch::{
    dispatch, dispatch_with_pacer, launch_paced, ConfirmPrompt, DispatchOutcome, LaunchReport,
    Pacer, ThreadPacer,
};
pub use engine::{DispatchEvent, DispatchHandle};
pub use launcher::{BrowserLauncher, ProcessLauncher};
pub use load::{read_records, LoadError};
pub use persist::{ensure_parent_dir, AtomicFileWriter, PersistError};
