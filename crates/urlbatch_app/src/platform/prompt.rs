use std::io::{self, BufRead, Write};

use urlbatch_engine::ConfirmPrompt;
use urlbatch_logging::{urlbatch_info, urlbatch_warn};

/// Asks on stderr and reads the answer from stdin. Anything but yes means no.
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl ConfirmPrompt for TerminalPrompt {
    fn ask(&mut self, message: &str) -> bool {
        if self.assume_yes {
            urlbatch_info!("{} yes (--yes)", message);
            return true;
        }
        let stdin = io::stdin();
        let mut input = stdin.lock();
        ask_with(&mut input, &mut io::stderr(), message)
    }
}

fn ask_with(input: &mut impl BufRead, output: &mut impl Write, message: &str) -> bool {
    let _ = write!(output, "{message} [y/N] ");
    let _ = output.flush();

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(_) => is_yes(&answer),
        Err(err) => {
            urlbatch_warn!("Could not read confirmation: {}", err);
            false
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
