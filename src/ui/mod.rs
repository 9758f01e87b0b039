pub mod output;
pub mod prompt;
pub mod signals;

pub use output::{OutputFormatter, OutputMode};
pub use prompt::{Prompter, ScriptedPrompter, StdinPrompter};
pub use signals::InterruptWatcher;
