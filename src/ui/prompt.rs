use crate::ui::output::OutputFormatter;
use crate::ui::signals::InterruptWatcher;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of interactive answers. `Ok(None)` means input ended (EOF or an
/// interrupt) rather than an empty answer; callers treat it as a decline.
pub trait Prompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Blocking reads from the process stdin.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim().to_string()))
        }
    }
}

/// Canned answers for tests and non-interactive runs. Once the script is
/// exhausted every read reports end of input.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.answers.pop_front().map(|s| s.trim().to_string()))
    }
}

/// Default name for a blank entry at 1-based `position`.
pub fn default_student_name(position: usize) -> String {
    format!("Student_{}", position)
}

/// Collect `count` student names. Entries from `preset` fill the leading
/// positions without prompting; the rest are read interactively. A blank
/// answer at position `i` becomes `Student_<i>`, and once input ends or is
/// interrupted the remaining positions all take their defaults.
pub fn collect_student_names(
    prompter: &mut dyn Prompter,
    watcher: &InterruptWatcher,
    formatter: &OutputFormatter,
    preset: &[String],
    count: usize,
) -> Vec<String> {
    let mut names = Vec::with_capacity(count);
    let mut input_open = true;

    for position in 1..=count {
        let entered = if let Some(preset_name) = preset.get(position - 1) {
            preset_name.trim().to_string()
        } else if input_open && !watcher.is_interrupted() {
            match prompter.read_line(&format!("Student {} name: ", position)) {
                Ok(Some(line)) => line,
                Ok(None) | Err(_) => {
                    input_open = false;
                    formatter.line("Input interrupted; using defaults for remaining students.");
                    String::new()
                }
            }
        } else {
            String::new()
        };

        if entered.is_empty() {
            names.push(default_student_name(position));
        } else {
            names.push(entered);
        }
    }

    names
}

/// Yes/no question; `yes`/`y` (any case) is affirmative, everything else —
/// including end of input and interrupts — declines.
pub fn confirm(prompter: &mut dyn Prompter, watcher: &InterruptWatcher, question: &str) -> bool {
    if watcher.is_interrupted() {
        return false;
    }

    match prompter.read_line(question) {
        Ok(Some(answer)) => {
            !watcher.is_interrupted() && matches!(answer.to_lowercase().as_str(), "yes" | "y")
        }
        Ok(None) | Err(_) => false,
    }
}

/// Free-form answer; `None` on end of input or interrupt.
pub fn ask(
    prompter: &mut dyn Prompter,
    watcher: &InterruptWatcher,
    question: &str,
) -> Option<String> {
    if watcher.is_interrupted() {
        return None;
    }

    match prompter.read_line(question) {
        Ok(Some(answer)) if !watcher.is_interrupted() => Some(answer),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::output::OutputMode;

    fn plain_formatter() -> OutputFormatter {
        OutputFormatter::new(OutputMode::Plain, 0, true)
    }

    #[test]
    fn test_blank_entries_get_positional_defaults() {
        let mut prompter = ScriptedPrompter::new(["Alice", "", "Carol", "", "Eve"]);
        let watcher = InterruptWatcher::disarmed();

        let names =
            collect_student_names(&mut prompter, &watcher, &plain_formatter(), &[], 5);

        assert_eq!(names, vec!["Alice", "Student_2", "Carol", "Student_4", "Eve"]);
    }

    #[test]
    fn test_exhausted_input_defaults_the_rest() {
        let mut prompter = ScriptedPrompter::new(["Alice"]);
        let watcher = InterruptWatcher::disarmed();

        let names =
            collect_student_names(&mut prompter, &watcher, &plain_formatter(), &[], 4);

        assert_eq!(names, vec!["Alice", "Student_2", "Student_3", "Student_4"]);
    }

    #[test]
    fn test_preset_names_skip_prompting() {
        let mut prompter = ScriptedPrompter::new(["FromPrompt"]);
        let watcher = InterruptWatcher::disarmed();
        let preset = vec!["Given".to_string(), "  ".to_string()];

        let names =
            collect_student_names(&mut prompter, &watcher, &plain_formatter(), &preset, 3);

        assert_eq!(names, vec!["Given", "Student_2", "FromPrompt"]);
    }

    #[test]
    fn test_interrupt_uses_defaults() {
        let mut prompter = ScriptedPrompter::new(["Alice", "Bob"]);
        let watcher = InterruptWatcher::disarmed();
        watcher.trigger();

        let names =
            collect_student_names(&mut prompter, &watcher, &plain_formatter(), &[], 2);

        assert_eq!(names, vec!["Student_1", "Student_2"]);
    }

    #[test]
    fn test_confirm_accepts_yes_variants() {
        let watcher = InterruptWatcher::disarmed();
        for answer in ["yes", "y", "YES", "Y", "Yes"] {
            let mut prompter = ScriptedPrompter::new([answer]);
            assert!(confirm(&mut prompter, &watcher, "? "), "{}", answer);
        }
    }

    #[test]
    fn test_confirm_declines_everything_else() {
        let watcher = InterruptWatcher::disarmed();
        for answer in ["no", "n", "", "maybe", "yep"] {
            let mut prompter = ScriptedPrompter::new([answer]);
            assert!(!confirm(&mut prompter, &watcher, "? "), "{}", answer);
        }

        // End of input declines too.
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
        assert!(!confirm(&mut prompter, &watcher, "? "));
    }

    #[test]
    fn test_confirm_declines_when_interrupted() {
        let watcher = InterruptWatcher::disarmed();
        watcher.trigger();
        let mut prompter = ScriptedPrompter::new(["yes"]);
        assert!(!confirm(&mut prompter, &watcher, "? "));
    }

    #[test]
    fn test_ask_returns_answer_or_none() {
        let watcher = InterruptWatcher::disarmed();

        let mut prompter = ScriptedPrompter::new(["records_2024-01-01.txt"]);
        assert_eq!(
            ask(&mut prompter, &watcher, "Filename: "),
            Some("records_2024-01-01.txt".to_string())
        );

        let mut empty = ScriptedPrompter::new(Vec::<String>::new());
        assert_eq!(ask(&mut empty, &watcher, "Filename: "), None);
    }

    #[test]
    fn test_default_student_name_is_one_based() {
        assert_eq!(default_student_name(1), "Student_1");
        assert_eq!(default_student_name(5), "Student_5");
    }
}
