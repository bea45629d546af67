//! Formatting utilities for terminal output

use crate::core::{Alphabet, Code, Feedback};
use colored::{ColoredString, Colorize};

/// Format feedback as pegs: `●` black, `○` white, `·` empty
#[must_use]
pub fn feedback_pegs(feedback: Feedback, length: usize) -> String {
    let black = usize::from(feedback.black()).min(length);
    let white = usize::from(feedback.white()).min(length - black);

    let mut result = String::with_capacity(length * 3);
    result.push_str(&"●".repeat(black));
    result.push_str(&"○".repeat(white));
    result.push_str(&"·".repeat(length - black - white));
    result
}

/// Colorize a symbol name when it names a terminal color
#[must_use]
pub fn color_symbol(name: &str) -> ColoredString {
    match name.to_lowercase().as_str() {
        "red" => name.red(),
        "blue" => name.blue(),
        "green" => name.green(),
        "yellow" => name.yellow(),
        "white" => name.bright_white(),
        "black" => name.bright_black(),
        "pink" => name.bright_magenta(),
        "brown" => name.truecolor(150, 90, 40),
        "purple" | "magenta" => name.magenta(),
        "cyan" => name.cyan(),
        _ => name.bold(),
    }
}

/// Format a code with colored symbol names
#[must_use]
pub fn format_code(code: &Code, alphabet: &Alphabet) -> String {
    let separator = if alphabet.is_compact() { "" } else { " " };
    code.symbols()
        .iter()
        .map(|&symbol| color_symbol(alphabet.name(symbol)).to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_all_empty() {
        assert_eq!(feedback_pegs(Feedback::new(0, 0), 4), "····");
    }

    #[test]
    fn pegs_mixed() {
        assert_eq!(feedback_pegs(Feedback::new(2, 1), 5), "●●○··");
        assert_eq!(feedback_pegs(Feedback::perfect(4), 4), "●●●●");
    }

    #[test]
    fn pegs_never_overflow() {
        assert_eq!(feedback_pegs(Feedback::new(3, 3), 4).chars().count(), 4);
    }

    #[test]
    fn plain_code_formatting() {
        colored::control::set_override(false);
        let alphabet = Alphabet::letters(6).unwrap();
        assert_eq!(format_code(&Code::from_indices(&[0, 0, 1, 2]), &alphabet), "AABC");

        let classic = Alphabet::classic();
        assert_eq!(
            format_code(&Code::from_indices(&[0, 1]), &classic),
            format!("{} {}", classic.names()[0], classic.names()[1])
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
