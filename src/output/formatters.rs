//! Formatting utilities for terminal output

/// Gallows drawings, from an empty gallows to the full figure
pub const GALLOWS: [&str; 7] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Title banner
pub const LOGO: &str = r"
 _
| |
| |__   __ _ _ __   __ _ _ __ ___   __ _ _ __
| '_ \ / _` | '_ \ / _` | '_ ` _ \ / _` | '_ \
| | | | (_| | | | | (_| | | | | | | (_| | | | |
|_| |_|\__,_|_| |_|\__, |_| |_| |_|\__,_|_| |_|
                    __/ |
                   |___/";

/// Pick the gallows drawing for the attempts used so far
///
/// The budget is scaled onto the seven drawings so the full figure appears
/// exactly when the last attempt is spent, whatever the budget.
///
/// # Examples
/// ```
/// use hangman::output::formatters::gallows_stage;
///
/// assert_eq!(gallows_stage(0, 6), 0);
/// assert_eq!(gallows_stage(3, 6), 3);
/// assert_eq!(gallows_stage(8, 8), 6);
/// ```
#[must_use]
pub fn gallows_stage(wrong_guesses: u8, max_attempts: u8) -> usize {
    let last = GALLOWS.len() - 1;
    if max_attempts == 0 {
        return last;
    }
    let wrong = usize::from(wrong_guesses.min(max_attempts));
    wrong * last / usize::from(max_attempts)
}

/// The gallows drawing for the attempts used so far
#[must_use]
pub fn gallows(wrong_guesses: u8, max_attempts: u8) -> &'static str {
    GALLOWS[gallows_stage(wrong_guesses, max_attempts)]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        width
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar of attempts used against the budget
#[must_use]
pub fn attempts_bar(wrong_guesses: u8, max_attempts: u8, width: usize) -> String {
    create_progress_bar(f64::from(wrong_guesses), f64::from(max_attempts), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallows_stage_matches_default_budget() {
        for wrong in 0..=6 {
            assert_eq!(gallows_stage(wrong, 6), usize::from(wrong));
        }
    }

    #[test]
    fn gallows_stage_full_figure_only_when_out_of_attempts() {
        for max in 1..=26u8 {
            assert_eq!(gallows_stage(max, max), 6);
            for wrong in 0..max {
                assert!(gallows_stage(wrong, max) < 6, "{wrong}/{max}");
            }
        }
    }

    #[test]
    fn gallows_stage_is_monotonic() {
        for max in [4u8, 6, 8] {
            let stages: Vec<usize> = (0..=max).map(|w| gallows_stage(w, max)).collect();
            assert!(stages.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn gallows_drawings_have_same_height() {
        let height = GALLOWS[0].lines().count();
        assert!(GALLOWS.iter().all(|g| g.lines().count() == height));
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
    fn attempts_bar_half() {
        assert_eq!(attempts_bar(3, 6, 6), "███░░░");
    }
}
