//! Score tracking across rounds in one run

use super::game::Outcome;

/// Running score for the rounds played in this process
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    games_played: u32,
    games_won: u32,
    current_streak: u32,
    best_streak: u32,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished round; in-progress outcomes are ignored
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::InProgress => {}
            Outcome::Won => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
            }
            Outcome::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
            }
        }
    }

    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Wins so far, the player's score
    #[must_use]
    pub const fn games_won(&self) -> u32 {
        self.games_won
    }

    #[must_use]
    pub const fn games_lost(&self) -> u32 {
        self.games_played - self.games_won
    }

    #[must_use]
    pub const fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub const fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// Percentage of rounds won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }
}
