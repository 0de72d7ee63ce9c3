//! Match state and scoring
//!
//! `MatchState` is the only mutable state in a match. It changes through
//! `apply` alone, one outcome per delivery.

use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::delivery::DeliveryError;
use super::shot::Outcome;

/// Difficulty, fixed at match start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Easy => "easy",
            Mode::Medium => "medium",
            Mode::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" => Some(Mode::Easy),
            "medium" | "med" | "m" => Some(Mode::Medium),
            "hard" | "h" => Some(Mode::Hard),
            _ => None,
        }
    }

    /// Wickets in hand at the start of the chase
    pub fn max_wickets(&self) -> u32 {
        match self {
            Mode::Easy => 6,
            Mode::Medium => 5,
            Mode::Hard => 4,
        }
    }

    /// Range the target is drawn from
    pub fn target_range(&self) -> RangeInclusive<u32> {
        match self {
            Mode::Easy => 15..=20,
            Mode::Medium => 35..=50,
            Mode::Hard => 75..=100,
        }
    }

    pub fn sample_target<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.target_range())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

/// Where the chase stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Ongoing,
    Win,
    Loss,
}

impl MatchStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, MatchStatus::Ongoing)
    }
}

/// Pure status function. Reaching the target is checked first, so a
/// delivery that both wins and loses the last wicket counts as a win.
pub fn match_status(target: u32, score: u32, max_wickets: u32, wickets_lost: u32) -> MatchStatus {
    if score >= target {
        MatchStatus::Win
    } else if wickets_lost >= max_wickets {
        MatchStatus::Loss
    } else {
        MatchStatus::Ongoing
    }
}

/// Final result of a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Won { wickets_in_hand: u32 },
    Lost { runs_short: u32 },
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::Won { wickets_in_hand } => {
                write!(f, "🎉 VICTORY! You won by {wickets_in_hand} wickets.")
            }
            MatchResult::Lost { runs_short } => write!(
                f,
                "😭 DEFEAT! Target not reached. You were short by {runs_short} runs."
            ),
        }
    }
}

/// Score and wickets for a single chase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub mode: Mode,
    pub target: u32,
    pub max_wickets: u32,
    score: u32,
    wickets_lost: u32,
    deliveries: u32,
}

impl MatchState {
    /// Fresh chase for a mode with an already-drawn target
    pub fn new(mode: Mode, target: u32) -> Self {
        Self::with_wickets(mode, target, mode.max_wickets())
    }

    pub fn with_wickets(mode: Mode, target: u32, max_wickets: u32) -> Self {
        Self {
            mode,
            target,
            max_wickets,
            score: 0,
            wickets_lost: 0,
            deliveries: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn wickets_lost(&self) -> u32 {
        self.wickets_lost
    }

    /// Deliveries faced so far
    pub fn deliveries(&self) -> u32 {
        self.deliveries
    }

    pub fn wickets_in_hand(&self) -> u32 {
        self.max_wickets.saturating_sub(self.wickets_lost)
    }

    pub fn runs_needed(&self) -> u32 {
        self.target.saturating_sub(self.score)
    }

    pub fn status(&self) -> MatchStatus {
        match_status(self.target, self.score, self.max_wickets, self.wickets_lost)
    }

    /// Apply one delivery's outcome. Rejected once the match is decided.
    pub fn apply(&mut self, outcome: Outcome) -> Result<MatchStatus, DeliveryError> {
        if self.status().is_over() {
            return Err(DeliveryError::MatchOver);
        }

        match outcome {
            Outcome::Wicket => self.wickets_lost += 1,
            Outcome::Runs(n) => self.score += n as u32,
        }
        self.deliveries += 1;

        Ok(self.status())
    }

    /// Final result, None while the chase is still on
    pub fn result(&self) -> Option<MatchResult> {
        match self.status() {
            MatchStatus::Ongoing => None,
            MatchStatus::Win => Some(MatchResult::Won {
                wickets_in_hand: self.wickets_in_hand(),
            }),
            MatchStatus::Loss => Some(MatchResult::Lost {
                runs_short: self.runs_needed(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_mode_table() {
        assert_eq!(Mode::Easy.max_wickets(), 6);
        assert_eq!(Mode::Medium.max_wickets(), 5);
        assert_eq!(Mode::Hard.max_wickets(), 4);
        assert_eq!(Mode::Easy.target_range(), 15..=20);
        assert_eq!(Mode::Medium.target_range(), 35..=50);
        assert_eq!(Mode::Hard.target_range(), 75..=100);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(Mode::from_str("EASY"), Some(Mode::Easy));
        assert_eq!(Mode::from_str("med"), Some(Mode::Medium));
        assert_eq!(Mode::from_str("hard"), Some(Mode::Hard));
        assert_eq!(Mode::from_str("insane"), None);
    }

    #[test]
    fn test_sample_target_in_range() {
        let mut rng = Pcg32::seed_from_u64(5);
        for mode in [Mode::Easy, Mode::Medium, Mode::Hard] {
            for _ in 0..200 {
                assert!(mode.target_range().contains(&mode.sample_target(&mut rng)));
            }
        }
    }

    #[test]
    fn test_status_win_takes_priority() {
        assert_eq!(match_status(15, 15, 6, 6), MatchStatus::Win);
        assert_eq!(match_status(15, 14, 6, 6), MatchStatus::Loss);
        assert_eq!(match_status(15, 14, 6, 5), MatchStatus::Ongoing);
        assert_eq!(match_status(15, 20, 6, 0), MatchStatus::Win);
    }

    #[test]
    fn test_apply_wicket_and_runs() {
        let mut state = MatchState::new(Mode::Easy, 15);
        assert_eq!(state.apply(Outcome::Wicket), Ok(MatchStatus::Ongoing));
        assert_eq!((state.score(), state.wickets_lost()), (0, 1));
        assert_eq!(state.apply(Outcome::BOUNDARY), Ok(MatchStatus::Ongoing));
        assert_eq!((state.score(), state.wickets_lost()), (4, 1));
        assert_eq!(state.apply(Outcome::DOT), Ok(MatchStatus::Ongoing));
        assert_eq!(state.deliveries(), 3);
    }

    #[test]
    fn test_apply_rejected_after_loss() {
        let mut state = MatchState::new(Mode::Hard, 80);
        for _ in 0..3 {
            assert_eq!(state.apply(Outcome::Wicket), Ok(MatchStatus::Ongoing));
        }
        assert_eq!(state.apply(Outcome::Wicket), Ok(MatchStatus::Loss));
        assert_eq!(state.wickets_lost(), state.max_wickets);

        let before = state.clone();
        assert_eq!(state.apply(Outcome::MAXIMUM), Err(DeliveryError::MatchOver));
        assert_eq!(state, before);
        assert_eq!(
            state.result(),
            Some(MatchResult::Lost { runs_short: 80 })
        );
    }

    #[test]
    fn test_result_messages() {
        let won = MatchResult::Won { wickets_in_hand: 4 };
        assert_eq!(won.to_string(), "🎉 VICTORY! You won by 4 wickets.");
        let lost = MatchResult::Lost { runs_short: 7 };
        assert_eq!(
            lost.to_string(),
            "😭 DEFEAT! Target not reached. You were short by 7 runs."
        );
    }
}
