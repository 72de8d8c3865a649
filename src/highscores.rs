//! Best tower leaderboard
//!
//! Tracks the top 10 runs. Taller towers rank first; between towers of the
//! same height, the one that kept a wider footprint wins. Kept in memory; the
//! host decides where (and whether) to store the serialized form.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Maximum number of towers to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// One finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Layers placed on top of the base
    pub score: u32,
    /// Simulation ticks the run lasted
    pub ticks: u64,
    /// Narrowest footprint side still standing at the end
    pub narrowest: f32,
}

impl HighScoreEntry {
    /// Ranking order: `Greater` means `self` ranks above `other`
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.narrowest.total_cmp(&other.narrowest))
    }

    /// Strictly better than `other` (ties keep the older entry ahead)
    #[inline]
    pub fn beats(&self, other: &Self) -> bool {
        self.rank_cmp(other) == Ordering::Greater
    }
}

/// Tower leaderboard, best first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank `entry` would take (1-indexed), or None when it doesn't make the board.
    /// A run that placed nothing never qualifies.
    pub fn potential_rank(&self, entry: &HighScoreEntry) -> Option<usize> {
        if entry.score == 0 {
            return None;
        }
        let slot = self
            .entries
            .iter()
            .position(|e| entry.beats(e))
            .unwrap_or(self.entries.len());
        (slot < MAX_HIGH_SCORES).then_some(slot + 1)
    }

    pub fn qualifies(&self, entry: &HighScoreEntry) -> bool {
        self.potential_rank(entry).is_some()
    }

    /// Add a finished run (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify
    pub fn add_score(&mut self, entry: HighScoreEntry) -> Option<usize> {
        let rank = self.potential_rank(&entry)?;
        log::info!(
            "New high score #{} ({} layers, narrowest {:.3})",
            rank,
            entry.score,
            entry.narrowest
        );
        self.entries.insert(rank - 1, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best tower so far
    pub fn best(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: u32, narrowest: f32) -> HighScoreEntry {
        HighScoreEntry {
            score,
            ticks: score as u64 * 250,
            narrowest,
        }
    }

    #[test]
    fn test_empty_run_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(&entry(0, 0.5)));
        assert_eq!(scores.potential_rank(&entry(0, 0.5)), None);
    }

    #[test]
    fn test_taller_towers_rank_first() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(entry(3, 0.4)), Some(1));
        assert_eq!(scores.add_score(entry(7, 0.1)), Some(1));
        assert_eq!(scores.add_score(entry(5, 0.2)), Some(2));

        let order: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(order, vec![7, 5, 3]);
        assert_eq!(scores.best().map(|e| e.score), Some(7));
    }

    #[test]
    fn test_wider_footprint_breaks_ties() {
        let mut scores = HighScores::new();
        scores.add_score(entry(5, 0.2));
        assert_eq!(scores.add_score(entry(5, 0.3)), Some(1));
        // Exact tie goes behind the existing entry
        assert_eq!(scores.add_score(entry(5, 0.2)), Some(3));

        let widths: Vec<f32> = scores.entries.iter().map(|e| e.narrowest).collect();
        assert_eq!(widths, vec![0.3, 0.2, 0.2]);
    }

    #[test]
    fn test_full_board_drops_lowest() {
        let mut scores = HighScores::new();
        for s in 1..=MAX_HIGH_SCORES as u32 {
            scores.add_score(entry(s, 0.5));
        }
        assert!(!scores.qualifies(&entry(1, 0.5)));
        assert_eq!(scores.add_score(entry(1, 0.5)), None);
        // Same height, wider footprint: squeezes out the last entry
        assert_eq!(scores.add_score(entry(1, 0.6)), Some(MAX_HIGH_SCORES));

        assert_eq!(scores.add_score(entry(20, 0.1)), Some(1));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(2));
        assert!(!scores.is_empty());
    }
}
