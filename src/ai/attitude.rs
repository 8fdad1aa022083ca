//! Attitude transition policy.
//!
//! The attitude is re-derived after every normal message from a sliding
//! window over the analysis history. The policy is a pure function of the
//! window plus the current attitude; it never mutates the history.

use serde::{Deserialize, Serialize};

use super::analyzer::{AnalysisSummary, Intent, Sentiment};
use crate::character::{Attitude, CatAttitude, DogAttitude, Species};
use crate::config::EngineConfig;

/// Append-only record of per-message analyses for one session.
///
/// Grows for the session's lifetime; the transition policy only ever reads a
/// bounded suffix via [`AnalysisHistory::window`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisHistory {
    entries: Vec<AnalysisSummary>,
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: AnalysisSummary) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AnalysisSummary] {
        &self.entries
    }

    /// The most recent `n` entries, or all of them when fewer exist.
    pub fn window(&self, n: usize) -> &[AnalysisSummary] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }
}

/// Derive the next attitude from the recent message window.
///
/// Priority-ordered rules, first match wins:
/// 1. sustained positivity or repeated praise
/// 2. sustained negativity or repeated criticism
/// 3. a run of questions
/// 4. otherwise the attitude is kept.
pub fn next_attitude(
    current: Attitude,
    history: &AnalysisHistory,
    config: &EngineConfig,
) -> Attitude {
    let window = history.window(config.attitude_window);

    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut questions = 0usize;
    let mut praise = 0usize;
    let mut criticism = 0usize;

    for entry in window {
        match entry.sentiment {
            Sentiment::Positive => positive += 1,
            Sentiment::Negative => negative += 1,
            Sentiment::Neutral => {}
        }
        match entry.intent {
            Intent::Question => questions += 1,
            Intent::Praise => praise += 1,
            Intent::Criticism => criticism += 1,
            _ => {}
        }
    }

    if positive >= config.positive_streak || praise >= config.praise_streak {
        // A warm streak: the cat turns tsundere, the dog opens up.
        match current.species() {
            Species::Cat => Attitude::Cat(CatAttitude::Tsundere),
            Species::Dog => Attitude::Dog(DogAttitude::Friendly),
        }
    } else if negative >= config.negative_streak || criticism >= config.criticism_streak {
        match current.species() {
            Species::Cat => Attitude::Cat(CatAttitude::Aloof),
            Species::Dog => Attitude::Dog(DogAttitude::Sympathetic),
        }
    } else if questions >= config.question_streak {
        match current.species() {
            Species::Cat => Attitude::Cat(CatAttitude::Helpful),
            Species::Dog => Attitude::Dog(DogAttitude::Helpful),
        }
    } else {
        current
    }
}
