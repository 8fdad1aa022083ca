//! Mood update policies.
//!
//! Two separate rule sets share the `Mood` domain. The per-message rules run
//! after every normal message and react to the analysis alone; the report
//! rules back the `#mood` command and scan the user's own wording. They
//! differ on no-match: the per-message rules leave the mood as it is, the
//! report rules reset to neutral. Both behaviors are deliberate.

use super::analyzer::{AnalysisSummary, Intent, Sentiment};
use super::lexicon;
use crate::character::Mood;
use crate::config::EngineConfig;

/// Per-message mood rules, first match wins.
pub fn mood_after_message(current: Mood, analysis: &AnalysisSummary, config: &EngineConfig) -> Mood {
    if analysis.sentiment == Sentiment::Positive && analysis.intensity >= config.mood_shift_threshold
    {
        Mood::Happy
    } else if analysis.sentiment == Sentiment::Negative
        && analysis.intensity >= config.mood_shift_threshold
    {
        Mood::Sad
    } else if analysis.intent == Intent::Criticism
        || (analysis.sentiment == Sentiment::Negative
            && analysis.intensity >= config.rage_threshold)
    {
        Mood::Angry
    } else {
        current
    }
}

/// Mood from an explicit `#mood <text>` report. Unmatched text resets to
/// neutral. The scan is against the raw text, not lower-cased: the lexicons
/// are Japanese.
pub fn mood_from_report(text: &str) -> Mood {
    let contains_any = |set: &[&str]| set.iter().any(|kw| text.contains(kw));

    if contains_any(lexicon::REPORT_SAD_KW) {
        Mood::Sad
    } else if contains_any(lexicon::REPORT_HAPPY_KW) {
        Mood::Happy
    } else if contains_any(lexicon::REPORT_ANGRY_KW) {
        Mood::Angry
    } else {
        Mood::Neutral
    }
}
