//! Message analysis: classify a free-text message into an intent, a
//! sentiment polarity and a 0-10 intensity, collecting the matched keywords.
//!
//! Keyword-based detection, fast and deterministic, no model call. The whole
//! pass is a pure function of the message text, so it is safe to run inline
//! in a UI event handler.

use serde::{Deserialize, Serialize};

use super::lexicon;

/// Communicative purpose of a message. Exactly one per message;
/// `General` when no keyword pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Question,
    Gratitude,
    HelpRequest,
    Praise,
    Criticism,
    Encouragement,
    General,
}

/// Coarse emotional polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Full analysis of a single message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAnalysis {
    pub intent: Intent,
    pub sentiment: Sentiment,
    /// Emotional strength, always within 0-10.
    pub intensity: u8,
    /// Matched lexicon words in scan order, plus `"!"` / `"?"` markers.
    pub keywords: Vec<String>,
}

/// The reduced projection kept in the analysis history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub intent: Intent,
    pub sentiment: Sentiment,
    pub intensity: u8,
}

impl MessageAnalysis {
    /// Project down to the tuple the attitude policy consumes.
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            intent: self.intent,
            sentiment: self.sentiment,
            intensity: self.intensity,
        }
    }
}

/// Baseline intensity when no sentiment word matches.
const NEUTRAL_INTENSITY: u8 = 5;

/// Analyze one message. Pure and total: any string input yields a result,
/// the empty string degrades to `General` / `Neutral` / intensity 5.
pub fn analyze(message: &str) -> MessageAnalysis {
    let lower = message.to_lowercase();

    let intent = classify_intent(&lower);

    let mut keywords: Vec<String> = Vec::new();

    let mut max_positive: u8 = 0;
    for &(word, strength) in lexicon::POSITIVE_WORDS {
        if lower.contains(word) {
            keywords.push(word.to_string());
            max_positive = max_positive.max(strength);
        }
    }

    let mut max_negative: u8 = 0;
    for &(word, strength) in lexicon::NEGATIVE_WORDS {
        if lower.contains(word) {
            keywords.push(word.to_string());
            max_negative = max_negative.max(strength);
        }
    }

    let mut multiplier: f32 = 1.0;
    for &(word, factor) in lexicon::INTENSIFIERS {
        if lower.contains(word) {
            keywords.push(word.to_string());
            multiplier = multiplier.max(factor);
        }
    }

    // Stronger side wins; positive takes ties. The neutral baseline is fixed,
    // not multiplier-adjusted.
    let (sentiment, mut intensity) = if max_positive == 0 && max_negative == 0 {
        (Sentiment::Neutral, NEUTRAL_INTENSITY)
    } else if max_positive >= max_negative {
        (Sentiment::Positive, scale(max_positive, multiplier))
    } else {
        (Sentiment::Negative, scale(max_negative, multiplier))
    };

    // Exclamation marks raise intensity one point each, on top of whatever
    // the lexicons produced. Both ASCII and fullwidth forms count.
    let exclamations = message.chars().filter(|c| matches!(c, '!' | '！')).count();
    if exclamations > 0 {
        intensity = (intensity as usize + exclamations).min(10) as u8;
        keywords.push("!".to_string());
    }
    if message.chars().any(|c| matches!(c, '?' | '？')) {
        keywords.push("?".to_string());
    }

    MessageAnalysis {
        intent,
        sentiment,
        intensity,
        keywords,
    }
}

/// First-match-wins over the ordered intent checks. Order matters: the
/// category vocabularies overlap (「ありがとう」 is also a positive word,
/// 「だめ」 is also a negative word).
fn classify_intent(lower: &str) -> Intent {
    let contains_any = |set: &[&str]| set.iter().any(|kw| lower.contains(kw));

    if contains_any(lexicon::GREETING_KW) {
        Intent::Greeting
    } else if lower.contains('?') || lower.contains('？') || contains_any(lexicon::QUESTION_KW) {
        Intent::Question
    } else if contains_any(lexicon::GRATITUDE_KW) {
        Intent::Gratitude
    } else if contains_any(lexicon::HELP_KW) {
        Intent::HelpRequest
    } else if contains_any(lexicon::PRAISE_KW) {
        Intent::Praise
    } else if contains_any(lexicon::CRITICISM_KW) {
        Intent::Criticism
    } else if contains_any(lexicon::ENCOURAGEMENT_KW) {
        Intent::Encouragement
    } else {
        Intent::General
    }
}

fn scale(strength: u8, multiplier: f32) -> u8 {
    ((strength as f32 * multiplier).round() as u32).min(10) as u8
}
