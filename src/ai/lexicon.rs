//! Keyword lexicons driving intent classification and sentiment scoring.
//!
//! All matching is case-insensitive substring containment against the
//! lower-cased message, never tokenized. A lexicon word embedded inside a
//! longer word still counts (「好き」 inside 「大好き」), and that is load-bearing
//! for compound words.

// ── Intent keyword sets ────────────────────────────────────

pub const GREETING_KW: &[&str] = &[
    "こんにちは",
    "おはよう",
    "こんばんは",
    "よろしく",
    "hello",
    "hi",
];

/// Interrogative particles and phrases. `?` / `？` are checked separately.
pub const QUESTION_KW: &[&str] = &["ですか", "かな", "教えて", "どう", "何"];

pub const GRATITUDE_KW: &[&str] = &["ありがとう", "感謝", "thanks"];

pub const HELP_KW: &[&str] = &["助けて", "手伝って", "help"];

pub const PRAISE_KW: &[&str] = &["すごい", "素晴らしい", "良い", "いい", "great", "good"];

pub const CRITICISM_KW: &[&str] = &["ダメ", "だめ", "違う", "ちがう", "bad", "wrong"];

pub const ENCOURAGEMENT_KW: &[&str] = &["頑張", "がんば", "応援", "エール"];

// ── Weighted sentiment lexicons ────────────────────────────

/// Positive words with their emotional strength (0-10).
pub const POSITIVE_WORDS: &[(&str, u8)] = &[
    ("ありがとう", 7),
    ("嬉しい", 8),
    ("楽しい", 8),
    ("すごい", 9),
    ("素晴らしい", 10),
    ("よかった", 7),
    ("好き", 8),
    ("幸せ", 9),
    ("感謝", 8),
    ("うれしい", 8),
    ("たのしい", 8),
    ("最高", 10),
    ("大好き", 10),
    ("excellent", 9),
    ("perfect", 10),
    ("great", 8),
    ("good", 7),
    ("nice", 7),
    ("love", 9),
];

/// Negative words with their emotional strength (0-10).
pub const NEGATIVE_WORDS: &[(&str, u8)] = &[
    ("悲しい", 7),
    ("辛い", 8),
    ("大変", 6),
    ("疲れた", 7),
    ("難しい", 6),
    ("嫌い", 8),
    ("残念", 7),
    ("失敗", 7),
    ("だめ", 7),
    ("つらい", 8),
    ("かなしい", 7),
    ("最悪", 10),
    ("嫌だ", 8),
    ("terrible", 9),
    ("awful", 8),
    ("bad", 7),
    ("sad", 7),
    ("hate", 9),
];

/// Emphasis expressions. The strongest match multiplies the chosen strength.
pub const INTENSIFIERS: &[(&str, f32)] = &[
    ("とても", 1.5),
    ("すごく", 1.5),
    ("非常に", 1.7),
    ("めちゃくちゃ", 1.8),
    ("本当に", 1.4),
    ("マジで", 1.6),
    ("超", 1.7),
    ("very", 1.5),
    ("really", 1.4),
    ("extremely", 1.7),
    ("so", 1.3),
];

// ── Mood report keyword sets (#mood command) ───────────────

pub const REPORT_SAD_KW: &[&str] = &["疲れ", "つかれ", "悲し", "かなし"];

pub const REPORT_HAPPY_KW: &[&str] = &["楽し", "たのし", "嬉し", "うれし"];

pub const REPORT_ANGRY_KW: &[&str] = &["怒", "おこ", "イライラ"];
