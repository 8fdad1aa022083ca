//! The analysis core: lexicon-driven message analysis, the attitude
//! transition policy, the mood policies, and table-driven response
//! generation. Everything here is synchronous and pure apart from the
//! responder's injectable RNG.

pub mod analyzer;
pub mod attitude;
pub mod lexicon;
pub mod mood;
pub mod responder;


pub use analyzer::{analyze, AnalysisSummary, Intent, MessageAnalysis, Sentiment};
pub use attitude::{next_attitude, AnalysisHistory};
pub use mood::{mood_after_message, mood_from_report};
pub use responder::{candidates, decorate_ack, mood_marker, Responder};
