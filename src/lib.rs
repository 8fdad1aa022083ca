//! Companion character engine for a chat-based task assistant.
//!
//! A user converses with a cat or dog companion. Free text runs through a
//! lexicon-driven analyzer whose results steer the character's attitude and
//! mood; `#`-prefixed commands manage tasks and schedules and get
//! attitude-flavored acknowledgements. Everything is deterministic and
//! synchronous except response selection, which draws from a seedable RNG.
//!
//! [`session::ChatSession`] is the entry point for embedding; the pieces
//! under [`ai`] are usable on their own where a shell keeps its own state.

pub mod ai;
pub mod character;
pub mod commands;
pub mod config;
pub mod session;

pub use ai::{
    analyze, decorate_ack, mood_after_message, mood_from_report, mood_marker, next_attitude,
    AnalysisHistory, AnalysisSummary, Intent, MessageAnalysis, Responder, Sentiment,
};
pub use character::{
    Attitude, CatAttitude, CharacterState, DogAttitude, Mood, Personality, Species,
};
pub use commands::{Command, CommandError, PlannerStore, ScheduleEntry, Task};
pub use config::{ConfigError, EngineConfig};
pub use session::{ChatSession, SETUP_QUESTIONS};
