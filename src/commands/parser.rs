//! Parsing for the `#`-prefixed chat commands.
//!
//! Dispatch is a plain whitespace split: the first token names the command,
//! the rest are its arguments. Dates accept `yyyy/mm/dd` or the short `m/d`
//! form, which resolves against the current year.

use chrono::{Datelike, NaiveDate, NaiveTime};

/// A recognized chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddTask { title: String },
    AddSchedule {
        date: NaiveDate,
        time: NaiveTime,
        title: String,
    },
    CompleteTask { title: String },
    Status,
    ReportMood { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command {0}")]
    Unknown(String),
    #[error("missing argument, usage: {usage}")]
    MissingArgument { usage: &'static str },
    #[error("unreadable date {0}")]
    InvalidDate(String),
    #[error("unreadable time {0}")]
    InvalidTime(String),
}

pub const TASK_USAGE: &str = "#task タスク名";
pub const SCHEDULE_USAGE: &str = "#schedule 日付 時間 予定名";
pub const DONE_USAGE: &str = "#done タスク名";
pub const MOOD_USAGE: &str = "#mood 気分";

/// Parse one command line. The input must start with `#`; the command token
/// is matched case-insensitively.
pub fn parse(input: &str) -> Result<Command, CommandError> {
    parse_with_year(input, chrono::Local::now().year())
}

/// Like [`parse`], with the year used to resolve short `m/d` dates made
/// explicit for tests.
pub fn parse_with_year(input: &str, current_year: i32) -> Result<Command, CommandError> {
    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or("").to_lowercase();
    let rest: Vec<&str> = parts.collect();

    match command.as_str() {
        "#task" => {
            let title = rest.join(" ");
            if title.is_empty() {
                return Err(CommandError::MissingArgument { usage: TASK_USAGE });
            }
            Ok(Command::AddTask { title })
        }
        "#schedule" => {
            if rest.len() < 3 {
                return Err(CommandError::MissingArgument {
                    usage: SCHEDULE_USAGE,
                });
            }
            let date = resolve_date(rest[0], current_year)?;
            let time = NaiveTime::parse_from_str(rest[1], "%H:%M")
                .map_err(|_| CommandError::InvalidTime(rest[1].to_string()))?;
            Ok(Command::AddSchedule {
                date,
                time,
                title: rest[2..].join(" "),
            })
        }
        "#done" => {
            let title = rest.join(" ");
            if title.is_empty() {
                return Err(CommandError::MissingArgument { usage: DONE_USAGE });
            }
            Ok(Command::CompleteTask { title })
        }
        "#status" => Ok(Command::Status),
        "#mood" => {
            let text = rest.join(" ");
            if text.is_empty() {
                return Err(CommandError::MissingArgument { usage: MOOD_USAGE });
            }
            Ok(Command::ReportMood { text })
        }
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// `yyyy/mm/dd`, or `m/d` resolved against `current_year`.
fn resolve_date(raw: &str, current_year: i32) -> Result<NaiveDate, CommandError> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y/%m/%d") {
        return Ok(date);
    }
    let short: Vec<&str> = raw.split('/').collect();
    if let [month, day] = short[..] {
        if let (Ok(month), Ok(day)) = (month.parse::<u32>(), day.parse::<u32>()) {
            if let Some(date) = NaiveDate::from_ymd_opt(current_year, month, day) {
                return Ok(date);
            }
        }
    }
    Err(CommandError::InvalidDate(raw.to_string()))
}
