//! Chat command layer: parsing for the `#` commands and the in-memory
//! planner they operate on. Command text never reaches the analyzer.

pub mod parser;
pub mod store;

pub use parser::{parse, parse_with_year, Command, CommandError};
pub use store::{PlannerStore, ScheduleEntry, Task};
