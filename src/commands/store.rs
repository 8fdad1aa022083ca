//! In-memory planner: the tasks and schedule entries a session accumulates.
//!
//! Session-lifetime only. Durable persistence lives outside the engine; a
//! shell that wants it can serialize the store through serde.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerStore {
    tasks: Vec<Task>,
    schedules: Vec<ScheduleEntry>,
}

impl PlannerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_task(&mut self, title: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.tasks.push(Task {
            id,
            title: title.to_string(),
            completed: false,
            created_at: Utc::now(),
        });
        id
    }

    pub fn add_schedule(&mut self, date: NaiveDate, time: NaiveTime, title: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.schedules.push(ScheduleEntry {
            id,
            title: title.to_string(),
            date,
            time,
            created_at: Utc::now(),
        });
        id
    }

    /// Mark every task with a matching title as completed,
    /// case-insensitively. Returns how many were flipped.
    pub fn complete_task(&mut self, title: &str) -> usize {
        let needle = title.to_lowercase();
        let mut flipped = 0;
        for task in &mut self.tasks {
            if !task.completed && task.title.to_lowercase() == needle {
                task.completed = true;
                flipped += 1;
            }
        }
        flipped
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn schedules(&self) -> &[ScheduleEntry] {
        &self.schedules
    }

    pub fn open_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.completed)
    }

    pub fn entries_on(&self, date: NaiveDate) -> impl Iterator<Item = &ScheduleEntry> {
        self.schedules.iter().filter(move |s| s.date == date)
    }
}
