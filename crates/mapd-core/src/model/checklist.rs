use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MapdError;
use crate::id::RecordId;

/// Checklist grouping, in the order the generator emits them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecklistCategory {
    Documents,
    Health,
    Packing,
    Preparation,
    Activities,
}

impl ChecklistCategory {
    pub const ALL: [ChecklistCategory; 5] = [
        ChecklistCategory::Documents,
        ChecklistCategory::Health,
        ChecklistCategory::Packing,
        ChecklistCategory::Preparation,
        ChecklistCategory::Activities,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChecklistCategory::Documents => "Documents",
            ChecklistCategory::Health => "Health",
            ChecklistCategory::Packing => "Packing",
            ChecklistCategory::Preparation => "Preparation",
            ChecklistCategory::Activities => "Activities",
        }
    }
}

impl fmt::Display for ChecklistCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChecklistCategory {
    type Err = MapdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_label("checklist category", s, &Self::ALL, |c| c.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = MapdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_label("priority", s, &Self::ALL, |p| p.as_str())
    }
}

/// One actionable task attached to a trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: RecordId,
    pub title: String,
    pub category: ChecklistCategory,
    pub priority: Priority,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub reminder_date: Option<DateTime<Utc>>,
}

impl ChecklistItem {
    /// Create an incomplete item with no reminder
    pub fn new(title: impl Into<String>, category: ChecklistCategory, priority: Priority) -> Self {
        Self {
            id: RecordId::generate(),
            title: title.into(),
            category,
            priority,
            is_completed: false,
            reminder_date: None,
        }
    }

    /// Copy of this item with the completed flag set to `completed`
    pub fn completed(&self, completed: bool) -> Self {
        Self {
            is_completed: completed,
            ..self.clone()
        }
    }
}
