use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Color tag a task is labeled with, one of a fixed five-swatch palette.
///
/// Serialized as the hex literal of the swatch so the data file carries the
/// colors directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTag {
    #[serde(rename = "#FF3B30")]
    Red,
    #[serde(rename = "#FF9500")]
    Orange,
    #[serde(rename = "#FFCC00")]
    Yellow,
    #[serde(rename = "#34C759")]
    Green,
    #[serde(rename = "#007AFF")]
    Blue,
}

/// Palette in display order. The first entry is the default for new tasks.
pub const PALETTE: [ColorTag; 5] = [
    ColorTag::Red,
    ColorTag::Orange,
    ColorTag::Yellow,
    ColorTag::Green,
    ColorTag::Blue,
];

impl ColorTag {
    pub fn hex(&self) -> &'static str {
        match self {
            ColorTag::Red => "#FF3B30",
            ColorTag::Orange => "#FF9500",
            ColorTag::Yellow => "#FFCC00",
            ColorTag::Green => "#34C759",
            ColorTag::Blue => "#007AFF",
        }
    }

    /// RGB components of the swatch.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorTag::Red => (0xFF, 0x3B, 0x30),
            ColorTag::Orange => (0xFF, 0x95, 0x00),
            ColorTag::Yellow => (0xFF, 0xCC, 0x00),
            ColorTag::Green => (0x34, 0xC7, 0x59),
            ColorTag::Blue => (0x00, 0x7A, 0xFF),
        }
    }
}

impl Default for ColorTag {
    fn default() -> Self {
        PALETTE[0]
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColorTag::Red => "Red",
            ColorTag::Orange => "Orange",
            ColorTag::Yellow => "Yellow",
            ColorTag::Green => "Green",
            ColorTag::Blue => "Blue",
        };
        write!(f, "{name}")
    }
}

/// A to-do item as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub color: ColorTag,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Draft for a task the store has not assigned an id to yet.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub color: ColorTag,
    pub completed: bool,
}

impl Task {
    pub(crate) fn from_draft(id: String, draft: NewTask) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title,
            description: draft.description,
            deadline: draft.deadline,
            color: draft.color,
            completed: draft.completed,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(StoreError::Invalid("task ID cannot be empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(StoreError::Invalid("title cannot be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task(title: &str) -> Task {
        Task::from_draft(
            "task-1".to_string(),
            NewTask {
                title: title.to_string(),
                description: String::new(),
                deadline: Utc::now(),
                color: ColorTag::default(),
                completed: false,
            },
        )
    }

    #[test]
    fn default_color_is_first_palette_entry() {
        assert_eq!(ColorTag::default(), PALETTE[0]);
        assert_eq!(ColorTag::default(), ColorTag::Red);
    }

    #[test]
    fn color_serializes_as_hex_literal() {
        for color in PALETTE {
            let json = serde_json::to_string(&color).unwrap();
            assert_eq!(json, format!("\"{}\"", color.hex()));
            let back: ColorTag = serde_json::from_str(&json).unwrap();
            assert_eq!(back, color);
        }
    }

    #[test]
    fn unknown_color_is_rejected() {
        assert!(serde_json::from_str::<ColorTag>("\"#123456\"").is_err());
    }

    #[test]
    fn validate_accepts_normal_task() {
        assert!(sample_task("Buy groceries").validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_title() {
        assert!(sample_task("").validate().is_err());
        assert!(sample_task("   ").validate().is_err());
    }

    #[test]
    fn from_draft_keeps_fields_verbatim() {
        let task = sample_task("  padded title  ");
        assert_eq!(task.title, "  padded title  ");
        assert_eq!(task.description, "");
        assert!(!task.completed);
        assert_eq!(task.created_at, task.updated_at);
    }
}
