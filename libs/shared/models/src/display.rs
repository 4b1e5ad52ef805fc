use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual severity class used when an enum value is rendered as a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Success,
    Error,
    Warning,
    Info,
    Default,
}

impl fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeVariant::Success => write!(f, "success"),
            BadgeVariant::Error => write!(f, "error"),
            BadgeVariant::Warning => write!(f, "warning"),
            BadgeVariant::Info => write!(f, "info"),
            BadgeVariant::Default => write!(f, "default"),
        }
    }
}

/// A value/label pair for a selectable list. An empty value marks a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new(String::new(), label)
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}
