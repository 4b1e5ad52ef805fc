use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// How long a notice stays visible after it is raised.
pub const NOTICE_TTL_SECONDS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient, auto-dismissing feedback for the outcome of a mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::at(NoticeKind::Success, message, Utc::now())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::at(NoticeKind::Error, message, Utc::now())
    }

    pub fn at(kind: NoticeKind, message: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::seconds(NOTICE_TTL_SECONDS)
    }

    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.created_at && now < self.expires_at()
    }

    /// Maps a mutation result onto the notice shown to the operator.
    pub fn from_result<T>(result: &Result<T, AppError>, success_message: &str) -> Self {
        match result {
            Ok(_) => Self::success(success_message),
            Err(err) => Self::from(err),
        }
    }
}

impl From<&AppError> for Notice {
    fn from(err: &AppError) -> Self {
        Notice::error(err.user_message())
    }
}
