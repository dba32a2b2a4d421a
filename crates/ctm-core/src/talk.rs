//! Talks and the validating factory that constructs them.

use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use thiserror::Error;

/// Shortest talk the conference accepts, in minutes.
pub const MIN_TALK_MINUTES: u32 = 5;

/// Longest talk the conference accepts, in minutes.
pub const MAX_TALK_MINUTES: u32 = 60;

/// No talk may start before this hour of the day.
const EARLIEST_START_HOUR: u32 = 9;

/// Why a submission could not become a [`Talk`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The title is empty, starts with a non-letter, or contains a digit.
    #[error("the talk title must start with a letter and contain no digits, got {title:?}")]
    InvalidTitle { title: String },

    /// The duration is outside the accepted 5 to 60 minute window.
    #[error("the talk must run between 5 and 60 minutes, got {minutes}")]
    InvalidDuration { minutes: u32 },

    /// The raw duration text is not a whole number of minutes.
    #[error("the talk duration must be a whole number of minutes, got {text:?}")]
    UnparsableDuration { text: String },

    /// The requested start time is before 09:00.
    #[error("the talk cannot start before 09:00, got {start}")]
    TooEarly { start: NaiveTime },
}

/// An immutable, validated talk submission.
///
/// Constructed only through [`Talk::new`] or [`Talk::with_start`]; an
/// invalid title or duration never becomes a `Talk`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Talk {
    title: String,
    duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_time: Option<NaiveTime>,
}

impl Talk {
    /// Builds a talk after validating its title and duration.
    pub fn new(title: impl Into<String>, duration_minutes: u32) -> Result<Self, ValidationError> {
        let title = title.into();
        if !Self::is_valid_title(&title) {
            return Err(ValidationError::InvalidTitle { title });
        }
        if !Self::is_valid_duration(duration_minutes) {
            return Err(ValidationError::InvalidDuration {
                minutes: duration_minutes,
            });
        }
        Ok(Self {
            title,
            duration_minutes,
            start_time: None,
        })
    }

    /// Builds a talk with a fixed start time, which must be 09:00 or later.
    pub fn with_start(
        title: impl Into<String>,
        duration_minutes: u32,
        start: NaiveTime,
    ) -> Result<Self, ValidationError> {
        let mut talk = Self::new(title, duration_minutes)?;
        if start.hour() < EARLIEST_START_HOUR {
            return Err(ValidationError::TooEarly { start });
        }
        talk.start_time = Some(start);
        Ok(talk)
    }

    /// A valid title starts with a letter and contains no digits.
    #[must_use]
    pub fn is_valid_title(title: &str) -> bool {
        title
            .chars()
            .next()
            .is_some_and(|first| first.is_ascii_alphabetic())
            && !title.chars().any(|c| c.is_ascii_digit())
    }

    /// A valid duration lies between [`MIN_TALK_MINUTES`] and
    /// [`MAX_TALK_MINUTES`] inclusive.
    #[must_use]
    pub fn is_valid_duration(minutes: u32) -> bool {
        (MIN_TALK_MINUTES..=MAX_TALK_MINUTES).contains(&minutes)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub const fn start_time(&self) -> Option<NaiveTime> {
        self.start_time
    }
}
