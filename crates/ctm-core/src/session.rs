//! Sessions: time-capped, ordered runs of talks for one daypart.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::talk::Talk;

/// The two fixed dayparts a conference day is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DayPart {
    Morning,
    Afternoon,
}

impl DayPart {
    /// Both dayparts in allocation order: morning slots fill first.
    pub const ALL: [Self; 2] = [Self::Morning, Self::Afternoon];

    /// Minutes a session of this daypart can hold.
    #[must_use]
    pub const fn capacity_minutes(self) -> u32 {
        match self {
            Self::Morning => 180,
            Self::Afternoon => 240,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
        }
    }
}

impl fmt::Display for DayPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A talk that did not fit, handed back along with the capacity
/// arithmetic that refused it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "a {} minute talk does not fit the {day_part} session ({scheduled} of {capacity} minutes taken)",
    .talk.duration_minutes()
)]
pub struct CapacityExceeded {
    /// The rejected talk, returned unconsumed.
    pub talk: Talk,
    pub day_part: DayPart,
    pub scheduled: u32,
    pub capacity: u32,
}

/// A time-bounded container of talks for one daypart.
///
/// Insertion order is presentation order. The cap is enforced on every
/// add, so the sum of contained durations never exceeds
/// [`DayPart::capacity_minutes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    day_part: DayPart,
    talks: Vec<Talk>,
}

impl Session {
    /// Creates an empty session; capacity is fixed by the daypart.
    #[must_use]
    pub const fn new(day_part: DayPart) -> Self {
        Self {
            day_part,
            talks: Vec::new(),
        }
    }

    #[must_use]
    pub const fn day_part(&self) -> DayPart {
        self.day_part
    }

    /// Talks in presentation order.
    #[must_use]
    pub fn talks(&self) -> &[Talk] {
        &self.talks
    }

    #[must_use]
    pub const fn capacity_minutes(&self) -> u32 {
        self.day_part.capacity_minutes()
    }

    /// Sum of the scheduled talks' durations; 0 when empty.
    #[must_use]
    pub fn total_duration(&self) -> u32 {
        self.talks.iter().map(Talk::duration_minutes).sum()
    }

    /// Whether the talk fits in the remaining time.
    #[must_use]
    pub fn can_accommodate(&self, talk: &Talk) -> bool {
        self.total_duration() + talk.duration_minutes() <= self.capacity_minutes()
    }

    /// Appends the talk if it fits; hands it back otherwise.
    pub fn add_talk(&mut self, talk: Talk) -> Result<(), CapacityExceeded> {
        if !self.can_accommodate(&talk) {
            return Err(CapacityExceeded {
                day_part: self.day_part,
                scheduled: self.total_duration(),
                capacity: self.capacity_minutes(),
                talk,
            });
        }
        self.talks.push(talk);
        Ok(())
    }

    /// Removes the first talk whose title matches case-insensitively.
    ///
    /// A missing title is a no-op, not an error: removal is a
    /// maintenance operation.
    pub fn remove_talk(&mut self, title: &str) {
        if let Some(index) = self
            .talks
            .iter()
            .position(|talk| talk.title().eq_ignore_ascii_case(title))
        {
            self.talks.remove(index);
        }
    }
}
