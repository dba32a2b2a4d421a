//! Tracks: one morning and one afternoon session per conference track.

use serde::Serialize;
use thiserror::Error;

use crate::session::{DayPart, Session};
use crate::talk::Talk;

/// A session refused because its daypart slot is already taken, handed
/// back unconsumed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("the track already has a {} session", .session.day_part())]
pub struct DuplicateSlot {
    /// The rejected session.
    pub session: Session,
}

/// One conference track, holding at most one session per daypart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    sessions: Vec<Session>,
}

impl Track {
    /// Creates a track with its morning and afternoon sessions in place.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: vec![
                Session::new(DayPart::Morning),
                Session::new(DayPart::Afternoon),
            ],
        }
    }

    /// Sessions in insertion order.
    #[must_use]
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// The session for the given daypart, if one is attached.
    #[must_use]
    pub fn session(&self, day_part: DayPart) -> Option<&Session> {
        self.sessions
            .iter()
            .find(|session| session.day_part() == day_part)
    }

    pub fn session_mut(&mut self, day_part: DayPart) -> Option<&mut Session> {
        self.sessions
            .iter_mut()
            .find(|session| session.day_part() == day_part)
    }

    /// Whether the candidate session's daypart slot is still open.
    #[must_use]
    pub fn can_accommodate(&self, session: &Session) -> bool {
        self.sessions.len() < 2 && self.session(session.day_part()).is_none()
    }

    /// Attaches the session if its daypart slot is open; hands it back
    /// otherwise.
    pub fn add_session(&mut self, session: Session) -> Result<(), DuplicateSlot> {
        if !self.can_accommodate(&session) {
            return Err(DuplicateSlot { session });
        }
        self.sessions.push(session);
        Ok(())
    }

    /// Detaches the session for the daypart; a missing daypart is a no-op.
    pub fn remove_session(&mut self, day_part: DayPart) {
        self.sessions.retain(|session| session.day_part() != day_part);
    }

    /// First-fit placement within this track, morning before afternoon.
    ///
    /// Returns the daypart that took the talk, or the talk itself when
    /// no attached session has room.
    pub fn place_talk(&mut self, mut talk: Talk) -> Result<DayPart, Talk> {
        for day_part in DayPart::ALL {
            if let Some(session) = self.session_mut(day_part) {
                match session.add_talk(talk) {
                    Ok(()) => return Ok(day_part),
                    Err(rejected) => talk = rejected.talk,
                }
            }
        }
        Err(talk)
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}
