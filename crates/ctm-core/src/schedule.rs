//! The allocator: first-fit placement of talks across tracks.

use serde::Serialize;
use thiserror::Error;

use crate::session::{DayPart, Session};
use crate::talk::Talk;
use crate::track::Track;

/// Where a talk ended up: the track's position in creation order and the
/// daypart of the session that took it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// 0-based index into [`Schedule::tracks`]; display layers add 1.
    pub track_index: usize,
    pub day_part: DayPart,
}

/// Even a brand-new track could not take the talk.
///
/// Unreachable for talks built through the validating factory (a 60
/// minute talk always fits an empty session), but handled rather than
/// assumed away.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no session can accommodate a {} minute talk", .talk.duration_minutes())]
pub struct NoSlotAvailable {
    /// The unplaced talk, returned unconsumed.
    pub talk: Talk,
}

/// The conference schedule: tracks in creation order, grown through
/// [`Schedule::schedule_talk`] and [`Schedule::add_track`].
///
/// Explicitly owned by the caller; each placement takes `&mut self`, so
/// concurrent submitters must serialize on the schedule as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    tracks: Vec<Track>,
}

impl Schedule {
    /// An empty schedule. Every process run starts from one.
    #[must_use]
    pub const fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Tracks in creation order. Read-only: placement goes through
    /// [`Schedule::schedule_talk`].
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Appends a track. A maintenance operation, independent of talk
    /// placement.
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Places the talk in the first session with room, scanning tracks
    /// in creation order and each track morning-first, opening a new
    /// track when every existing session is full.
    ///
    /// No backtracking and no search for a tighter fit: the earliest
    /// available slot wins. A new track is appended only if placement
    /// in it succeeded.
    pub fn schedule_talk(&mut self, mut talk: Talk) -> Result<Placement, NoSlotAvailable> {
        for (track_index, track) in self.tracks.iter_mut().enumerate() {
            if track.sessions().is_empty() {
                // remove_session can strip a track bare; re-seed it so
                // it takes part in placement again
                let _ = track.add_session(Session::new(DayPart::Morning));
            }
            match track.place_talk(talk) {
                Ok(day_part) => {
                    tracing::debug!(
                        track = track_index + 1,
                        %day_part,
                        "talk placed in existing track"
                    );
                    return Ok(Placement {
                        track_index,
                        day_part,
                    });
                }
                Err(unplaced) => talk = unplaced,
            }
        }

        let mut track = Track::new();
        match track.place_talk(talk) {
            Ok(day_part) => {
                let track_index = self.tracks.len();
                self.tracks.push(track);
                tracing::debug!(track = track_index + 1, %day_part, "talk placed in new track");
                Ok(Placement {
                    track_index,
                    day_part,
                })
            }
            Err(talk) => Err(NoSlotAvailable { talk }),
        }
    }
}
