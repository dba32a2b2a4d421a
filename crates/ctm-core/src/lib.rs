//! Core domain logic for the conference track scheduler.
//!
//! A talk submission flows through three stages: [`validate`] turns the
//! shell's raw strings into a [`Talk`] (or a list of [`Fault`]s),
//! [`Schedule::schedule_talk`] finds the first session with room, and
//! the resulting [`Placement`] (or fault list) goes back to the caller
//! as data. Sessions cap their total minutes, tracks hold one session
//! per daypart, and the schedule opens a new track only when every
//! existing session is full.

mod schedule;
mod session;
mod submission;
mod talk;
mod track;

pub use schedule::{NoSlotAvailable, Placement, Schedule};
pub use session::{CapacityExceeded, DayPart, Session};
pub use submission::{Fault, FaultCode, TalkRequest, submit, validate};
pub use talk::{MAX_TALK_MINUTES, MIN_TALK_MINUTES, Talk, ValidationError};
pub use track::{DuplicateSlot, Track};
