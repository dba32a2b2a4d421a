//! Raw-input validation: the boundary between the I/O shell and the core.
//!
//! The shell hands over unparsed strings; this module turns them into a
//! validated [`Talk`] or a non-empty, ordered list of [`Fault`]s. Title
//! and duration are checked independently so one submission reports all
//! of its problems at once, and an allocation failure comes back as a
//! fault too: nothing here terminates the process.

use std::fmt;

use serde::Serialize;

use crate::schedule::{Placement, Schedule};
use crate::talk::{Talk, ValidationError};

/// A talk submission as the shell captured it, unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkRequest {
    pub title: String,
    pub duration_text: String,
}

/// Which field, or which stage, a fault belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FaultCode {
    #[serde(rename = "userInput.TalkTitle")]
    TalkTitle,
    #[serde(rename = "userInput.LengthOfTalk")]
    LengthOfTalk,
    /// The submission was valid but allocation failed.
    #[serde(rename = "Talk")]
    Talk,
}

impl FaultCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TalkTitle => "userInput.TalkTitle",
            Self::LengthOfTalk => "userInput.LengthOfTalk",
            Self::Talk => "Talk",
        }
    }
}

impl fmt::Display for FaultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One problem with a submission, reported back to the caller as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fault {
    pub message: String,
    pub code: FaultCode,
}

impl Fault {
    fn from_validation(error: &ValidationError) -> Self {
        let code = match error {
            ValidationError::InvalidTitle { .. } => FaultCode::TalkTitle,
            ValidationError::InvalidDuration { .. } | ValidationError::UnparsableDuration { .. } => {
                FaultCode::LengthOfTalk
            }
            // start times never arrive through the shell; stage-level code
            ValidationError::TooEarly { .. } => FaultCode::Talk,
        };
        Self {
            message: error.to_string(),
            code,
        }
    }
}

/// Checks the raw request field by field, accumulating faults in field
/// order instead of stopping at the first.
pub fn validate(request: &TalkRequest) -> Result<Talk, Vec<Fault>> {
    let mut faults = Vec::new();

    if !Talk::is_valid_title(&request.title) {
        faults.push(Fault::from_validation(&ValidationError::InvalidTitle {
            title: request.title.clone(),
        }));
    }

    let minutes = request.duration_text.trim().parse::<u32>().ok();
    match minutes {
        None => faults.push(Fault::from_validation(
            &ValidationError::UnparsableDuration {
                text: request.duration_text.clone(),
            },
        )),
        Some(minutes) if !Talk::is_valid_duration(minutes) => {
            faults.push(Fault::from_validation(&ValidationError::InvalidDuration {
                minutes,
            }));
        }
        Some(_) => {}
    }

    match (minutes, faults.is_empty()) {
        // the factory re-validates; both checks above already passed
        (Some(minutes), true) => Talk::new(request.title.as_str(), minutes)
            .map_err(|error| vec![Fault::from_validation(&error)]),
        _ => Err(faults),
    }
}

/// Validates the request and places the resulting talk.
pub fn submit(schedule: &mut Schedule, request: &TalkRequest) -> Result<Placement, Vec<Fault>> {
    let talk = validate(request)?;
    schedule.schedule_talk(talk).map_err(|error| {
        vec![Fault {
            message: error.to_string(),
            code: FaultCode::Talk,
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DayPart;

    fn request(title: &str, duration_text: &str) -> TalkRequest {
        TalkRequest {
            title: title.to_string(),
            duration_text: duration_text.to_string(),
        }
    }

    #[test]
    fn validation_produces_the_talk_on_success() {
        let talk = validate(&request("Overview of Rust", "45")).unwrap();
        assert_eq!(talk.title(), "Overview of Rust");
        assert_eq!(talk.duration_minutes(), 45);
    }

    #[test]
    fn a_digit_in_the_title_is_a_single_title_fault() {
        let faults = validate(&request("Talk 101", "45")).unwrap_err();
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].code, FaultCode::TalkTitle);
    }

    #[test]
    fn a_non_numeric_duration_is_a_single_length_fault() {
        let faults = validate(&request("Intro", "abc")).unwrap_err();
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].code, FaultCode::LengthOfTalk);
    }

    #[test]
    fn both_fields_invalid_yields_both_faults_title_first() {
        let faults = validate(&request("Talk 101", "abc")).unwrap_err();
        assert_eq!(faults.len(), 2);
        assert_eq!(faults[0].code, FaultCode::TalkTitle);
        assert_eq!(faults[1].code, FaultCode::LengthOfTalk);
    }

    #[test]
    fn a_numeric_out_of_range_duration_is_a_single_length_fault() {
        for text in ["120", "0", "4", "61"] {
            let faults = validate(&request("Intro", text)).unwrap_err();
            assert_eq!(faults.len(), 1, "expected one fault for {text:?}");
            assert_eq!(faults[0].code, FaultCode::LengthOfTalk);
        }
    }

    #[test]
    fn duration_text_is_trimmed_before_parsing() {
        let talk = validate(&request("Intro", " 45 ")).unwrap();
        assert_eq!(talk.duration_minutes(), 45);
    }

    #[test]
    fn a_valid_submission_is_scheduled() {
        let mut schedule = Schedule::new();
        let placement = submit(&mut schedule, &request("Overview of Rust", "45")).unwrap();

        assert_eq!(placement.track_index, 0);
        assert_eq!(placement.day_part, DayPart::Morning);

        let talks = schedule.tracks()[0].session(DayPart::Morning).unwrap().talks();
        assert_eq!(talks.len(), 1);
        assert_eq!(talks[0].title(), "Overview of Rust");
    }

    #[test]
    fn fault_codes_render_their_field_paths() {
        assert_eq!(FaultCode::TalkTitle.as_str(), "userInput.TalkTitle");
        assert_eq!(FaultCode::LengthOfTalk.as_str(), "userInput.LengthOfTalk");
        assert_eq!(FaultCode::Talk.to_string(), "Talk");
    }

    #[test]
    fn faults_serialize_with_field_path_codes() {
        let faults = validate(&request("Talk 101", "abc")).unwrap_err();
        let json = serde_json::to_value(&faults).unwrap();
        assert_eq!(json[0]["code"], "userInput.TalkTitle");
        assert_eq!(json[1]["code"], "userInput.LengthOfTalk");
    }
}
