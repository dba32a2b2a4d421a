//! Prompting for and submitting a new talk.

use std::io::{BufRead, Write};

use anyhow::Result;

use ctm_core::{Schedule, TalkRequest};

use crate::ui;

/// Asks for the talk details, submits them, and reports the outcome:
/// a success banner, or one `Message : ` / `Code : ` pair per fault.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    schedule: &mut Schedule,
) -> Result<()> {
    writeln!(out, "Please enter the talk title")?;
    let title = ui::read_line(input)?.unwrap_or_default();
    writeln!(out, "Please enter the duration/length of the talk")?;
    let duration_text = ui::read_line(input)?.unwrap_or_default();

    let request = TalkRequest {
        title,
        duration_text,
    };
    match ctm_core::submit(schedule, &request) {
        Ok(placement) => {
            tracing::debug!(
                track = placement.track_index + 1,
                day_part = %placement.day_part,
                "talk scheduled"
            );
            writeln!(out)?;
            writeln!(out, "** The talk has been scheduled successfully!! **")?;
        }
        Err(faults) => {
            writeln!(out)?;
            writeln!(out, "** There has been some error!! **")?;
            for fault in &faults {
                writeln!(out, "Message : {}", fault.message)?;
                writeln!(out, "Code : {}", fault.code)?;
            }
        }
    }
    Ok(())
}
