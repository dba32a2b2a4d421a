//! Rendering the conference schedule.

use std::io::Write;

use anyhow::Result;

use ctm_core::Schedule;

use crate::ui;

/// Writes every track with its sessions and talks in schedule order.
pub fn run<W: Write>(out: &mut W, schedule: &Schedule) -> Result<()> {
    if schedule.tracks().is_empty() {
        writeln!(out, "No talks have been scheduled yet.")?;
        return Ok(());
    }

    for (number, track) in schedule.tracks().iter().enumerate() {
        if number > 0 {
            writeln!(out)?;
        }
        ui::write_main_header(out, &format!("Track {} :", number + 1))?;
        for session in track.sessions() {
            ui::write_sub_header(out, &format!("Session {} :", session.day_part()))?;
            for talk in session.talks() {
                writeln!(out, "{} : {} mins", talk.title(), talk.duration_minutes())?;
            }
        }
    }
    Ok(())
}
