//! The interactive three-option menu owning the process-lifetime schedule.

use std::io::{BufRead, Write};

use anyhow::Result;

use ctm_core::Schedule;

use crate::commands::{add, schedule};
use crate::ui;

/// Runs the menu loop until the user exits or input ends.
///
/// Unknown choices simply re-prompt; the schedule starts empty and lives
/// exactly as long as this loop.
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    let mut conference = Schedule::new();
    loop {
        write_choices(out)?;
        let Some(choice) = ui::read_line(input)? else {
            break;
        };
        match choice.trim() {
            "1" => add::run(input, out, &mut conference)?,
            "2" => schedule::run(out, &conference)?,
            "3" => break,
            _ => {}
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_choices<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Please choose one of the options:")?;
    writeln!(out, "1 - Add a new Talk.")?;
    writeln!(out, "2 - See the conference schedule.")?;
    writeln!(out, "3 - Exit conference scheduler")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use insta::assert_snapshot;

    fn run_session(script: &str) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run(&mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn add_view_exit_transcript() {
        let output = run_session("1\nWriting Fast Tests\n45\n2\n3\n");

        assert_snapshot!(output, @r"
        Please choose one of the options:
        1 - Add a new Talk.
        2 - See the conference schedule.
        3 - Exit conference scheduler

        Please enter the talk title
        Please enter the duration/length of the talk

        ** The talk has been scheduled successfully!! **

        Please choose one of the options:
        1 - Add a new Talk.
        2 - See the conference schedule.
        3 - Exit conference scheduler

        ***********************************************************************
        Track 1 :
        ***********************************************************************
        -------------------------
        Session Morning :
        -------------------------
        Writing Fast Tests : 45 mins
        -------------------------
        Session Afternoon :
        -------------------------

        Please choose one of the options:
        1 - Add a new Talk.
        2 - See the conference schedule.
        3 - Exit conference scheduler
        ");
    }

    #[test]
    fn unknown_choices_reprompt() {
        let output = run_session("9\n3\n");
        assert_eq!(output.matches("Please choose one of the options:").count(), 2);
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let output = run_session("");
        assert_eq!(output.matches("Please choose one of the options:").count(), 1);
    }

    #[test]
    fn the_schedule_survives_between_menu_visits() {
        let output = run_session("1\nOwnership\n30\n1\nBorrowing\n30\n2\n3\n");
        assert!(output.contains("Ownership : 30 mins"));
        assert!(output.contains("Borrowing : 30 mins"));
        assert_eq!(output.matches("Track 1 :").count(), 1);
    }
}
