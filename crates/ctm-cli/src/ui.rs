//! Console helpers shared by the menu and its commands.

use std::io::{BufRead, Write};

const MAIN_RULE: &str = "***********************************************************************";
const SUB_RULE: &str = "-------------------------";

/// Reads one line with its trailing newline stripped; `None` on end of
/// input. Interior and leading whitespace is kept — validation decides
/// what to make of it.
pub fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Writes a banner line framed by the starred rule.
pub fn write_main_header<W: Write>(out: &mut W, header: &str) -> std::io::Result<()> {
    writeln!(out, "{MAIN_RULE}")?;
    writeln!(out, "{header}")?;
    writeln!(out, "{MAIN_RULE}")
}

/// Writes a banner line framed by the dashed rule.
pub fn write_sub_header<W: Write>(out: &mut W, header: &str) -> std::io::Result<()> {
    writeln!(out, "{SUB_RULE}")?;
    writeln!(out, "{header}")?;
    writeln!(out, "{SUB_RULE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    #[test]
    fn read_line_strips_only_the_line_ending() {
        let mut input = Cursor::new(" spaced title \r\n");
        let line = read_line(&mut input).unwrap();
        assert_eq!(line.as_deref(), Some(" spaced title "));
    }

    #[test]
    fn read_line_reports_end_of_input() {
        let mut input = Cursor::new("");
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn headers_frame_their_text() {
        let mut output = Vec::new();
        write_main_header(&mut output, "Track 1 :").unwrap();
        write_sub_header(&mut output, "Session Morning :").unwrap();

        let output = String::from_utf8(output).unwrap();
        insta::assert_snapshot!(output, @r"
        ***********************************************************************
        Track 1 :
        ***********************************************************************
        -------------------------
        Session Morning :
        -------------------------
        ");
    }
}
