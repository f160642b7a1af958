//! Interactive Snowflake decoder
//!
//! Reads one identifier per line from stdin until EOF, an empty line, or
//! "q"/"Q". Descriptions go to stdout, error messages to stderr, and the
//! prompt is re-displayed after every cycle. No error ends the session.

use std::io::{self, BufRead, Write};

use snowdec::{parse_line, Request, SnowflakeDecoder, INSTRUCTIONS};

fn main() -> io::Result<()> {
    let decoder = SnowflakeDecoder::default();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{INSTRUCTIONS}")?;
    for line in stdin.lock().lines() {
        match parse_line(&line?) {
            Ok(Request::Quit) => break,
            Ok(Request::Decode(raw)) => match decoder.validate(raw) {
                Ok(id) => {
                    let decoded = decoder.decode(id);
                    writeln!(stdout, "{}", decoded.description())?;
                }
                Err(e) => eprintln!("{e}"),
            },
            Err(e) => eprintln!("{e}"),
        }
        writeln!(stdout, "{INSTRUCTIONS}")?;
    }
    Ok(())
}
