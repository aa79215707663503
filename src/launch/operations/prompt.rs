//! Interactive questions on the terminal

use std::io::{self, BufRead, Write};

pub trait Prompt {
    /// Show `question` and return the raw line typed back
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// Asks on stdout, reads from stdin
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", question)?;
        stdout.flush()?;

        read_answer(&mut io::stdin().lock())
    }
}

/// One line from `reader`. A closed input is an error, not an empty answer
fn read_answer(reader: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before an answer was given",
        ));
    }
    Ok(line)
}
