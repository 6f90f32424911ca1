use std::io::{self, Stdin, Write};

use anyhow::Result;

use super::Source;
use crate::line::Line;

const PROMPT: &str = "> ";

pub struct Tty {
    stdin: Stdin,
    line_num: usize,
}

impl Tty {
    pub fn build_source() -> Box<dyn Source> {
        let stdin = io::stdin();

        Box::new(Tty { stdin, line_num: 0 })
    }
}

impl Source for Tty {
    fn get_line(&mut self) -> Result<Option<Line>> {
        let mut buffer = String::new();

        print!("{}", PROMPT);
        io::stdout().flush()?;

        let num_bytes_read = self.stdin.read_line(&mut buffer)?;

        if num_bytes_read == 0 {
            Ok(None) // EOF was found
        } else {
            self.line_num += 1;

            Ok(Some(Line::new(buffer, self.line_num)))
        }
    }
}
