use anyhow::Result;

use crate::line::Line;

pub mod tty;

pub trait Source {
    fn get_line(&mut self) -> Result<Option<Line>>;
}

// Replays canned lines in place of a terminal.
#[cfg(test)]
pub struct BufferSource {
    lines: Vec<String>,
    line_num: usize,
}

#[cfg(test)]
impl BufferSource {
    pub fn build_source(lines: &[&str]) -> Box<dyn Source> {
        let lines = lines.iter().map(|line| line.to_string()).collect();

        Box::new(BufferSource { lines, line_num: 0 })
    }
}

#[cfg(test)]
impl Source for BufferSource {
    fn get_line(&mut self) -> Result<Option<Line>> {
        if self.line_num == self.lines.len() {
            return Ok(None);
        }

        let text = self.lines[self.line_num].clone();
        self.line_num += 1;

        Ok(Some(Line::new(text, self.line_num)))
    }
}
