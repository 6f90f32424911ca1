use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParseError {
    EmptyCommand,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyCommand => write!(f, "Empty command"),
        }
    }
}

impl std::error::Error for ParseError {}

// A parsed command: the program to run and the arguments handed to it.
// Only parse() builds these, so a Command always came from a nonempty line.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Command {
    program: String,
    arguments: Vec<String>,
}

impl Command {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

// Splits on single ASCII spaces. Consecutive spaces yield empty tokens,
// and a trailing space yields none; tabs are ordinary token text.
pub fn parse(input: &str) -> Result<Command, ParseError> {
    let mut tokens = Vec::<String>::new();
    let mut token_start = 0;

    for (i, ch) in input.char_indices() {
        if ch == ' ' {
            tokens.push(input[token_start..i].to_string());
            token_start = i + 1;
        }
    }

    if token_start < input.len() {
        tokens.push(input[token_start..].to_string());
    }

    let mut tokens = tokens.into_iter();

    match tokens.next() {
        Some(program) => Ok(Command {
            program,
            arguments: tokens.collect(),
        }),
        None => Err(ParseError::EmptyCommand),
    }
}

// One physical line as read from a source, without its trailing newline.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Line {
    text: String,
    line_num: usize,
}

impl Line {
    pub fn new(mut text: String, line_num: usize) -> Line {
        while text.ends_with('\n') {
            text.pop();
        }

        Line { text, line_num }
    }

    pub fn parse(&self) -> Result<Command, ParseError> {
        parse(&self.text)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_num, self.text)
    }
}
