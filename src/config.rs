// Runtime options handed to the shell at construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    trace: bool,
}

impl Config {
    pub fn new(trace: bool) -> Self {
        Config { trace }
    }

    pub fn trace(&self) -> bool {
        self.trace
    }
}
