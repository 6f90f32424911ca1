use std::collections::HashMap;

use anyhow::Result;
use log::debug;

use crate::builtins::Builtin;
use crate::config::Config;
use crate::exec::Executor;
use crate::line::{Command, Line};
use crate::sources::{tty::Tty, Source};

mod state;
use state::State;

pub struct Shell {
    sources: Vec<Box<dyn Source>>,
    builtins: HashMap<&'static str, Builtin>,
    executor: Executor,
    state: State,
}

impl Shell {
    pub fn new(config: Config) -> Shell {
        Shell::with_source(config, Tty::build_source())
    }

    fn with_source(config: Config, source: Box<dyn Source>) -> Shell {
        let mut builtins = HashMap::<&'static str, Builtin>::new();
        builtins.insert("exit", crate::builtins::exit);

        Shell {
            sources: vec![source],
            builtins,
            executor: Executor::new(&config),
            state: State::new(),
        }
    }

    // One read-parse-execute pass per line. A parse or execution error
    // returns early; the caller decides whether the session goes on.
    pub fn run(&mut self) -> Result<()> {
        while let Some(line) = self.get_line()? {
            debug!("{}", line);

            let command = line.parse()?;
            self.execute(&command)?;

            if !self.state.is_running() {
                break;
            }
        }

        Ok(())
    }

    pub fn stop(&mut self) {
        self.state.stop();
    }

    fn get_line(&mut self) -> Result<Option<Line>> {
        if let Some(mut source) = self.sources.pop() {
            match source.get_line() {
                Ok(Some(line)) => {
                    self.sources.push(source);
                    Ok(Some(line))
                }
                Ok(None) => self.get_line(),
                Err(e) => {
                    self.sources.push(source);
                    Err(e)
                }
            }
        } else {
            Ok(None)
        }
    }

    fn execute(&mut self, command: &Command) -> Result<()> {
        if let Some(builtin) = self.builtins.get(command.program()).copied() {
            builtin(self, command)
        } else {
            self.executor.execute(command)?;

            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::exec::SIGINT_LOCK;
    use crate::sources::BufferSource;

    fn test_shell(lines: &[&str]) -> Shell {
        Shell::with_source(Config::default(), BufferSource::build_source(lines))
    }

    #[test]
    fn exit_ends_session_1() {
        let mut shell = test_shell(&["exit"]);

        shell.run().unwrap();

        assert!(!shell.state.is_running());
    }

    #[test]
    fn exit_ends_session_2() {
        // Arguments to exit are ignored
        let mut shell = test_shell(&["exit now"]);

        shell.run().unwrap();

        assert!(!shell.state.is_running());
    }

    #[test]
    fn exit_stops_before_later_lines_1() {
        // The empty line after exit would fail to parse; run() must
        // never reach it
        let mut shell = test_shell(&["exit", ""]);

        shell.run().unwrap();

        assert!(!shell.state.is_running());
    }

    #[test]
    fn session_survives_parse_error_1() {
        let mut shell = test_shell(&["", "exit"]);

        let e = shell.run().unwrap_err();
        assert_eq!("Empty command", e.to_string());

        // Running again picks the session back up at the next line
        shell.run().unwrap();
        assert!(!shell.state.is_running());
    }

    #[test]
    fn run_executes_external_commands_1() {
        let _lock = SIGINT_LOCK.lock().unwrap();

        let mut shell = test_shell(&["echo hello", "true", "exit"]);

        shell.run().unwrap();

        assert!(!shell.state.is_running());
    }

    #[test]
    fn run_ends_at_eof_1() {
        let mut shell = test_shell(&[]);

        shell.run().unwrap();

        // EOF ends the loop without the exit builtin
        assert!(shell.state.is_running());
    }
}
