use std::ffi::{CString, NulError};
use std::fmt;
use std::io::{self, Write};
use std::process;

use log::debug;
use nix::errno::Errno;
use nix::sys::signal::Signal;
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{execvp, fork, getpid, ForkResult};

use crate::config::Config;
use crate::line::Command;

mod guard;
use guard::InterruptGuard;

// Reported by the child when exec itself fails; reads as 255 to the parent.
const EXEC_FAILURE_STATUS: i32 = 255;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExitStatus {
    Exited(i32),
    Signaled(Signal),
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitStatus::Exited(code) => write!(f, "exit code {}", code),
            ExitStatus::Signaled(signal) => write!(f, "terminated by {}", signal),
        }
    }
}

#[derive(Debug)]
pub enum ExecutionError {
    NulInArgument(NulError),
    SpawnFailed(Errno),
    SignalSetup(Errno),
    WaitFailed(Errno),
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionError::NulInArgument(e) => {
                write!(f, "argument contains a nul byte at position {}", e.nul_position())
            }
            ExecutionError::SpawnFailed(errno) => {
                write!(f, "failed to spawn child process: {}", errno.desc())
            }
            ExecutionError::SignalSetup(errno) => {
                write!(f, "failed to set signal disposition: {}", errno.desc())
            }
            ExecutionError::WaitFailed(errno) => {
                write!(f, "failed to wait on child process: {}", errno.desc())
            }
        }
    }
}

impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExecutionError::NulInArgument(e) => Some(e),
            ExecutionError::SpawnFailed(errno)
            | ExecutionError::SignalSetup(errno)
            | ExecutionError::WaitFailed(errno) => Some(errno),
        }
    }
}

// Runs one external command at a time: fork, exec in the child,
// wait in the parent with SIGINT held off.
pub struct Executor {
    trace: bool,
}

impl Executor {
    pub fn new(config: &Config) -> Executor {
        Executor {
            trace: config.trace(),
        }
    }

    pub fn execute(&self, command: &Command) -> Result<ExitStatus, ExecutionError> {
        let argv = build_argv(command)?;

        if self.trace {
            debug!(
                "[{}] command is: program = {:?}, arguments = {:?}",
                getpid(),
                command.program(),
                command.arguments()
            );
        }

        match unsafe { fork() }.map_err(ExecutionError::SpawnFailed)? {
            ForkResult::Child => {
                if self.trace {
                    debug!("[{}] in child after fork()", getpid());
                }

                if let Err(errno) = execvp(&argv[0], &argv) {
                    println!("exec failed with error: {}", errno.desc());
                    let _ = io::stdout().flush();
                }

                process::exit(EXEC_FAILURE_STATUS);
            }
            ForkResult::Parent { child } => {
                if self.trace {
                    debug!("[{}] in parent after fork()", getpid());
                }

                // Taken after fork, so the child carries the default
                // disposition into exec
                let _guard = InterruptGuard::ignore().map_err(ExecutionError::SignalSetup)?;

                let status = loop {
                    match waitpid(child, None).map_err(ExecutionError::WaitFailed)? {
                        WaitStatus::Exited(_, code) => break ExitStatus::Exited(code),
                        WaitStatus::Signaled(_, signal, _) => break ExitStatus::Signaled(signal),
                        _ => continue,
                    }
                };

                if self.trace {
                    debug!("[{}] after wait(): {}", getpid(), status);
                }

                Ok(status)
            }
        }
    }
}

// The program doubles as argv[0], the convention exec'd programs expect.
fn build_argv(command: &Command) -> Result<Vec<CString>, ExecutionError> {
    let mut argv = Vec::with_capacity(command.arguments().len() + 1);

    argv.push(CString::new(command.program()).map_err(ExecutionError::NulInArgument)?);

    for argument in command.arguments() {
        argv.push(CString::new(argument.as_str()).map_err(ExecutionError::NulInArgument)?);
    }

    Ok(argv)
}

// The SIGINT disposition is process-global, and cargo test runs tests
// on parallel threads. Tests that fork or touch the disposition hold
// this lock for their duration.
#[cfg(test)]
pub(crate) static SIGINT_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
