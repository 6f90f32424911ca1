mod builtins;
mod config;
mod exec;
mod line;
mod shell;
mod sources;

use argh::FromArgs;
use log::LevelFilter;

use config::Config;
use shell::Shell;

/// A minimal interactive command shell.
#[derive(FromArgs)]
struct Options {
    /// log the process-management steps of every command
    #[argh(switch, short = 't')]
    trace: bool,
}

fn main() {
    let options: Options = argh::from_env();

    let level = if options.trace {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut mish = Shell::new(Config::new(options.trace));

    while let Err(e) = mish.run() {
        eprintln!("mish: {}", e);
    }
}
