use anyhow::Result;

use crate::line::Command;
use crate::shell::Shell;

pub type Builtin = fn(&mut Shell, &Command) -> Result<()>;

// Any arguments are ignored; `exit now` still exits.
pub fn exit(mish: &mut Shell, _command: &Command) -> Result<()> {
    println!("exiting!");
    mish.stop();

    Ok(())
}
