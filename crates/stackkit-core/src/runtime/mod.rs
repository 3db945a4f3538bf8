//! External process invocation
//!
//! Pre-create hooks and dependency installs run through here. They block the
//! run until finished; a non-zero exit is fatal.

pub mod command;

pub use command::{run_shell, CommandRunner, ShellRunner};
