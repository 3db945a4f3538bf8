//! Run configuration: resolved paths and install command detection

pub mod install;
pub mod layout;

pub use install::detect_install_command;
pub use layout::ProjectLayout;
