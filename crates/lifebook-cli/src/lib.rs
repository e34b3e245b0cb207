mod args;
mod commands;
mod handlers;
mod ui;

pub use args::{Cli, Commands, DestinyCommand, FontCommand, SortCommand};
pub use commands::run;
