pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{execute, init_logging, render, run};
