//! Cubefield viewer
//!
//! Opens a window, fills a cubic world with objects and lets the user walk
//! through it. Only the objects near the camera are drawn each frame.

mod app;
mod cli;
mod config;

use std::process::ExitCode;
use clap::Parser;
use cubefield_engine::cubefield::log::LogSeverity;
use cubefield_engine::cubefield::Engine;
use cubefield_engine::engine_error;
use crate::cli::Cli;
use crate::config::ViewerConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.verbose {
        Engine::set_min_severity(LogSeverity::Debug);
    }

    let config = match ViewerConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            engine_error!("cubefield::Viewer", "{}", err);
            return ExitCode::FAILURE;
        }
    };

    // Run errors are logged where they are raised
    match app::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
