//! mysql-stdin-load
//!
//! Streams standard input into a MySQL table through a single
//! `LOAD DATA LOCAL INFILE` statement, so a pipeline can bulk-load data
//! without staging it in a temporary file.
//!
//! # Behavior
//!
//! - One connection, one statement, no retries and no persistent state
//! - The payload is relayed byte-for-byte from stdin to the server
//! - The statement text and the server's status summary go to stdout;
//!   diagnostics go to stderr
//! - Exit code 0 on success, non-zero on any failure

mod config;
mod db;
mod error;
mod stream;

use std::process;

use clap::Parser;
use log::error;

use config::LoadConfig;

fn main() {
    // Initialize logger
    env_logger::init();

    // clap routes help to stdout and parse diagnostics to stderr. Help exits
    // non-zero like every other no-load path, so both share the failure exit
    // instead of clap's own exit codes.
    let config = match LoadConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    if let Err(e) = db::run_load(&config) {
        error!("{e}");
        eprintln!("{e}");
        process::exit(1);
    }
}
