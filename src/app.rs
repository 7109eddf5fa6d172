use std::io::IsTerminal;

use clap::Parser;
use tokio::runtime;

use crate::cli::Opts;
use crate::{list, trace};

pub struct Application;

impl Application {
    /// Parses the command line and drives one listing to completion.
    pub fn run() -> exitcode::ExitCode {
        let opts = Opts::parse();
        Self::run_with(opts)
    }

    pub fn run_with(opts: Opts) -> exitcode::ExitCode {
        let level = std::env::var("LOG").unwrap_or_else(|_| opts.log_level().to_string());
        let color = std::io::stderr().is_terminal();
        trace::init(color, &level);

        // The SDK is async; the program itself is a single linear pass, so a
        // current-thread runtime blocked on the one command future is enough.
        let runtime = runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("unable to create async runtime");

        runtime.block_on(list::cmd(&opts))
    }
}
