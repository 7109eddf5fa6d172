use clap::{ArgAction, Parser};

use crate::aws::RegionOrEndpoint;

#[derive(Parser, Debug)]
#[command(rename_all = "kebab-case", about, version)]
pub struct Opts {
    /// The AWS region to list metrics in.
    ///
    /// When not set, the region is resolved from the environment and the
    /// shared AWS configuration, the same way credentials are.
    #[arg(long)]
    pub region: Option<String>,

    /// Custom endpoint for use with AWS-compatible services.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Reduce detail of internal logging. Repeat to reduce further. Each
    /// occurrence raises the threshold (warnings, then errors, then off).
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Enable more detailed internal logging. Repeat to increase further.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Opts {
    pub const fn log_level(&self) -> &'static str {
        match self.quiet {
            0 => match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            },
            1 => "warn",
            2 => "error",
            _ => "off",
        }
    }

    pub fn region_or_endpoint(&self) -> RegionOrEndpoint {
        match (&self.region, &self.endpoint) {
            (Some(region), Some(endpoint)) => RegionOrEndpoint::with_both(region, endpoint),
            (Some(region), None) => RegionOrEndpoint::with_region(region.clone()),
            (None, Some(endpoint)) => RegionOrEndpoint::with_endpoint(endpoint),
            (None, None) => RegionOrEndpoint::default(),
        }
    }
}
