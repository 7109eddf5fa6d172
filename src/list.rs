//! The metrics lister: fetch every metric identity the service reports and
//! print them as a text report.

use std::io::{self, Write};

use async_trait::async_trait;
use aws_sdk_cloudwatch::Client as CloudwatchClient;
use aws_types::SdkConfig;
use snafu::Snafu;

use crate::aws::{create_client, ClientBuilder, RegionOrEndpoint};
use crate::cli::Opts;
use crate::metrics::Metric;
use crate::report;

/// The fixed line written to stdout when the listing cannot be produced.
const FAILURE_MESSAGE: &str = "Could not get metrics";

/// The one failure kind of the listing call. Auth, network, throttling and
/// service faults are deliberately not told apart.
#[derive(Debug, Snafu)]
pub enum ListError {
    #[snafu(display("could not get metrics: {cause}"))]
    RequestFailed { cause: crate::Error },
}

/// A capability that yields the metric identities known to a monitoring
/// service. The CloudWatch client sits behind this seam so tests can
/// substitute a fixed list without credentials or network access.
#[async_trait]
pub trait MetricsSource {
    async fn list_metrics(&self) -> Result<Vec<Metric>, ListError>;
}

struct CloudwatchClientBuilder;

impl ClientBuilder for CloudwatchClientBuilder {
    type Client = CloudwatchClient;

    fn build(config: &SdkConfig) -> Self::Client {
        CloudwatchClient::new(config)
    }
}

/// The real listing backend over an authenticated CloudWatch client.
pub struct CloudwatchSource {
    client: CloudwatchClient,
}

impl CloudwatchSource {
    pub const fn new(client: CloudwatchClient) -> Self {
        Self { client }
    }

    pub async fn from_ambient_config(
        region_or_endpoint: &RegionOrEndpoint,
    ) -> crate::Result<Self> {
        let client = create_client::<CloudwatchClientBuilder>(region_or_endpoint).await?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl MetricsSource for CloudwatchSource {
    async fn list_metrics(&self) -> Result<Vec<Metric>, ListError> {
        // One unfiltered request. The response's pagination token is
        // ignored; only the single default page is reported.
        let output = self
            .client
            .list_metrics()
            .send()
            .await
            .map_err(|error| ListError::RequestFailed {
                cause: Box::new(error),
            })?;

        Ok(output
            .metrics
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

/// Entry point for the command: build the client from ambient
/// configuration, list, render to stdout.
pub async fn cmd(opts: &Opts) -> exitcode::ExitCode {
    let mut out = io::stdout();

    match CloudwatchSource::from_ambient_config(&opts.region_or_endpoint()).await {
        Ok(source) => run(&source, &mut out).await,
        Err(error) => {
            error!(message = "Client construction failed.", %error);
            if writeln!(out, "{FAILURE_MESSAGE}").is_err() {
                return exitcode::IOERR;
            }
            exitcode::UNAVAILABLE
        }
    }
}

/// Drives one list-and-render pass against `source`, writing either the
/// report or the fixed failure line to `out`.
pub async fn run<S, W>(source: &S, out: &mut W) -> exitcode::ExitCode
where
    S: MetricsSource,
    W: Write,
{
    match source.list_metrics().await {
        Ok(metrics) => match report::render(&metrics, out) {
            Ok(()) => exitcode::OK,
            Err(error) => {
                error!(message = "Could not write the report.", %error);
                exitcode::IOERR
            }
        },
        Err(error) => {
            error!(message = "Listing metrics failed.", %error);
            if writeln!(out, "{FAILURE_MESSAGE}").is_err() {
                return exitcode::IOERR;
            }
            exitcode::UNAVAILABLE
        }
    }
}
