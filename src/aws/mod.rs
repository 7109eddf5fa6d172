//! Construction of AWS service clients from ambient configuration.

pub mod region;

use std::time::Duration;

use aws_config::{
    default_provider::credentials::DefaultCredentialsChain, meta::region::ProvideRegion,
    retry::RetryConfig, BehaviorVersion,
};
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_types::{region::Region, SdkConfig};
pub use region::RegionOrEndpoint;

// Matches the default load timeout from the SDK, but lets us document the
// value rather than relying on the SDK default to not change.
const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(5);

pub trait ClientBuilder {
    type Client;

    fn build(config: &SdkConfig) -> Self::Client;
}

pub async fn resolve_region(region: Option<Region>) -> crate::Result<Region> {
    match region {
        Some(region) => Ok(region),
        None => aws_config::default_provider::region::default_provider()
            .region()
            .await
            .ok_or_else(|| {
                "Could not determine region from the command line or default providers".into()
            }),
    }
}

/// Builds a service client authenticated purely through ambient discovery:
/// shared config and credentials files, environment variables, or IMDS.
/// Explicit credentials are not accepted anywhere.
pub async fn create_client<T: ClientBuilder>(
    region_or_endpoint: &RegionOrEndpoint,
) -> crate::Result<T::Client> {
    // The default credentials chain would look for a region on its own, but
    // we'd rather error up front than have the later SDK call fail due to
    // missing region configuration.
    let region = resolve_region(region_or_endpoint.region()).await?;

    let credentials_provider =
        SharedCredentialsProvider::new(default_credentials_provider(region.clone()).await);

    let mut config_loader = aws_config::defaults(BehaviorVersion::latest())
        .credentials_provider(credentials_provider)
        .region(region)
        .retry_config(RetryConfig::disabled());

    if let Some(endpoint) = region_or_endpoint.endpoint() {
        config_loader = config_loader.endpoint_url(endpoint);
    }

    let config = config_loader.load().await;

    Ok(T::build(&config))
}

async fn default_credentials_provider(region: Region) -> DefaultCredentialsChain {
    DefaultCredentialsChain::builder()
        .region(region)
        .load_timeout(DEFAULT_LOAD_TIMEOUT)
        .build()
        .await
}
