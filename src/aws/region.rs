use aws_types::region::Region;

/// Connection-target overrides taken from the command line. Anything left
/// unset falls back to the ambient AWS configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionOrEndpoint {
    pub region: Option<String>,
    pub endpoint: Option<String>,
}

impl RegionOrEndpoint {
    pub const fn with_region(region: String) -> Self {
        Self {
            region: Some(region),
            endpoint: None,
        }
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            region: None,
            endpoint: Some(endpoint.into()),
        }
    }

    pub fn with_both(region: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            endpoint: Some(endpoint.into()),
        }
    }

    pub fn region(&self) -> Option<Region> {
        self.region.clone().map(Region::new)
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::RegionOrEndpoint;

    #[test]
    fn accessors_cover_all_combinations() {
        let both = RegionOrEndpoint::with_both("us-west-2", "http://localhost:4566");
        assert_eq!(both.region().unwrap().as_ref(), "us-west-2");
        assert_eq!(both.endpoint(), Some("http://localhost:4566"));

        let region_only = RegionOrEndpoint::with_region("ap-southeast-2".to_string());
        assert_eq!(region_only.region().unwrap().as_ref(), "ap-southeast-2");
        assert_eq!(region_only.endpoint(), None);

        let endpoint_only = RegionOrEndpoint::with_endpoint("http://localhost:4566");
        assert!(endpoint_only.region().is_none());

        let ambient = RegionOrEndpoint::default();
        assert!(ambient.region().is_none());
        assert!(ambient.endpoint().is_none());
    }
}
