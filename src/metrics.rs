//! The transient metric identity model produced by the listing call.

/// A key/value pair narrowing a metric's identity.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

impl Dimension {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A named, namespaced metric identity as reported by the monitoring
/// service. Held only long enough to render the report.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Metric {
    pub name: String,
    pub namespace: String,
    pub dimensions: Vec<Dimension>,
}

impl From<aws_sdk_cloudwatch::types::Metric> for Metric {
    fn from(metric: aws_sdk_cloudwatch::types::Metric) -> Self {
        // Every field is optional on the wire; missing parts render as the
        // empty string rather than being dropped.
        let dimensions = metric
            .dimensions()
            .iter()
            .map(|dimension| Dimension {
                name: dimension.name().unwrap_or_default().to_owned(),
                value: dimension.value().unwrap_or_default().to_owned(),
            })
            .collect();

        Self {
            name: metric.metric_name().unwrap_or_default().to_owned(),
            namespace: metric.namespace().unwrap_or_default().to_owned(),
            dimensions,
        }
    }
}
