//! Plain text rendering of the metric report.

use std::io::{self, Write};

use crate::metrics::Metric;

/// Writes one block per metric in input order, then the total count.
///
/// The format is fixed: a `Metrics:` header, each metric's name and
/// namespace, its dimensions as `key: value` lines, and a trailing
/// `Found N metrics` summary. No sorting, no deduplication.
pub fn render<W: Write>(metrics: &[Metric], out: &mut W) -> io::Result<()> {
    writeln!(out, "Metrics:")?;

    for metric in metrics {
        writeln!(out, "   Metric Name: {}", metric.name)?;
        writeln!(out, "   Namespace:   {}", metric.namespace)?;
        writeln!(out, "   Dimensions:")?;
        for dimension in &metric.dimensions {
            writeln!(out, "      {}: {}", dimension.name, dimension.value)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Found {} metrics", metrics.len())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use similar_asserts::assert_eq;

    use super::render;
    use crate::metrics::{Dimension, Metric};

    fn rendered(metrics: &[Metric]) -> String {
        let mut out = Vec::new();
        render(metrics, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_collection_renders_header_and_zero_count() {
        assert_eq!(
            rendered(&[]),
            indoc! {"
                Metrics:
                Found 0 metrics
            "}
        );
    }

    #[test]
    fn metric_without_dimensions_keeps_the_dimensions_line() {
        let metrics = [Metric {
            name: "CPUUtilization".into(),
            namespace: "AWS/EC2".into(),
            dimensions: Vec::new(),
        }];

        assert_eq!(
            rendered(&metrics),
            indoc! {"
                Metrics:
                   Metric Name: CPUUtilization
                   Namespace:   AWS/EC2
                   Dimensions:

                Found 1 metrics
            "}
        );
    }

    #[test]
    fn dimensions_render_in_input_order() {
        let metrics = [Metric {
            name: "RequestCount".into(),
            namespace: "AWS/ApplicationELB".into(),
            dimensions: vec![
                Dimension::new("env", "prod"),
                Dimension::new("region", "us-east-1"),
            ],
        }];

        assert_eq!(
            rendered(&metrics),
            indoc! {"
                Metrics:
                   Metric Name: RequestCount
                   Namespace:   AWS/ApplicationELB
                   Dimensions:
                      env: prod
                      region: us-east-1

                Found 1 metrics
            "}
        );
    }

    #[test]
    fn count_line_matches_number_of_blocks_in_input_order() {
        let metrics: Vec<Metric> = (0..4)
            .map(|i| Metric {
                name: format!("metric-{i}"),
                namespace: "test".into(),
                dimensions: Vec::new(),
            })
            .collect();

        let report = rendered(&metrics);
        assert_eq!(report.matches("   Metric Name: ").count(), 4);
        assert!(report.ends_with("Found 4 metrics\n"));
        assert!(report.find("metric-0").unwrap() < report.find("metric-3").unwrap());
    }
}
