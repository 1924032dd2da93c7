//! Text report
//!
//! Scalar statistics followed by one histogram row per bucket.

use std::{io, path::Path};

use crate::analysis::Analysis;

/// Width of the longest histogram bar in characters
const BAR_WIDTH: usize = 40;

pub(super) fn write_report<W>(w: &mut W, source: &Path, analysis: &Analysis) -> io::Result<()>
where
    W: io::Write,
{
    let stats = &analysis.stats;

    writeln!(w, "Data Sample Analysis ({})", source.display())?;
    writeln!(w, "==========================================")?;
    writeln!(w)?;
    writeln!(w, "Values: {}", stats.count)?;
    writeln!(w, "Mean: {:.3}", stats.mean)?;
    writeln!(
        w,
        "Population Standard Deviation: {:.3}",
        stats.population_std_dev
    )?;
    writeln!(w, "Sample Standard Deviation: {:.3}", stats.sample_std_dev)?;
    writeln!(w)?;

    write_histogram(w, analysis)
}

fn write_histogram<W>(w: &mut W, analysis: &Analysis) -> io::Result<()>
where
    W: io::Write,
{
    let histogram = &analysis.histogram;
    let max_count = histogram.buckets.iter().map(|b| b.count).max().unwrap_or(0);

    writeln!(
        w,
        "Histogram (bucket width {}, {} of {} values counted)",
        analysis.spec.bucket_width(),
        histogram.total(),
        analysis.stats.count
    )?;
    writeln!(w, "  {:<20} {:>8}  Frequency", "Sample", "Count")?;
    writeln!(w, "  {}", "-".repeat(31 + BAR_WIDTH))?;

    for bucket in &histogram.buckets {
        writeln!(
            w,
            "  {:<20} {:>8}  {}",
            bucket.label(),
            bucket.count,
            bar(bucket.count, max_count)
        )?;
    }

    Ok(())
}

#[expect(clippy::cast_possible_truncation)]
fn bar(count: u64, max_count: u64) -> String {
    if max_count == 0 {
        return String::new();
    }
    // round up so that non-empty buckets stay visible
    let len = (count * BAR_WIDTH as u64).div_ceil(max_count);
    "#".repeat(len as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;

    #[test]
    fn test_bar() {
        assert_eq!(bar(0, 0), "");
        assert_eq!(bar(0, 10), "");
        assert_eq!(bar(10, 10).len(), 40);
        assert_eq!(bar(5, 10).len(), 20);
        assert_eq!(bar(1, 1000).len(), 1);
    }

    #[test]
    fn test_write_report() {
        let values = (1..=10).map(f64::from).collect();
        let config = AnalysisConfig {
            max_data_value: 20.0,
            bucket_width: 5.0,
            ..AnalysisConfig::default()
        };
        let analysis = Analysis::run(values, &config).unwrap();

        let mut buf = Vec::new();
        write_report(&mut buf, Path::new("data.csv"), &analysis).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("Data Sample Analysis (data.csv)\n"));
        assert!(text.contains("Mean: 5.500\n"));
        assert!(text.contains("Population Standard Deviation: 2.872\n"));
        assert!(text.contains("Sample Standard Deviation: 3.028\n"));
        assert!(text.contains("Histogram (bucket width 5, 10 of 10 values counted)\n"));

        let rows = text
            .lines()
            .filter(|line| line.trim_start().starts_with(|c: char| c.is_ascii_digit()))
            .collect::<Vec<_>>();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].trim_start().starts_with("0 < 5"));
        assert!(rows[0].contains(&format!("{:>8}", 4)));
        assert!(rows[1].trim_start().starts_with("5 < 10"));
        assert!(rows[2].trim_start().starts_with("10 < 15"));
        assert_eq!(rows[0].matches('#').count(), 32);
        assert_eq!(rows[2].matches('#').count(), 8);
        assert_eq!(rows[3].matches('#').count(), 0);
    }
}
