use crate::decode::decode_words;
use crate::error::Result;
use crate::exponent::extract;
use crate::histogram::{build_histograms, HistogramSpec, Labels};
use crate::io::load_raw_bytes;
use crate::layout::FloatFormat;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Both exponent histograms of one input, labelled for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExponentReport {
    pub format: FloatFormat,
    pub source: String,
    pub normal_count: u64,
    pub used: HistogramSpec,
    pub full: HistogramSpec,
}

impl ExponentReport {
    /// Writes `exponent<TAB>count` lines for every integer exponent bin of
    /// `histogram`, with the title as a leading comment.
    pub fn write_table<W: Write>(histogram: &HistogramSpec, out: &mut W) -> io::Result<()> {
        for line in histogram.labels().title.lines() {
            writeln!(out, "# {}", line)?;
        }
        for (lo, hi, count) in histogram.bins() {
            // a bin of unit width holds exactly one integer exponent
            let exponent = if lo.fract() == 0.0 { lo } else { (lo + hi) / 2.0 };
            writeln!(out, "{}\t{}", exponent as i64, count)?;
        }
        Ok(())
    }
}

fn used_labels(format: FloatFormat, source: &str) -> Labels {
    Labels {
        title: format!(
            "Exponent Distribution (Used Range)\n{}, File: {}",
            format, source
        ),
        x_label: "Unbiased Exponent Value".to_string(),
        y_label: "Frequency".to_string(),
        x_limits: None,
    }
}

fn full_labels(format: FloatFormat) -> Labels {
    let layout = format.layout();
    Labels {
        title: format!("Exponent Distribution (Full Range)\n{}", format),
        x_label: "Unbiased Exponent Value (All Possible)".to_string(),
        y_label: "Frequency".to_string(),
        x_limits: Some((
            (layout.min_normal_exponent() - 1) as f64,
            (layout.max_normal_exponent() + 1) as f64,
        )),
    }
}

/// Runs the whole analysis over an in-memory buffer. `source` only names the
/// input in the labels.
pub fn analyze_bytes(bytes: &[u8], format: FloatFormat, source: &str) -> Result<ExponentReport> {
    let layout = format.layout();
    let words = decode_words(bytes, layout)?;
    debug!("decoded {} {} values", words.len(), format);

    let unbiased = extract(&words, layout)?;
    let (used, full) = build_histograms(&unbiased, layout)?;

    Ok(ExponentReport {
        format,
        source: source.to_string(),
        normal_count: unbiased.len() as u64,
        used: used.with_labels(used_labels(format, source)),
        full: full.with_labels(full_labels(format)),
    })
}

pub fn analyze_file(path: &Path, format: FloatFormat) -> Result<ExponentReport> {
    let bytes = load_raw_bytes(path)?;
    analyze_bytes(&bytes, format, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn f64_bytes(values: &[f64]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_ne_bytes()).collect_vec()
    }

    #[test]
    fn report_labels_name_format_and_source() {
        let report = analyze_bytes(&f64_bytes(&[1.0, 2.0]), FloatFormat::Float64, "data.bin").unwrap();
        assert_eq!(
            report.used.labels().title,
            "Exponent Distribution (Used Range)\nfloat64, File: data.bin"
        );
        assert_eq!(
            report.full.labels().title,
            "Exponent Distribution (Full Range)\nfloat64"
        );
        assert_eq!(report.full.labels().x_limits, Some((-1023.0, 1024.0)));
        assert_eq!(report.normal_count, 2);
    }

    #[test]
    fn table_lists_each_exponent() {
        let report =
            analyze_bytes(&f64_bytes(&[1.0, 2.0, 2.5, 0.0]), FloatFormat::Float64, "x").unwrap();
        let mut out = Vec::new();
        ExponentReport::write_table(&report.used, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "# Exponent Distribution (Used Range)\n# float64, File: x\n-1\t0\n0\t1\n1\t2\n"
        );
    }

    #[test]
    fn full_table_uses_bin_centres() {
        let report = analyze_bytes(&f64_bytes(&[4.0]), FloatFormat::Float64, "x").unwrap();
        let mut out = Vec::new();
        ExponentReport::write_table(&report.full, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rows = text.lines().filter(|l| !l.starts_with('#')).collect_vec();
        assert_eq!(rows.len(), 2046);
        assert_eq!(rows[0], "-1022\t0");
        assert!(rows.contains(&"2\t1"));
        assert_eq!(*rows.last().unwrap(), "1023\t0");
    }
}
