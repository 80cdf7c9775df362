//! CSV output formatting for analysis results.

use crate::models::{AnalysisResult, CidrRange};

use super::terminal::format_field;

/// Column header line.
pub const CSV_HEADER: &str = r#""kind","cidr","start","end","size","detail","category""#;

/// Build the CSV rows, one per entry, gap and overlap.
///
/// # Arguments
/// * `result` - The analysis to render
pub fn csv_rows(result: &AnalysisResult) -> Vec<String> {
    let mut rows = Vec::new();

    for cidr in result.valid_cidrs.iter().chain(result.invalid_cidrs.iter()) {
        rows.push(cidr_csv_row(cidr));
    }

    for gap in &result.gaps {
        rows.push(csv_row(
            "gap",
            &gap.suggested_cidr,
            &gap.start_ip,
            &gap.end_ip,
            gap.size,
            "suggested",
            "",
        ));
    }

    for overlap in &result.overlaps {
        rows.push(csv_row(
            "overlap",
            &overlap.cidr1,
            &overlap.cidr2,
            &overlap.intersection,
            0,
            &overlap.kind.to_string(),
            "",
        ));
    }

    rows
}

/// Print the analysis as CSV to stdout.
pub fn print_csv(result: &AnalysisResult) {
    log::info!(
        "#Start print_csv() {} valid, {} gap(s)",
        result.valid_cidrs.len(),
        result.gaps.len()
    );
    println!("{CSV_HEADER}");
    for row in csv_rows(result) {
        println!("{row}");
    }
}

/// One CSV row for a single entry, valid or not.
pub fn cidr_csv_row(cidr: &CidrRange) -> String {
    let category = cidr.category.map(|c| c.to_string()).unwrap_or_default();
    if cidr.valid {
        csv_row(
            "valid",
            &cidr.original,
            &cidr.network,
            &cidr.broadcast,
            cidr.total_ips,
            &cidr.mask,
            &category,
        )
    } else {
        csv_row(
            "invalid",
            &cidr.original,
            "",
            "",
            0,
            cidr.error_msg.as_deref().unwrap_or(""),
            &category,
        )
    }
}

/// Quote one field, doubling embedded quotes.
fn escape(value: &str) -> String {
    value.replace('"', "\"\"")
}

fn csv_row(
    kind: &str,
    cidr: &str,
    start: &str,
    end: &str,
    size: u64,
    detail: &str,
    category: &str,
) -> String {
    format!(
        "{kind},{cidr},{start},{end},{size},{detail},{category}",
        kind = format_field(kind, 9),
        cidr = format_field(escape(cidr), 20),
        start = format_field(escape(start), 17),
        end = format_field(escape(end), 20),
        size = format_field(size, 12),
        detail = format_field(escape(detail), 17),
        category = format_field(category, 8),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;
    use crate::models::AnalysisRequest;

    #[test]
    fn test_csv_rows() {
        let request = AnalysisRequest {
            vpc_cidrs: vec!["10.0.0.0/16".to_string()],
            cidrs: vec![
                "10.0.1.0/24".to_string(),
                "10.2.0.0/16".to_string(),
                "bad\"cidr".to_string(),
            ],
            ..Default::default()
        };
        let result = crate::analyze(&request, &AnalyzerConfig::default());
        let rows = csv_rows(&result);

        // 3 valid, 1 invalid, 1 gap, 1 overlap
        assert_eq!(rows.len(), 6);
        assert!(rows[0].contains("\"valid\""));
        assert!(rows[0].ends_with("\"vpc\""), "{}", rows[0]);
        assert!(rows[3].contains("\"invalid\""));
        assert!(rows[3].contains("\"bad\"\"cidr\""), "{}", rows[3]);
        assert!(rows[4].contains("\"10.1.0.0/16\""), "{}", rows[4]);
        assert!(rows[5].contains("\"partial\""), "{}", rows[5]);
    }

    #[test]
    fn test_cidr_csv_row_single_entry() {
        let row = cidr_csv_row(&crate::validate_cidr("192.168.1.0/30"));
        assert!(row.trim_start().starts_with("\"valid\""), "{row}");
        assert!(row.contains("\"192.168.1.3\""), "{row}");
        assert!(row.contains("\"255.255.255.252\""), "{row}");
        assert_eq!(row.split(',').count(), CSV_HEADER.split(',').count());

        let row = cidr_csv_row(&crate::validate_cidr("nope"));
        assert!(row.trim_start().starts_with("\"invalid\""), "{row}");
    }

    #[test]
    fn test_csv_header_columns() {
        assert_eq!(CSV_HEADER.split(',').count(), 7);
    }
}
