//! Upcoming ex-dividend report text format.
//!
//! ```text
//! Date: Monday, Jan 8
//! KO, Coca-Cola Co, $0.46, 2.9%, Quarterly, Jan 15
//! XOM, Exxon Mobil, $0.95, 3.4%, Quarterly, Jan 19
//! ```
//!
//! Readers only rely on the first comma field of each row line.

use std::fmt::Write;

use crate::domain::{ExDateGroup, Ticker};

const DATE_PREFIX: &str = "Date:";

/// Serialize groups as a grouped plain-text report.
#[must_use]
pub fn format_report(groups: &[ExDateGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{DATE_PREFIX} {}", one_line(&group.label));
        for row in &group.rows {
            let fields: Vec<String> = row.fields().into_iter().map(one_line).collect();
            let _ = writeln!(out, "{}", fields.join(", "));
        }
    }
    out
}

/// Collapse runs of whitespace, line breaks included, to single spaces.
fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Ticker symbols from a report, in file order.
///
/// Header lines and blank lines are ignored, as are rows whose first field
/// is empty.
#[must_use]
pub fn extract_tickers(text: &str) -> Vec<Ticker> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(DATE_PREFIX))
        .filter_map(|line| line.split(',').next())
        .map(Ticker::new)
        .filter(|ticker| !ticker.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExDateRow;

    fn groups() -> Vec<ExDateGroup> {
        vec![
            ExDateGroup::new(
                "Monday, Jan 8",
                vec![
                    ExDateRow::new("KO", "Coca-Cola Co", "$0.46", ["2.9%", "Quarterly", "Jan 15"]),
                    ExDateRow::new("XOM", "Exxon Mobil", "$0.95", ["3.4%", "Quarterly", "Jan 19"]),
                ],
            ),
            ExDateGroup::new(
                "Tuesday, Jan 9",
                vec![ExDateRow::new("GE", "General Electric", "$0.08", ["0.5%", "Quarterly", "Jan 25"])],
            ),
        ]
    }

    #[test]
    fn formats_header_then_rows() {
        let text = format_report(&groups());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Date: Monday, Jan 8");
        assert_eq!(lines[1], "KO, Coca-Cola Co, $0.46, 2.9%, Quarterly, Jan 15");
        assert_eq!(lines[3], "Date: Tuesday, Jan 9");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn tickers_survive_a_round_trip() {
        let groups = groups();
        let expected: Vec<Ticker> = groups
            .iter()
            .flat_map(|g| g.rows.iter().map(ExDateRow::ticker))
            .collect();

        assert_eq!(extract_tickers(&format_report(&groups)), expected);
    }

    #[test]
    fn empty_groups_produce_headers_only() {
        let text = format_report(&[ExDateGroup::new("Friday", vec![])]);
        assert_eq!(text, "Date: Friday\n");
        assert!(extract_tickers(&text).is_empty());
    }

    #[test]
    fn extract_skips_blank_lines() {
        let text = "Date: x\n\n  AAPL , Apple\n,missing\n";
        assert_eq!(extract_tickers(text), vec![Ticker::new("AAPL")]);
    }

    #[test]
    fn multiline_label_stays_a_single_header() {
        let groups = vec![ExDateGroup::new(
            "Monday\nJan 8",
            vec![ExDateRow::new("KO", "Coca-Cola\r\nCo", "$0.46", ["2.9%", "Quarterly", "Jan 15"])],
        )];

        let text = format_report(&groups);

        assert_eq!(
            text,
            "Date: Monday Jan 8\nKO, Coca-Cola Co, $0.46, 2.9%, Quarterly, Jan 15\n"
        );
        assert_eq!(extract_tickers(&text), vec![Ticker::new("KO")]);
    }
}
