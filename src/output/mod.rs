//! Output formatting for analysis results.
//!
//! This module handles formatting and outputting results on the command line:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors

mod csv;
mod terminal;

pub use csv::{cidr_csv_row, csv_rows, print_csv, CSV_HEADER};
pub use terminal::{cidr_line, format_field, print_report, report_lines};
