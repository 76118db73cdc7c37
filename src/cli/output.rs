//! Colored terminal output helpers.
//!
//! All user-facing messages go through these functions so we get
//! consistent styling across every command.  JSON documents are printed
//! straight to stdout by the commands themselves.

use chrono::{DateTime, Utc};
use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::response::SecretDetail;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a two-column table (Field, Value) for one secret detail.
///
/// The payload is never shown, only whether one is attached.
pub fn print_detail_table(detail: &SecretDetail) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);

    let version = detail
        .version()
        .map_or_else(|| "-".to_string(), |v| v.to_string());
    let metadata = if detail.metadata().is_empty() {
        "-".to_string()
    } else {
        detail
            .metadata()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let expiry = if detail.expiry() == 0 {
        "never".to_string()
    } else {
        format_seconds(detail.expiry())
    };

    let rows = [
        ("Name", detail.name().to_string()),
        ("Version", version),
        ("Description", detail.description().to_string()),
        ("Checksum", detail.checksum().to_string()),
        ("Created", format_seconds(detail.created_at_seconds())),
        ("Created by", detail.created_by().to_string()),
        ("Updated", format_seconds(detail.updated_at_seconds())),
        ("Updated by", detail.updated_by().to_string()),
        ("Type", detail.content_type().unwrap_or("-").to_string()),
        ("Metadata", metadata),
        ("Expiry", expiry),
        (
            "Content",
            if detail.content().is_some() { "attached" } else { "-" }.to_string(),
        ),
    ];

    for (field, value) in rows {
        table.add_row(vec![field.to_string(), value]);
    }

    println!("{table}");
}

/// Render epoch seconds as a UTC timestamp, falling back to the raw number.
fn format_seconds(seconds: i64) -> String {
    DateTime::<Utc>::from_timestamp(seconds, 0).map_or_else(
        || seconds.to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_seconds_renders_utc() {
        assert_eq!(format_seconds(1_364_505_784), "2013-03-28 21:23:04");
    }

    #[test]
    fn format_seconds_falls_back_when_out_of_range() {
        assert_eq!(format_seconds(i64::MAX), i64::MAX.to_string());
    }
}
