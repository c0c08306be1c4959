//! Date and time formatting for the history viewer and footers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Current local time, falling back to UTC when the offset is unknown.
#[must_use]
pub fn now_local() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Parse a backend timestamp into local wall-clock time.
///
/// RFC 3339 values are shifted to the local offset; naive values
/// (`2025-06-25 18:11:47.543`, `2025-06-25T18:11`) are taken as local already.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
        let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
        let local = at.to_offset(offset);
        return Some(PrimitiveDateTime::new(local.date(), local.time()));
    }
    let naive = raw.replacen('T', " ", 1);
    PrimitiveDateTime::parse(&naive, format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"))
        .or_else(|_| PrimitiveDateTime::parse(&naive, format_description!("[year]-[month]-[day] [hour]:[minute]:[second]")))
        .or_else(|_| {
            let head: String = naive.chars().take(16).collect();
            PrimitiveDateTime::parse(&head, format_description!("[year]-[month]-[day] [hour]:[minute]"))
        })
        .ok()
}

/// `25 Jun 2025, 18:11`; unparseable input is returned unchanged.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .and_then(|at| at.format(format_description!("[day] [month repr:short] [year], [hour]:[minute]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Like [`format_timestamp`], with `—` for a missing or blank value.
#[must_use]
pub fn format_optional_timestamp(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => format_timestamp(value),
        _ => "—".to_owned(),
    }
}

/// Fallback export name, `history_YYYYMMDD_HHMMSS.csv`.
#[must_use]
pub fn export_filename(at: OffsetDateTime) -> String {
    format!(
        "history_{:04}{:02}{:02}_{:02}{:02}{:02}.csv",
        at.year(),
        u8::from(at.month()),
        at.day(),
        at.hour(),
        at.minute(),
        at.second()
    )
}

/// Footer copyright line.
#[must_use]
pub fn copyright(year: i32) -> String {
    format!("© {year} PayNest. All rights reserved.")
}
