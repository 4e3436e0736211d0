//! CSV input parsing
//!
//! Two input shapes are supported:
//! - the class-teacher mapping, encoded as pairs of CSV rows
//! - the block timetable, one `Class ...` block per class

mod classteachers;
mod timetable;

pub use classteachers::{load_classteachers, load_classteachers_str};
pub use timetable::{parse_timetable, parse_timetable_str, BLOCK_MARKER};

/// Spreadsheet tools often save CSV with a UTF-8 byte order mark; it would
/// otherwise stick to the first field.
fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}
