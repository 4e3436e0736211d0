use super::strip_bom;
use crate::error::{TimetableError, TimetableResult};
use crate::types::{ClassTimetable, TimetableRow, Timetables};
use std::path::Path;
use tracing::{debug, info, warn};

/// Lines starting with this text open a new class block
pub const BLOCK_MARKER: &str = "Class";

/// Removed from the first header field to recover the class name
const PERIOD_WORD: &str = "Period";

/// A non-blank, trimmed input line with its 1-based line number
struct Line<'a> {
    number: usize,
    text: &'a str,
}

impl Line<'_> {
    fn is_block_marker(&self) -> bool {
        self.text.starts_with(BLOCK_MARKER)
    }
}

/// Parse a block-structured timetable CSV file.
///
/// Each class is laid out as:
///
/// ```text
/// Class Timetable 10A            <- block marker
/// 10A Period,1,2,3               <- class name + period labels
/// Mon,Math,Phy Singh,Chem Rao    <- one row per day
/// Tue,...
/// ```
///
/// Blank lines are ignored everywhere. Lines before the first marker are skipped.
pub fn parse_timetable(path: &Path) -> TimetableResult<Timetables> {
    let content = std::fs::read_to_string(path)?;
    parse_timetable_str(&content)
}

/// Same as [`parse_timetable`], over in-memory text
pub fn parse_timetable_str(content: &str) -> TimetableResult<Timetables> {
    let lines: Vec<Line> = strip_bom(content)
        .lines()
        .enumerate()
        .map(|(idx, text)| Line {
            number: idx + 1,
            text: text.trim(),
        })
        .filter(|line| !line.text.is_empty())
        .collect();

    let mut tables = Timetables::new();
    let mut i = 0;

    while i < lines.len() {
        if !lines[i].is_block_marker() {
            debug!(line = lines[i].number, "Skipping line outside a class block");
            i += 1;
            continue;
        }

        let header = lines.get(i + 1).ok_or_else(|| {
            TimetableError::Format(format!(
                "Line {}: class block has no header line",
                lines[i].number
            ))
        })?;
        let mut table = parse_header(header.text);

        let mut j = i + 2;
        while j < lines.len() && !lines[j].is_block_marker() {
            let row = parse_row(lines[j].text);
            if let Err(row) = table.push_row(row) {
                return Err(TimetableError::Format(format!(
                    "Line {}: row '{}' of class '{}' has {} period cells but the header defines {}",
                    lines[j].number,
                    row.day,
                    table.class_name,
                    row.cells.len(),
                    table.period_count()
                )));
            }
            j += 1;
        }

        debug!(
            class = %table.class_name,
            periods = table.period_count(),
            rows = table.row_count(),
            "Parsed class block"
        );
        if let Some(previous) = tables.insert(table.class_name.clone(), table) {
            warn!(class = %previous.class_name, "Class block appears twice; keeping the later one");
        }

        i = j;
    }

    info!(classes = tables.len(), "Parsed timetable");
    Ok(tables)
}

/// `"10A Period,1,2,3"` → class `10A` with periods `1`, `2`, `3`
fn parse_header(text: &str) -> ClassTimetable {
    let mut fields = text.split(',');
    let class_name = fields
        .next()
        .unwrap_or_default()
        .replace(PERIOD_WORD, "")
        .trim()
        .to_string();
    let periods = fields.map(str::to_string).collect();

    ClassTimetable::new(class_name, periods)
}

fn parse_row(text: &str) -> TimetableRow {
    let mut fields = text.split(',');
    let day = fields.next().unwrap_or_default();
    TimetableRow::new(day, fields.map(str::to_string).collect())
}
