use super::strip_bom;
use crate::error::{TimetableError, TimetableResult};
use crate::types::{ClassTeacher, ClassTeacherMap};
use csv::StringRecord;
use std::path::Path;
use tracing::{debug, info, warn};

/// Header row plus one filler row precede the first class pair
const SKIPPED_ROWS: usize = 2;

/// Load the class-teacher mapping from a CSV file.
///
/// After the two leading rows the file is read in pairs:
///
/// ```text
/// 10A,Math        <- class name, subject
/// ,Ms. Lee        <- (ignored), teacher
/// ```
///
/// A class listed twice keeps its last pair.
pub fn load_classteachers(path: &Path) -> TimetableResult<ClassTeacherMap> {
    let content = std::fs::read_to_string(path)?;
    load_classteachers_str(&content)
}

/// Same as [`load_classteachers`], over in-memory CSV text
pub fn load_classteachers_str(content: &str) -> TimetableResult<ClassTeacherMap> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(strip_bom(content).as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            TimetableError::Format(format!("Invalid class-teacher CSV: {}", e))
        })?;
        rows.push(record);
    }

    if rows.len() <= SKIPPED_ROWS {
        return Err(TimetableError::Format(format!(
            "Class-teacher file has no class rows after the {} header rows",
            SKIPPED_ROWS
        )));
    }

    let pair_rows = rows.len() - SKIPPED_ROWS;
    if pair_rows % 2 != 0 {
        return Err(TimetableError::Format(format!(
            "Class-teacher rows must come in pairs, found {} rows after the header (row {} has no teacher row)",
            pair_rows,
            rows.len()
        )));
    }

    let mut mapping = ClassTeacherMap::new();
    let mut i = SKIPPED_ROWS;
    while i + 1 < rows.len() {
        let class_name = field(&rows[i], 0, i)?;
        let subject = field(&rows[i], 1, i)?;
        let teacher = field(&rows[i + 1], 1, i + 1)?;

        debug!(class = class_name, subject, teacher, "Class teacher row");
        let previous = mapping.insert(
            class_name.to_string(),
            ClassTeacher::new(subject, teacher),
        );
        if previous.is_some() {
            warn!(class = class_name, "Class listed twice; keeping the later entry");
        }

        i += 2;
    }

    info!(count = mapping.len(), "Loaded class teachers");
    Ok(mapping)
}

/// Trimmed field `idx` of `record`; `row` is the 0-based row index for messages
fn field(record: &StringRecord, idx: usize, row: usize) -> TimetableResult<&str> {
    record.get(idx).map(str::trim).ok_or_else(|| {
        TimetableError::Format(format!(
            "Class-teacher row {} has {} field(s), expected at least {}",
            row + 1,
            record.len(),
            idx + 1
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "Class,Class Teacher\n,\n";

    #[test]
    fn test_single_pair() {
        let csv = format!("{}10A,Math\n,Ms. Lee\n", HEADER);
        let mapping = load_classteachers_str(&csv).unwrap();

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping["10A"], ClassTeacher::new("Math", "Ms. Lee"));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let csv = format!("{}  10A , Math \n, Ms. Lee  \n", HEADER);
        let mapping = load_classteachers_str(&csv).unwrap();

        assert_eq!(mapping["10A"], ClassTeacher::new("Math", "Ms. Lee"));
    }

    #[test]
    fn test_entry_count_is_half_the_pair_rows() {
        let csv = format!(
            "{}10A,Math\n,Ms. Lee\n10B,Physics\n,Mr. Rao\n11C,English\n,Mrs. Gupta\n",
            HEADER
        );
        let mapping = load_classteachers_str(&csv).unwrap();

        assert_eq!(mapping.len(), 3);
        let names: Vec<&str> = mapping.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["10A", "10B", "11C"]);
    }

    #[test]
    fn test_duplicate_class_last_write_wins() {
        let csv = format!("{}10A,Math\n,Ms. Lee\n10A,Art\n,Mr. Das\n", HEADER);
        let mapping = load_classteachers_str(&csv).unwrap();

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping["10A"], ClassTeacher::new("Art", "Mr. Das"));
    }

    #[test]
    fn test_quoted_fields() {
        let csv = format!("{}\"10A, East\",\"Math, Advanced\"\n,\"Lee, M.\"\n", HEADER);
        let mapping = load_classteachers_str(&csv).unwrap();

        assert_eq!(
            mapping["10A, East"],
            ClassTeacher::new("Math, Advanced", "Lee, M.")
        );
    }

    #[test]
    fn test_trailing_lone_row_fails() {
        let csv = format!("{}10A,Math\n,Ms. Lee\n10B,Physics\n", HEADER);
        let err = load_classteachers_str(&csv).unwrap_err();

        assert!(matches!(err, TimetableError::Format(_)));
        assert!(err.to_string().contains("pairs"));
    }

    #[test]
    fn test_no_pairs_fails() {
        let err = load_classteachers_str(HEADER).unwrap_err();
        assert!(matches!(err, TimetableError::Format(_)));
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(load_classteachers_str("").is_err());
    }

    #[test]
    fn test_teacher_row_missing_second_field_fails() {
        let csv = format!("{}10A,Math\nMs. Lee\n", HEADER);
        let err = load_classteachers_str(&csv).unwrap_err();

        assert!(err.to_string().contains("row 4"));
    }

    #[test]
    fn test_bom_is_ignored() {
        let csv = format!("\u{feff}{}10A,Math\n,Ms. Lee\n", HEADER);
        let mapping = load_classteachers_str(&csv).unwrap();

        assert!(mapping.contains_key("10A"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_classteachers(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, TimetableError::Io(_)));
    }
}
