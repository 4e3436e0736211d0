//! Class-teacher merge and cell normalization
//!
//! The first period of every day belongs to the class teacher. The remaining
//! period cells are rewritten into the two-line `Subject\nTeacher` form when
//! their text can be split unambiguously by the rules in [`normalize_cell`].

use crate::types::{ClassTeacher, ClassTeacherMap, ClassTimetable, Timetables};
use tracing::{debug, info, warn};

/// Cells ending with this are placeholders ("Chem Teacher"), not a subject/teacher pair
const TEACHER_SUFFIX: &str = " Teacher";

/// Build the output timetables.
///
/// Classes without a class teacher are dropped. For the rest, period 1 is
/// replaced by the class teacher's cell and later periods go through
/// [`normalize_cell`]. The inputs are left untouched.
pub fn merge_class_teachers(
    timetables: &Timetables,
    class_teachers: &ClassTeacherMap,
) -> Timetables {
    let mut merged = Timetables::with_capacity(timetables.len());

    for (class_name, table) in timetables {
        let Some(class_teacher) = class_teachers.get(class_name.trim()) else {
            warn!(class = %class_name, "No class teacher mapped; class dropped");
            continue;
        };

        let mut table = table.clone();
        apply_class_teacher(&mut table, class_teacher);
        debug!(class = %class_name, rows = table.row_count(), "Merged class teacher");
        merged.insert(class_name.clone(), table);
    }

    info!(
        classes = merged.len(),
        dropped = timetables.len() - merged.len(),
        "Merged class teachers"
    );
    merged
}

/// Names of classes present in `timetables` but absent from `merged`, in source order
pub fn dropped_classes(timetables: &Timetables, merged: &Timetables) -> Vec<String> {
    timetables
        .keys()
        .filter(|name| !merged.contains_key(*name))
        .cloned()
        .collect()
}

fn apply_class_teacher(table: &mut ClassTimetable, class_teacher: &ClassTeacher) {
    let first_period = class_teacher.cell_value();

    for cells in table.cells_mut() {
        let Some((first, later)) = cells.split_first_mut() else {
            continue;
        };
        *first = first_period.clone();
        for cell in later {
            *cell = normalize_cell(cell);
        }
    }
}

/// Normalize one period cell to `Subject\nTeacher` where possible.
///
/// - text with a line break: both halves around the first break are trimmed
/// - text with exactly one space, not ending in `" Teacher"`: split at that space
/// - anything else is returned unchanged
///
/// Multi-word subjects ("Social Studies Rao") have two spaces and stay as they are.
pub fn normalize_cell(value: &str) -> String {
    if let Some((subject, teacher)) = value.split_once('\n') {
        return format!("{}\n{}", subject.trim(), teacher.trim());
    }

    if value.matches(' ').count() == 1 && !value.ends_with(TEACHER_SUFFIX) {
        if let Some((subject, teacher)) = value.rsplit_once(' ') {
            return format!("{}\n{}", subject, teacher);
        }
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimetableRow;
    use pretty_assertions::assert_eq;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn table(class_name: &str, rows: &[(&str, &[&str])]) -> ClassTimetable {
        let width = rows.first().map(|(_, cells)| cells.len()).unwrap_or(0);
        let periods = (1..=width).map(|i| format!("Period{}", i)).collect();
        let mut table = ClassTimetable::new(class_name, periods);
        for (day, cells) in rows {
            table.push_row(TimetableRow::new(*day, strings(cells))).unwrap();
        }
        table
    }

    fn single(table: ClassTimetable) -> Timetables {
        let mut tables = Timetables::new();
        tables.insert(table.class_name.clone(), table);
        tables
    }

    fn mapping(class_name: &str, subject: &str, teacher: &str) -> ClassTeacherMap {
        let mut map = ClassTeacherMap::new();
        map.insert(class_name.to_string(), ClassTeacher::new(subject, teacher));
        map
    }

    #[test]
    fn test_normalize_single_space() {
        assert_eq!(normalize_cell("Phy Singh"), "Phy\nSingh");
    }

    #[test]
    fn test_normalize_teacher_suffix_unchanged() {
        assert_eq!(normalize_cell("Chem Teacher"), "Chem Teacher");
    }

    #[test]
    fn test_normalize_multi_word_unchanged() {
        assert_eq!(normalize_cell("Social Studies Rao"), "Social Studies Rao");
    }

    #[test]
    fn test_normalize_no_space_unchanged() {
        assert_eq!(normalize_cell("Library"), "Library");
        assert_eq!(normalize_cell(""), "");
    }

    #[test]
    fn test_normalize_line_break_trims_both_halves() {
        assert_eq!(normalize_cell("  Bio \n  Nair "), "Bio\nNair");
    }

    #[test]
    fn test_normalize_splits_on_first_line_break_only() {
        assert_eq!(normalize_cell("Bio\nNair\nLab"), "Bio\nNair\nLab");
        assert_eq!(normalize_cell("Bio \n Nair \n Lab "), "Bio\nNair \n Lab");
    }

    #[test]
    fn test_normalize_trailing_space() {
        assert_eq!(normalize_cell("Phy "), "Phy\n");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for value in [
            "Phy Singh",
            "Chem Teacher",
            "Social Studies Rao",
            " Bio \n Nair ",
            "Library",
            "",
        ] {
            let once = normalize_cell(value);
            assert_eq!(normalize_cell(&once), once, "value: {:?}", value);
        }
    }

    #[test]
    fn test_merge_scenario() {
        let tables = single(table("10A", &[("Mon", &["OldVal", "Phy Singh"])]));
        let merged = merge_class_teachers(&tables, &mapping("10A", "Math", "Ms. Lee"));

        assert_eq!(
            merged["10A"].rows()[0],
            TimetableRow::new("Mon", strings(&["Math\nMs. Lee", "Phy\nSingh"]))
        );
    }

    #[test]
    fn test_first_period_overwritten_on_every_row() {
        let tables = single(table(
            "10A",
            &[
                ("Mon", &["a", "x"]),
                ("Tue", &["", "y"]),
                ("Wed", &["Art\nDas", "z"]),
            ],
        ));
        let merged = merge_class_teachers(&tables, &mapping("10A", "Math", "Ms. Lee"));

        for row in merged["10A"].rows() {
            assert_eq!(row.cells[0], "Math\nMs. Lee");
        }
    }

    #[test]
    fn test_day_column_untouched() {
        let tables = single(table("10A", &[("Day One", &["a", "b"])]));
        let merged = merge_class_teachers(&tables, &mapping("10A", "Math", "Lee"));

        assert_eq!(merged["10A"].rows()[0].day, "Day One");
    }

    #[test]
    fn test_unmatched_class_dropped() {
        let mut tables = single(table("10A", &[("Mon", &["a"])]));
        tables.insert("11B".to_string(), table("11B", &[("Mon", &["b"])]));

        let merged = merge_class_teachers(&tables, &mapping("10A", "Math", "Lee"));

        assert_eq!(merged.len(), 1);
        assert!(!merged.contains_key("11B"));
        assert_eq!(dropped_classes(&tables, &merged), vec!["11B"]);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let tables = single(table("10A", &[("Mon", &["OldVal", "Phy Singh"])]));
        let before = tables.clone();

        let _ = merge_class_teachers(&tables, &mapping("10A", "Math", "Lee"));

        assert_eq!(tables, before);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let tables = single(table(
            "10A",
            &[("Mon", &["OldVal", "Phy Singh", "Chem Teacher", "Bio \n Nair"])],
        ));
        let map = mapping("10A", "Math", "Ms. Lee");

        let once = merge_class_teachers(&tables, &map);
        let twice = merge_class_teachers(&once, &map);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_table_without_periods_kept() {
        let mut tables = Timetables::new();
        let mut empty = ClassTimetable::new("10A", Vec::new());
        empty.push_row(TimetableRow::new("Mon", Vec::new())).unwrap();
        tables.insert("10A".to_string(), empty);

        let merged = merge_class_teachers(&tables, &mapping("10A", "Math", "Lee"));

        assert_eq!(merged["10A"].rows()[0].cells, Vec::<String>::new());
    }
}
