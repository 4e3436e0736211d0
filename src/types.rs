use indexmap::IndexMap;

/// Label written above the day column of every exported sheet
pub const DAY_COLUMN: &str = "Day";

//==============================================================================
// Class-teacher mapping
//==============================================================================

/// Home-room assignment for one class: the subject and teacher that own period 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTeacher {
    pub subject: String,
    pub teacher: String,
}

impl ClassTeacher {
    pub fn new(subject: impl Into<String>, teacher: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            teacher: teacher.into(),
        }
    }

    /// Two-line cell text: subject on the first line, teacher on the second
    pub fn cell_value(&self) -> String {
        format!("{}\n{}", self.subject, self.teacher)
    }
}

/// Class name (trimmed) → class teacher, in first-seen order
pub type ClassTeacherMap = IndexMap<String, ClassTeacher>;

//==============================================================================
// Timetables
//==============================================================================

/// One day of a class's week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableRow {
    pub day: String,
    /// Period cells, aligned positionally with `ClassTimetable::periods`
    pub cells: Vec<String>,
}

impl TimetableRow {
    pub fn new(day: impl Into<String>, cells: Vec<String>) -> Self {
        Self {
            day: day.into(),
            cells,
        }
    }
}

/// A single class's weekly schedule.
///
/// Every row carries exactly `periods.len()` cells. Rows are only added
/// through [`ClassTimetable::push_row`], which enforces that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTimetable {
    pub class_name: String,
    pub periods: Vec<String>,
    rows: Vec<TimetableRow>,
}

impl ClassTimetable {
    pub fn new(class_name: impl Into<String>, periods: Vec<String>) -> Self {
        Self {
            class_name: class_name.into(),
            periods,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding missing trailing cells with empty strings.
    ///
    /// Returns the row back when it has more cells than there are periods.
    pub fn push_row(&mut self, mut row: TimetableRow) -> Result<(), TimetableRow> {
        if row.cells.len() > self.periods.len() {
            return Err(row);
        }
        row.cells.resize(self.periods.len(), String::new());
        self.rows.push(row);
        Ok(())
    }

    pub fn rows(&self) -> &[TimetableRow] {
        &self.rows
    }

    /// Mutable access to the cells of every row; row width cannot change through it
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut [String]> {
        self.rows.iter_mut().map(|row| row.cells.as_mut_slice())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    /// Header row as exported: the day column followed by the period labels
    pub fn header(&self) -> Vec<&str> {
        std::iter::once(DAY_COLUMN)
            .chain(self.periods.iter().map(String::as_str))
            .collect()
    }
}

/// Class name → timetable, in the order blocks appeared in the source file
pub type Timetables = IndexMap<String, ClassTimetable>;
