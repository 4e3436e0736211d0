//! Class Timetable - school timetable CSV to Excel workbook
//!
//! Reads two hand-maintained CSV files and produces one worksheet per class:
//!
//! - `Classteachers.csv`: class → (subject, teacher) of its home-room teacher
//! - `Alright.csv`: every class's weekly timetable, one `Class ...` block each
//!
//! Period 1 of every day is set to the class teacher, and the other period
//! cells are rewritten as `Subject\nTeacher` where the text allows it.
//!
//! # Example
//!
//! ```no_run
//! use class_timetable::core::merge_class_teachers;
//! use class_timetable::excel::ExcelExporter;
//! use class_timetable::parser::{load_classteachers, parse_timetable};
//! use std::path::Path;
//!
//! let class_teachers = load_classteachers(Path::new("Classteachers.csv"))?;
//! let timetables = parse_timetable(Path::new("Alright.csv"))?;
//!
//! let merged = merge_class_teachers(&timetables, &class_teachers);
//! let sheets = ExcelExporter::new(merged).export(Path::new("New_Class_Timetable.xlsx"))?;
//!
//! println!("Sheets: {}", sheets.len());
//! # Ok::<(), class_timetable::error::TimetableError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod parser;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use error::{TimetableError, TimetableResult};
pub use types::{ClassTeacher, ClassTeacherMap, ClassTimetable, TimetableRow, Timetables};
