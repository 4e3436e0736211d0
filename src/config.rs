//! Input and output locations
//!
//! The generator has no flags or config file: it always reads and writes the
//! same three file names, relative to a base directory (the working directory
//! for the binary).

use std::path::{Path, PathBuf};

pub const CLASSTEACHERS_FILE: &str = "Classteachers.csv";
pub const TIMETABLE_FILE: &str = "Alright.csv";
pub const OUTPUT_FILE: &str = "New_Class_Timetable.xlsx";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Pairwise class-teacher mapping CSV
    pub classteachers: PathBuf,
    /// Block timetable CSV
    pub timetable: PathBuf,
    /// Workbook to create (replaced if present)
    pub output: PathBuf,
}

impl PipelineConfig {
    /// The fixed file names, resolved against `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            classteachers: dir.join(CLASSTEACHERS_FILE),
            timetable: dir.join(TIMETABLE_FILE),
            output: dir.join(OUTPUT_FILE),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            classteachers: PathBuf::from(CLASSTEACHERS_FILE),
            timetable: PathBuf::from(TIMETABLE_FILE),
            output: PathBuf::from(OUTPUT_FILE),
        }
    }
}
