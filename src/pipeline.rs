//! load mapping → parse timetable → merge → export

use crate::config::PipelineConfig;
use crate::core::{dropped_classes, merge_class_teachers};
use crate::error::TimetableResult;
use crate::excel::ExcelExporter;
use crate::parser::{load_classteachers, parse_timetable};
use std::path::{Path, PathBuf};

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries in the class-teacher mapping
    pub class_teachers: usize,
    /// Class blocks found in the timetable
    pub parsed_classes: usize,
    /// Worksheets written, in workbook order
    pub sheets: Vec<String>,
    /// Timetable classes with no class teacher, left out of the workbook
    pub dropped_classes: Vec<String>,
    pub output: PathBuf,
}

/// Step notifications emitted by [`run_with_progress`], in pipeline order.
///
/// A `*Started` event is always sent before the step runs, so the last event
/// seen identifies the step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    LoadStarted(&'a Path),
    Loaded { class_teachers: usize },
    ParseStarted(&'a Path),
    Parsed { classes: usize },
    Merged { kept: usize, dropped: &'a [String] },
    ExportStarted(&'a Path),
}

/// Run the whole conversion. Nothing is written unless every step succeeds.
pub fn run(config: &PipelineConfig) -> TimetableResult<RunSummary> {
    run_with_progress(config, |_| {})
}

/// [`run`], reporting each step to `on_progress` as it happens
pub fn run_with_progress<F>(config: &PipelineConfig, mut on_progress: F) -> TimetableResult<RunSummary>
where
    F: FnMut(Progress<'_>),
{
    on_progress(Progress::LoadStarted(&config.classteachers));
    let class_teachers = load_classteachers(&config.classteachers)?;
    on_progress(Progress::Loaded {
        class_teachers: class_teachers.len(),
    });

    on_progress(Progress::ParseStarted(&config.timetable));
    let timetables = parse_timetable(&config.timetable)?;
    on_progress(Progress::Parsed {
        classes: timetables.len(),
    });

    let merged = merge_class_teachers(&timetables, &class_teachers);
    let dropped = dropped_classes(&timetables, &merged);
    on_progress(Progress::Merged {
        kept: merged.len(),
        dropped: &dropped,
    });

    on_progress(Progress::ExportStarted(&config.output));
    let sheets = ExcelExporter::new(merged).export(&config.output)?;

    Ok(RunSummary {
        class_teachers: class_teachers.len(),
        parsed_classes: timetables.len(),
        sheets,
        dropped_classes: dropped,
        output: config.output.clone(),
    })
}
