//! Excel exporter implementation

use crate::error::{TimetableError, TimetableResult};
use crate::types::{ClassTimetable, Timetables};
use indexmap::IndexMap;
use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Excel's limit on worksheet name length
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Worksheet name for a class: `-` and spaces become `_`, then cut to 31 characters
pub fn sheet_name_for(class_name: &str) -> String {
    class_name
        .replace(['-', ' '], "_")
        .chars()
        .take(MAX_SHEET_NAME_LEN)
        .collect()
}

/// Excel exporter for merged class timetables
pub struct ExcelExporter {
    timetables: Timetables,
}

impl ExcelExporter {
    /// Create a new Excel exporter
    pub fn new(timetables: Timetables) -> Self {
        Self { timetables }
    }

    /// Sheet names in export order.
    ///
    /// Fails when two classes end up with the same sheet name. Excel compares
    /// sheet names case-insensitively, so `10a` and `10A` collide.
    pub fn sheet_names(&self) -> TimetableResult<Vec<String>> {
        let mut owners: IndexMap<String, &str> = IndexMap::with_capacity(self.timetables.len());
        let mut names = Vec::with_capacity(self.timetables.len());

        for class_name in self.timetables.keys() {
            let sheet = sheet_name_for(class_name);
            let key = sheet.to_lowercase();
            if let Some(first) = owners.get(&key) {
                return Err(TimetableError::DuplicateSheetName {
                    sheet,
                    first: first.to_string(),
                    second: class_name.clone(),
                });
            }
            owners.insert(key, class_name);
            names.push(sheet);
        }

        Ok(names)
    }

    /// Export every timetable to an Excel .xlsx file.
    ///
    /// The workbook is built in memory and written through a temporary file in
    /// the destination directory, so a failed export never leaves a partial
    /// file at `output_path`. Returns the sheet names written.
    ///
    /// An empty timetable set is an error: a workbook needs at least one sheet.
    pub fn export(&self, output_path: &Path) -> TimetableResult<Vec<String>> {
        if self.timetables.is_empty() {
            warn!(path = %output_path.display(), "No classes to export");
            return Err(TimetableError::Format(
                "No classes to export: no timetable class matched a class teacher".to_string(),
            ));
        }
        let sheet_names = self.sheet_names()?;

        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let cell_format = Format::new().set_text_wrap().set_align(FormatAlign::Top);

        for (sheet_name, table) in sheet_names.iter().zip(self.timetables.values()) {
            self.export_table(
                &mut workbook,
                sheet_name,
                table,
                &header_format,
                &cell_format,
            )?;
        }

        let buffer = workbook.save_to_buffer()?;
        write_atomically(output_path, &buffer)?;

        info!(
            sheets = sheet_names.len(),
            path = %output_path.display(),
            "Wrote workbook"
        );
        Ok(sheet_names)
    }

    /// Export a single class to a worksheet
    fn export_table(
        &self,
        workbook: &mut Workbook,
        sheet_name: &str,
        table: &ClassTimetable,
        header_format: &Format,
        cell_format: &Format,
    ) -> TimetableResult<()> {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_name).map_err(|e| {
            TimetableError::Export(format!("Invalid worksheet name '{}': {}", sheet_name, e))
        })?;

        // Header row (row 0): Day + period labels
        for (col_idx, label) in table.header().into_iter().enumerate() {
            worksheet.write_string_with_format(0, col_idx as u16, label, header_format)?;
        }

        // Data rows start at row 1; empty cells stay blank
        for (row_idx, row) in table.rows().iter().enumerate() {
            let excel_row = (row_idx + 1) as u32;
            worksheet.write_string(excel_row, 0, &row.day)?;

            for (period_idx, value) in row.cells.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                worksheet.write_string_with_format(
                    excel_row,
                    (period_idx + 1) as u16,
                    value,
                    cell_format,
                )?;
            }
        }

        worksheet.autofit();

        debug!(
            class = %table.class_name,
            sheet = sheet_name,
            rows = table.row_count(),
            "Exported worksheet"
        );
        Ok(())
    }
}

/// Write `bytes` to `output_path` via a sibling temp file + rename.
/// The temp file is deleted if anything fails before the rename.
fn write_atomically(output_path: &Path, bytes: &[u8]) -> TimetableResult<()> {
    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;
    staged.persist(output_path).map_err(|e| e.error)?;

    Ok(())
}
