//! Excel export: one worksheet per class timetable

mod exporter;

pub use exporter::{sheet_name_for, ExcelExporter, MAX_SHEET_NAME_LEN};
