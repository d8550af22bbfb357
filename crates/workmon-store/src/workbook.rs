//! Workbook read/write primitives for the backing table.
//!
//! All cells are written and read as strings; the first row is the fixed
//! column header.

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

use workmon_commons::errors::{Result, StoreError};
use workmon_commons::models::{ProjectRecord, PROJECT_COLUMNS};

/// Worksheet the table lives on.
pub const SHEET_NAME: &str = "Projects";

/// Write the full table: header row plus one row per record, in order.
pub fn write_table(path: &Path, records: &[ProjectRecord]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(workbook_err)?;

    let header_format = Format::new().set_bold();
    for (col, name) in PROJECT_COLUMNS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *name, &header_format)
            .map_err(workbook_err)?;
    }

    for (row, record) in records.iter().enumerate() {
        for (col, cell) in record.to_row().iter().enumerate() {
            worksheet
                .write_string((row + 1) as u32, col as u16, *cell)
                .map_err(workbook_err)?;
        }
    }

    workbook.save(path).map_err(workbook_err)?;
    Ok(())
}

/// Read the full table back, skipping the header row.
pub fn read_table(path: &Path) -> Result<Vec<ProjectRecord>> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(workbook_err)?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(workbook_err)?,
        None => return Ok(Vec::new()),
    };

    let mut records = Vec::new();
    for row in range.rows().skip(1) {
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        if cells.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        records.push(ProjectRecord::from_row(&cells));
    }
    Ok(records)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        other => other.to_string(),
    }
}

fn workbook_err(err: impl std::fmt::Display) -> StoreError {
    StoreError::Workbook(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use workmon_commons::models::NewProject;

    fn record(id: &str, title: &str) -> ProjectRecord {
        NewProject {
            id: Some(id.to_string()),
            title: Some(title.to_string()),
            link: Some(format!("https://www.workana.com/job/{}", id)),
            ..NewProject::default()
        }
        .into_record()
    }

    #[test]
    fn header_only_table_reads_back_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.xlsx");
        write_table(&path, &[]).unwrap();
        assert!(read_table(&path).unwrap().is_empty());
    }

    #[test]
    fn rows_roundtrip_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.xlsx");
        let records = vec![record("p1", "First"), record("p2", "Second")];
        write_table(&path, &records).unwrap();

        let loaded = read_table(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "p1");
        assert_eq!(loaded[1].id, "p2");
        assert_eq!(loaded[1].title, "Second");
        assert_eq!(loaded[0].source, "workana");
    }

    #[test]
    fn missing_file_is_a_workbook_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.xlsx");
        assert!(read_table(&path).is_err());
    }
}
