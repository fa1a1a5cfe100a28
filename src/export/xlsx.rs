use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};

use super::table::{Cell, ReportTable};
use crate::error::ReportError;

impl From<XlsxError> for ReportError {
    fn from(e: XlsxError) -> Self {
        ReportError::ExportFailed(e.to_string())
    }
}

/// Render a table as a single-sheet workbook with a styled, frozen header row.
pub fn render_xlsx(table: &ReportTable) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(table.sheet)?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    for (col, heading) in table.header.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *heading, &header_format)?;
        worksheet.set_column_width(col as u16, column_width(table, col))?;
    }

    for (idx, row) in table.rows.iter().enumerate() {
        let row_num = (idx + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(value) => worksheet.write_string(row_num, col as u16, value)?,
                Cell::Number(value) => worksheet.write_number(row_num, col as u16, *value)?,
            };
        }
    }

    if !table.rows.is_empty() {
        let last_col = table.header.len().saturating_sub(1) as u16;
        worksheet.autofilter(0, 0, table.rows.len() as u32, last_col)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    Ok(workbook.save_to_buffer()?)
}

fn column_width(table: &ReportTable, col: usize) -> f64 {
    let widest = table
        .rows
        .iter()
        .filter_map(|row| row.get(col))
        .map(|cell| cell.text().chars().count())
        .chain(std::iter::once(table.header[col].len()))
        .max()
        .unwrap_or(8);
    (widest as f64 + 2.0).clamp(8.0, 40.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::table::ReportTable;
    use crate::model::employee;

    #[test]
    fn produces_zip_container() {
        let table = ReportTable::roster(&[employee::sample("E1", "Alice")]);
        let bytes = render_xlsx(&table).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn empty_roster_still_renders_header() {
        let table = ReportTable::roster(&[]);
        assert!(render_xlsx(&table).is_ok());
    }

    #[test]
    fn widths_follow_longest_cell() {
        let table = ReportTable::roster(&[employee::sample("E1", "A very long employee name indeed")]);
        assert_eq!(column_width(&table, 0), 34.0);
        assert_eq!(column_width(&table, 5), 8.0);
    }
}
