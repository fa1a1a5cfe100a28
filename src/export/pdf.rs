use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};

use super::table::{Cell, ReportTable};
use crate::error::ReportError;

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 40;
const TITLE_SIZE: i64 = 16;
const BODY_SIZE: i64 = 10;
const ROW_HEIGHT: i64 = 18;
const TABLE_TOP: i64 = PAGE_HEIGHT - MARGIN - 30;

/// Render a table as an A4 PDF: title on the first page, header repeated on
/// every page, body rows flowing onto as many pages as needed.
pub fn render_pdf(table: &ReportTable) -> Result<Vec<u8>, ReportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
            "F2" => bold_id,
        },
    });

    let rows_per_page = ((TABLE_TOP - MARGIN) / ROW_HEIGHT - 1).max(1) as usize;
    let mut chunks: Vec<&[Vec<Cell>]> = table.rows.chunks(rows_per_page).collect();
    if chunks.is_empty() {
        chunks.push(&[]);
    }

    let mut kids: Vec<Object> = Vec::with_capacity(chunks.len());
    for (index, chunk) in chunks.iter().enumerate() {
        let content = page_content(table, chunk, index == 0);
        let encoded = content
            .encode()
            .map_err(|e| ReportError::ExportFailed(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(count),
            "Resources" => resources_id,
            "MediaBox" => media_box(),
        }),
    );
    let catalog_id: ObjectId = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| ReportError::ExportFailed(e.to_string()))?;
    Ok(out)
}

fn media_box() -> Vec<Object> {
    [0, 0, PAGE_WIDTH, PAGE_HEIGHT]
        .into_iter()
        .map(Object::Integer)
        .collect()
}

fn page_content(table: &ReportTable, rows: &[Vec<Cell>], first: bool) -> Content {
    let mut ops = Vec::new();
    let columns = table.header.len().max(1) as i64;
    let column_width = (PAGE_WIDTH - 2 * MARGIN) / columns;
    let max_chars = (column_width * 2 / BODY_SIZE).max(4) as usize;

    if first {
        text(&mut ops, "F1", TITLE_SIZE, MARGIN, PAGE_HEIGHT - MARGIN, &table.title);
    }

    let mut y = TABLE_TOP;
    for (col, heading) in table.header.iter().enumerate() {
        text(&mut ops, "F2", BODY_SIZE, MARGIN + col as i64 * column_width, y, heading);
    }
    rule(&mut ops, y - 5);

    for row in rows {
        y -= ROW_HEIGHT;
        for (col, cell) in row.iter().enumerate() {
            let value = fit(&cell.text(), max_chars);
            text(&mut ops, "F1", BODY_SIZE, MARGIN + col as i64 * column_width, y, &value);
        }
    }

    Content { operations: ops }
}

fn text(ops: &mut Vec<Operation>, font: &str, size: i64, x: i64, y: i64, value: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![Object::Name(font.as_bytes().to_vec()), Object::Integer(size)],
    ));
    ops.push(Operation::new("Td", vec![Object::Integer(x), Object::Integer(y)]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(win_ansi(value), StringFormat::Literal)],
    ));
    ops.push(Operation::new("ET", vec![]));
}

fn rule(ops: &mut Vec<Operation>, y: i64) {
    ops.push(Operation::new("m", vec![Object::Integer(MARGIN), Object::Integer(y)]));
    ops.push(Operation::new(
        "l",
        vec![Object::Integer(PAGE_WIDTH - MARGIN), Object::Integer(y)],
    ));
    ops.push(Operation::new("S", vec![]));
}

/// Clip to the column; the standard fonts carry no wrapping.
fn fit(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut clipped: String = value.chars().take(max_chars.saturating_sub(3)).collect();
    clipped.push_str("...");
    clipped
}

/// Standard Type1 fonts only cover Latin-1; anything else prints as `?`.
fn win_ansi(value: &str) -> Vec<u8> {
    value
        .chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}
