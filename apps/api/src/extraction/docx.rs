//! DOCX strategy: paragraphs in document order, then table cells.
//!
//! A .docx file is a ZIP of XML parts; `docx-rs` gives a typed tree over it:
//! Document → Paragraph → Run → Text, and Document → Table → Row → Cell → Paragraph.

use docx_rs::{
    read_docx, DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild, Table,
    TableCellContent, TableChild, TableRowChild,
};

use super::ExtractionError;

/// Non-blank top-level paragraphs first, then every table cell in row-major order.
/// Each piece is followed by a newline.
pub fn extract_structured(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = read_docx(bytes).map_err(|e| ExtractionError::Docx(format!("{e:?}")))?;

    let mut paragraphs = Vec::new();
    let mut tables = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => {
                let text = paragraph_text(para);
                if !text.trim().is_empty() {
                    paragraphs.push(text);
                }
            }
            DocumentChild::Table(table) => tables.push(table),
            _ => {}
        }
    }

    let mut out = String::new();
    for text in paragraphs {
        out.push_str(&text);
        out.push('\n');
    }
    for table in tables {
        for cell in table_cells(table) {
            out.push_str(&cell);
            out.push('\n');
        }
    }
    Ok(out)
}

/// Concatenated text of every run; runs are fragments of the same sentence.
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&para.children, &mut text);
    text
}

/// Runs may sit directly in the paragraph, inside a hyperlink, or inside a tracked
/// insertion. Deleted text is skipped.
fn push_children_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run_text(run, out),
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, out),
            ParagraphChild::Insert(insert) => {
                for ic in &insert.children {
                    if let InsertChild::Run(run) = ic {
                        push_run_text(run, out);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run_text(run: &Run, out: &mut String) {
    for rc in &run.children {
        if let RunChild::Text(t) = rc {
            out.push_str(&t.text);
        }
    }
}

/// Text of each cell, row by row. A cell's paragraphs are joined with newlines.
fn table_cells(table: &Table) -> Vec<String> {
    let mut cells = Vec::new();
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            cells.push(cell_text(&cell.children));
        }
    }
    cells
}

fn cell_text(children: &[TableCellContent]) -> String {
    children
        .iter()
        .filter_map(|content| match content {
            TableCellContent::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use docx_rs::{Docx, Hyperlink, HyperlinkType, Insert, TableCell, TableRow};

    use super::*;

    fn cell(text: &str) -> TableCell {
        TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
    }

    fn para(text: &str) -> Paragraph {
        Paragraph::new().add_run(Run::new().add_text(text))
    }

    fn pack(docx: Docx) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_paragraphs_then_table_cells() {
        let bytes = pack(
            Docx::new()
                .add_paragraph(para("Jane Doe"))
                .add_table(Table::new(vec![
                    TableRow::new(vec![cell("Rust"), cell("Go")]),
                    TableRow::new(vec![cell("SQL"), cell("Kafka")]),
                ]))
                .add_paragraph(para("jane@example.com")),
        );

        let text = extract_structured(&bytes).unwrap();
        assert_eq!(text, "Jane Doe\njane@example.com\nRust\nGo\nSQL\nKafka\n");
    }

    #[test]
    fn test_blank_paragraphs_are_skipped() {
        let bytes = pack(
            Docx::new()
                .add_paragraph(para("Jane Doe"))
                .add_paragraph(Paragraph::new())
                .add_paragraph(para("   "))
                .add_paragraph(para("Lisbon")),
        );

        assert_eq!(extract_structured(&bytes).unwrap(), "Jane Doe\nLisbon\n");
    }

    #[test]
    fn test_runs_are_concatenated() {
        let bytes = pack(
            Docx::new().add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Senior "))
                    .add_run(Run::new().add_text("Engineer")),
            ),
        );

        assert_eq!(extract_structured(&bytes).unwrap(), "Senior Engineer\n");
    }

    #[test]
    fn test_hyperlink_text_is_kept() {
        let bytes = pack(
            Docx::new().add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Email: "))
                    .add_hyperlink(
                        Hyperlink::new("contact", HyperlinkType::Anchor)
                            .add_run(Run::new().add_text("jane@example.com")),
                    ),
            ),
        );

        assert_eq!(extract_structured(&bytes).unwrap(), "Email: jane@example.com\n");
    }

    #[test]
    fn test_tracked_insertion_text_is_kept() {
        let bytes = pack(
            Docx::new().add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Skills: "))
                    .add_insert(Insert::new(Run::new().add_text("Rust"))),
            ),
        );

        assert_eq!(extract_structured(&bytes).unwrap(), "Skills: Rust\n");
    }

    #[test]
    fn test_blank_document_is_empty_not_an_error() {
        assert_eq!(extract_structured(&pack(Docx::new())).unwrap(), "");
    }

    #[test]
    fn test_not_a_zip_is_an_error() {
        assert!(matches!(
            extract_structured(b"definitely not a docx"),
            Err(ExtractionError::Docx(_))
        ));
    }
}
