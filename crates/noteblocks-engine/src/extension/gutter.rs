use crate::blocks::BlockList;
use crate::editing::Document;

/// Gutter label for 1-based line `line_no`: its line number counted from the
/// start of its block's content.
///
/// Lines inside a delimiter, and lines past the end of the document, get an
/// empty label.
pub fn format_line_number(line_no: usize, doc: &Document, blocks: &BlockList) -> String {
    let Some(offset) = line_no.checked_sub(1).and_then(|line| doc.offset_of_line(line)) else {
        return String::new();
    };

    match blocks.content_at(offset) {
        Some((_, block)) => {
            let first_line = doc.line_of_offset(block.content.start) + 1;
            (line_no - first_line + 1).to_string()
        }
        None => String::new(),
    }
}
