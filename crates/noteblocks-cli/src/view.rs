//! Cell-based geometry for the background layer.
//!
//! Every buffer line is one terminal row and rows map to lines one to one,
//! so the document top is row 0 of the text area and there is no padding.

use noteblocks_engine::Document;
use noteblocks_engine::extension::{Coords, LayerView};
use noteblocks_engine::text::Span;

pub struct TerminalView<'a> {
    doc: &'a Document,
    first_line: usize,
    rows: usize,
    content_width: u16,
    gutter_width: u16,
}

impl<'a> TerminalView<'a> {
    pub fn new(
        doc: &'a Document,
        first_line: usize,
        rows: usize,
        content_width: u16,
        gutter_width: u16,
    ) -> Self {
        Self {
            doc,
            first_line,
            rows,
            content_width,
            gutter_width,
        }
    }

    /// Zero-based buffer lines currently on screen.
    pub fn visible_lines(&self) -> std::ops::Range<usize> {
        let end = (self.first_line + self.rows).min(self.doc.line_count());
        self.first_line.min(end)..end
    }
}

impl LayerView for TerminalView<'_> {
    fn visible_ranges(&self) -> Vec<Span> {
        let lines = self.visible_lines();
        if lines.is_empty() {
            return Vec::new();
        }
        let start = self.doc.offset_of_line(lines.start).unwrap_or(0);
        let end = self
            .doc
            .offset_of_line(lines.end)
            .map_or(self.doc.len(), |next| next.saturating_sub(1));
        vec![Span::new(start, end.max(start))]
    }

    fn coords_at_pos(&self, pos: usize) -> Option<Coords> {
        let line = self.doc.line_of_offset(pos);
        if !self.visible_lines().contains(&line) {
            return None;
        }
        let top = (line - self.first_line) as f64;
        Some(Coords {
            top,
            bottom: top + 1.0,
        })
    }

    fn document_top(&self) -> f64 {
        0.0
    }

    fn document_padding_top(&self) -> f64 {
        0.0
    }

    fn content_width(&self) -> f64 {
        f64::from(self.content_width)
    }

    fn gutter_width(&self) -> f64 {
        f64::from(self.gutter_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\n∞∞∞text\nhello\n∞∞∞json\n{}\n";

    #[test]
    fn whole_buffer_visible() {
        let doc = Document::from_text(SAMPLE);
        let view = TerminalView::new(&doc, 0, 20, 60, 4);

        assert_eq!(view.visible_lines(), 0..6);
        assert_eq!(view.visible_ranges(), vec![Span::new(0, 38)]);
        assert_eq!(view.coords_at_pos(35).map(|c| c.top), Some(4.0));
    }

    #[test]
    fn scrolled_view_hides_earlier_lines() {
        let doc = Document::from_text(SAMPLE);
        let view = TerminalView::new(&doc, 2, 2, 60, 4);

        assert_eq!(view.visible_lines(), 2..4);
        assert_eq!(view.visible_ranges(), vec![Span::new(15, 34)]);
        assert_eq!(view.coords_at_pos(16).map(|c| c.top), Some(0.0));
        assert_eq!(view.coords_at_pos(0), None);
        assert_eq!(view.coords_at_pos(36), None);
    }
}
