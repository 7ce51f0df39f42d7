use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text without its line ending.
    pub text: String,
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` so spans include newline characters and the spans of
/// consecutive lines are contiguous. A buffer ending in a newline has a final
/// empty line, which `lines_raw` does not yield; it is appended here because
/// the gutter numbers it.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let len = rope.len();
    let trailing = (len == 0 || rope.byte_at(len - 1) == b'\n').then(|| LineRef {
        span: Span::new(len, len),
        text: String::new(),
    });

    let mut offset = 0usize;
    rope.lines_raw(..)
        .map(move |line| {
            let start = offset;
            offset += line.len();
            LineRef {
                span: Span::new(start, offset),
                text: line.trim_end_matches(['\n', '\r']).to_string(),
            }
        })
        .chain(trailing)
}
