use noteblocks_engine::Document;
use noteblocks_engine::extension::{BandClass, Decoration};
use noteblocks_engine::text::Span as TextSpan;
use noteblocks_syntax::ast::{AstNode, Document as AstDocument};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::view::TerminalView;

const EVEN_BAND: Color = Color::Indexed(235);
const ODD_BAND: Color = Color::Indexed(237);
const RULE: Color = Color::DarkGray;

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)].as_ref())
        .split(f.area());
    let editor_area = chunks[0];

    let rows = usize::from(editor_area.height);
    app.scroll_to_cursor(rows);

    let doc = app.editor.document().clone();
    let gutter_width = gutter_width(doc.line_count());
    let [gutter_area, text_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(gutter_width), Constraint::Min(0)])
        .areas(editor_area);

    let view = TerminalView::new(&doc, app.scroll, rows, text_area.width, gutter_width);
    let update = app.take_pending();
    app.editor.update_layer(&update, &view);

    render_bands(f, app, editor_area);

    let lines = view.visible_lines();
    let labels: Vec<Line> = lines
        .clone()
        .map(|line| {
            let label = app.editor.line_number(line + 1);
            Line::from(format!("{label:>width$} ", width = usize::from(gutter_width) - 1))
                .style(Style::default().fg(Color::DarkGray))
        })
        .collect();
    f.render_widget(Paragraph::new(labels), gutter_area);

    let decorations = app
        .editor
        .note_blocks()
        .map(|bundle| bundle.decorations().to_vec())
        .unwrap_or_default();
    let rules = delimiter_labels(&doc);
    let selection = doc.selection();
    let selected = TextSpan::new(selection.from(), selection.to());

    let text: Vec<Line> = doc
        .lines()
        .skip(lines.start)
        .take(lines.len())
        .map(|line| {
            match decoration_at(&decorations, line.span.start) {
                Some(deco) if !line.text.is_empty() => {
                    let label = rules
                        .iter()
                        .find(|(delimiter, _)| delimiter.touches(deco.range))
                        .map_or("", |(_, label)| label.as_str());
                    rule_line(label, text_area.width)
                }
                Some(_) => Line::default(),
                None => text_line(&line.text, line.span.start, selected),
            }
        })
        .collect();
    f.render_widget(Paragraph::new(text), text_area);

    let status = status_line(app, &doc);
    f.render_widget(Paragraph::new(status), chunks[1]);

    let help_text = Line::from(vec![
        Span::raw("Esc/Ctrl-Q: Quit | "),
        Span::raw("Ctrl-S: Save | "),
        Span::raw("Ctrl-N: New block | "),
        Span::raw("Ctrl-A: Select all"),
    ]);
    f.render_widget(Paragraph::new(help_text).block(Block::default()), chunks[2]);

    if let Some(position) = cursor_position(&doc, app.scroll, text_area) {
        f.set_cursor_position(position);
    }
}

fn gutter_width(line_count: usize) -> u16 {
    let digits = line_count.to_string().len().max(2);
    u16::try_from(digits + 1).unwrap_or(u16::MAX)
}

/// Paint the layer's markers as full-width background rows.
fn render_bands(f: &mut Frame, app: &App, area: Rect) {
    let Some(bundle) = app.editor.note_blocks() else {
        return;
    };

    for marker in bundle.layer_markers() {
        let top = marker.top.max(0.0) as u16;
        let bottom = (marker.top + marker.height).max(0.0) as u16;
        let bottom = bottom.min(area.height);
        if top >= bottom {
            continue;
        }
        let width = (marker.width.max(0.0) as u16).min(area.width);
        let color = match marker.class {
            BandClass::Even => EVEN_BAND,
            BandClass::Odd => ODD_BAND,
        };
        let rect = Rect::new(area.x + marker.left as u16, area.y + top, width, bottom - top);
        f.render_widget(Block::default().style(Style::default().bg(color)), rect);
    }
}

fn decoration_at(decorations: &[Decoration], offset: usize) -> Option<&Decoration> {
    decorations
        .iter()
        .find(|deco| deco.range.contains(offset))
}

/// `(delimiter span, label)` for every delimiter, read from the syntax tree.
fn delimiter_labels(doc: &Document) -> Vec<(TextSpan, String)> {
    let Some(root) = AstDocument::cast(doc.tree().clone()) else {
        return Vec::new();
    };
    root.notes()
        .filter_map(|note| note.delimiter())
        .map(|delimiter| {
            let span = TextSpan::from(delimiter.syntax().text_range());
            let mut label = delimiter.language().unwrap_or_default();
            if delimiter.is_auto() {
                label.push_str(" (auto)");
            }
            (span, label)
        })
        .collect()
}

fn rule_line(label: &str, width: u16) -> Line<'static> {
    let head = format!("── {label} ");
    let fill = usize::from(width).saturating_sub(head.chars().count());
    Line::from(format!("{head}{}", "─".repeat(fill))).style(Style::default().fg(RULE))
}

fn text_line(text: &str, start: usize, selected: TextSpan) -> Line<'static> {
    let end = start + text.len();
    let from = selected.start.clamp(start, end) - start;
    let to = selected.end.clamp(start, end) - start;

    if from == to {
        return Line::from(text.to_string());
    }

    let part = |range: std::ops::Range<usize>| text.get(range).unwrap_or_default().to_string();
    Line::from(vec![
        Span::raw(part(0..from)),
        Span::styled(part(from..to), Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(part(to..text.len())),
    ])
}

fn status_line(app: &App, doc: &Document) -> Line<'static> {
    let dirty = if app.dirty { " [+]" } else { "" };
    let blocks = app
        .editor
        .note_blocks()
        .map(|bundle| format!(" | {} blocks", bundle.blocks().len()))
        .unwrap_or_default();
    let head = doc.selection().head;
    let line = doc.line_of_offset(head) + 1;

    Line::from(format!(
        "{}{dirty}{blocks} | line {line} | {}",
        app.path.display(),
        app.status
    ))
    .style(Style::default().add_modifier(Modifier::REVERSED))
}

fn cursor_position(doc: &Document, scroll: usize, area: Rect) -> Option<Position> {
    let head = doc.selection().head;
    let line = doc.line_of_offset(head);
    let row = line.checked_sub(scroll)?;
    if row >= usize::from(area.height) {
        return None;
    }

    let line_start = doc.offset_of_line(line)?;
    let column = doc.slice_to_cow(line_start..head).chars().count();
    let column = u16::try_from(column).ok()?.min(area.width.saturating_sub(1));
    Some(Position::new(area.x + column, area.y + row as u16))
}
