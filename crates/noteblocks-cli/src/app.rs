use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use noteblocks_engine::editing::{Cmd, Editor};
use noteblocks_engine::extension::ViewUpdate;
use noteblocks_engine::io;
use noteblocks_syntax::ast::NoteDelimiter;

pub struct App {
    pub editor: Editor,
    pub path: PathBuf,
    pub default_language: String,
    /// First buffer line shown on screen
    pub scroll: usize,
    pub status: String,
    pub dirty: bool,
    pub should_quit: bool,
    /// Changes since the last frame, consumed by the layer on draw
    pub pending: ViewUpdate,
}

impl App {
    pub fn new(editor: Editor, path: PathBuf, default_language: String) -> Self {
        Self {
            editor,
            path,
            default_language,
            scroll: 0,
            status: String::new(),
            dirty: false,
            should_quit: false,
            pending: ViewUpdate {
                doc_changed: true,
                viewport_changed: true,
                geometry_changed: true,
            },
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let extend = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if ctrl => self.should_quit = true,
            KeyCode::Char('s') if ctrl => self.save()?,
            KeyCode::Char('a') if ctrl => self.apply(Cmd::SelectAll),
            KeyCode::Char('n') if ctrl => self.insert_block(),
            KeyCode::Char(c) if !ctrl => self.apply(Cmd::InsertText {
                text: c.to_string(),
            }),
            KeyCode::Enter => self.apply(Cmd::InsertText {
                text: "\n".to_string(),
            }),
            KeyCode::Tab => self.apply(Cmd::InsertText {
                text: "\t".to_string(),
            }),
            KeyCode::Backspace => self.apply(Cmd::DeleteBackward),
            KeyCode::Delete => self.apply(Cmd::DeleteForward),
            KeyCode::Left => self.apply(Cmd::MoveLeft { extend }),
            KeyCode::Right => self.apply(Cmd::MoveRight { extend }),
            KeyCode::Up => self.apply(Cmd::MoveUp { extend }),
            KeyCode::Down => self.apply(Cmd::MoveDown { extend }),
            KeyCode::Home => self.move_to_line_edge(false, extend),
            KeyCode::End => self.move_to_line_edge(true, extend),
            _ => {}
        }
        Ok(())
    }

    pub fn apply(&mut self, cmd: Cmd) {
        let patch = self.editor.apply(cmd);
        if patch.doc_changed {
            self.dirty = true;
            self.pending.doc_changed = true;
        }
    }

    /// Start a new block at the cursor.
    pub fn insert_block(&mut self) {
        let text = NoteDelimiter::format(&self.default_language, true);
        self.apply(Cmd::InsertText { text });
    }

    pub fn save(&mut self) -> Result<()> {
        io::write_buffer(&self.path, &self.editor.document().to_bytes())?;
        self.dirty = false;
        self.status = format!("Saved {}", self.path.display());
        log::info!("saved {}", self.path.display());
        Ok(())
    }

    pub fn resize(&mut self) {
        self.pending.geometry_changed = true;
        self.pending.viewport_changed = true;
    }

    /// Scroll so the cursor line is within `rows` lines from the top.
    pub fn scroll_to_cursor(&mut self, rows: usize) {
        let doc = self.editor.document();
        let line = doc.line_of_offset(doc.selection().head);
        let before = self.scroll;

        if line < self.scroll {
            self.scroll = line;
        } else if rows > 0 && line >= self.scroll + rows {
            self.scroll = line + 1 - rows;
        }

        if self.scroll != before {
            self.pending.viewport_changed = true;
        }
    }

    pub fn take_pending(&mut self) -> ViewUpdate {
        std::mem::take(&mut self.pending)
    }

    fn move_to_line_edge(&mut self, end: bool, extend: bool) {
        let doc = self.editor.document();
        let line = doc.line_of_offset(doc.selection().head);
        let Some(line_ref) = doc.lines().nth(line) else {
            return;
        };
        let pos = if end {
            line_ref.span.start + line_ref.text.len()
        } else {
            line_ref.span.start
        };
        self.apply(Cmd::MoveTo { pos, extend });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noteblocks_engine::Document;
    use noteblocks_engine::editing::Selection;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const SAMPLE: &str = "\n∞∞∞text\nhello\n∞∞∞json\n{}\n";

    fn app(path: PathBuf) -> App {
        let editor = Editor::with_extension(Document::from_text(SAMPLE));
        App::new(editor, path, "text".to_string())
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        app.handle_key(KeyEvent::new(code, modifiers)).unwrap();
    }

    #[test]
    fn typing_marks_buffer_dirty() {
        let mut app = app(PathBuf::from("unused.txt"));
        press(&mut app, KeyCode::Char('!'), KeyModifiers::NONE);

        assert!(app.dirty);
        assert_eq!(app.editor.document().text(), format!("{SAMPLE}!"));
    }

    #[test]
    fn ctrl_s_writes_buffer() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("buffer.txt");
        let mut app = app(path.clone());

        press(&mut app, KeyCode::Char('x'), KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert!(!app.dirty);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), format!("{SAMPLE}x"));
    }

    #[test]
    fn home_on_first_content_line_stays_after_delimiter() {
        let mut app = app(PathBuf::from("unused.txt"));
        app.apply(Cmd::MoveTo {
            pos: 18,
            extend: false,
        });
        press(&mut app, KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(app.editor.document().selection(), Selection::cursor(15));

        press(&mut app, KeyCode::End, KeyModifiers::SHIFT);
        assert_eq!(app.editor.document().selection(), Selection::range(15, 20));
    }

    #[test]
    fn ctrl_n_starts_a_block() {
        let mut app = app(PathBuf::from("unused.txt"));
        press(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);

        let blocks = app.editor.note_blocks().unwrap().blocks();
        assert_eq!(blocks.len(), 3);
        assert_eq!(app.editor.document().selection().head, app.editor.document().len());
    }

    #[test]
    fn scrolling_follows_cursor() {
        let mut app = app(PathBuf::from("unused.txt"));
        app.take_pending();

        app.scroll_to_cursor(2);
        assert_eq!(app.scroll, 4);
        assert!(app.take_pending().viewport_changed);

        app.scroll_to_cursor(2);
        assert!(!app.take_pending().viewport_changed);
    }

    #[test]
    fn escape_quits() {
        let mut app = app(PathBuf::from("unused.txt"));
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);
    }
}
