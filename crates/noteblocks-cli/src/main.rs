use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noteblocks_config::Config;
use noteblocks_engine::editing::{Document, Editor, EditorConfig};
use noteblocks_engine::io;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{env, fs::File, io::stdout, path::PathBuf, process};

mod app;
mod ui;
mod view;

use app::App;

fn init_logging() -> Result<()> {
    // The terminal belongs to the UI, so logs go to a file
    let log_path = env::temp_dir().join("noteblocks.log");
    let file = File::create(&log_path)?;
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    log::info!("noteblocks starting up");

    // Determine buffer path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };

    let buffer_path = match args.len() {
        1 => config.buffer_path.clone(),
        2 => PathBuf::from(&args[1]),
        _ => {
            eprintln!("Usage: {} [buffer-path]", args[0]);
            process::exit(1);
        }
    };
    log::info!("buffer path: {}", buffer_path.display());

    let text = match io::read_or_new_buffer(&buffer_path, &config.default_language) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let editor = Editor::new(
        Document::from_text(&text),
        EditorConfig {
            note_blocks: config.note_blocks,
        },
    );
    let mut app = App::new(editor, buffer_path, config.default_language);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Err(e) = app.handle_key(key) {
                    log::warn!("command failed: {e}");
                    app.status = format!("Error: {e}");
                }
            }
            Event::Resize(_, _) => app.resize(),
            _ => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
