//! Warpview - a terminal-based deformation field viewer.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use warpview::app::App;
use warpview::ui;

#[derive(Parser, Debug)]
#[command(name = "warpview")]
#[command(about = "A terminal-based deformation field viewer", long_about = None)]
struct Args {
    /// Path to the CSV field file or directory to open
    file: Option<PathBuf>,

    /// Start with the built-in demo field instead of a file
    #[arg(long)]
    demo: bool,

    /// Initial displacement scale for arrows and the deformed mesh
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Relative tolerance fraction for grid step estimation
    #[arg(long, default_value_t = 0.001)]
    tolerance: f64,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Warpview");
    }

    // Validate path if provided
    if let Some(ref path) = args.file {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            std::process::exit(1);
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(args.file, args.demo, args.scale, args.tolerance);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Warpview exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // File browser mode
                if app.file_browser_mode {
                    match (key.modifiers, key.code) {
                        // Quit
                        (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                        // Navigation
                        (KeyModifiers::NONE, KeyCode::Up)
                        | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                            app.browser_up();
                        },
                        (KeyModifiers::NONE, KeyCode::Down)
                        | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                            app.browser_down();
                        },

                        // Select/Open
                        (KeyModifiers::NONE, KeyCode::Enter)
                        | (KeyModifiers::NONE, KeyCode::Char('l'))
                        | (KeyModifiers::NONE, KeyCode::Right) => {
                            app.browser_select();
                        },

                        // Go to parent directory
                        (KeyModifiers::NONE, KeyCode::Char('h'))
                        | (KeyModifiers::NONE, KeyCode::Left) => {
                            app.browser_parent();
                        },

                        // Filters
                        (KeyModifiers::NONE, KeyCode::Char('.')) => {
                            app.toggle_hidden();
                        },
                        (KeyModifiers::NONE, KeyCode::Char('a')) => {
                            app.toggle_all_files();
                        },

                        // Close browser without selecting
                        (KeyModifiers::NONE, KeyCode::Esc) => {
                            app.close_file_browser();
                        },

                        _ => {},
                    }
                    continue;
                }

                // Normal mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // View cycling
                    (KeyModifiers::NONE, KeyCode::Tab) => {
                        app.cycle_view_mode();
                    },

                    // Displacement scale
                    (KeyModifiers::NONE, KeyCode::Char('+'))
                    | (KeyModifiers::NONE, KeyCode::Char('=')) => {
                        app.scale_up();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('-'))
                    | (KeyModifiers::NONE, KeyCode::Char('_')) => {
                        app.scale_down();
                    },

                    // Quiver key length
                    (KeyModifiers::NONE, KeyCode::Char(']')) => {
                        app.key_length_up();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('[')) => {
                        app.key_length_down();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('0')) => {
                        app.reset_key_length();
                    },

                    // Table navigation
                    (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                        app.table_up();
                    },
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                        app.table_down();
                    },

                    // Vim navigation
                    (KeyModifiers::NONE, KeyCode::Char('g')) => {
                        if pending_g {
                            app.table_first();
                            pending_g = false;
                        } else {
                            pending_g = true;
                        }
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                        app.table_last();
                    },

                    // Features
                    (KeyModifiers::NONE, KeyCode::Char('o')) => {
                        app.open_file_browser_at_current();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.status = "Help: q=quit, Tab=view, +/-=scale, ]/[=key, 0=auto key, j/k=rows, o=open, c=copy table, y=copy summary, T=theme".to_string();
                    },

                    // Clipboard
                    (KeyModifiers::NONE, KeyCode::Char('c')) => {
                        app.copy_table();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('y')) => {
                        app.copy_summary();
                    },

                    // Escape - clear transient error
                    (KeyModifiers::NONE, KeyCode::Esc) => {
                        app.error_message = None;
                    },

                    _ => {
                        pending_g = false;
                    },
                }
            }
        }
    }
}
