//! shop-tui: Terminal front end for the two-pane shop
//!
//! This crate provides:
//! - The interactive terminal session
//! - Widgets for the product list, detail view, placeholder and Back button
//! - Headless rendering for scripting and tests

mod app;
mod event;
pub mod headless;
mod render;
mod text;
mod theme;
#[cfg(test)]
pub mod test_utils;
mod widgets;

pub use app::ShopApp;
pub use event::{key_to_action, mouse_to_action, Action};
pub use render::{render_shop, HitTarget, RenderContext, ShopLayout, MIN_HEIGHT, MIN_WIDTH};
pub use shop_core;
pub use theme::{BorderSet, IconMode, Theme};

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{self as term_event, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use shop_core::{Catalog, ConfigError, ShopConfig, Viewport};
use tracing::info;

/// Errors from the terminal front end.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    /// Terminal I/O failed.
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A product name did not match any catalog entry.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),
}

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Draw one frame of the app.
pub(crate) fn draw(frame: &mut Frame<'_>, app: &ShopApp) {
    let area = frame.area();
    let ctx = RenderContext {
        cursor: app.cursor,
        theme: &app.theme,
        borders: &app.borders,
    };
    render_shop(&app.view(), &ctx, area, frame.buffer_mut());
}

/// Run the interactive shop.
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal on every exit path.
pub fn run_tui(config: &ShopConfig) -> Result<(), TuiError> {
    let (columns, rows) = terminal::size()?;

    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = ShopApp::new(config, Catalog::reference(), Viewport::new(columns, rows));
    info!(columns, rows, mode = %app.layout_mode(), "session started");

    let result = run_loop(&mut terminal, &mut app);

    terminal.show_cursor()?;
    info!("session ended");

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut ShopApp,
) -> Result<(), TuiError> {
    loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, app))?;
        }

        if term_event::poll(Duration::from_millis(250))? {
            match term_event::read()? {
                Event::Key(key) => app.handle_action(key_to_action(key)),
                Event::Mouse(mouse) => app.handle_action(mouse_to_action(mouse)),
                Event::Resize(columns, rows) => app.handle_resize(columns, rows),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
