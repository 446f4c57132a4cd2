//! Terminal bootstrap and the serial event loop.
//!
//! One dedicated thread blocks on crossterm and forwards input into the
//! message queue; store commands run on blocking workers that answer into the
//! same queue. The loop itself drains that queue one message at a time, so
//! state transitions never interleave.

use std::error::Error;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::store::Store;
use crate::tui::app::App;
use crate::tui::command::dispatch;
use crate::tui::message::Message;
use crate::tui::panels;

/// Open the store, take over the terminal, and run the UI until quit.
pub async fn run_tui(db_path: &Path) -> Result<(), Box<dyn Error>> {
    let store = Arc::new(Store::open(db_path)?);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, store).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: Arc<Store>,
) -> Result<(), Box<dyn Error>> {
    let (events_tx, mut events_rx) = mpsc::unbounded_channel::<Message>();

    // Input thread: blocks on the terminal, dies when the queue closes.
    let input_tx = events_tx.clone();
    thread::spawn(move || loop {
        let forwarded = match event::read() {
            Ok(Event::Key(key)) => input_tx.send(Message::Key(key)),
            Ok(Event::Resize(width, height)) => input_tx.send(Message::Resize(width, height)),
            Ok(_) => Ok(()),
            Err(_) => break,
        };
        if forwarded.is_err() {
            break;
        }
    });

    let mut app = App::new();
    let size = terminal.size()?;
    app.update(Message::Resize(size.width, size.height));
    for command in app.init_commands() {
        dispatch(&store, &events_tx, command);
    }

    loop {
        terminal.draw(|f| panels::render(&app, f))?;
        let Some(message) = events_rx.recv().await else {
            break;
        };
        for command in app.update(message) {
            dispatch(&store, &events_tx, command);
        }
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
