//! Chat-style terminal front end. A thin shell: reads a line from the input
//! footer, hands it to the session, appends the reply to the transcript.

mod state;
mod view;

use crate::config::Config;
use crate::session::Session;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use state::AppState;
use std::{io, time::Duration};

pub fn run() -> Result<()> {
    let config = Config::load().unwrap_or_default();
    let (mut session, notices) = Session::open(&config.data_path());

    let mut app = AppState::new();
    app.push_assistant(ui::welcome());
    for notice in notices {
        app.push_assistant(notice);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut session, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| view::draw(f, app))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        match event::read()? {
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollDown => app.scroll_down(),
                MouseEventKind::ScrollUp => app.scroll_up(),
                _ => {}
            },
            Event::Key(key) => match key.code {
                KeyCode::Enter => {
                    if app.input_buffer.is_empty() {
                        continue;
                    }
                    let line = std::mem::take(&mut app.input_buffer);
                    app.push_user(line.clone());
                    let reply = session.handle(&line);
                    let exit = reply.exit;
                    app.push_assistant(reply.message);
                    if exit {
                        // One last frame so the goodbye is visible briefly
                        terminal.draw(|f| view::draw(f, app))?;
                        break;
                    }
                }
                KeyCode::Esc => break,
                KeyCode::Char(c) => app.input_buffer.push(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Up => app.scroll_up(),
                KeyCode::Down => app.scroll_down(),
                KeyCode::PageUp => app.jump_backward(10),
                KeyCode::PageDown => app.jump_forward(10),
                _ => {}
            },
            _ => {}
        }
    }
    Ok(())
}
