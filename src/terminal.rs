use std::{
    io::{self, Write},
    thread,
};

use anyhow::Result;
use crossbeam_channel::Receiver;
use crossterm::{
    event::{Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

pub fn create() -> Result<Terminal<impl Backend>> {
    let stdout = TerminalGuard::new(io::stdout())?;
    let mut backend = CrosstermBackend::new(stdout);

    execute!(&mut backend, SetTitle("Skrolla"))?;

    Terminal::new(backend).map_err(Into::into)
}

/// Puts the terminal into raw mode on the alternate screen, restoring both when dropped.
struct TerminalGuard<W: Write> {
    output: W,
}

impl<W: Write> TerminalGuard<W> {
    fn new(mut output: W) -> Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        execute!(output, EnterAlternateScreen)?;
        Ok(Self { output })
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        execute!(self.output, LeaveAlternateScreen).expect("switch to main screen");
        crossterm::terminal::disable_raw_mode().expect("disable raw mode");
    }
}

impl<W: Write> Write for TerminalGuard<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

pub fn create_event_listener() -> Receiver<KeyEvent> {
    let (tx, rx) = crossbeam_channel::bounded(0);

    thread::spawn(move || {
        while let Ok(event) = crossterm::event::read() {
            if let Event::Key(k) = event {
                if k.kind == KeyEventKind::Release {
                    continue;
                }

                if tx.send(k).is_err() {
                    break;
                }
            }
        }
    });

    rx
}
