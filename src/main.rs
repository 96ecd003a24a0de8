#![deny(rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use anyhow::Result;
use crossbeam_channel::select;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout};
use skrolla_host::{Host, RandomScroll};

use crate::{
    cli::{Command, Opt},
    panel::ScrollPanel,
    widgets::{CommandBar, HelpDialog, PanelCommand, TreeView},
};

mod cli;
mod panel;
mod terminal;
mod widgets;

fn main() -> Result<()> {
    let opt = Opt::parse();

    opt.cmd.map_or_else(run, |cmd| match cmd {
        Command::Dump { pretty } => dump(pretty),
        Command::Completions { shell } => cli::completions(shell),
        Command::Manpages { dir } => cli::manpages(&dir),
    })
}

/// Build the same element tree that `showui` displays and print its wire form.
fn dump(pretty: bool) -> Result<()> {
    let mut host = Host::new();
    let session = host.open_session();
    ScrollPanel::show(&mut host, session)?;

    let tree = host.snapshot(session);
    let json = if pretty {
        serde_json::to_string_pretty(&tree)?
    } else {
        serde_json::to_string(&tree)?
    };

    println!("{json}");

    Ok(())
}

enum Next {
    Tick,
    Key(KeyEvent),
    Stop,
}

fn run() -> Result<()> {
    let mut terminal = terminal::create()?;
    let events = terminal::create_event_listener();

    let mut host = Host::new();
    let session = host.open_session();
    let mut source = RandomScroll;

    let mut panel: Option<ScrollPanel> = None;
    let mut input = String::new();
    let mut show_help = false;

    'draw: loop {
        let tree = host.snapshot(session);

        terminal.draw(|f| {
            let area = f.size();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(100), Constraint::Length(1)])
                .split(area);

            f.render_widget(TreeView::new(&tree), chunks[0]);
            f.render_widget(CommandBar::new(&input), chunks[1]);

            if show_help {
                f.render_widget(HelpDialog, area);
            }
        })?;

        let next = {
            let never = crossbeam_channel::never();
            let ticks = panel.as_ref().map_or(&never, ScrollPanel::channel);

            select! {
                recv(ticks) -> _ => Next::Tick,
                recv(events) -> event => event.map_or(Next::Stop, Next::Key),
            }
        };

        match next {
            Next::Tick => {
                if let Some(panel) = &mut panel {
                    panel.refresh(&mut host, &mut source);
                }
            }
            Next::Key(key) => match key.code {
                KeyCode::Esc => break 'draw,
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Enter => {
                    let cmd = PanelCommand::parse(&input);
                    input.clear();

                    match cmd {
                        Some(PanelCommand::ShowUi) => {
                            if panel.is_none() {
                                panel = Some(ScrollPanel::show(&mut host, session)?);
                            }
                        }
                        Some(PanelCommand::HideUi) => {
                            if let Some(panel) = panel.take() {
                                panel.hide(&mut host);
                            }
                        }
                        Some(PanelCommand::Help) => show_help = !show_help,
                        Some(PanelCommand::Quit) => break 'draw,
                        // Unknown input is dropped without feedback.
                        None => {}
                    }
                }
                KeyCode::Char(c) => input.push(c),
                _ => {}
            },
            Next::Stop => break 'draw,
        }
    }

    Ok(())
}
