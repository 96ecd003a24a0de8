use ratatui::{buffer::Buffer, layout::Rect, widgets::{Paragraph, Widget}};

/// The commands a user can type into the command bar. Anything else is silently ignored, and
/// command outcomes are not surfaced either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    /// Build and display the scroll panel, starting the thumb refresh.
    ShowUi,
    /// Remove the scroll panel again.
    HideUi,
    /// Toggle the help dialog.
    Help,
    /// Leave the demo.
    Quit,
}

impl PanelCommand {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "showui" => Some(Self::ShowUi),
            "hideui" => Some(Self::HideUi),
            "help" => Some(Self::Help),
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Single-line command input at the bottom of the screen.
pub struct CommandBar<'a> {
    input: &'a str,
}

impl<'a> CommandBar<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }
}

impl<'a> Widget for CommandBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(format!("> {}", self.input)).render(area, buf);
    }
}
