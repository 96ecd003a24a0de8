use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Color,
    widgets::{Paragraph, Widget},
};
use skrolla_core::{Align, Anchors, Element, Part, Rgba, Tree};

/// Renders a host element tree into the terminal.
///
/// Elements are positioned by normalized anchors with the origin in the bottom-left corner,
/// while the terminal grid has its origin in the top-left. The projection flips the y axis and
/// maps fractions to whole cells.
pub struct TreeView<'a> {
    tree: &'a Tree,
}

impl<'a> TreeView<'a> {
    pub fn new(tree: &'a Tree) -> Self {
        Self { tree }
    }
}

impl<'a> Widget for TreeView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for element in self.tree {
            draw(element, area, buf);
        }
    }
}

fn draw(element: &Element, parent: Rect, buf: &mut Buffer) {
    let area = project(parent, element.anchors);
    if area.width == 0 || area.height == 0 {
        return;
    }

    match &element.part {
        Part::Panel { color, .. } | Part::ScrollView { color, .. } => fill(area, *color, buf),
        Part::Label { text, align, .. } => {
            // Single text line, vertically centered within the element's rectangle.
            let mut line = area;
            line.y += area.height / 2;
            line.height = 1;

            Paragraph::new(text.as_str())
                .alignment(alignment(*align))
                .render(line, buf);
        }
    }

    for child in &element.children {
        draw(child, area, buf);
    }
}

/// Project normalized bottom-up anchors onto the top-down cell grid of `parent`. Anchors
/// outside `[0, 1]` are cut off at the parent's edge.
fn project(parent: Rect, anchors: Anchors) -> Rect {
    let width = f32::from(parent.width);
    let height = f32::from(parent.height);

    let left = (anchors.min.x * width).round().clamp(0.0, width) as u16;
    let right = (anchors.max.x * width).round().clamp(0.0, width) as u16;
    let top = (height - anchors.max.y * height).round().clamp(0.0, height) as u16;
    let bottom = (height - anchors.min.y * height).round().clamp(0.0, height) as u16;

    Rect::new(
        parent.x + left,
        parent.y + top,
        right.saturating_sub(left),
        bottom.saturating_sub(top),
    )
}

fn fill(area: Rect, color: Rgba, buf: &mut Buffer) {
    let color = to_color(color);

    for x in area.left()..area.right() {
        for y in area.top()..area.bottom() {
            buf.get_mut(x, y).set_char(' ').set_bg(color);
        }
    }
}

/// Terminal cells have no alpha channel, so it is dropped.
fn to_color(color: Rgba) -> Color {
    Color::Rgb(
        (color.r * 255.0) as u8,
        (color.g * 255.0) as u8,
        (color.b * 255.0) as u8,
    )
}

fn alignment(align: Align) -> Alignment {
    match align {
        Align::Left => Alignment::Left,
        Align::Center => Alignment::Center,
        Align::Right => Alignment::Right,
    }
}
