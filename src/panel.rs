use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use skrolla_core::{
    thumb::{self, ThumbExtent},
    Align, Anchors, Element, Part, Rgba, ScrollDirection,
};
use skrolla_host::{ElementId, Error, Host, Repeat, ScrollSource, SessionId, Ticker};

/// Rows in the list.
const ITEM_COUNT: u8 = 20;
/// Height of a single row, as a fraction of the scroll view.
const ITEM_HEIGHT: f32 = 0.05;
/// Fixed height of the scrollbar thumb, as a fraction of the track. Not derived from the
/// content-to-viewport ratio.
const THUMB_HEIGHT: f32 = 0.1;
/// Cadence at which the thumb is re-synced to the scroll offset.
const REFRESH_INTERVAL: Duration = Duration::from_millis(100);

const PANEL_COLOR: Rgba = Rgba::new(0.1, 0.1, 0.1, 0.8);
const VIEW_COLOR: Rgba = Rgba::new(0.2, 0.2, 0.2, 1.0);
const TRACK_COLOR: Rgba = Rgba::new(0.1, 0.1, 0.1, 0.8);
const THUMB_COLOR: Rgba = Rgba::new(0.8, 0.8, 0.8, 0.8);

/// A scroll panel that is currently shown: a centered base panel holding the scrollable list
/// of items, the scrollbar track on its right edge and the thumb riding on the track.
///
/// The value owns the element handles and the refresh ticker. Hiding consumes the panel and
/// dropping it cancels the ticker, so the refresh timer cannot outlive the panel.
pub struct ScrollPanel {
    session: SessionId,
    root: ElementId,
    thumb: ElementId,
    ticker: Ticker,
}

impl ScrollPanel {
    /// Build the panel's element tree, hand it to the host and start the refresh ticker. The
    /// thumb starts at the top of the track, as if the view were scrolled to the top.
    pub fn show(host: &mut Host, session: SessionId) -> Result<Self, Error> {
        let root = host.add(session, None, base_panel())?;
        let thumb = host.add(
            session,
            Some(root),
            thumb_element(thumb::extent(0.0, THUMB_HEIGHT)),
        )?;

        Ok(Self {
            session,
            root,
            thumb,
            ticker: Ticker::new(REFRESH_INTERVAL, Repeat::from_count(0)),
        })
    }

    /// Channel of the refresh ticker, to `select!` on.
    #[must_use]
    pub fn channel(&self) -> &Receiver<Instant> {
        self.ticker.channel()
    }

    /// One refresh: read the current scroll offset, recompute the thumb extent and move the
    /// thumb in place. A no-op if the session went away in the meantime.
    pub fn refresh(&mut self, host: &mut Host, source: &mut impl ScrollSource) {
        if !self.ticker.tick() {
            return;
        }

        let extent = thumb::extent(source.fraction(), THUMB_HEIGHT);
        host.set_anchors(self.session, self.thumb, thumb_anchors(extent));
    }

    /// Remove the panel and everything in it from the host. Consuming the panel drops the
    /// ticker, so the refresh timer is cancelled on the same path.
    pub fn hide(self, host: &mut Host) {
        host.remove(self.session, self.root);
    }
}

fn base_panel() -> Element {
    let mut view = Element::new(
        Part::ScrollView {
            color: VIEW_COLOR,
            direction: ScrollDirection::Vertical,
            speed: 0.05,
            fade: 0.3,
        },
        Anchors::new((0.0, 0.0), (0.95, 1.0)),
    );

    for i in 0..ITEM_COUNT {
        view.children.push(label(i));
    }

    Element::new(
        Part::Panel {
            color: PANEL_COLOR,
            cursor_enabled: true,
        },
        Anchors::new((0.3, 0.3), (0.7, 0.7)),
    )
    .child(view)
    .child(Element::new(
        Part::Panel {
            color: TRACK_COLOR,
            cursor_enabled: false,
        },
        Anchors::new((0.95, 0.0), (1.0, 1.0)),
    ))
}

fn label(index: u8) -> Element {
    Element::new(
        Part::Label {
            text: format!("Item {}", index + 1),
            font_size: 18,
            align: Align::Center,
        },
        Anchors::new(
            (0.0, 1.0 - f32::from(index + 1) * ITEM_HEIGHT),
            (1.0, 1.0 - f32::from(index) * ITEM_HEIGHT),
        ),
    )
}

fn thumb_anchors(extent: ThumbExtent) -> Anchors {
    Anchors::new((0.95, extent.min), (1.0, extent.max))
}

fn thumb_element(extent: ThumbExtent) -> Element {
    Element::new(
        Part::Panel {
            color: THUMB_COLOR,
            cursor_enabled: false,
        },
        thumb_anchors(extent),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use skrolla_host::FixedScroll;

    use super::*;

    #[test]
    fn show_builds_the_full_tree() {
        let mut host = Host::new();
        let session = host.open_session();

        ScrollPanel::show(&mut host, session).unwrap();

        let tree = host.snapshot(session);
        assert_eq!(1, tree.elements.len());

        let root = &tree.elements[0];
        assert_eq!(Anchors::new((0.3, 0.3), (0.7, 0.7)), root.anchors);
        assert!(matches!(
            root.part,
            Part::Panel {
                cursor_enabled: true,
                ..
            }
        ));

        // scroll view, track, then the separately added thumb
        assert_eq!(3, root.children.len());

        let view = &root.children[0];
        assert!(matches!(view.part, Part::ScrollView { .. }));
        assert_eq!(usize::from(ITEM_COUNT), view.children.len());
        assert_eq!(
            Part::Label {
                text: "Item 1".to_owned(),
                font_size: 18,
                align: Align::Center,
            },
            view.children[0].part,
        );

        let track = &root.children[1];
        assert_eq!(Anchors::new((0.95, 0.0), (1.0, 1.0)), track.anchors);

        let thumb = &root.children[2];
        assert_eq!(thumb_anchors(thumb::extent(0.0, THUMB_HEIGHT)), thumb.anchors);
    }

    #[test]
    fn labels_stack_downwards_from_the_top() {
        let first = label(0);
        assert_eq!(Anchors::new((0.0, 0.95), (1.0, 1.0)), first.anchors);

        let second = label(1);
        assert!((first.anchors.min.y - second.anchors.max.y).abs() < f32::EPSILON);
        assert!(second.anchors.min.y < first.anchors.min.y);
    }

    #[test]
    fn refresh_moves_the_thumb_in_place() {
        let mut host = Host::new();
        let session = host.open_session();
        let mut panel = ScrollPanel::show(&mut host, session).unwrap();

        panel.refresh(&mut host, &mut FixedScroll(0.5));

        let tree = host.snapshot(session);
        let thumb = &tree.elements[0].children[2];
        assert_eq!(thumb_anchors(thumb::extent(0.5, THUMB_HEIGHT)), thumb.anchors);

        // still a single thumb, not a destroy-and-recreate leftover
        assert_eq!(3, tree.elements[0].children.len());
    }

    #[test]
    fn refresh_is_stable_for_a_fixed_offset() {
        let mut host = Host::new();
        let session = host.open_session();
        let mut panel = ScrollPanel::show(&mut host, session).unwrap();
        let mut source = FixedScroll(0.25);

        panel.refresh(&mut host, &mut source);
        let first = host.snapshot(session).elements[0].children[2].anchors;

        panel.refresh(&mut host, &mut source);
        let second = host.snapshot(session).elements[0].children[2].anchors;

        assert_eq!(first, second);
    }

    #[test]
    fn hide_removes_the_whole_panel() {
        let mut host = Host::new();
        let session = host.open_session();
        let panel = ScrollPanel::show(&mut host, session).unwrap();

        panel.hide(&mut host);

        assert!(host.snapshot(session).is_empty());
    }

    #[test]
    fn refresh_after_session_end_is_a_noop() {
        let mut host = Host::new();
        let session = host.open_session();
        let mut panel = ScrollPanel::show(&mut host, session).unwrap();

        host.close_session(session);
        panel.refresh(&mut host, &mut FixedScroll(0.5));

        assert!(host.snapshot(session).is_empty());
    }
}
