use skrolla_core::{Anchors, Element, Tree};
use slotmap::{new_key_type, SlotMap};

use crate::Error;

new_key_type! {
    /// Handle to a single user session on the host.
    pub struct SessionId;

    /// Handle to an element added to a session, returned at creation time. Handles are scoped
    /// to their session and stay unique for the session's whole lifetime; there is no name
    /// namespace that could collide.
    pub struct ElementId;
}

/// In-process UI element sink, holding the displayed element trees of any number of sessions.
///
/// Elements are addressed by the [`ElementId`] returned when they were added. All operations on
/// elements of a closed session are no-ops, except [`Host::add`], which cannot mint a handle
/// and reports the closed session instead.
#[derive(Default)]
pub struct Host {
    sessions: SlotMap<SessionId, Session>,
}

impl Host {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_session(&mut self) -> SessionId {
        self.sessions.insert(Session::default())
    }

    /// Close a session, dropping all of its elements. Closing an already closed session does
    /// nothing.
    pub fn close_session(&mut self, session: SessionId) {
        self.sessions.remove(session);
    }

    /// Add an element (and its whole declarative subtree) to a session, either under a parent
    /// added earlier or as a new root.
    pub fn add(
        &mut self,
        session: SessionId,
        parent: Option<ElementId>,
        element: Element,
    ) -> Result<ElementId, Error> {
        let session = self.sessions.get_mut(session).ok_or(Error::SessionClosed)?;

        if let Some(parent) = parent {
            if !session.elements.contains_key(parent) {
                return Err(Error::UnknownParent);
            }
        }

        let id = session.elements.insert(Node { parent, element });
        session.order.push(id);

        Ok(id)
    }

    /// Remove an element together with all elements added under it. Idempotent: removing a
    /// stale handle, or from a closed session, does nothing.
    pub fn remove(&mut self, session: SessionId, element: ElementId) {
        if let Some(session) = self.sessions.get_mut(session) {
            session.remove(element);
        }
    }

    /// Move an element by replacing its anchors in place, leaving the rest of the element
    /// untouched. No-op on a stale handle or closed session.
    pub fn set_anchors(&mut self, session: SessionId, element: ElementId, anchors: Anchors) {
        if let Some(node) = self
            .sessions
            .get_mut(session)
            .and_then(|s| s.elements.get_mut(element))
        {
            node.element.anchors = anchors;
        }
    }

    /// The session's current element forest, in insertion order. Empty for a closed session.
    #[must_use]
    pub fn snapshot(&self, session: SessionId) -> Tree {
        let mut tree = Tree::new();

        if let Some(session) = self.sessions.get(session) {
            for &id in &session.order {
                if session.elements[id].parent.is_none() {
                    tree.add(session.assemble(id));
                }
            }
        }

        tree
    }
}

#[derive(Default)]
struct Session {
    elements: SlotMap<ElementId, Node>,
    order: Vec<ElementId>,
}

struct Node {
    parent: Option<ElementId>,
    element: Element,
}

impl Session {
    fn remove(&mut self, id: ElementId) {
        if self.elements.remove(id).is_none() {
            return;
        }

        self.order.retain(|&e| e != id);

        let children = self
            .elements
            .iter()
            .filter_map(|(child, node)| (node.parent == Some(id)).then_some(child))
            .collect::<Vec<_>>();

        for child in children {
            self.remove(child);
        }
    }

    /// Clone an element with any separately added child elements spliced back in, after the
    /// element's own declarative children.
    fn assemble(&self, id: ElementId) -> Element {
        let mut element = self.elements[id].element.clone();

        for &child in &self.order {
            if self.elements[child].parent == Some(id) {
                element.children.push(self.assemble(child));
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use skrolla_core::{Part, Rgba};

    use super::*;

    fn panel(x: f32) -> Element {
        Element::new(
            Part::Panel {
                color: Rgba::new(x, x, x, 1.0),
                cursor_enabled: false,
            },
            Anchors::new((0.0, 0.0), (1.0, 1.0)),
        )
    }

    #[test]
    fn add_and_snapshot() {
        let mut host = Host::new();
        let session = host.open_session();

        let root = host.add(session, None, panel(0.1)).unwrap();
        host.add(session, Some(root), panel(0.2)).unwrap();
        host.add(session, None, panel(0.3)).unwrap();

        let tree = host.snapshot(session);
        assert_eq!(2, tree.elements.len());
        assert_eq!(vec![panel(0.2)], tree.elements[0].children);
        assert_eq!(panel(0.3), tree.elements[1]);
    }

    #[test]
    fn remove_takes_descendants() {
        let mut host = Host::new();
        let session = host.open_session();

        let root = host.add(session, None, panel(0.1)).unwrap();
        let child = host.add(session, Some(root), panel(0.2)).unwrap();
        host.add(session, Some(child), panel(0.3)).unwrap();

        host.remove(session, root);

        assert!(host.snapshot(session).is_empty());
    }

    #[test]
    fn remove_is_idempotent() {
        let mut host = Host::new();
        let session = host.open_session();

        let root = host.add(session, None, panel(0.1)).unwrap();
        host.remove(session, root);
        host.remove(session, root);

        assert!(host.snapshot(session).is_empty());
    }

    #[test]
    fn stale_parent_is_rejected() {
        let mut host = Host::new();
        let session = host.open_session();

        let root = host.add(session, None, panel(0.1)).unwrap();
        host.remove(session, root);

        assert!(matches!(
            host.add(session, Some(root), panel(0.2)),
            Err(Error::UnknownParent)
        ));
    }

    #[test]
    fn closed_session_is_noop() {
        let mut host = Host::new();
        let session = host.open_session();
        let root = host.add(session, None, panel(0.1)).unwrap();

        host.close_session(session);
        host.close_session(session);

        host.remove(session, root);
        host.set_anchors(session, root, Anchors::new((0.2, 0.2), (0.8, 0.8)));

        assert!(host.snapshot(session).is_empty());
        assert!(matches!(
            host.add(session, None, panel(0.2)),
            Err(Error::SessionClosed)
        ));
    }

    #[test]
    fn set_anchors_moves_element_in_place() {
        let mut host = Host::new();
        let session = host.open_session();
        let root = host.add(session, None, panel(0.1)).unwrap();

        let moved = Anchors::new((0.95, 0.45), (1.0, 0.55));
        host.set_anchors(session, root, moved);

        let tree = host.snapshot(session);
        assert_eq!(moved, tree.elements[0].anchors);
        assert_eq!(panel(0.1).part, tree.elements[0].part);
    }
}
