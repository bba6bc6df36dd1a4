//! The declarative render tree.
//!
//! A [`Node`] tree is what components produce and what the host renderer
//! consumes. It is rebuilt on every render from static layout plus the current
//! values of animated cells. Touchable nodes carry their press callback, so the
//! host dispatches a tap by calling [`Node::press`] on the tree it rendered.

use std::fmt;
use std::sync::Arc;

use super::style::Style;

/// A press handler attached to a touchable node.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// The type of a node.
#[derive(Clone)]
pub enum NodeKind {
    /// A plain layout container.
    View,
    /// A run of text.
    Text(String),
    /// A pressable container.
    Touchable(Callback),
    /// A container whose opacity or transform follows animated values.
    AnimatedView,
}

impl fmt::Debug for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View => write!(f, "View"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Touchable(_) => write!(f, "Touchable"),
            Self::AnimatedView => write!(f, "AnimatedView"),
        }
    }
}

/// One node of the render tree.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    key: Option<String>,
    style: Style,
    opacity: Option<f64>,
    translate_y: Option<f64>,
    children: Vec<Node>,
}

impl Node {
    fn with_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            key: None,
            style: Style::default(),
            opacity: None,
            translate_y: None,
            children: Vec::new(),
        }
    }

    /// A layout container.
    pub fn view() -> Self {
        Self::with_kind(NodeKind::View)
    }

    /// A text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Text(text.into()))
    }

    /// A pressable container invoking `on_press` when tapped.
    pub fn touchable(on_press: Callback) -> Self {
        Self::with_kind(NodeKind::Touchable(on_press))
    }

    /// A container driven by animated values.
    pub fn animated_view() -> Self {
        Self::with_kind(NodeKind::AnimatedView)
    }

    /// Set a key for lookups.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the node's style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the rendered opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Set the rendered vertical translation.
    pub fn with_translate_y(mut self, offset: f64) -> Self {
        self.translate_y = Some(offset);
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn opacity(&self) -> Option<f64> {
        self.opacity
    }

    pub fn translate_y(&self) -> Option<f64> {
        self.translate_y
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Whether this node responds to presses.
    pub fn is_touchable(&self) -> bool {
        matches!(self.kind, NodeKind::Touchable(_))
    }

    /// All text in this subtree, concatenated in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let NodeKind::Text(text) = &self.kind {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Depth-first search for the first node matching `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<&Node>
    where
        P: Fn(&Node) -> bool + Copy,
    {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(predicate))
    }

    /// Find a node by key.
    pub fn find_by_key(&self, key: &str) -> Option<&Node> {
        self.find(|node| node.key() == Some(key))
    }

    /// Find the touchable whose text reads `title`.
    pub fn find_touchable(&self, title: &str) -> Option<&Node> {
        self.find(|node| node.is_touchable() && node.text_content() == title)
    }

    /// Invoke the press handler of the touchable titled `title`.
    ///
    /// Returns `false` when no such touchable exists.
    pub fn press(&self, title: &str) -> bool {
        match self.find_touchable(title).map(|node| &node.kind) {
            Some(NodeKind::Touchable(on_press)) => {
                on_press();
                true
            }
            _ => false,
        }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn button(title: &str, counter: Arc<AtomicUsize>) -> Node {
        Node::touchable(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }))
        .with_child(Node::text(title))
    }

    #[test]
    fn test_text_content_concatenates_subtree() {
        let tree = Node::view()
            .with_child(Node::text("Hello, "))
            .with_child(Node::view().with_child(Node::text("world")));
        assert_eq!(tree.text_content(), "Hello, world");
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_press_invokes_matching_touchable() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let tree = Node::view()
            .with_child(button("One", first.clone()))
            .with_child(button("Two", second.clone()));

        assert!(tree.press("Two"));
        assert!(tree.press("Two"));
        assert!(!tree.press("Three"));
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_find_by_key_and_animated_values() {
        let tree = Node::view().with_child(
            Node::animated_view()
                .with_key("box")
                .with_opacity(0.5)
                .with_translate_y(12.0),
        );

        let node = tree.find_by_key("box").unwrap();
        assert!(matches!(node.kind(), NodeKind::AnimatedView));
        assert_eq!(node.opacity(), Some(0.5));
        assert_eq!(node.translate_y(), Some(12.0));
        assert!(tree.find_by_key("missing").is_none());
    }
}
