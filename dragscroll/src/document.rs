use crate::element::ScrollElement;
use crate::rect::Rect;

/// A horizontally scrollable node.
///
/// `content_width` is the full width of whatever the node scrolls over; the
/// scroll offset is kept within `0..=content_width - rect.width`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub classes: Vec<String>,
    pub rect: Rect,
    pub content_width: u16,
    scroll_left: f64,
}

impl Node {
    pub fn new(id: impl Into<String>, rect: Rect, content_width: u16) -> Self {
        Self {
            id: id.into(),
            classes: Vec::new(),
            rect,
            content_width,
            scroll_left: 0.0,
        }
    }

    /// Add a class (builder form).
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        f64::from(self.content_width.saturating_sub(self.rect.width))
    }

    /// Scroll by a delta, clamping to the valid range.
    /// Returns true if the offset changed.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        let before = self.scroll_left;
        self.set_scroll_left(before + delta);
        self.scroll_left != before
    }
}

impl ScrollElement for Node {
    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn set_scroll_left(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.scroll_left = value.clamp(0.0, self.max_scroll());
    }

    fn offset_left(&self) -> f64 {
        f64::from(self.rect.left())
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

/// Flat collection of nodes. Later nodes are drawn on top of earlier ones.
#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node (builder form).
    pub fn with(mut self, node: Node) -> Self {
        self.push(node);
        self
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Ids of every node carrying `class`, in document order.
    pub fn query_class(&self, class: &str) -> Vec<String> {
        self.nodes
            .iter()
            .filter(|n| n.has_class(class))
            .map(|n| n.id.clone())
            .collect()
    }

    /// Topmost node containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<&str> {
        self.nodes
            .iter()
            .rev()
            .find(|n| n.rect.contains(x, y))
            .map(|n| n.id.as_str())
    }
}
