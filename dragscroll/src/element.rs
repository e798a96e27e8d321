/// The host side of a scrollable element.
///
/// A [`DragScroller`](crate::DragScroller) reads and writes the element only
/// through this trait, so the same state machine drives an in-memory
/// [`Node`](crate::Node), a browser element behind wasm bindings, or anything
/// else with a horizontal scroll offset.
pub trait ScrollElement {
    /// Current horizontal scroll offset.
    fn scroll_left(&self) -> f64;

    /// Write the horizontal scroll offset.
    /// The host clamps to its natural scroll bounds.
    fn set_scroll_left(&mut self, value: f64);

    /// Left edge of the element, in the same space as pointer coordinates.
    fn offset_left(&self) -> f64;

    fn add_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);
}
