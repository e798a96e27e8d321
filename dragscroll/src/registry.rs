use log::{debug, warn};

use crate::config::SliderConfig;
use crate::document::{Document, Node};
use crate::event::{InputEvent, Pointer};
use crate::frame::{FrameQueue, FrameScheduler};
use crate::slider::DragScroller;

/// Every slider attached to a document.
///
/// Built once with [`SliderSet::attach`]; nodes added to the document later
/// are not picked up.
#[derive(Debug, Default)]
pub struct SliderSet {
    sliders: Vec<DragScroller>,
    wheel_step: f64,
}

impl SliderSet {
    /// Attach one slider to every node carrying `config.selector`.
    pub fn attach(document: &Document, config: &SliderConfig) -> Self {
        let sliders: Vec<DragScroller> = document
            .query_class(&config.selector)
            .into_iter()
            .map(|id| DragScroller::new(id, config))
            .collect();

        debug!(
            "attached {} slider(s) to '.{}' nodes",
            sliders.len(),
            config.selector
        );

        Self {
            sliders,
            wheel_step: config.wheel_step,
        }
    }

    pub fn get(&self, id: &str) -> Option<&DragScroller> {
        self.sliders.iter().find(|s| s.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DragScroller> {
        self.sliders.iter()
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    /// Returns true if any slider has momentum in flight.
    pub fn is_animating(&self) -> bool {
        self.sliders.iter().any(|s| s.momentum().is_some())
    }

    /// Route pointer input to the sliders.
    /// Returns the events a slider consumed; the host should not apply its
    /// own default handling to those.
    pub fn process_events(
        &mut self,
        events: &[InputEvent],
        document: &mut Document,
        frames: &mut impl FrameScheduler,
    ) -> Vec<InputEvent> {
        let mut consumed = Vec::new();

        for event in events {
            if self.process_event(event, document, frames) {
                consumed.push(event.clone());
            }
        }

        consumed
    }

    fn process_event(
        &mut self,
        event: &InputEvent,
        document: &mut Document,
        frames: &mut impl FrameScheduler,
    ) -> bool {
        match *event {
            InputEvent::Down { x, y, .. } => {
                let Some(index) = self.slider_at(document, x, y) else {
                    return false;
                };
                let slider = &mut self.sliders[index];
                let Some(node) = node_for(document, slider) else {
                    return false;
                };
                slider.press(node, frames, f64::from(x));
                true
            }

            InputEvent::Drag { x, y, pointer } => self.pointer_moved(document, x, y, pointer),
            InputEvent::Moved { x, y } => self.pointer_moved(document, x, y, Pointer::Mouse),

            InputEvent::Up { x, y, pointer } => {
                let mut handled = false;
                for slider in self.sliders.iter_mut().filter(|s| s.is_dragging()) {
                    let Some(node) = node_for(document, slider) else {
                        continue;
                    };
                    // A mouse released outside left the element first.
                    // Touches have no leave and always end in momentum.
                    if pointer == Pointer::Touch || node.rect.contains(x, y) {
                        slider.release(node, frames);
                    } else {
                        slider.leave(node);
                    }
                    handled = true;
                }
                handled
            }

            InputEvent::Wheel { x, y, delta_x, .. } => {
                let Some(index) = self.slider_at(document, x, y) else {
                    return false;
                };
                let slider = &mut self.sliders[index];
                slider.wheel(frames);

                // Native horizontal wheel scrolling, done by the host
                if let Some(node) = node_for(document, slider) {
                    node.scroll_by(f64::from(delta_x) * self.wheel_step);
                }
                true
            }

            InputEvent::Key(_) | InputEvent::Resize { .. } => false,
        }
    }

    /// Move every dragging slider. A mouse outside the slider's rect leaves
    /// it; a touch keeps panning wherever it goes.
    fn pointer_moved(
        &mut self,
        document: &mut Document,
        x: u16,
        y: u16,
        pointer: Pointer,
    ) -> bool {
        let mut handled = false;
        for slider in self.sliders.iter_mut().filter(|s| s.is_dragging()) {
            let Some(node) = node_for(document, slider) else {
                continue;
            };
            if pointer == Pointer::Touch || node.rect.contains(x, y) {
                handled |= slider.move_to(node, f64::from(x));
            } else {
                slider.leave(node);
                handled = true;
            }
        }
        handled
    }

    /// Fire every frame callback that is due.
    /// Returns how many callbacks advanced a slider.
    pub fn run_frame(&mut self, document: &mut Document, frames: &mut FrameQueue) -> usize {
        let mut advanced = 0;

        for due in frames.take_due() {
            let Some(slider) = self.sliders.iter_mut().find(|s| s.id() == due.target) else {
                continue;
            };
            let Some(node) = node_for(document, slider) else {
                continue;
            };
            if slider.on_frame(due.handle, node, frames) {
                advanced += 1;
            }
        }

        advanced
    }

    /// Index of the slider under the point, if the topmost node there is one.
    fn slider_at(&self, document: &Document, x: u16, y: u16) -> Option<usize> {
        let id = document.hit_test(x, y)?;
        self.sliders.iter().position(|s| s.id() == id)
    }
}

fn node_for<'a>(document: &'a mut Document, slider: &DragScroller) -> Option<&'a mut Node> {
    let node = document.get_mut(slider.id());
    if node.is_none() {
        warn!("slider '{}' has no node in the document", slider.id());
    }
    node
}
