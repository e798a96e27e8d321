//! Drag-to-scroll with momentum for a single element.
//!
//! A [`DragScroller`] is a small state machine:
//!
//! - `Idle` --press--> `Dragging`
//! - `Dragging` --move--> `Dragging` (content follows the pointer at
//!   `drag_factor` speed, velocity tracks the last applied delta)
//! - `Dragging` --release--> `Momentum`
//! - `Dragging` --leave--> `Idle` (no momentum)
//! - `Momentum` --frame--> `Momentum` or `Idle` once the velocity decays
//! - `Momentum` --press--> `Dragging`
//! - any --wheel--> momentum canceled
//!
//! The element is reached through [`ScrollElement`] and frames through
//! [`FrameScheduler`], so the machine never owns either.

use log::{debug, trace};

use crate::config::SliderConfig;
use crate::element::ScrollElement;
use crate::frame::{FrameHandle, FrameScheduler};

/// Which phase a slider is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Momentum,
}

#[derive(Debug, Clone)]
pub struct DragScroller {
    id: String,
    active_class: String,
    drag_factor: f64,
    friction: f64,
    stop_threshold: f64,

    dragging: bool,
    /// Pointer X relative to the element's left edge at press time.
    drag_anchor_x: f64,
    /// Element scroll offset at press time.
    scroll_anchor: f64,
    /// Signed cells per frame. Stale outside `Dragging` and `Momentum`.
    velocity: f64,
    /// Pending momentum frame. Never set while dragging.
    momentum: Option<FrameHandle>,
}

impl DragScroller {
    pub fn new(id: impl Into<String>, config: &SliderConfig) -> Self {
        Self {
            id: id.into(),
            active_class: config.active_class.clone(),
            drag_factor: config.drag_factor,
            friction: config.friction,
            stop_threshold: config.stop_threshold,
            dragging: false,
            drag_anchor_x: 0.0,
            scroll_anchor: 0.0,
            velocity: 0.0,
            momentum: None,
        }
    }

    /// Id of the element this slider drives.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phase(&self) -> Phase {
        if self.dragging {
            Phase::Dragging
        } else if self.momentum.is_some() {
            Phase::Momentum
        } else {
            Phase::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// The pending momentum frame, if any.
    pub fn momentum(&self) -> Option<FrameHandle> {
        self.momentum
    }

    /// Pointer pressed (or touch started) at page X `x`.
    pub fn press(
        &mut self,
        element: &mut impl ScrollElement,
        frames: &mut impl FrameScheduler,
        x: f64,
    ) {
        self.cancel_momentum(frames);

        self.dragging = true;
        element.add_class(&self.active_class);
        self.drag_anchor_x = x - element.offset_left();
        self.scroll_anchor = element.scroll_left();
        self.velocity = 0.0;

        debug!(
            "slider '{}' drag start: anchor_x={} scroll={}",
            self.id, self.drag_anchor_x, self.scroll_anchor
        );
    }

    /// Pointer moved to page X `x`.
    ///
    /// Returns true when the move was consumed, meaning the host must
    /// suppress its default action (text selection, native panning).
    pub fn move_to(&mut self, element: &mut impl ScrollElement, x: f64) -> bool {
        if !self.dragging {
            return false;
        }

        let x = x - element.offset_left();
        let walk = (x - self.drag_anchor_x) * self.drag_factor;
        let prev_scroll = element.scroll_left();
        element.set_scroll_left(self.scroll_anchor - walk);
        // Measured after the write so clamping at either edge shows up here
        self.velocity = element.scroll_left() - prev_scroll;

        trace!(
            "slider '{}' drag: scroll={} velocity={}",
            self.id,
            element.scroll_left(),
            self.velocity
        );
        true
    }

    /// Pointer released (or touch ended). Hands over to momentum.
    pub fn release(&mut self, element: &mut impl ScrollElement, frames: &mut impl FrameScheduler) {
        if !self.dragging {
            return;
        }

        self.dragging = false;
        element.remove_class(&self.active_class);
        debug!(
            "slider '{}' released with velocity {}",
            self.id, self.velocity
        );
        self.begin_momentum(frames);
    }

    /// Pointer left the element. Ends the drag without momentum.
    pub fn leave(&mut self, element: &mut impl ScrollElement) {
        if !self.dragging {
            return;
        }

        self.dragging = false;
        element.remove_class(&self.active_class);
        debug!("slider '{}' drag ended by pointer leaving", self.id);
    }

    /// Wheel input over the element. Stops any momentum in flight.
    pub fn wheel(&mut self, frames: &mut impl FrameScheduler) {
        if self.momentum.is_some() {
            debug!("slider '{}' momentum stopped by wheel", self.id);
        }
        self.cancel_momentum(frames);
    }

    /// A scheduled frame fired.
    ///
    /// Frames other than the pending one are ignored. Returns true if the
    /// frame advanced the momentum.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        element: &mut impl ScrollElement,
        frames: &mut impl FrameScheduler,
    ) -> bool {
        if self.momentum != Some(handle) {
            trace!("slider '{}' ignoring stale {}", self.id, handle);
            return false;
        }
        self.momentum = None;

        element.set_scroll_left(element.scroll_left() + self.velocity);
        self.velocity *= self.friction;

        if self.velocity.abs() > self.stop_threshold {
            self.momentum = Some(frames.request_frame(&self.id));
            trace!(
                "slider '{}' momentum: scroll={} velocity={}",
                self.id,
                element.scroll_left(),
                self.velocity
            );
        } else {
            debug!(
                "slider '{}' momentum settled at {}",
                self.id,
                element.scroll_left()
            );
        }
        true
    }

    fn begin_momentum(&mut self, frames: &mut impl FrameScheduler) {
        self.cancel_momentum(frames);
        self.momentum = Some(frames.request_frame(&self.id));
    }

    fn cancel_momentum(&mut self, frames: &mut impl FrameScheduler) {
        if let Some(handle) = self.momentum.take() {
            frames.cancel_frame(handle);
        }
    }
}
