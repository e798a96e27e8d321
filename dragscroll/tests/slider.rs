use dragscroll::{
    DragScroller, FrameQueue, FrameScheduler, Node, Phase, Rect, ScrollElement, SliderConfig,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// A 40-cell wide slider over 1000 cells of content.
fn node_at(left: u16, scroll: f64) -> Node {
    let mut node = Node::new("slider", Rect::new(left, 0, 40, 5), 1000).class("list-slider");
    node.set_scroll_left(scroll);
    node
}

fn slider() -> DragScroller {
    DragScroller::new("slider", &SliderConfig::default())
}

/// Fire one frame's worth of callbacks.
fn step(slider: &mut DragScroller, node: &mut Node, queue: &mut FrameQueue) {
    for due in queue.take_due() {
        slider.on_frame(due.handle, node, queue);
    }
}

// ============================================================================
// Dragging
// ============================================================================

#[test]
fn test_drag_follows_pointer_at_half_speed() {
    let mut node = node_at(0, 0.0);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    slider.press(&mut node, &mut queue, 100.0);
    assert_eq!(slider.phase(), Phase::Dragging);

    assert!(slider.move_to(&mut node, 80.0));
    assert!(approx(node.scroll_left(), 10.0));

    assert!(slider.move_to(&mut node, 60.0));
    assert!(approx(node.scroll_left(), 20.0));
    assert!(approx(slider.velocity(), 10.0));
}

#[test]
fn test_drag_is_relative_to_element_left_edge() {
    let mut node = node_at(10, 100.0);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    // Anchor is 20 cells into the element
    slider.press(&mut node, &mut queue, 30.0);
    slider.move_to(&mut node, 50.0);

    assert!(approx(node.scroll_left(), 90.0));
    assert!(approx(slider.velocity(), -10.0));
}

#[test]
fn test_velocity_is_clamped_delta_at_edge() {
    let mut node = node_at(0, 0.0);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    slider.press(&mut node, &mut queue, 100.0);
    // Asks for -10, the element stops at 0
    slider.move_to(&mut node, 120.0);

    assert!(approx(node.scroll_left(), 0.0));
    assert!(approx(slider.velocity(), 0.0));
}

#[test]
fn test_move_without_press_is_ignored() {
    let mut node = node_at(0, 50.0);
    let mut slider = slider();

    assert!(!slider.move_to(&mut node, 10.0));
    assert!(approx(node.scroll_left(), 50.0));
    assert_eq!(slider.phase(), Phase::Idle);
}

#[test]
fn test_active_class_tracks_drag() {
    let mut node = node_at(0, 0.0);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    slider.press(&mut node, &mut queue, 5.0);
    assert!(node.has_class("active"));
    assert!(node.has_class("list-slider"));

    slider.release(&mut node, &mut queue);
    assert!(!node.has_class("active"));
    assert!(node.has_class("list-slider"));
}

#[test]
fn test_custom_active_class() {
    let config = SliderConfig::default().active_class("grabbing");
    let mut node = node_at(0, 0.0);
    let mut queue = FrameQueue::new();
    let mut slider = DragScroller::new("slider", &config);

    slider.press(&mut node, &mut queue, 5.0);
    assert!(node.has_class("grabbing"));
    assert!(!node.has_class("active"));
}

// ============================================================================
// Momentum
// ============================================================================

#[test]
fn test_release_starts_momentum() {
    let mut node = node_at(0, 0.0);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    slider.press(&mut node, &mut queue, 100.0);
    slider.move_to(&mut node, 80.0);
    slider.move_to(&mut node, 60.0);
    slider.release(&mut node, &mut queue);

    assert_eq!(slider.phase(), Phase::Momentum);
    assert!(!slider.is_dragging());
    assert_eq!(queue.len(), 1);

    step(&mut slider, &mut node, &mut queue);
    assert!(approx(node.scroll_left(), 30.0));
    assert!(approx(slider.velocity(), 9.5));

    step(&mut slider, &mut node, &mut queue);
    assert!(approx(node.scroll_left(), 39.5));
    assert!(approx(slider.velocity(), 9.025));
}

#[test]
fn test_momentum_decays_geometrically_and_stops() {
    let mut node = node_at(0, 0.0);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    slider.press(&mut node, &mut queue, 100.0);
    slider.move_to(&mut node, 80.0);
    slider.move_to(&mut node, 60.0);
    slider.release(&mut node, &mut queue);

    let mut frame = 0;
    while !queue.is_empty() {
        let before = node.scroll_left();
        step(&mut slider, &mut node, &mut queue);
        let applied = node.scroll_left() - before;
        assert!(
            approx(applied, 10.0 * 0.95f64.powi(frame)),
            "frame {} applied {}",
            frame,
            applied
        );
        frame += 1;
    }

    // First k with 10 * 0.95^k <= 0.5 is 59
    assert_eq!(frame, 59);
    assert!(slider.velocity().abs() <= 0.5);
    assert_eq!(slider.phase(), Phase::Idle);
    assert!(slider.momentum().is_none());
}

#[test]
fn test_leftward_momentum_decays_and_stops() {
    let mut node = node_at(0, 500.0);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    slider.press(&mut node, &mut queue, 60.0);
    slider.move_to(&mut node, 80.0);
    slider.move_to(&mut node, 100.0);
    assert!(approx(node.scroll_left(), 480.0));
    assert!(approx(slider.velocity(), -10.0));
    slider.release(&mut node, &mut queue);

    let mut frame = 0;
    while !queue.is_empty() {
        let before = node.scroll_left();
        step(&mut slider, &mut node, &mut queue);
        let applied = node.scroll_left() - before;
        assert!(
            approx(applied, -10.0 * 0.95f64.powi(frame)),
            "frame {} applied {}",
            frame,
            applied
        );
        frame += 1;
    }

    // Stops on magnitude, same frame count as the rightward throw
    assert_eq!(frame, 59);
    assert!(slider.velocity() < 0.0);
    assert!(slider.velocity().abs() <= 0.5);
    assert_eq!(slider.phase(), Phase::Idle);
    assert!(slider.momentum().is_none());
}

#[test]
fn test_release_with_no_motion_runs_one_frame() {
    let mut node = node_at(0, 40.0);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    slider.press(&mut node, &mut queue, 10.0);
    slider.release(&mut node, &mut queue);
    assert_eq!(queue.len(), 1);

    step(&mut slider, &mut node, &mut queue);
    assert!(queue.is_empty());
    assert!(approx(node.scroll_left(), 40.0));
    assert_eq!(slider.phase(), Phase::Idle);
}

#[test]
fn test_momentum_is_clamped_by_element() {
    // Only 20 cells of scroll room
    let mut node = Node::new("slider", Rect::new(0, 0, 40, 5), 60);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    slider.press(&mut node, &mut queue, 100.0);
    slider.move_to(&mut node, 80.0);
    slider.move_to(&mut node, 60.0);
    slider.release(&mut node, &mut queue);

    while !queue.is_empty() {
        step(&mut slider, &mut node, &mut queue);
    }
    assert!(approx(node.scroll_left(), 20.0));
}

#[test]
fn test_release_without_press_is_ignored() {
    let mut node = node_at(0, 0.0);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    slider.release(&mut node, &mut queue);
    assert!(queue.is_empty());
    assert_eq!(slider.phase(), Phase::Idle);
}

// ============================================================================
// Cancellation
// ============================================================================

#[test]
fn test_wheel_freezes_momentum() {
    let mut node = node_at(0, 0.0);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    slider.press(&mut node, &mut queue, 100.0);
    slider.move_to(&mut node, 60.0);
    slider.release(&mut node, &mut queue);
    step(&mut slider, &mut node, &mut queue);
    let frozen = node.scroll_left();

    slider.wheel(&mut queue);
    assert!(queue.is_empty());
    assert_eq!(slider.phase(), Phase::Idle);

    step(&mut slider, &mut node, &mut queue);
    assert!(approx(node.scroll_left(), frozen));
}

#[test]
fn test_press_during_momentum_cancels_it() {
    let mut node = node_at(0, 0.0);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    slider.press(&mut node, &mut queue, 100.0);
    slider.move_to(&mut node, 60.0);
    slider.release(&mut node, &mut queue);
    let pending = slider.momentum().expect("momentum scheduled");

    slider.press(&mut node, &mut queue, 50.0);
    assert_eq!(slider.phase(), Phase::Dragging);
    assert!(slider.momentum().is_none());
    assert!(!queue.is_pending(pending));
    assert!(queue.is_empty());
}

#[test]
fn test_stale_frame_does_not_move_element() {
    let mut node = node_at(0, 0.0);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    slider.press(&mut node, &mut queue, 100.0);
    slider.move_to(&mut node, 60.0);
    slider.release(&mut node, &mut queue);
    let stale = slider.momentum().expect("momentum scheduled");
    let before = node.scroll_left();

    slider.wheel(&mut queue);
    assert!(!slider.on_frame(stale, &mut node, &mut queue));
    assert!(approx(node.scroll_left(), before));
    assert!(queue.is_empty());
}

#[test]
fn test_wheel_without_momentum_is_noop() {
    let mut node = node_at(0, 25.0);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    slider.wheel(&mut queue);
    slider.wheel(&mut queue);
    assert!(queue.is_empty());
    assert_eq!(slider.phase(), Phase::Idle);
    assert!(approx(node.scroll_left(), 25.0));

    // Also a no-op mid-drag
    slider.press(&mut node, &mut queue, 10.0);
    slider.wheel(&mut queue);
    assert_eq!(slider.phase(), Phase::Dragging);
}

#[test]
fn test_never_dragging_with_pending_frame() {
    let mut node = node_at(0, 200.0);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    let check = |slider: &DragScroller, queue: &FrameQueue| {
        assert!(!(slider.is_dragging() && !queue.is_empty()));
    };

    for round in 0..3 {
        slider.press(&mut node, &mut queue, 100.0);
        check(&slider, &queue);
        slider.move_to(&mut node, 90.0 - round as f64 * 10.0);
        check(&slider, &queue);
        slider.release(&mut node, &mut queue);
        check(&slider, &queue);
        step(&mut slider, &mut node, &mut queue);
        check(&slider, &queue);
    }
}

// ============================================================================
// Pointer leaving
// ============================================================================

#[test]
fn test_leave_ends_drag_without_momentum() {
    let mut node = node_at(0, 50.0);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    slider.press(&mut node, &mut queue, 0.0);
    slider.move_to(&mut node, 20.0);
    assert!(approx(node.scroll_left(), 40.0));

    slider.leave(&mut node);
    assert!(!slider.is_dragging());
    assert!(!node.has_class("active"));
    assert!(slider.momentum().is_none());
    assert!(queue.is_empty());
    assert!(approx(node.scroll_left(), 40.0));
}

#[test]
fn test_leave_during_momentum_keeps_it_running() {
    let mut node = node_at(0, 0.0);
    let mut queue = FrameQueue::new();
    let mut slider = slider();

    slider.press(&mut node, &mut queue, 100.0);
    slider.move_to(&mut node, 60.0);
    slider.release(&mut node, &mut queue);

    slider.leave(&mut node);
    assert_eq!(slider.phase(), Phase::Momentum);
    assert_eq!(queue.len(), 1);
}

// ============================================================================
// Scheduler contract
// ============================================================================

#[test]
fn test_cancel_fired_handle_is_noop() {
    let mut queue = FrameQueue::new();
    let fired = queue.request_frame("slider");
    assert_eq!(queue.take_due().len(), 1);

    queue.cancel_frame(fired);
    queue.cancel_frame(fired);
    assert!(queue.is_empty());

    let next = queue.request_frame("slider");
    queue.cancel_frame(fired);
    assert!(queue.is_pending(next));
}
