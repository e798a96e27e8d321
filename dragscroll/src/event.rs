use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// Which kind of pointer produced a press, move or release.
///
/// Touch hosts report the first changed touch point's X coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pointer {
    #[default]
    Mouse,
    Touch,
}

/// Host input, already reduced to what the sliders care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed or touch started
    Down { x: u16, y: u16, pointer: Pointer },
    /// Pointer moved with the primary button held
    Drag { x: u16, y: u16, pointer: Pointer },
    /// Pointer moved with no button held (hover)
    Moved { x: u16, y: u16 },
    /// Primary button released or touch ended
    Up { x: u16, y: u16, pointer: Pointer },
    /// Wheel input, in notches
    Wheel {
        x: u16,
        y: u16,
        delta_x: i16,
        delta_y: i16,
    },
    /// Key press
    Key(Key),
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl InputEvent {
    /// Translate a raw crossterm event.
    /// Returns None for input the sliders never look at (non-primary
    /// buttons, key releases, focus and paste events).
    pub fn from_crossterm(event: &CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Mouse(mouse) => {
                let x = mouse.column;
                let y = mouse.row;
                let shift = mouse.modifiers.contains(KeyModifiers::SHIFT);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Down {
                        x,
                        y,
                        pointer: Pointer::Mouse,
                    }),
                    MouseEventKind::Drag(MouseButton::Left) => Some(InputEvent::Drag {
                        x,
                        y,
                        pointer: Pointer::Mouse,
                    }),
                    MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::Up {
                        x,
                        y,
                        pointer: Pointer::Mouse,
                    }),
                    MouseEventKind::Moved => Some(InputEvent::Moved { x, y }),
                    // Shift turns the vertical wheel sideways, same as browsers do
                    MouseEventKind::ScrollDown if shift => Some(wheel(x, y, 1, 0)),
                    MouseEventKind::ScrollUp if shift => Some(wheel(x, y, -1, 0)),
                    MouseEventKind::ScrollDown => Some(wheel(x, y, 0, 1)),
                    MouseEventKind::ScrollUp => Some(wheel(x, y, 0, -1)),
                    MouseEventKind::ScrollRight => Some(wheel(x, y, 1, 0)),
                    MouseEventKind::ScrollLeft => Some(wheel(x, y, -1, 0)),
                    _ => None,
                }
            }
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                Some(InputEvent::Key(key.code.into()))
            }
            CrosstermEvent::Resize(width, height) => Some(InputEvent::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}

fn wheel(x: u16, y: u16, delta_x: i16, delta_y: i16) -> InputEvent {
    InputEvent::Wheel {
        x,
        y,
        delta_x,
        delta_y,
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Esc => Key::Escape,
            _ => Key::Other,
        }
    }
}
