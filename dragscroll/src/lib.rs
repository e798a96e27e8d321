pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod frame;
pub mod rect;
pub mod registry;
pub mod slider;

pub use config::SliderConfig;
pub use document::{Document, Node};
pub use element::ScrollElement;
pub use error::ConfigError;
pub use event::{InputEvent, Key, Pointer};
pub use frame::{DueFrame, FrameHandle, FrameQueue, FrameScheduler};
pub use rect::Rect;
pub use registry::SliderSet;
pub use slider::{DragScroller, Phase};
