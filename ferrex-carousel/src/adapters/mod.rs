//! Boundary adapters
//!
//! Each adapter listens to one platform signal and turns it into validated
//! actions (or a navigation intent). None of them make navigation or
//! windowing decisions.

pub mod focus;
pub mod hover;
pub mod keyboard;
pub mod motion;
pub mod pointer;
pub mod reduced_motion;
pub mod resize;
pub mod scroll_target;
pub mod visibility;

pub use focus::{FocusAdapter, FocusTarget};
pub use hover::HoverAdapter;
pub use keyboard::{Key, KeyboardAdapter};
pub use motion::ScrollSink;
pub use pointer::{DragEvent, DragPhase, DragTracker, PointerAdapter};
pub use reduced_motion::ReducedMotionAdapter;
pub use resize::{MeasureScheduler, measure_action};
pub use scroll_target::scroll_target;
pub use visibility::VisibilityAdapter;
