//! Platform-agnostic carousel interaction engine.
//!
//! The engine tracks a committed slide index, decides which slide positions
//! must stay mounted, drives autoplay under a set of blocking gates, detects
//! when an in-flight scroll has settled and produces accessibility
//! announcements. Rendering is left to the host: it feeds raw platform
//! signals in and draws whatever [`RenderSlot`]s come out.
//!
//! Data flow is one-directional:
//!
//! - adapters turn platform signals into validated [`Action`]s
//! - the [`Store`] reduces actions into a new [`CarouselState`]
//! - the virtualization window, settle machine, autoplay evaluator and
//!   announcer are pure functions of that state
//!
//! [`CarouselEngine`] wires those pieces together behind one owner.

pub mod a11y;
pub mod actions;
pub mod adapters;
pub mod autoplay;
pub mod constants;
pub mod engine;
pub mod error;
pub mod fenwick;
pub mod geometry;
pub mod math;
pub mod motion;
pub mod options;
pub mod settle;
pub mod store;
pub mod types;
pub mod virtualization;

pub use a11y::{AnnounceInput, AnnounceReason, Announcer};
pub use actions::{
    A11yAction, Action, ActionCategory, GateAction, MeasureAction,
    MotionAction, NavigationAction, VirtualAction,
};
pub use autoplay::{
    AutoplayController, AutoplayPolicy, BlockReason, GateEvaluation,
    IntervalTicker, PlaybackControls,
};
pub use engine::{Affordances, CarouselEngine, FrameOutput};
pub use error::{CarouselError, Result};
pub use fenwick::FenwickTree;
pub use geometry::{SlideGeometry, SlideRect, TrackLayout};
pub use motion::{Easing, ScrollBehavior, ScrollCommand, SnapAnimator};
pub use options::{
    A11yOptions, AutoplayMode, AutoplayOptions, CarouselOptions,
    CommitThreshold, InteractionOptions, LayoutOptions, MeasureOptions,
    MotionOptions,
};
pub use settle::{CommitDecision, SettleConfig, SettleMachine, SettlePhase};
pub use store::{CarouselState, GateSet, Store, reduce};
pub use types::{
    Align, Axis, CommitSource, Gate, LiveMode, LogicalIndex, NavigationKind,
    ReadingDirection,
};
pub use virtualization::{RenderSlot, SlotKey, VirtualWindow};
