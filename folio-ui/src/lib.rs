//! folio-ui is the host layer under the folio site.
//!
//! It owns everything that is not site content:
//!
//! - [`element_tree`]: the arena of elements views build, with an accessibility
//!   role per element kind and ancestor traversal for hit testing
//! - [`markup`]: HTML serialisation of an element tree
//! - [`cursor`]: pointer notifications, listener guards and the
//!   [`HoverTarget`] query
//! - [`frame`]: frame scheduling with a cancellable per-frame loop
//! - [`follower`]: the pointer follower, a marker that trails the real pointer
//!   with exponential smoothing and grows over interactive elements
//! - [`mount`]: binding a follower to a pointer source, a frame scheduler and
//!   a marker sink, with release of all three on teardown
//!
//! Browser builds (`target_family = "wasm"`) add [`web`], the
//! `requestAnimationFrame` scheduler, window pointer source and DOM marker.
//!
//! # Headless use
//!
//! ```
//! use std::rc::Rc;
//!
//! use folio_ui::{
//!     FollowerConfig, ManualFrameClock, MarkerStyle, MountedFollower, PointerHub, PxPosition,
//! };
//!
//! let hub = PointerHub::new();
//! let clock = Rc::new(ManualFrameClock::new());
//! let mounted = MountedFollower::mount(&hub, clock.clone(), FollowerConfig::default(), |_: &MarkerStyle| {});
//!
//! hub.dispatch_move(PxPosition::new(100.0, 100.0));
//! clock.advance();
//! assert!((mounted.state().current.x - 15.0).abs() < 1e-9);
//!
//! mounted.unmount();
//! assert_eq!(clock.pending_count(), 0);
//! assert_eq!(hub.listener_count(), 0);
//! ```
#![deny(clippy::unwrap_used)]

pub mod cursor;
pub mod element_tree;
pub mod follower;
pub mod frame;
pub mod logging;
pub mod markup;
pub mod mount;
pub mod px;
pub mod time;
#[cfg(target_family = "wasm")]
pub mod web;

pub use accesskit::Role;
pub use indextree::NodeId;

pub use crate::{
    cursor::{HoverTarget, ListenerGuard, NonInteractive, PointerHub, PointerSource},
    element_tree::{Element, ElementKind, ElementTree, NodeRef},
    follower::{FollowerConfig, FollowerState, MarkerStyle, PointerFollower},
    frame::{FrameLoop, FrameLoopHandle, FrameRequestId, FrameScheduler, ManualFrameClock},
    logging::init_tracing,
    markup::render_html,
    mount::{FollowerProbe, MarkerSink, MountedFollower},
    px::PxPosition,
};
