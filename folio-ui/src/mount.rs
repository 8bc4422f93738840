//! Mounting the pointer follower onto a host.
//!
//! Mounting acquires three resources together: the pointer-move listener, the
//! pointer-over listener, and the frame loop. [`MountedFollower`] owns all
//! three. [`MountedFollower::unmount`] and `Drop` release them together, so a
//! teardown on any path (explicit unmount, parent re-render, panic unwinding)
//! leaves nothing registered and nothing scheduled.

use std::{cell::RefCell, rc::Rc};

use tracing::{debug, info};

use crate::{
    cursor::{ListenerGuard, PointerSource},
    follower::{FollowerConfig, FollowerState, MarkerStyle, PointerFollower},
    frame::{FrameLoop, FrameLoopHandle, FrameScheduler},
};

/// Receives the marker style once per tick.
pub trait MarkerSink {
    fn render(&mut self, marker: &MarkerStyle);
}

impl<F: FnMut(&MarkerStyle)> MarkerSink for F {
    fn render(&mut self, marker: &MarkerStyle) {
        self(marker)
    }
}

/// A mounted follower view.
#[must_use = "dropping a MountedFollower unmounts it"]
pub struct MountedFollower {
    follower: Rc<RefCell<PointerFollower>>,
    move_listener: Option<ListenerGuard>,
    over_listener: Option<ListenerGuard>,
    frame_loop: Option<FrameLoopHandle>,
}

impl MountedFollower {
    /// Subscribes to `source`, starts ticking on `scheduler`, and renders into `sink`.
    pub fn mount(
        source: &dyn PointerSource,
        scheduler: Rc<dyn FrameScheduler>,
        config: FollowerConfig,
        mut sink: impl MarkerSink + 'static,
    ) -> Self {
        let follower = Rc::new(RefCell::new(PointerFollower::new(config)));

        let on_move = follower.clone();
        let move_listener = source.on_move(Box::new(move |position| {
            on_move.borrow_mut().on_pointer_move(position);
        }));

        let on_over = follower.clone();
        let over_listener = source.on_over(Box::new(move |target| {
            on_over.borrow_mut().on_pointer_over(target);
        }));

        let on_tick = follower.clone();
        let frame_loop = FrameLoop::start(scheduler, move || {
            let marker = on_tick.borrow_mut().tick();
            sink.render(&marker);
        });

        info!(ease = config.ease, hover_scale = config.hover_scale, "pointer follower mounted");
        Self {
            follower,
            move_listener: Some(move_listener),
            over_listener: Some(over_listener),
            frame_loop: Some(frame_loop),
        }
    }

    /// Snapshot of the follower's state.
    pub fn state(&self) -> FollowerState {
        *self.follower.borrow().state()
    }

    /// Read-only handle that outlives the mount, for observing teardown.
    pub fn probe(&self) -> FollowerProbe {
        FollowerProbe {
            follower: self.follower.clone(),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.frame_loop.is_some()
    }

    /// Releases listeners and cancels the pending frame, returning the final state.
    pub fn unmount(mut self) -> FollowerState {
        self.release();
        self.state()
    }

    fn release(&mut self) {
        let was_mounted = self.frame_loop.is_some();
        self.move_listener.take();
        self.over_listener.take();
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.stop();
        }
        if was_mounted {
            debug!("pointer follower unmounted");
        }
    }
}

impl Drop for MountedFollower {
    fn drop(&mut self) {
        self.release();
    }
}

/// Shared read access to a follower's state.
#[derive(Clone)]
pub struct FollowerProbe {
    follower: Rc<RefCell<PointerFollower>>,
}

impl FollowerProbe {
    pub fn state(&self) -> FollowerState {
        *self.follower.borrow().state()
    }
}
