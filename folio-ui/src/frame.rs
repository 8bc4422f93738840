//! Frame scheduling with structured cancellation.
//!
//! A [`FrameScheduler`] runs a one-shot callback on the host's next display
//! frame. [`FrameLoop`] builds a repeating tick on top of it. Each frame
//! callback runs the tick and then requests the following frame, so exactly
//! one request is pending while the loop is alive.
//!
//! The loop is owned through a [`FrameLoopHandle`]. Stopping the handle,
//! explicitly or by dropping it, cancels the pending request. No tick runs
//! after that.
//!
//! # Example
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//!
//! use folio_ui::frame::{FrameLoop, ManualFrameClock};
//!
//! let clock = Rc::new(ManualFrameClock::new());
//! let ticks = Rc::new(Cell::new(0));
//! let counter = ticks.clone();
//! let handle = FrameLoop::start(clock.clone(), move || counter.set(counter.get() + 1));
//!
//! clock.advance_by(3);
//! assert_eq!(ticks.get(), 3);
//!
//! handle.stop();
//! clock.advance_by(3);
//! assert_eq!(ticks.get(), 3);
//! assert_eq!(clock.pending_count(), 0);
//! ```

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use tracing::{debug, trace};

/// Callback run once on a future frame.
pub type FrameCallback = Box<dyn FnOnce()>;

/// Identifies one pending frame request on its scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequestId(pub u64);

/// Host-provided "run this on the next frame" primitive.
pub trait FrameScheduler {
    /// Schedules `callback` for the next frame.
    fn request_frame(&self, callback: FrameCallback) -> FrameRequestId;

    /// Cancels a pending request. Unknown or already-run ids are ignored.
    fn cancel_frame(&self, id: FrameRequestId);
}

struct LoopShared {
    scheduler: Rc<dyn FrameScheduler>,
    tick: RefCell<Box<dyn FnMut()>>,
    pending: Cell<Option<FrameRequestId>>,
    running: Cell<bool>,
    frames: Cell<u64>,
}

impl LoopShared {
    fn schedule_next(self: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let id = self.scheduler.request_frame(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.run_frame();
            }
        }));
        self.pending.set(Some(id));
    }

    fn run_frame(self: &Rc<Self>) {
        self.pending.set(None);
        if !self.running.get() {
            return;
        }

        let frame = self.frames.get() + 1;
        self.frames.set(frame);
        trace!(frame, "frame tick");
        {
            let mut tick = self.tick.borrow_mut();
            (*tick)();
        }

        if self.running.get() {
            self.schedule_next();
        }
    }

    fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
        debug!(frames = self.frames.get(), "frame loop stopped");
    }
}

/// A per-frame tick chain.
pub struct FrameLoop;

impl FrameLoop {
    /// Starts ticking on `scheduler`. The first tick runs on the next frame.
    pub fn start(scheduler: Rc<dyn FrameScheduler>, tick: impl FnMut() + 'static) -> FrameLoopHandle {
        let shared = Rc::new(LoopShared {
            scheduler,
            tick: RefCell::new(Box::new(tick)),
            pending: Cell::new(None),
            running: Cell::new(true),
            frames: Cell::new(0),
        });
        shared.schedule_next();
        debug!("frame loop started");
        FrameLoopHandle { shared }
    }
}

/// Owner of a running [`FrameLoop`]. Dropping it stops the loop.
#[must_use = "dropping a FrameLoopHandle immediately stops the loop"]
pub struct FrameLoopHandle {
    shared: Rc<LoopShared>,
}

impl FrameLoopHandle {
    /// Stops the loop and cancels its pending frame. Idempotent.
    pub fn stop(&self) {
        self.shared.stop();
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.get()
    }

    /// Number of ticks run so far.
    pub fn frames(&self) -> u64 {
        self.shared.frames.get()
    }

    /// The currently pending request, if any.
    pub fn pending_request(&self) -> Option<FrameRequestId> {
        self.shared.pending.get()
    }
}

impl Drop for FrameLoopHandle {
    fn drop(&mut self) {
        self.shared.stop();
    }
}

/// Scheduler driven by explicit calls to [`advance`](Self::advance).
///
/// Used wherever there is no display: tests and the headless `trace` tool.
#[derive(Default)]
pub struct ManualFrameClock {
    next_id: Cell<u64>,
    pending: RefCell<Vec<(FrameRequestId, FrameCallback)>>,
    frame: Cell<u64>,
}

impl ManualFrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one frame: every callback pending at call time, in request order.
    ///
    /// Callbacks requested while the frame runs are deferred to the next one.
    /// Returns how many callbacks ran.
    pub fn advance(&self) -> usize {
        let due = std::mem::take(&mut *self.pending.borrow_mut());
        self.frame.set(self.frame.get() + 1);
        let count = due.len();
        for (_, callback) in due {
            callback();
        }
        count
    }

    /// Runs `frames` frames in a row.
    pub fn advance_by(&self, frames: usize) {
        for _ in 0..frames {
            self.advance();
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Number of frames advanced so far.
    pub fn frame(&self) -> u64 {
        self.frame.get()
    }
}

impl FrameScheduler for ManualFrameClock {
    fn request_frame(&self, callback: FrameCallback) -> FrameRequestId {
        let id = FrameRequestId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.pending.borrow_mut().push((id, callback));
        id
    }

    fn cancel_frame(&self, id: FrameRequestId) {
        self.pending
            .borrow_mut()
            .retain(|(pending_id, _)| *pending_id != id);
    }
}
