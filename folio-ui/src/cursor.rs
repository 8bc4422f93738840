//! Pointer input: event vocabulary, listener registration and hit-test targets.
//!
//! A host delivers two kinds of notifications:
//!
//! - **move**: the pointer's viewport position changed
//! - **over**: the pointer entered an element, identified by a [`HoverTarget`]
//!
//! Listeners are registered through a [`PointerSource`]. Registration returns a
//! [`ListenerGuard`]; dropping the guard deregisters the listener, so a view that
//! owns its guards cannot leak them past teardown.
//!
//! [`PointerHub`] is the in-process source used headlessly (tests, the `trace`
//! tool). The browser source lives in [`crate::web`].
//!
//! # Usage
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//!
//! use folio_ui::cursor::{PointerHub, PointerSource};
//! use folio_ui::px::PxPosition;
//!
//! let hub = PointerHub::new();
//! let last = Rc::new(Cell::new(PxPosition::ZERO));
//! let sink = last.clone();
//! let guard = hub.on_move(Box::new(move |pos| sink.set(pos)));
//!
//! hub.dispatch_move(PxPosition::new(4.0, 2.0));
//! assert_eq!(last.get(), PxPosition::new(4.0, 2.0));
//!
//! drop(guard);
//! hub.dispatch_move(PxPosition::new(9.0, 9.0));
//! assert_eq!(last.get(), PxPosition::new(4.0, 2.0));
//! ```

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use tracing::trace;

use crate::px::PxPosition;

/// Capability query answered by whatever the host uses as an event target.
///
/// Returns `true` when the target, or any element containing it, is one of the
/// interactive kinds (link, button, text input, multi-line text input). Hosts
/// must walk the containment chain: decorative children such as icons sit
/// inside the interactive element the user is actually pointing at.
pub trait HoverTarget {
    fn is_within_interactive(&self) -> bool;
}

impl<T: HoverTarget + ?Sized> HoverTarget for &T {
    fn is_within_interactive(&self) -> bool {
        (**self).is_within_interactive()
    }
}

/// Target for pointer-over events that hit nothing element-like (the document itself).
#[derive(Debug, Clone, Copy, Default)]
pub struct NonInteractive;

impl HoverTarget for NonInteractive {
    fn is_within_interactive(&self) -> bool {
        false
    }
}

/// Listener for pointer-move notifications.
pub type MoveListener = Box<dyn FnMut(PxPosition)>;

/// Listener for pointer-over notifications.
pub type OverListener = Box<dyn FnMut(&dyn HoverTarget)>;

/// Host-side registration point for pointer listeners.
pub trait PointerSource {
    /// Registers a pointer-move listener until the returned guard is dropped.
    fn on_move(&self, listener: MoveListener) -> ListenerGuard;

    /// Registers a pointer-over listener until the returned guard is dropped.
    fn on_over(&self, listener: OverListener) -> ListenerGuard;
}

/// Keeps a listener registered; deregisters it on drop.
#[must_use = "dropping a ListenerGuard immediately deregisters the listener"]
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    /// Wraps the host-specific deregistration step.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Deregisters now. Equivalent to dropping the guard.
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.release_inner();
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("active", &self.release.is_some())
            .finish()
    }
}

struct ListenerSlots<L> {
    next_id: Cell<u64>,
    slots: RefCell<Vec<(u64, L)>>,
}

impl<L> Default for ListenerSlots<L> {
    fn default() -> Self {
        Self {
            next_id: Cell::new(1),
            slots: RefCell::new(Vec::new()),
        }
    }
}

impl<L: 'static> ListenerSlots<L> {
    fn register(self: &Rc<Self>, listener: L) -> ListenerGuard {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.slots.borrow_mut().push((id, listener));

        let slots: Weak<Self> = Rc::downgrade(self);
        ListenerGuard::new(move || {
            if let Some(slots) = slots.upgrade() {
                slots.slots.borrow_mut().retain(|(slot_id, _)| *slot_id != id);
            }
        })
    }

    fn len(&self) -> usize {
        self.slots.borrow().len()
    }
}

/// In-process pointer source.
///
/// Dispatch is synchronous; listeners must not register or release other
/// listeners on the same hub while being dispatched to.
#[derive(Default)]
pub struct PointerHub {
    moves: Rc<ListenerSlots<MoveListener>>,
    overs: Rc<ListenerSlots<OverListener>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers a pointer-move notification to every registered move listener.
    pub fn dispatch_move(&self, position: PxPosition) {
        trace!(%position, "pointer move");
        for (_, listener) in self.moves.slots.borrow_mut().iter_mut() {
            listener(position);
        }
    }

    /// Delivers a pointer-over notification to every registered over listener.
    pub fn dispatch_over(&self, target: &dyn HoverTarget) {
        for (_, listener) in self.overs.slots.borrow_mut().iter_mut() {
            listener(target);
        }
    }

    /// Number of live listeners, move and over combined.
    pub fn listener_count(&self) -> usize {
        self.moves.len() + self.overs.len()
    }
}

impl PointerSource for PointerHub {
    fn on_move(&self, listener: MoveListener) -> ListenerGuard {
        self.moves.register(listener)
    }

    fn on_over(&self, listener: OverListener) -> ListenerGuard {
        self.overs.register(listener)
    }
}
