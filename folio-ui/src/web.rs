//! Browser host: animation frames, window pointer events and a DOM marker.
//!
//! Every browser resource acquired here is paired with its release:
//! `requestAnimationFrame` with `cancelAnimationFrame`, and
//! `addEventListener` with `removeEventListener`. The JS closures are owned on
//! the Rust side for exactly as long as the browser can still call them.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::{Rc, Weak},
};

use thiserror::Error;
use tracing::{trace, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MouseEvent, Window};

use crate::{
    cursor::{HoverTarget, ListenerGuard, MoveListener, NonInteractive, OverListener, PointerSource},
    element_tree::ElementKind,
    follower::MarkerStyle,
    frame::{FrameCallback, FrameRequestId, FrameScheduler},
    mount::MarkerSink,
    px::PxPosition,
};

/// Failures talking to the browser.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no global `window` object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element `{0}` not found")]
    MissingElement(String),
    #[error("element `{0}` is not an HTML element")]
    NotHtmlElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub fn window() -> Result<Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

pub fn document() -> Result<Document, HostError> {
    window()?.document().ok_or(HostError::NoDocument)
}

/// Looks up `#id` and casts it to an [`HtmlElement`].
pub fn html_element_by_id(document: &Document, id: &str) -> Result<HtmlElement, HostError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| HostError::MissingElement(id.to_owned()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| HostError::NotHtmlElement(id.to_owned()))
}

impl HoverTarget for Element {
    fn is_within_interactive(&self) -> bool {
        matches!(self.closest(&ElementKind::interactive_selector()), Ok(Some(_)))
    }
}

struct PendingFrame {
    handle: i32,
    closure: Closure<dyn FnMut()>,
}

struct SchedulerInner {
    window: Window,
    next_id: Cell<u64>,
    live: RefCell<HashMap<FrameRequestId, PendingFrame>>,
    // Closures that already ran. Freed at the start of the next frame, never
    // from inside their own invocation.
    spent: RefCell<Vec<Closure<dyn FnMut()>>>,
}

impl SchedulerInner {
    fn begin_frame(&self, id: FrameRequestId) {
        let mut spent = self.spent.borrow_mut();
        spent.clear();
        if let Some(frame) = self.live.borrow_mut().remove(&id) {
            spent.push(frame.closure);
        }
    }
}

/// [`FrameScheduler`] backed by `requestAnimationFrame`.
#[derive(Clone)]
pub struct AnimationFrameScheduler {
    inner: Rc<SchedulerInner>,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            inner: Rc::new(SchedulerInner {
                window,
                next_id: Cell::new(0),
                live: RefCell::new(HashMap::new()),
                spent: RefCell::new(Vec::new()),
            }),
        }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&self, callback: FrameCallback) -> FrameRequestId {
        let id = FrameRequestId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);

        let weak: Weak<SchedulerInner> = Rc::downgrade(&self.inner);
        let closure: Closure<dyn FnMut()> = Closure::once(move || {
            if let Some(inner) = weak.upgrade() {
                inner.begin_frame(id);
            }
            callback();
        });

        match self
            .inner
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(handle) => {
                self.inner
                    .live
                    .borrow_mut()
                    .insert(id, PendingFrame { handle, closure });
            }
            Err(err) => warn!(error = ?err, "requestAnimationFrame failed"),
        }
        id
    }

    fn cancel_frame(&self, id: FrameRequestId) {
        let frame = self.inner.live.borrow_mut().remove(&id);
        if let Some(frame) = frame {
            if let Err(err) = self.inner.window.cancel_animation_frame(frame.handle) {
                warn!(error = ?err, "cancelAnimationFrame failed");
            }
            trace!(id = id.0, "animation frame cancelled");
        }
    }
}

/// [`PointerSource`] listening on the window's `mousemove` and `mouseover`.
pub struct WindowPointerSource {
    window: Window,
}

impl WindowPointerSource {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

/// Adds `handler` for `event` on `target` until the returned guard is dropped.
pub fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> ListenerGuard {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        warn!(event, error = ?err, "addEventListener failed");
    }

    let target = target.clone();
    ListenerGuard::new(move || {
        if let Err(err) =
            target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            warn!(event, error = ?err, "removeEventListener failed");
        }
        drop(closure);
    })
}

impl PointerSource for WindowPointerSource {
    fn on_move(&self, mut listener: MoveListener) -> ListenerGuard {
        listen(&self.window, "mousemove", move |event: Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                listener(PxPosition::new(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                ));
            }
        })
    }

    fn on_over(&self, mut listener: OverListener) -> ListenerGuard {
        listen(&self.window, "mouseover", move |event: Event| {
            match event.target().and_then(|target| target.dyn_into::<Element>().ok()) {
                Some(element) => listener(&element),
                None => listener(&NonInteractive),
            }
        })
    }
}

/// [`MarkerSink`] that positions an absolutely placed DOM element.
pub struct ElementMarker {
    element: HtmlElement,
}

impl ElementMarker {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl MarkerSink for ElementMarker {
    fn render(&mut self, marker: &MarkerStyle) {
        let style = self.element.style();
        let left = format!("{}px", marker.position.x);
        let top = format!("{}px", marker.position.y);
        let result = style
            .set_property("left", &left)
            .and_then(|_| style.set_property("top", &top))
            .and_then(|_| style.set_property("transform", &marker.transform()));
        if let Err(err) = result {
            trace!(error = ?err, "marker style update failed");
        }
    }
}
