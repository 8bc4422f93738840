//! Browser entry point.
//!
//! The host renders [`Site`] into `#app-root` after every state change and
//! listens for clicks and input on that root. The cursor marker sits outside
//! the root so re-rendering never replaces it.

use std::{cell::RefCell, rc::Rc};

use folio_ui::{
    ListenerGuard, MountedFollower,
    web::{self as host, AnimationFrameScheduler, ElementMarker, HostError, WindowPointerSource},
};
use tracing::{debug, info, warn};
use wasm_bindgen::{JsCast, JsValue, prelude::wasm_bindgen};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::{
    FolioConfig, Page, Site,
    app::{APP_ROOT_ID, STYLE_ID, STYLESHEET},
    contact::{ContactTransport, Field, SimulatedTransport},
    view::{
        ACTION_ATTRIBUTE, CURSOR_ID, LinkStyle, NAV_ATTRIBUTE, SUBMIT_CONTACT_ACTION,
        TOGGLE_MENU_ACTION,
    },
};

thread_local! {
    static RUNNING: RefCell<Option<Running>> = const { RefCell::new(None) };
}

/// Everything acquired by [`run`], released together by [`stop`].
struct Running {
    _follower: MountedFollower,
    _listeners: [ListenerGuard; 2],
}

struct App {
    site: RefCell<Site>,
    root: HtmlElement,
    transport: SimulatedTransport,
}

impl App {
    fn render(&self) {
        let site = self.site.borrow();
        self.root.set_inner_html(&site.body_html());
        if let Err(err) = self
            .root
            .set_attribute("data-page", site.navigator().current().slug())
        {
            warn!(error = ?err, "failed to tag the current page");
        }
        if let Some(document) = self.root.owner_document() {
            document.set_title(&site.title());
        }
    }

    fn on_click(self: &Rc<Self>, event: &Event) {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };

        if let Some(slug) = attribute_of_closest(&target, NAV_ATTRIBUTE) {
            event.prevent_default();
            let page = Page::from_slug(&slug);
            self.site.borrow_mut().navigator_mut().navigate(page);
            self.render();
            if let Ok(window) = host::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            return;
        }

        match attribute_of_closest(&target, ACTION_ATTRIBUTE).as_deref() {
            Some(TOGGLE_MENU_ACTION) => {
                self.site.borrow_mut().navigator_mut().toggle_menu();
                self.render();
            }
            Some(SUBMIT_CONTACT_ACTION) => {
                event.prevent_default();
                self.submit();
            }
            Some(other) => debug!(action = other, "unhandled action"),
            None => {}
        }
    }

    fn on_input(&self, event: &Event) {
        let Some(target) = event.target() else {
            return;
        };
        let (name, value) = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
            (input.name(), input.value())
        } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
            (area.name(), area.value())
        } else {
            return;
        };
        let Some(field) = Field::from_name(&name) else {
            return;
        };

        let can_submit = {
            let mut site = self.site.borrow_mut();
            site.contact_mut().set_field(field, value);
            site.contact().can_submit()
        };
        // Re-rendering here would replace the focused field.
        self.sync_submit_button(can_submit);
    }

    fn sync_submit_button(&self, can_submit: bool) {
        let selector = format!("[{ACTION_ATTRIBUTE}=\"{SUBMIT_CONTACT_ACTION}\"]");
        let Ok(Some(button)) = self.root.query_selector(&selector) else {
            return;
        };
        let result = if can_submit {
            button.remove_attribute("disabled")
        } else {
            button.set_attribute("disabled", "")
        };
        if let Err(err) = result {
            warn!(error = ?err, "failed to update the submit button");
        }
    }

    fn submit(self: &Rc<Self>) {
        let message = match self.site.borrow_mut().contact_mut().begin_submit() {
            Ok(message) => message,
            Err(err) => {
                debug!(%err, "submission ignored");
                return;
            }
        };
        self.render();

        let app = Rc::clone(self);
        spawn_local(async move {
            let outcome = app.transport.send(message).await;
            app.site.borrow_mut().contact_mut().complete(outcome);
            app.render();
        });
    }
}

fn attribute_of_closest(element: &Element, attribute: &str) -> Option<String> {
    element
        .closest(&format!("[{attribute}]"))
        .ok()
        .flatten()
        .and_then(|found| found.get_attribute(attribute))
}

fn ensure_stylesheet(document: &Document) -> Result<(), HostError> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(STYLESHEET));
    let head = document.head().ok_or(HostError::MissingElement("head".into()))?;
    head.append_child(&style)?;
    Ok(())
}

/// Returns `#app-root`, writing the whole shell into `<body>` when the page
/// was not exported by the CLI.
fn ensure_root(document: &Document, site: &Site) -> Result<HtmlElement, HostError> {
    if let Ok(root) = host::html_element_by_id(document, APP_ROOT_ID) {
        return Ok(root);
    }
    let body = document.body().ok_or(HostError::MissingElement("body".into()))?;
    body.set_inner_html(&site.shell());
    host::html_element_by_id(document, APP_ROOT_ID)
}

fn initial_page(document: &Document) -> Page {
    if let Some(slug) = document
        .get_element_by_id(APP_ROOT_ID)
        .and_then(|root| root.get_attribute("data-page"))
    {
        return Page::from_slug(&slug);
    }
    host::window()
        .ok()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Page::from_slug(hash.trim_start_matches('#')))
        .unwrap_or_default()
}

fn start(config: FolioConfig) -> Result<Running, HostError> {
    let window = host::window()?;
    let document = host::document()?;
    ensure_stylesheet(&document)?;

    let site = Site::on_page(initial_page(&document), LinkStyle::Fragment);
    let root = ensure_root(&document, &site)?;
    let app = Rc::new(App {
        site: RefCell::new(site),
        root,
        transport: SimulatedTransport::new(config.simulated_delay()),
    });
    app.render();

    let clicks = {
        let app = Rc::clone(&app);
        host::listen(&app.root.clone(), "click", move |event| app.on_click(&event))
    };
    let input = {
        let app = Rc::clone(&app);
        host::listen(&app.root.clone(), "input", move |event| app.on_input(&event))
    };

    let marker = ElementMarker::new(host::html_element_by_id(&document, CURSOR_ID)?);
    let follower = MountedFollower::mount(
        &WindowPointerSource::new(window.clone()),
        Rc::new(AnimationFrameScheduler::new(window)),
        config.follower(),
        marker,
    );

    Ok(Running {
        _follower: follower,
        _listeners: [clicks, input],
    })
}

/// Starts the site. Runs once when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    let config = FolioConfig::bundled().unwrap_or_default();
    folio_ui::init_tracing(&config.logging.filter);

    let running = start(config).map_err(|err| JsValue::from_str(&err.to_string()))?;
    RUNNING.with(|slot| slot.replace(Some(running)));
    info!("folio started");
    Ok(())
}

/// Unmounts the pointer follower and removes the page listeners.
#[wasm_bindgen]
pub fn stop() {
    if RUNNING.with(|slot| slot.take()).is_some() {
        info!("folio stopped");
    }
}
