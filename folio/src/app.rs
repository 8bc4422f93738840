//! Site state and document rendering.

use folio_ui::{ElementTree, markup::escape, render_html};

use crate::{
    contact::ContactForm,
    content::PROFILE,
    page::{Navigator, Page},
    view::{self, LinkStyle, ViewContext},
};

/// The bundled stylesheet.
pub const STYLESHEET: &str = include_str!("../assets/site.css");

/// Id of the element whose contents are re-rendered on every state change.
pub const APP_ROOT_ID: &str = "app-root";

/// Id given to the stylesheet node, so the browser host does not add a second one.
pub const STYLE_ID: &str = "folio-style";

/// Entry module of the browser bundle, relative to an exported document.
pub const BUNDLE_ENTRY: &str = "./pkg/folio.js";

/// All mutable state of the running site.
#[derive(Debug, Default)]
pub struct Site {
    navigator: Navigator,
    contact: ContactForm,
    links: LinkStyle,
}

impl Site {
    pub fn new(links: LinkStyle) -> Self {
        Self {
            links,
            ..Self::default()
        }
    }

    /// A site showing `page`.
    pub fn on_page(page: Page, links: LinkStyle) -> Self {
        let mut site = Self::new(links);
        site.navigator.navigate(page);
        site
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    fn context(&self) -> ViewContext<'_> {
        ViewContext {
            navigator: &self.navigator,
            contact: &self.contact,
            links: self.links,
        }
    }

    /// Navigation, current page and footer.
    pub fn body(&self) -> ElementTree {
        let mut tree = ElementTree::new();
        view::app_body(&mut tree, self.context());
        tree
    }

    pub fn body_html(&self) -> String {
        render_html(&self.body())
    }

    /// Only the current page, without navigation or footer.
    pub fn page_html(&self) -> String {
        let mut tree = ElementTree::new();
        view::page(&mut tree, self.context());
        render_html(&tree)
    }

    pub fn title(&self) -> String {
        format!("{} | {}", PROFILE.name, self.navigator.current().label())
    }

    /// The `.app` wrapper: cursor marker and background, then the re-rendered root.
    pub fn shell(&self) -> String {
        let mut backdrop = ElementTree::new();
        view::backdrop(&mut backdrop);
        format!(
            "<div class=\"app\">{backdrop}<div id=\"{root_id}\" data-page=\"{page}\">{body}</div></div>",
            backdrop = render_html(&backdrop),
            root_id = APP_ROOT_ID,
            page = self.navigator.current().slug(),
            body = self.body_html(),
        )
    }

    /// A complete HTML document for the current page.
    pub fn document(&self, stylesheet_href: &str) -> String {
        format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html lang=\"en\">\n",
                "<head>\n",
                "<meta charset=\"utf-8\">\n",
                "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
                "<title>{title}</title>\n",
                "<link id=\"{style_id}\" rel=\"stylesheet\" href=\"{stylesheet}\">\n",
                "</head>\n",
                "<body>\n",
                "{shell}\n",
                "<script type=\"module\">import init from \"{bundle}\"; init();</script>\n",
                "</body>\n",
                "</html>\n",
            ),
            title = escape(&self.title()),
            style_id = STYLE_ID,
            stylesheet = escape(stylesheet_href),
            shell = self.shell(),
            bundle = BUNDLE_ENTRY,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_wraps_body_with_backdrop_and_bundle() {
        let site = Site::on_page(Page::About, LinkStyle::Documents);
        let html = site.document("site.css");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Abhay Korat | About</title>"));
        assert!(html.contains("<link id=\"folio-style\" rel=\"stylesheet\" href=\"site.css\">"));
        assert!(html.contains("<div class=\"custom-cursor\" id=\"cursor\" aria-hidden=\"true\"></div>"));
        assert!(html.contains("<div id=\"app-root\" data-page=\"about\"><nav class=\"navbar\">"));
        assert!(html.contains(BUNDLE_ENTRY));
    }

    #[test]
    fn page_html_omits_chrome() {
        let site = Site::on_page(Page::Contact, LinkStyle::Fragment);
        let html = site.page_html();
        assert!(html.starts_with("<div class=\"page contact-page\">"));
        assert!(!html.contains("navbar"));
    }

    #[test]
    fn stylesheet_styles_the_cursor_marker() {
        assert!(STYLESHEET.contains(".custom-cursor"));
        assert!(STYLESHEET.contains(".nav-links-open"));
    }
}
