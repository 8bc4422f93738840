//! Views: site content composed into element trees.
//!
//! Each view appends to an [`ElementTree`] under whatever node is currently
//! open, the same way nested components attach to their parent. Class names
//! match the bundled stylesheet.
//!
//! Clicks are not wired here. Elements that navigate carry `data-nav="<slug>"`
//! and the menu toggle carries `data-action="toggle-menu"`; the host delegates
//! on those attributes.

mod about;
mod chrome;
mod contact;
mod experience;
mod home;
mod projects;

use folio_ui::{Element, ElementKind, ElementTree};

use crate::{
    contact::ContactForm,
    content::Icon,
    page::{Navigator, Page},
};

pub use chrome::{CURSOR_ID, backdrop, footer, navigation};

pub const NAV_ATTRIBUTE: &str = "data-nav";
pub const ACTION_ATTRIBUTE: &str = "data-action";
pub const TOGGLE_MENU_ACTION: &str = "toggle-menu";
pub const SUBMIT_CONTACT_ACTION: &str = "submit-contact";

/// How navigation links address pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStyle {
    /// In-page fragment, handled by the running app.
    #[default]
    Fragment,
    /// One exported document per page.
    Documents,
}

impl LinkStyle {
    pub fn href(self, page: Page) -> String {
        match self {
            LinkStyle::Fragment => format!("#{}", page.slug()),
            LinkStyle::Documents if page == Page::Home => "index.html".to_owned(),
            LinkStyle::Documents => page.file_name(),
        }
    }
}

/// Everything a view reads.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub navigator: &'a Navigator,
    pub contact: &'a ContactForm,
    pub links: LinkStyle,
}

/// Appends the current page.
pub fn page(tree: &mut ElementTree, cx: ViewContext<'_>) {
    match cx.navigator.current() {
        Page::Home => home::home_page(tree),
        Page::About => about::about_page(tree),
        Page::Experience => experience::experience_page(tree),
        Page::Projects => projects::projects_page(tree),
        Page::Contact => contact::contact_page(tree, cx.contact),
    }
}

/// Appends navigation, the current page inside `main`, and the footer.
pub fn app_body(tree: &mut ElementTree, cx: ViewContext<'_>) {
    navigation(tree, cx.navigator, cx.links);
    tree.with_node(Element::new(ElementKind::Main).class("main-content"), |tree| {
        page(tree, cx);
    });
    footer(tree);
}

pub(crate) fn icon(tree: &mut ElementTree, icon: Icon, extra_class: &str) {
    tree.leaf(
        Element::new(ElementKind::Span)
            .class("icon")
            .class(format!("icon-{}", icon.name()))
            .class(extra_class)
            .attr("aria-hidden", "true")
            .text(icon.glyph()),
    );
}

pub(crate) fn text(tree: &mut ElementTree, kind: ElementKind, class: &str, text: &str) {
    tree.leaf(Element::new(kind).class(class).text(text));
}

/// `div.glass-card`, optionally with the hover lift.
pub(crate) fn glass_card(
    tree: &mut ElementTree,
    class: &str,
    hover: bool,
    children: impl FnOnce(&mut ElementTree),
) {
    let card = Element::new(ElementKind::Div)
        .class("glass-card")
        .class_if(hover, "glass-card-hover")
        .class(class);
    tree.with_node(card, children);
}

pub(crate) fn section_title(tree: &mut ElementTree, title: &str) {
    text(tree, ElementKind::Heading(2), "section-title", title);
}

/// External link opening in a new tab.
pub(crate) fn external_link(href: &str) -> Element {
    Element::new(ElementKind::Anchor)
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
}

#[cfg(test)]
mod tests {
    use folio_ui::render_html;

    use super::*;

    fn render_page(page: Page) -> (ElementTree, String) {
        let mut navigator = Navigator::new();
        navigator.navigate(page);
        let contact = ContactForm::new();
        let mut tree = ElementTree::new();
        app_body(
            &mut tree,
            ViewContext {
                navigator: &navigator,
                contact: &contact,
                links: LinkStyle::Fragment,
            },
        );
        let html = render_html(&tree);
        (tree, html)
    }

    #[test]
    fn hrefs_per_link_style() {
        assert_eq!(LinkStyle::Fragment.href(Page::About), "#about");
        assert_eq!(LinkStyle::Documents.href(Page::Home), "index.html");
        assert_eq!(LinkStyle::Documents.href(Page::Projects), "projects.html");
    }

    #[test]
    fn every_page_renders_inside_main() {
        for page in Page::ALL {
            let (tree, html) = render_page(page);
            let class = format!("{}-page", page.slug());
            assert!(tree.find_by_class(&class).is_some(), "{page}");
            assert!(html.contains("<main class=\"main-content\">"));
            assert!(html.contains("<footer class=\"footer\">"));
        }
    }

    #[test]
    fn only_current_nav_link_is_active() {
        let (tree, _) = render_page(Page::Experience);
        let active: Vec<_> = tree
            .descendants()
            .filter_map(|id| tree.get(id))
            .filter(|element| element.has_class("active"))
            .map(|element| element.attribute(NAV_ATTRIBUTE))
            .collect();
        assert_eq!(active, [Some("experience")]);
    }

    #[test]
    fn icons_inside_links_hit_test_as_interactive() {
        let (tree, _) = render_page(Page::Projects);
        let icon = tree
            .descendants()
            .find(|id| tree.get(*id).is_some_and(|e| e.has_class("icon-link")))
            .expect("view link icon");
        assert!(folio_ui::HoverTarget::is_within_interactive(&tree.node(icon)));
    }

    #[test]
    fn project_links_open_in_new_tab() {
        let (_, html) = render_page(Page::Projects);
        assert!(html.contains(
            "<a class=\"btn-view\" href=\"https://bullforce.co\" target=\"_blank\" rel=\"noopener noreferrer\">"
        ));
        assert!(html.contains("href=\"https://play.google.com/store/apps/details?id=com.wealthspectrum.app.spark&amp;pcampaignid=web_share\""));
    }

    #[test]
    fn content_text_is_escaped() {
        let (_, html) = render_page(Page::About);
        assert!(html.contains("Architecture &amp; Patterns"));
        assert!(!html.contains("Architecture & Patterns"));
    }
}
