use folio_ui::{Element, ElementKind, ElementTree};

use super::{ACTION_ATTRIBUTE, LinkStyle, NAV_ATTRIBUTE, TOGGLE_MENU_ACTION, icon, text};
use crate::{
    content::{FOOTER_LINE, FOOTER_TAGLINE, Icon, PROFILE},
    page::{Navigator, Page},
};

/// Id of the pointer follower's marker element.
pub const CURSOR_ID: &str = "cursor";

/// Fixed layers behind and above the app: the follower marker and the animated background.
pub fn backdrop(tree: &mut ElementTree) {
    tree.leaf(
        Element::new(ElementKind::Div)
            .class("custom-cursor")
            .attr("id", CURSOR_ID)
            .attr("aria-hidden", "true"),
    );
    tree.leaf(Element::new(ElementKind::Div).class("animated-bg"));
}

pub fn navigation(tree: &mut ElementTree, navigator: &Navigator, links: LinkStyle) {
    tree.with_node(Element::new(ElementKind::Nav).class("navbar"), |tree| {
        tree.with_node(Element::new(ElementKind::Div).class("nav-content"), |tree| {
            let brand = Element::new(ElementKind::Div)
                .class("nav-brand")
                .attr(NAV_ATTRIBUTE, Page::Home.slug());
            tree.with_node(brand, |tree| {
                tree.leaf(
                    Element::new(ElementKind::Image)
                        .class("nav-logo")
                        .attr("src", PROFILE.logo)
                        .attr("alt", "Logo"),
                );
                text(tree, ElementKind::Span, "", PROFILE.name);
            });

            let menu_open = navigator.is_menu_open();
            let toggle = Element::new(ElementKind::Button)
                .class("mobile-menu-btn")
                .attr("type", "button")
                .attr(ACTION_ATTRIBUTE, TOGGLE_MENU_ACTION)
                .attr("aria-label", "Toggle menu")
                .attr("aria-expanded", menu_open.to_string());
            tree.with_node(toggle, |tree| {
                icon(tree, if menu_open { Icon::X } else { Icon::Menu }, "");
            });

            let list = Element::new(ElementKind::Div)
                .class("nav-links")
                .class_if(menu_open, "nav-links-open");
            tree.with_node(list, |tree| {
                for page in Page::ALL {
                    tree.leaf(
                        Element::new(ElementKind::Anchor)
                            .class_if(page == navigator.current(), "active")
                            .attr("href", links.href(page))
                            .attr(NAV_ATTRIBUTE, page.slug())
                            .text(page.label()),
                    );
                }
            });
        });
    });
}

pub fn footer(tree: &mut ElementTree) {
    tree.with_node(Element::new(ElementKind::Footer).class("footer"), |tree| {
        text(tree, ElementKind::Paragraph, "", FOOTER_LINE);
        text(tree, ElementKind::Paragraph, "footer-tagline", FOOTER_TAGLINE);
    });
}

#[cfg(test)]
mod tests {
    use folio_ui::render_html;

    use super::*;

    #[test]
    fn menu_state_drives_toggle_and_link_list() {
        let mut navigator = Navigator::new();
        let mut tree = ElementTree::new();
        navigation(&mut tree, &navigator, LinkStyle::Fragment);
        let closed = render_html(&tree);
        assert!(closed.contains("<div class=\"nav-links\">"));
        assert!(closed.contains("icon-menu"));

        navigator.toggle_menu();
        let mut tree = ElementTree::new();
        navigation(&mut tree, &navigator, LinkStyle::Fragment);
        let open = render_html(&tree);
        assert!(open.contains("<div class=\"nav-links nav-links-open\">"));
        assert!(open.contains("icon-x"));
        assert!(open.contains("aria-expanded=\"true\""));
    }

    #[test]
    fn nav_links_follow_page_order() {
        let navigator = Navigator::new();
        let mut tree = ElementTree::new();
        navigation(&mut tree, &navigator, LinkStyle::Documents);
        let slugs: Vec<_> = tree
            .descendants()
            .filter_map(|id| tree.get(id))
            .filter(|element| element.kind() == ElementKind::Anchor)
            .filter_map(|element| element.attribute(NAV_ATTRIBUTE))
            .collect();
        assert_eq!(slugs, ["home", "about", "experience", "projects", "contact"]);
        assert_eq!(
            tree.find_by_attribute("href", "index.html")
                .and_then(|id| tree.get(id))
                .and_then(|e| e.text_content()),
            Some("Home")
        );
    }

    #[test]
    fn brand_returns_home() {
        let mut tree = ElementTree::new();
        navigation(&mut tree, &Navigator::new(), LinkStyle::Fragment);
        let brand = tree.find_by_class("nav-brand").and_then(|id| tree.get(id));
        assert_eq!(brand.and_then(|e| e.attribute(NAV_ATTRIBUTE)), Some("home"));
    }

    #[test]
    fn backdrop_carries_cursor_marker() {
        let mut tree = ElementTree::new();
        backdrop(&mut tree);
        assert!(tree.find_by_attribute("id", CURSOR_ID).is_some());
        assert_eq!(tree.roots().len(), 2);
    }
}
