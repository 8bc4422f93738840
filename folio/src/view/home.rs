use folio_ui::{Element, ElementKind, ElementTree};

use super::{NAV_ATTRIBUTE, glass_card, icon, text};
use crate::{
    content::{HERO_TAGS, PROFILE, STATS},
    page::Page,
};

pub(super) fn home_page(tree: &mut ElementTree) {
    tree.with_node(Element::new(ElementKind::Div).class("page home-page"), |tree| {
        glass_card(tree, "hero-card", false, |tree| {
            portrait(tree);

            text(tree, ElementKind::Heading(1), "hero-title", PROFILE.name);
            text(tree, ElementKind::Heading(2), "hero-subtitle", PROFILE.title);
            text(tree, ElementKind::Paragraph, "hero-tagline", PROFILE.tagline);

            tree.with_node(Element::new(ElementKind::Div).class("hero-buttons"), |tree| {
                hero_button(tree, "btn-primary", Page::Projects, "View Projects");
                hero_button(tree, "btn-secondary", Page::Contact, "Get In Touch");
            });

            tree.with_node(Element::new(ElementKind::Div).class("hero-tags"), |tree| {
                for tag in HERO_TAGS {
                    tree.with_node(Element::new(ElementKind::Span).class("tag"), |tree| {
                        icon(tree, tag.icon, "");
                        text(tree, ElementKind::Span, "", tag.label);
                    });
                }
            });

            tree.with_node(Element::new(ElementKind::Div).class("stats-grid"), |tree| {
                for stat in STATS {
                    tree.with_node(Element::new(ElementKind::Div).class("stat-card"), |tree| {
                        icon(tree, stat.icon, "stat-icon icon-lg");
                        text(tree, ElementKind::Div, "stat-number", stat.number);
                        text(tree, ElementKind::Div, "stat-label", stat.label);
                    });
                }
            });
        });
    });
}

fn portrait(tree: &mut ElementTree) {
    tree.with_node(Element::new(ElementKind::Div).class("profile-container"), |tree| {
        tree.leaf(Element::new(ElementKind::Div).class("star-field"));
        for orbit in ["orbit-1", "orbit-2", "orbit-3"] {
            tree.leaf(Element::new(ElementKind::Div).class("cyber-orbit").class(orbit));
        }
        tree.with_node(Element::new(ElementKind::Div).class("profile-image-wrapper"), |tree| {
            tree.leaf(
                Element::new(ElementKind::Image)
                    .class("profile-image")
                    .attr("src", PROFILE.portrait)
                    .attr("alt", PROFILE.name),
            );
            tree.leaf(Element::new(ElementKind::Div).class("hologram-overlay"));
        });
    });
}

fn hero_button(tree: &mut ElementTree, variant: &str, target: Page, label: &str) {
    tree.leaf(
        Element::new(ElementKind::Button)
            .class("btn")
            .class(variant)
            .attr("type", "button")
            .attr(NAV_ATTRIBUTE, target.slug())
            .text(label),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_buttons_target_projects_and_contact() {
        let mut tree = ElementTree::new();
        home_page(&mut tree);
        let targets: Vec<_> = tree
            .descendants()
            .filter_map(|id| tree.get(id))
            .filter(|element| element.kind() == ElementKind::Button)
            .map(|element| (element.text_content(), element.attribute(NAV_ATTRIBUTE)))
            .collect();
        assert_eq!(
            targets,
            [
                (Some("View Projects"), Some("projects")),
                (Some("Get In Touch"), Some("contact")),
            ]
        );
    }

    #[test]
    fn stats_and_tags_are_listed() {
        let mut tree = ElementTree::new();
        home_page(&mut tree);
        let count = |class: &str| {
            tree.descendants()
                .filter(|id| tree.get(*id).is_some_and(|e| e.has_class(class)))
                .count()
        };
        assert_eq!(count("stat-card"), STATS.len());
        assert_eq!(count("tag"), HERO_TAGS.len());
        assert_eq!(count("cyber-orbit"), 3);
    }
}
