use folio_ui::{Element, ElementKind, ElementTree};

use super::{glass_card, icon, text};
use crate::content::{EXPERIENCES, Experience, Icon};

pub(super) fn experience_page(tree: &mut ElementTree) {
    tree.with_node(Element::new(ElementKind::Div).class("page experience-page"), |tree| {
        text(tree, ElementKind::Heading(1), "page-title", "Professional Experience");
        tree.with_node(Element::new(ElementKind::Div).class("timeline"), |tree| {
            for experience in EXPERIENCES {
                experience_card(tree, experience);
            }
        });
    });
}

fn experience_card(tree: &mut ElementTree, experience: &Experience) {
    glass_card(tree, "experience-card", true, |tree| {
        tree.with_node(Element::new(ElementKind::Div).class("experience-header"), |tree| {
            tree.with_node(Element::new(ElementKind::Div), |tree| {
                text(tree, ElementKind::Heading(3), "experience-role", experience.role);
                text(tree, ElementKind::Heading(4), "experience-company", experience.company);
                tree.with_node(Element::new(ElementKind::Div).class("experience-meta"), |tree| {
                    tree.with_node(
                        Element::new(ElementKind::Span).class("experience-location"),
                        |tree| {
                            icon(tree, Icon::MapPin, "");
                            text(tree, ElementKind::Span, "", experience.location);
                        },
                    );
                    text(tree, ElementKind::Span, "experience-period", experience.period);
                });
            });
        });
        tree.with_node(Element::new(ElementKind::List).class("achievement-list"), |tree| {
            for achievement in experience.achievements {
                text(tree, ElementKind::ListItem, "", achievement);
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_hoverable_card_per_role() {
        let mut tree = ElementTree::new();
        experience_page(&mut tree);
        let cards: Vec<_> = tree
            .descendants()
            .filter_map(|id| tree.get(id))
            .filter(|element| element.has_class("experience-card"))
            .collect();
        assert_eq!(cards.len(), EXPERIENCES.len());
        assert!(cards.iter().all(|card| card.has_class("glass-card-hover")));
    }
}
