use folio_ui::{Element, ElementKind, ElementTree};

use super::{glass_card, icon, section_title, text};
use crate::content::{COMPETENCIES, DOMAINS, EDUCATION, SKILLS, SUMMARY};

pub(super) fn about_page(tree: &mut ElementTree) {
    tree.with_node(Element::new(ElementKind::Div).class("page about-page"), |tree| {
        glass_card(tree, "", false, |tree| {
            section_title(tree, "Professional Summary");
            text(tree, ElementKind::Paragraph, "section-text", SUMMARY);
        });

        glass_card(tree, "", false, |tree| {
            section_title(tree, "Core Competencies");
            tree.with_node(Element::new(ElementKind::List).class("feature-list"), |tree| {
                for item in COMPETENCIES {
                    text(tree, ElementKind::ListItem, "", item);
                }
            });
        });

        glass_card(tree, "", false, |tree| {
            section_title(tree, "Technical Skills");
            tree.with_node(Element::new(ElementKind::Div).class("skills-section"), |tree| {
                for category in SKILLS {
                    tree.with_node(Element::new(ElementKind::Div).class("skill-category"), |tree| {
                        text(tree, ElementKind::Heading(3), "skill-category-title", category.category);
                        tree.with_node(Element::new(ElementKind::Div).class("skills-grid"), |tree| {
                            for skill in category.skills {
                                text(tree, ElementKind::Div, "skill-tag", skill);
                            }
                        });
                    });
                }
            });
        });

        glass_card(tree, "", false, |tree| {
            section_title(tree, "Domain Expertise");
            tree.with_node(Element::new(ElementKind::Div).class("domain-grid"), |tree| {
                for domain in DOMAINS {
                    tree.with_node(Element::new(ElementKind::Div).class("domain-card"), |tree| {
                        icon(tree, domain.icon, "domain-icon icon-lg");
                        text(tree, ElementKind::Heading(3), "", domain.name);
                        text(tree, ElementKind::Paragraph, "", domain.summary);
                    });
                }
            });
        });

        glass_card(tree, "", false, |tree| {
            section_title(tree, "Education");
            tree.with_node(Element::new(ElementKind::Div).class("education-section"), |tree| {
                for entry in EDUCATION {
                    tree.with_node(Element::new(ElementKind::Div).class("education-item"), |tree| {
                        text(tree, ElementKind::Heading(3), "", entry.degree);
                        text(tree, ElementKind::Paragraph, "education-detail", entry.detail);
                    });
                }
            });
        });
    });
}
