use folio_ui::{Element, ElementKind, ElementTree};

use super::{external_link, glass_card, icon, text};
use crate::content::{Icon, PROJECTS, Project};

pub(super) fn projects_page(tree: &mut ElementTree) {
    tree.with_node(Element::new(ElementKind::Div).class("page projects-page"), |tree| {
        text(tree, ElementKind::Heading(1), "page-title", "Featured Projects");
        tree.with_node(Element::new(ElementKind::Div).class("projects-grid"), |tree| {
            for project in PROJECTS {
                project_card(tree, project);
            }
        });
    });
}

fn project_card(tree: &mut ElementTree, project: &Project) {
    glass_card(tree, "project-card", true, |tree| {
        tree.with_node(Element::new(ElementKind::Div).class("project-header"), |tree| {
            tree.with_node(Element::new(ElementKind::Div).class("project-title-row"), |tree| {
                text(tree, ElementKind::Heading(3), "project-title", project.title);
            });
            if let Some(link) = project.link {
                tree.with_node(external_link(link).class("btn-view").text("View "), |tree| {
                    icon(tree, Icon::Link, "");
                });
            }
            if let Some(highlight) = project.highlight {
                tree.with_node(Element::new(ElementKind::Span).class("project-highlight"), |tree| {
                    icon(tree, Icon::Award, "");
                    text(tree, ElementKind::Span, "", highlight);
                });
            }
        });

        text(tree, ElementKind::Paragraph, "project-description", project.description);

        tree.with_node(Element::new(ElementKind::Div).class("project-features"), |tree| {
            text(tree, ElementKind::Heading(4), "", "Key Features:");
            tree.with_node(Element::new(ElementKind::List), |tree| {
                for feature in project.features {
                    text(tree, ElementKind::ListItem, "", feature);
                }
            });
        });

        tree.with_node(Element::new(ElementKind::Div).class("project-tags"), |tree| {
            for tag in project.tags {
                text(tree, ElementKind::Span, "project-tag", tag);
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_only_where_present() {
        let mut tree = ElementTree::new();
        projects_page(&mut tree);
        let highlights = tree
            .descendants()
            .filter(|id| tree.get(*id).is_some_and(|e| e.has_class("project-highlight")))
            .count();
        assert_eq!(
            highlights,
            PROJECTS.iter().filter(|p| p.highlight.is_some()).count()
        );
    }
}
