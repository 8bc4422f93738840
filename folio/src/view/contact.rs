use folio_ui::{Element, ElementKind, ElementTree};

use super::{ACTION_ATTRIBUTE, SUBMIT_CONTACT_ACTION, external_link, glass_card, icon, section_title, text};
use crate::{
    contact::{ContactForm, Field, StatusKind},
    content::{CONTACT_CHANNELS, ContactChannel, Icon, PROFILE},
};

struct InputSpec {
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
}

const INPUTS: [InputSpec; 4] = [
    InputSpec { field: Field::Name, label: "Name *", input_type: "text", placeholder: "Your name" },
    InputSpec {
        field: Field::Email,
        label: "Email *",
        input_type: "email",
        placeholder: "your.email@example.com",
    },
    InputSpec { field: Field::Mobile, label: "Mobile", input_type: "tel", placeholder: "+91-XXXXXXXXXX" },
    InputSpec {
        field: Field::Message,
        label: "Message *",
        input_type: "textarea",
        placeholder: "Your message or project inquiry...",
    },
];

pub(super) fn contact_page(tree: &mut ElementTree, form: &ContactForm) {
    tree.with_node(Element::new(ElementKind::Div).class("page contact-page"), |tree| {
        glass_card(tree, "contact-container", false, |tree| {
            tree.with_node(Element::new(ElementKind::Div).class("contact-grid"), |tree| {
                tree.with_node(Element::new(ElementKind::Div).class("contact-content"), |tree| {
                    section_title(tree, "Get In Touch");
                    tree.with_node(Element::new(ElementKind::Div).class("contact-info"), |tree| {
                        for channel in CONTACT_CHANNELS {
                            contact_item(tree, channel);
                        }
                    });
                    contact_form(tree, form);
                });

                tree.with_node(Element::new(ElementKind::Div).class("contact-visual"), |tree| {
                    tree.with_node(Element::new(ElementKind::Div).class("astronaut-wrapper"), |tree| {
                        tree.leaf(
                            Element::new(ElementKind::Image)
                                .class("astronaut-image")
                                .attr("src", PROFILE.contact_visual)
                                .attr("alt", "Abhay in Space"),
                        );
                        tree.leaf(Element::new(ElementKind::Div).class("visual-overlay"));
                        tree.leaf(Element::new(ElementKind::Div).class("visual-glow"));
                    });
                });
            });
        });
    });
}

fn contact_item(tree: &mut ElementTree, channel: &ContactChannel) {
    tree.with_node(Element::new(ElementKind::Div).class("contact-item"), |tree| {
        icon(tree, channel.icon, "");
        match channel.href {
            Some(href) if channel.is_external() => {
                tree.leaf(external_link(href).text(channel.label));
            }
            Some(href) => {
                tree.leaf(Element::new(ElementKind::Anchor).attr("href", href).text(channel.label));
            }
            None => text(tree, ElementKind::Span, "", channel.label),
        }
    });
}

fn contact_form(tree: &mut ElementTree, form: &ContactForm) {
    let loading = form.is_loading();
    tree.with_node(Element::new(ElementKind::Div).class("contact-form"), |tree| {
        for spec in &INPUTS {
            tree.with_node(Element::new(ElementKind::Div).class("form-group"), |tree| {
                let name = spec.field.name();
                tree.leaf(Element::new(ElementKind::Label).attr("for", name).text(spec.label));

                let value = form.field(spec.field);
                let input = if spec.field == Field::Message {
                    Element::new(ElementKind::TextArea).attr("rows", "5").text(value)
                } else {
                    Element::new(ElementKind::Input)
                        .attr("type", spec.input_type)
                        .attr("value", value)
                };
                tree.leaf(
                    input
                        .attr("id", name)
                        .attr("name", name)
                        .attr("placeholder", spec.placeholder)
                        .flag("required", spec.field.is_required())
                        .flag("disabled", loading),
                );
            });
        }

        if let Some(status) = form.status() {
            let class = format!("status-message {}", status.kind.class());
            tree.with_node(Element::new(ElementKind::Div).class(class), |tree| {
                let glyph = match status.kind {
                    StatusKind::Success => Icon::CheckCircle,
                    StatusKind::Error => Icon::AlertCircle,
                };
                icon(tree, glyph, "");
                text(tree, ElementKind::Span, "", &status.message);
            });
        }

        let button = Element::new(ElementKind::Button)
            .class("btn btn-primary")
            .attr("type", "button")
            .attr(ACTION_ATTRIBUTE, SUBMIT_CONTACT_ACTION)
            .flag("disabled", !form.can_submit());
        tree.with_node(button, |tree| {
            icon(tree, Icon::Send, "");
            text(tree, ElementKind::Span, "", form.button_label());
        });
    });
}

#[cfg(test)]
mod tests {
    use folio_ui::render_html;

    use super::*;
    use crate::contact::{ContactError, SUCCESS_MESSAGE};

    fn render(form: &ContactForm) -> String {
        let mut tree = ElementTree::new();
        contact_page(&mut tree, form);
        render_html(&tree)
    }

    #[test]
    fn empty_form_disables_send() {
        let html = render(&ContactForm::new());
        assert!(html.contains("data-action=\"submit-contact\" disabled>"));
        assert!(html.contains("<span>Send Message</span>"));
        assert!(!html.contains("status-message"));
    }

    #[test]
    fn loading_form_disables_inputs_and_relabels_button() {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Message, "Hi <there>");
        form.begin_submit().expect("submit");

        let html = render(&form);
        assert!(html.contains("<span>Sending...</span>"));
        assert_eq!(html.matches(" disabled").count(), 5);
        assert!(html.contains("Hi &lt;there&gt;</textarea>"));
    }

    #[test]
    fn status_banner_reflects_outcome() {
        let mut form = ContactForm::new();
        form.complete(Ok(()));
        let html = render(&form);
        assert!(html.contains("status-message success"));
        assert!(html.contains(SUCCESS_MESSAGE));

        form.complete(Err(ContactError::Transport("offline".into())));
        assert!(render(&form).contains("status-message error"));
    }

    #[test]
    fn mobile_is_not_required() {
        let mut tree = ElementTree::new();
        contact_page(&mut tree, &ContactForm::new());
        let mobile = tree
            .find_by_attribute("name", "mobile")
            .and_then(|id| tree.get(id))
            .expect("mobile input");
        assert_eq!(mobile.attribute("required"), None);
        assert_eq!(mobile.attribute("type"), Some("tel"));
    }
}
