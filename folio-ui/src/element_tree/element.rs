use accesskit::Role;
use smallvec::SmallVec;

/// Roles the pointer follower treats as interactive.
pub const INTERACTIVE_ROLES: [Role; 4] = [
    Role::Link,
    Role::Button,
    Role::TextInput,
    Role::MultilineTextInput,
];

/// The kind of an element, mapping one-to-one onto an HTML tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Div,
    Span,
    Section,
    Nav,
    Main,
    Footer,
    /// `h1` to `h4`; other levels clamp into that range.
    Heading(u8),
    Paragraph,
    List,
    ListItem,
    Anchor,
    Button,
    Input,
    TextArea,
    Label,
    Image,
    Form,
}

impl ElementKind {
    /// Every kind whose role is interactive.
    pub const INTERACTIVE: [ElementKind; 4] = [
        ElementKind::Anchor,
        ElementKind::Button,
        ElementKind::Input,
        ElementKind::TextArea,
    ];

    /// HTML tag name.
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Div => "div",
            ElementKind::Span => "span",
            ElementKind::Section => "section",
            ElementKind::Nav => "nav",
            ElementKind::Main => "main",
            ElementKind::Footer => "footer",
            ElementKind::Heading(level) => match level {
                0 | 1 => "h1",
                2 => "h2",
                3 => "h3",
                _ => "h4",
            },
            ElementKind::Paragraph => "p",
            ElementKind::List => "ul",
            ElementKind::ListItem => "li",
            ElementKind::Anchor => "a",
            ElementKind::Button => "button",
            ElementKind::Input => "input",
            ElementKind::TextArea => "textarea",
            ElementKind::Label => "label",
            ElementKind::Image => "img",
            ElementKind::Form => "form",
        }
    }

    /// Accessibility role exposed by this kind.
    pub fn role(self) -> Role {
        match self {
            ElementKind::Div | ElementKind::Span | ElementKind::Section | ElementKind::Footer => {
                Role::GenericContainer
            }
            ElementKind::Nav => Role::Navigation,
            ElementKind::Main => Role::Main,
            ElementKind::Heading(_) => Role::Heading,
            ElementKind::Paragraph => Role::Paragraph,
            ElementKind::List => Role::List,
            ElementKind::ListItem => Role::ListItem,
            ElementKind::Anchor => Role::Link,
            ElementKind::Button => Role::Button,
            ElementKind::Input => Role::TextInput,
            ElementKind::TextArea => Role::MultilineTextInput,
            ElementKind::Label => Role::Label,
            ElementKind::Image => Role::Image,
            ElementKind::Form => Role::Form,
        }
    }

    /// Whether this kind is one the pointer follower reacts to.
    pub fn is_interactive(self) -> bool {
        INTERACTIVE_ROLES.contains(&self.role())
    }

    /// Void elements have no children and no closing tag.
    pub fn is_void(self) -> bool {
        matches!(self, ElementKind::Input | ElementKind::Image)
    }

    /// CSS selector matching every interactive kind, e.g. `"a, button, input, textarea"`.
    pub fn interactive_selector() -> String {
        Self::INTERACTIVE
            .iter()
            .map(|kind| kind.tag())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A single node of an [`ElementTree`](super::ElementTree).
///
/// Built with a small fluent API:
///
/// ```
/// use folio_ui::element_tree::{Element, ElementKind};
///
/// let link = Element::new(ElementKind::Anchor)
///     .class("btn-view")
///     .attr("href", "https://example.com")
///     .text("View");
/// assert!(link.kind().is_interactive());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementKind,
    classes: SmallVec<[String; 2]>,
    attributes: SmallVec<[(&'static str, String); 2]>,
    text: Option<String>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            classes: SmallVec::new(),
            attributes: SmallVec::new(),
            text: None,
        }
    }

    /// Adds one or more space-separated classes. Empty strings are ignored.
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        self.classes.extend(
            class
                .as_ref()
                .split_whitespace()
                .map(ToOwned::to_owned),
        );
        self
    }

    /// Adds `class` only when `enabled` is true.
    pub fn class_if(self, enabled: bool, class: impl AsRef<str>) -> Self {
        if enabled { self.class(class) } else { self }
    }

    /// Sets an attribute, replacing an earlier value with the same name.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Sets a boolean attribute such as `disabled` or `required`.
    pub fn flag(self, name: &'static str, enabled: bool) -> Self {
        if enabled { self.attr(name, "") } else { self }
    }

    /// Sets the text content rendered before any children.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn role(&self) -> Role {
        self.kind.role()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attributes(&self) -> &[(&'static str, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
