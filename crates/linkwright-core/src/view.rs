//! View-tree capabilities used by the link helpers.
//!
//! The host editor owns the real view tree. The helpers only need to ask a node what kind it is
//! and which custom properties it carries, and to ask a writer to create attribute elements.
//! Those two seams are the [`ViewNode`] and [`ViewWriter`] traits.
//!
//! A small in-memory tree ([`Node`], [`AttributeElement`], [`ContainerElement`], [`Text`]) and
//! [`InMemoryWriter`] are provided for headless hosts and tests.

use indexmap::IndexMap;
use serde_json::Value;

pub type Attributes = IndexMap<String, String>;
pub type CustomProperties = IndexMap<String, Value>;

/// Kinds a view node can report through [`ViewNode::is`].
///
/// Kinds are hierarchical: every element is also a `Node`, and the specialised element kinds
/// are also `Element`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Node,
    Element,
    ContainerElement,
    AttributeElement,
    EmptyElement,
    UiElement,
    RawElement,
    Text,
}

impl ElementKind {
    /// Whether a node whose concrete kind is `self` answers `true` to `is(query)`.
    pub fn satisfies(self, query: ElementKind) -> bool {
        if self == query || query == ElementKind::Node {
            return true;
        }
        query == ElementKind::Element && self != ElementKind::Text
    }
}

/// Read-only view of a host node.
pub trait ViewNode {
    fn is(&self, kind: ElementKind) -> bool;

    fn custom_property(&self, key: &str) -> Option<&Value>;

    fn name(&self) -> Option<&str> {
        None
    }

    fn attribute(&self, _key: &str) -> Option<&str> {
        None
    }
}

impl<T: ViewNode + ?Sized> ViewNode for &T {
    fn is(&self, kind: ElementKind) -> bool {
        (**self).is(kind)
    }

    fn custom_property(&self, key: &str) -> Option<&Value> {
        (**self).custom_property(key)
    }

    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        (**self).attribute(key)
    }
}

/// Options accepted by [`ViewWriter::create_attribute_element`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeElementOptions {
    /// Nesting priority; lower priorities wrap higher ones. `None` means
    /// [`AttributeElement::DEFAULT_PRIORITY`].
    pub priority: Option<i32>,
    /// Elements with the same id are treated as one element when merged.
    pub id: Option<String>,
}

/// Mutation capability over the host view tree.
pub trait ViewWriter {
    type AttributeElement: ViewNode;

    fn create_attribute_element(
        &mut self,
        name: &str,
        attributes: Attributes,
        options: AttributeElementOptions,
    ) -> Self::AttributeElement;

    fn set_custom_property(
        &mut self,
        key: &str,
        value: Value,
        element: &mut Self::AttributeElement,
    );
}

/// JavaScript truthiness of a custom property value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeElement {
    name: String,
    attributes: Attributes,
    priority: i32,
    id: Option<String>,
    custom_properties: CustomProperties,
}

impl AttributeElement {
    pub const DEFAULT_PRIORITY: i32 = 10;

    pub fn new(
        name: impl Into<String>,
        attributes: Attributes,
        options: AttributeElementOptions,
    ) -> Self {
        Self {
            name: name.into(),
            attributes,
            priority: options.priority.unwrap_or(Self::DEFAULT_PRIORITY),
            id: options.id,
            custom_properties: CustomProperties::new(),
        }
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn custom_properties(&self) -> &CustomProperties {
        &self.custom_properties
    }
}

impl ViewNode for AttributeElement {
    fn is(&self, kind: ElementKind) -> bool {
        ElementKind::AttributeElement.satisfies(kind)
    }

    fn custom_property(&self, key: &str) -> Option<&Value> {
        self.custom_properties.get(key)
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerElement {
    name: String,
    attributes: Attributes,
    custom_properties: CustomProperties,
}

impl ContainerElement {
    pub fn new(name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            attributes,
            custom_properties: CustomProperties::new(),
        }
    }

    pub fn set_custom_property(&mut self, key: impl Into<String>, value: Value) {
        self.custom_properties.insert(key.into(), value);
    }
}

impl ViewNode for ContainerElement {
    fn is(&self, kind: ElementKind) -> bool {
        ElementKind::ContainerElement.satisfies(kind)
    }

    fn custom_property(&self, key: &str) -> Option<&Value> {
        self.custom_properties.get(key)
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub data: String,
}

impl Text {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl ViewNode for Text {
    fn is(&self, kind: ElementKind) -> bool {
        ElementKind::Text.satisfies(kind)
    }

    // Text nodes carry no custom properties.
    fn custom_property(&self, _key: &str) -> Option<&Value> {
        None
    }
}

/// Any node of the in-memory tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Attribute(AttributeElement),
    Container(ContainerElement),
    Text(Text),
}

impl ViewNode for Node {
    fn is(&self, kind: ElementKind) -> bool {
        match self {
            Node::Attribute(el) => el.is(kind),
            Node::Container(el) => el.is(kind),
            Node::Text(t) => t.is(kind),
        }
    }

    fn custom_property(&self, key: &str) -> Option<&Value> {
        match self {
            Node::Attribute(el) => el.custom_property(key),
            Node::Container(el) => el.custom_property(key),
            Node::Text(t) => t.custom_property(key),
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            Node::Attribute(el) => el.name(),
            Node::Container(el) => el.name(),
            Node::Text(_) => None,
        }
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        match self {
            Node::Attribute(el) => el.attribute(key),
            Node::Container(el) => el.attribute(key),
            Node::Text(_) => None,
        }
    }
}

impl From<AttributeElement> for Node {
    fn from(el: AttributeElement) -> Self {
        Node::Attribute(el)
    }
}

impl From<ContainerElement> for Node {
    fn from(el: ContainerElement) -> Self {
        Node::Container(el)
    }
}

impl From<Text> for Node {
    fn from(t: Text) -> Self {
        Node::Text(t)
    }
}

/// [`ViewWriter`] over the in-memory tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryWriter;

impl InMemoryWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn create_container_element(
        &mut self,
        name: &str,
        attributes: Attributes,
    ) -> ContainerElement {
        ContainerElement::new(name, attributes)
    }

    pub fn create_text(&mut self, data: &str) -> Text {
        Text::new(data)
    }
}

impl ViewWriter for InMemoryWriter {
    type AttributeElement = AttributeElement;

    fn create_attribute_element(
        &mut self,
        name: &str,
        attributes: Attributes,
        options: AttributeElementOptions,
    ) -> AttributeElement {
        AttributeElement::new(name, attributes, options)
    }

    fn set_custom_property(&mut self, key: &str, value: Value, element: &mut AttributeElement) {
        element.custom_properties.insert(key.to_string(), value);
    }
}
