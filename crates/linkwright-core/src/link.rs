use crate::sanitize::ensure_safe_url;
use crate::view::{
    AttributeElementOptions, Attributes, ElementKind, ViewNode, ViewWriter, is_truthy,
};
use serde_json::Value;

/// Custom property that marks an attribute element as link markup.
pub const LINK_CUSTOM_PROPERTY: &str = "link";

/// Nesting priority of link markup.
///
/// Lower than the default attribute priority (10) so that `<a>` wraps other inline styles
/// instead of being split by them.
pub const LINK_PRIORITY: i32 = 5;

/// Returns `true` if the node is link markup: an attribute element carrying a truthy `link`
/// custom property.
pub fn is_link_element<N: ViewNode + ?Sized>(node: &N) -> bool {
    node.is(ElementKind::AttributeElement)
        && node
            .custom_property(LINK_CUSTOM_PROPERTY)
            .is_some_and(is_truthy)
}

/// Like [`is_link_element`], but absent nodes are simply not links.
pub fn is_link_element_opt<N: ViewNode + ?Sized>(node: Option<&N>) -> bool {
    node.is_some_and(is_link_element)
}

/// Creates an `<a href>` attribute element and tags it as link markup.
///
/// `href` is used as given; sanitize untrusted input with [`ensure_safe_url`] first, or use
/// [`create_safe_link_element`].
pub fn create_link_element<W>(href: &str, writer: &mut W) -> W::AttributeElement
where
    W: ViewWriter + ?Sized,
{
    let mut attributes = Attributes::new();
    attributes.insert("href".to_string(), href.to_string());

    let mut link = writer.create_attribute_element(
        "a",
        attributes,
        AttributeElementOptions {
            priority: Some(LINK_PRIORITY),
            id: None,
        },
    );
    writer.set_custom_property(LINK_CUSTOM_PROPERTY, Value::Bool(true), &mut link);

    link
}

/// Sanitizes `url` and creates link markup pointing at the result.
pub fn create_safe_link_element<W>(url: &str, writer: &mut W) -> W::AttributeElement
where
    W: ViewWriter + ?Sized,
{
    create_link_element(&ensure_safe_url(url), writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{AttributeElement, ContainerElement, InMemoryWriter, Node, Text};
    use serde_json::json;

    fn attribute_element(name: &str) -> AttributeElement {
        AttributeElement::new(name, Attributes::new(), AttributeElementOptions::default())
    }

    #[test]
    fn is_link_element_requires_attribute_kind_and_marker() {
        let mut writer = InMemoryWriter::new();

        let mut marked = attribute_element("a");
        writer.set_custom_property(LINK_CUSTOM_PROPERTY, json!(true), &mut marked);
        assert!(is_link_element(&marked));

        // An `<a>` without the marker is not link markup.
        assert!(!is_link_element(&attribute_element("a")));

        let mut container = ContainerElement::new("a", Attributes::new());
        container.set_custom_property(LINK_CUSTOM_PROPERTY, json!(true));
        assert!(!is_link_element(&container));

        assert!(!is_link_element(&Text::new("link")));
    }

    #[test]
    fn is_link_element_uses_truthiness_of_marker() {
        let mut writer = InMemoryWriter::new();
        for (value, expected) in [
            (json!(false), false),
            (json!(null), false),
            (json!(0), false),
            (json!(""), false),
            (json!(1), true),
            (json!("yes"), true),
            (json!({}), true),
        ] {
            let mut el = attribute_element("a");
            writer.set_custom_property(LINK_CUSTOM_PROPERTY, value.clone(), &mut el);
            assert_eq!(is_link_element(&el), expected, "marker value {value}");
        }
    }

    #[test]
    fn is_link_element_opt_rejects_absent_nodes() {
        assert!(!is_link_element_opt::<Node>(None));

        let mut writer = InMemoryWriter::new();
        let node = Node::from(create_link_element("#x", &mut writer));
        assert!(is_link_element_opt(Some(&node)));
    }

    #[test]
    fn create_link_element_builds_marked_anchor() {
        let mut writer = InMemoryWriter::new();
        let link = create_link_element("http://x", &mut writer);

        assert!(is_link_element(&link));
        assert_eq!(link.name(), Some("a"));
        assert_eq!(link.attribute("href"), Some("http://x"));
        assert_eq!(link.attributes().len(), 1);
        assert_eq!(link.priority(), LINK_PRIORITY);
        assert_eq!(link.custom_property(LINK_CUSTOM_PROPERTY), Some(&json!(true)));
    }

    #[test]
    fn create_link_element_does_not_sanitize() {
        let mut writer = InMemoryWriter::new();
        let link = create_link_element("javascript:alert(1)", &mut writer);
        assert_eq!(link.attribute("href"), Some("javascript:alert(1)"));
    }

    #[test]
    fn create_safe_link_element_replaces_unsafe_href() {
        let mut writer = InMemoryWriter::new();
        let unsafe_link = create_safe_link_element("javascript:alert(1)", &mut writer);
        assert_eq!(unsafe_link.attribute("href"), Some("#"));

        let safe_link = create_safe_link_element("https://example.com", &mut writer);
        assert_eq!(safe_link.attribute("href"), Some("https://example.com"));
        assert!(is_link_element(&safe_link));
    }

    #[test]
    fn create_link_element_leaves_existing_nodes_alone() {
        let mut writer = InMemoryWriter::new();
        let first = create_link_element("/a", &mut writer);
        let snapshot = first.clone();
        let _second = create_link_element("/b", &mut writer);
        assert_eq!(first, snapshot);
    }
}
