use indexmap::IndexMap;
use linkwright::view::{AttributeElementOptions, Attributes, Node};
use linkwright::*;
use serde_json::{Value, json};

/// A host view tree that stores nodes in an arena and keeps custom properties in a side table.
#[derive(Default)]
struct ArenaWriter {
    nodes: Vec<ArenaNode>,
}

#[derive(Debug, Clone, PartialEq)]
struct ArenaNode {
    index: usize,
    name: String,
    attributes: Attributes,
    priority: i32,
    properties: IndexMap<String, Value>,
}

impl ViewNode for ArenaNode {
    fn is(&self, kind: ElementKind) -> bool {
        ElementKind::AttributeElement.satisfies(kind)
    }

    fn custom_property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

impl ViewWriter for ArenaWriter {
    type AttributeElement = ArenaNode;

    fn create_attribute_element(
        &mut self,
        name: &str,
        attributes: Attributes,
        options: AttributeElementOptions,
    ) -> ArenaNode {
        let node = ArenaNode {
            index: self.nodes.len(),
            name: name.to_string(),
            attributes,
            priority: options.priority.unwrap_or(10),
            properties: IndexMap::new(),
        };
        self.nodes.push(node.clone());
        node
    }

    fn set_custom_property(&mut self, key: &str, value: Value, element: &mut ArenaNode) {
        element.properties.insert(key.to_string(), value.clone());
        if let Some(stored) = self.nodes.get_mut(element.index) {
            stored.properties.insert(key.to_string(), value);
        }
    }
}

#[test]
fn host_writer_creates_recognisable_links() {
    let mut writer = ArenaWriter::default();
    let link = create_link_element("http://x", &mut writer);

    assert!(is_link_element(&link));
    assert_eq!(link.attribute("href"), Some("http://x"));
    assert_eq!(link.priority, LINK_PRIORITY);
    assert_eq!(writer.nodes.len(), 1);
    assert!(is_link_element(&writer.nodes[0]));
}

#[test]
fn other_attribute_elements_are_not_links() {
    let mut writer = ArenaWriter::default();
    let bold = writer.create_attribute_element("b", Attributes::new(), Default::default());
    assert!(!is_link_element(&bold));
}

#[test]
fn in_memory_tree_distinguishes_node_kinds() {
    let mut writer = InMemoryWriter::new();
    let nodes: Vec<Node> = vec![
        create_link_element("/docs", &mut writer).into(),
        writer.create_container_element("p", Attributes::new()).into(),
        writer.create_text("plain").into(),
    ];

    let links: Vec<bool> = nodes.iter().map(is_link_element).collect();
    assert_eq!(links, [true, false, false]);
    assert_eq!(nodes[1].name(), Some("p"));
    assert!(nodes[2].is(ElementKind::Text));
    assert!(!nodes[2].is(ElementKind::Element));
}

#[test]
fn safe_urls_survive_and_unsafe_ones_degrade() {
    for url in [
        "http://example.com",
        "https://example.com",
        "ftp://example.com",
        "ftps://example.com",
        "mailto:a@b.c",
        "/relative/path",
        "#fragment",
    ] {
        assert_eq!(ensure_safe_url(url), url);
    }

    assert_eq!(ensure_safe_url("javascript:alert(1)"), UNSAFE_URL_FALLBACK);
    assert_eq!(ensure_safe_url("java\tscript:alert(1)"), UNSAFE_URL_FALLBACK);
    assert_eq!(ensure_safe_url_value(&Value::Null), "null");
}

#[test]
fn safe_link_from_untrusted_input() {
    let mut writer = InMemoryWriter::new();
    let link = create_safe_link_element("  JAVASCRIPT:alert(document.cookie)", &mut writer);
    assert!(is_link_element(&link));
    assert_eq!(link.attribute("href"), Some("#"));
}

#[test]
fn decorators_from_config_are_normalized_then_localized() {
    let config = LinkConfig::from_json5_str(
        r#"{
            link: {
                decorators: {
                    openInNewTab: {
                        mode: 'manual',
                        label: 'Open in a new tab',
                        attributes: { target: '_blank', rel: 'noopener noreferrer' },
                    },
                    toggleDownloadable: {
                        mode: 'manual',
                        label: 'Downloadable',
                        attributes: { download: 'file' },
                    },
                    gallery: {
                        mode: 'manual',
                        label: 'Gallery link',
                        attributes: { class: 'gallery' },
                    },
                },
            },
        }"#,
    )
    .unwrap();

    let catalog = TranslationCatalog::from_value(&json!({
        "Open in a new tab": "In neuem Tab öffnen",
        "Downloadable": "Herunterladbar"
    }))
    .unwrap();

    let normalized = get_normalized_decorators_from_config(&config).unwrap();
    let localized = get_localized_decorators(&catalog, normalized);

    assert_eq!(
        serde_json::to_value(&localized).unwrap(),
        json!([
            {
                "id": "linkDecoratoropenInNewTab",
                "mode": "manual",
                "label": "In neuem Tab öffnen",
                "attributes": { "target": "_blank", "rel": "noopener noreferrer" }
            },
            {
                "id": "linkDecoratortoggleDownloadable",
                "mode": "manual",
                "label": "Herunterladbar",
                "attributes": { "download": "file" }
            },
            {
                "id": "linkDecoratorgallery",
                "mode": "manual",
                "label": "Gallery link",
                "attributes": { "class": "gallery" }
            }
        ])
    );
}

#[test]
fn yaml_config_without_decorators_yields_nothing() {
    let config = LinkConfig::from_yaml_str("link:\n  defaultProtocol: https://\n").unwrap();
    assert!(get_normalized_decorators_from_config(&config).unwrap().is_empty());

    let config = LinkConfig::from_yaml_str("link:\n  decorators: ~\n").unwrap();
    assert!(get_normalized_decorators_from_config(&config).unwrap().is_empty());
}

#[test]
fn malformed_decorators_config_is_an_error() {
    let config = LinkConfig::from_value(json!({ "link": { "decorators": "openInNewTab" } }));
    let err = get_normalized_decorators_from_config(&config).unwrap_err();
    assert!(matches!(err, Error::InvalidDecorators { .. }));
    assert!(err.to_string().starts_with("Invalid `link.decorators` config"));
}
