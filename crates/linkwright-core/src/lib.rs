#![forbid(unsafe_code)]

//! Hyperlink helpers for rich-text editors (headless).
//!
//! - [`link`]: recognise and create link markup in the host's view tree
//! - [`sanitize`]: keep link URLs away from script-capable schemes
//! - [`decorators`]: normalize and localize the `link.decorators` config
//!
//! The host editor is reached only through the capability traits in [`view`] and
//! [`locale::Translate`], plus the JSON-backed [`LinkConfig`].

pub mod config;
pub mod decorators;
pub mod error;
pub mod link;
pub mod locale;
pub mod sanitize;
pub mod view;

pub use config::LinkConfig;
pub use decorators::{
    DecoratorLabel, DecoratorMode, DecoratorsMapping, LOCALIZABLE_LABELS, LinkDecoratorDefinition,
    NormalizedDecorator, get_localized_decorators, get_normalized_decorators,
    get_normalized_decorators_from_config,
};
pub use error::{Error, Result};
pub use link::{
    LINK_CUSTOM_PROPERTY, LINK_PRIORITY, create_link_element, create_safe_link_element,
    is_link_element, is_link_element_opt,
};
pub use locale::{Translate, TranslationCatalog};
pub use sanitize::{UNSAFE_URL_FALLBACK, ensure_safe_url, ensure_safe_url_value, is_safe_url};
pub use view::{ElementKind, InMemoryWriter, ViewNode, ViewWriter};
