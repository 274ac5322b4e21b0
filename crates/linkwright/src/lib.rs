#![forbid(unsafe_code)]

//! `linkwright` provides the hyperlink helpers of a rich-text editor without the editor:
//! link markup in the view tree, URL sanitizing for `href`, and the link decorator config.
//!
//! The host editor plugs in through [`ViewNode`], [`ViewWriter`] and [`Translate`]; headless
//! users can work with [`InMemoryWriter`] and [`view::Node`].
//!
//! ```
//! use linkwright::{InMemoryWriter, create_link_element, ensure_safe_url, is_link_element};
//!
//! let mut writer = InMemoryWriter::new();
//! let link = create_link_element(&ensure_safe_url("javascript:alert(1)"), &mut writer);
//! assert!(is_link_element(&link));
//! assert_eq!(link.attributes()["href"], "#");
//! ```

pub use linkwright_core::*;
