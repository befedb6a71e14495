//! Attribute normalization.
//!
//! Rewrites a tag's raw attribute map into framework-ready props and assigns
//! the identity key. Rules run in a fixed priority; a key removed by an
//! earlier rule is never re-examined by a later one.

use htr_css::{extract_declarations, translate_style};
use htr_dom::{inner_markup, AttrMap, TagNode};
use tracing::debug;

use crate::counter::Counter;
use crate::element::{PropValue, Props};

/// Normalize a tag's attributes and assign the next identity key.
///
/// Rewrite rules, in order:
/// 1. `checked` → `defaultChecked = true`, original value discarded.
/// 2. `class` → `className`.
/// 3. `for` → `htmlFor`.
/// 4. `style` → translated style map; dropped entirely if the CSS is
///    malformed.
/// 5. `contenteditable` → removed.
/// 6. `value` → `defaultValue`.
/// 7. `<textarea>` → `defaultValue` = serialized inner markup (the tree
///    converter emits no children for it).
/// 8. Any remaining attribute named `on*` → removed.
/// 9. `key` = current counter value, counter advanced.
///
/// Rules 1–6 treat a present-but-empty attribute as absent; such attributes
/// pass through as raw string props.
pub fn normalize_attributes(node: &TagNode, counter: &mut Counter) -> Props {
    let mut attrs = node.attrs.clone();
    let mut props = Props::new();

    if take_present(&mut attrs, "checked").is_some() {
        props.insert("defaultChecked".to_string(), PropValue::Bool(true));
    }

    if let Some(class) = take_present(&mut attrs, "class") {
        props.insert("className".to_string(), PropValue::String(class));
    }

    if let Some(html_for) = take_present(&mut attrs, "for") {
        props.insert("htmlFor".to_string(), PropValue::String(html_for));
    }

    if let Some(style) = take_present(&mut attrs, "style") {
        match extract_declarations(&style) {
            Ok(declarations) => {
                props.insert(
                    "style".to_string(),
                    PropValue::Style(translate_style(&declarations)),
                );
            }
            // No partial styles: malformed CSS drops the property.
            Err(error) => debug!(%error, "dropping malformed style attribute"),
        }
    }

    // Removed outright, never translated.
    let _ = take_present(&mut attrs, "contenteditable");

    if let Some(value) = take_present(&mut attrs, "value") {
        props.insert("defaultValue".to_string(), PropValue::String(value));
    }

    if node.name == "textarea" {
        props.insert(
            "defaultValue".to_string(),
            PropValue::String(inner_markup(node)),
        );
    }

    // Inline event handlers are never forwarded.
    attrs.retain(|name, _| !name.starts_with("on"));

    for (name, value) in attrs {
        props.insert(name, PropValue::String(value));
    }

    props.insert("key".to_string(), PropValue::Number(counter.assign()));
    props
}

/// Remove and return an attribute, counting a present-but-empty value as
/// absent. This is the one place the presence convention lives.
fn take_present(attrs: &mut AttrMap, name: &str) -> Option<String> {
    match attrs.get(name) {
        Some(value) if !value.is_empty() => attrs.remove(name),
        _ => None,
    }
}
