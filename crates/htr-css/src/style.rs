//! Inline-style translation.
//!
//! Converts extracted declarations into the property-map shape a UI
//! framework's inline-style mechanism expects: kebab-case property names
//! become camelCase, values stay as the raw authored string.

use std::collections::BTreeMap;

use crate::decl::Declaration;

/// Translated style map: camelCase property name → raw value.
pub type StyleMap = BTreeMap<String, String>;

/// Build a style map from declarations. Later declarations win on
/// duplicate property names.
pub fn translate_style(declarations: &[Declaration]) -> StyleMap {
    declarations
        .iter()
        .map(|decl| (camel_case(&decl.property), decl.value.clone()))
        .collect()
}

/// Kebab-case → camelCase: each hyphen immediately followed by an ASCII
/// letter is removed and the letter uppercased. Applies at the start of the
/// name too, so vendor prefixes come out as `-webkit-foo` → `WebkitFoo`.
pub fn camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut chars = property.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '-' {
            match chars.peek() {
                Some(&next) if next.is_ascii_alphabetic() => {
                    chars.next();
                    out.push(next.to_ascii_uppercase());
                }
                _ => out.push('-'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}
