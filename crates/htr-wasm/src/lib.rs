//! WASM bindings for the htr pipeline.
//!
//! Exposes `convert()` to JavaScript via wasm-bindgen.
//! Returns an array of plain JS descriptor objects or throws on error.

use wasm_bindgen::prelude::*;

/// Convert an HTML string to an array of element descriptors.
///
/// Each descriptor is either a string (a text fragment) or an object
/// `{ tag, props, children }`. Throws a JS error if parsing fails.
#[wasm_bindgen]
pub fn convert(html: &str) -> Result<JsValue, JsError> {
    let nodes = htr_react::convert(html).map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&nodes).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the pipeline version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use htr_react::{PropValue, ReactNode};

    // =========================================================================
    // Native tests (non-WASM) — verify the conversion pipeline works
    // =========================================================================

    fn native_convert(html: &str) -> Vec<ReactNode> {
        htr_react::convert(html).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(native_convert("").is_empty());
    }

    #[test]
    fn test_static_markup() {
        let nodes = native_convert(r#"<div class="container"><span>Hello</span></div>"#);
        assert_eq!(nodes.len(), 1);
        let ReactNode::Element(div) = &nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(div.tag, "div");
        assert_eq!(div.props.get("className"), Some(&PropValue::from("container")));
    }

    #[test]
    fn test_multiple_converts_independent() {
        // Verify no global state leakage between conversions
        let first = native_convert("<div></div>");
        let second = native_convert("<div></div>");
        assert_eq!(first, second);
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }

    #[test]
    fn test_scripts_never_forwarded() {
        let nodes = native_convert("<script>alert(1)</script><p>ok</p>");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(&nodes[0], ReactNode::Element(el) if el.tag == "p"));
    }
}
