//! Element descriptors — the framework-ready output of the pipeline.

use std::collections::BTreeMap;

use htr_css::StyleMap;
use serde::Serialize;

/// Normalized property map of an element. Key order carries no meaning.
pub type Props = BTreeMap<String, PropValue>;

/// A property value. Attributes pass through as strings; the rewrite rules
/// introduce the other shapes (`defaultChecked`, `key`, translated `style`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    String(String),
    Bool(bool),
    Number(usize),
    Style(StyleMap),
}

impl PropValue {
    /// The string payload, if this is a plain string property.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(value) => Some(value),
            PropValue::Bool(_) | PropValue::Number(_) | PropValue::Style(_) => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::String(value.to_string())
    }
}

/// One converted output node: a text fragment or a constructed element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReactNode {
    Text(String),
    Element(ReactElement),
}

/// A constructed element: tag name, normalized props (including the identity
/// key), ordered children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReactElement {
    pub tag: String,
    pub props: Props,
    pub children: Vec<ReactNode>,
}

impl ReactElement {
    pub fn new(tag: impl Into<String>, props: Props, children: Vec<ReactNode>) -> Self {
        Self {
            tag: tag.into(),
            props,
            children,
        }
    }

    /// The identity key assigned during conversion.
    pub fn key(&self) -> Option<usize> {
        match self.props.get("key") {
            Some(PropValue::Number(key)) => Some(*key),
            _ => None,
        }
    }
}
