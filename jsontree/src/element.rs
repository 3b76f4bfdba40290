// SPDX-License-Identifier: Apache-2.0

use alloc::boxed::Box;

use crate::element_list::ElementList;

/// The kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Object,
    Array,
    String,
    Number,
}

/// A node in a parsed JSON tree.
///
/// Ownership is strictly tree-shaped: every child is owned by exactly one
/// parent. String payloads are the raw bytes found between the delimiting
/// quotes — no escape processing and no UTF-8 validation is performed, so
/// the payload is a byte buffer with an optional `&str` view.
///
/// Only object members carry a name; it lives on [`Member`], so array items
/// and the root cannot even represent one.
#[derive(Debug, PartialEq)]
pub enum Element {
    /// An ordered sequence of named members. Key order is document order.
    Object(ElementList<Member>),
    /// An ordered sequence of unnamed items.
    Array(ElementList<Element>),
    /// The raw bytes between the quotes.
    String(Box<[u8]>),
    /// A double produced by the numeric converter.
    Number(f64),
}

/// A name/value pair inside an object.
#[derive(Debug, PartialEq)]
pub struct Member {
    /// The raw key bytes, same representation as a string payload.
    pub name: Box<[u8]>,
    pub value: Element,
}

impl Member {
    /// The key as UTF-8 text, if it happens to be valid UTF-8.
    pub fn name_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.name).ok()
    }
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Object(_) => ElementKind::Object,
            Element::Array(_) => ElementKind::Array,
            Element::String(_) => ElementKind::String,
            Element::Number(_) => ElementKind::Number,
        }
    }

    /// Number of children. Leaves have none.
    pub fn len(&self) -> usize {
        match self {
            Element::Object(members) => members.len(),
            Element::Array(items) => items.len(),
            Element::String(_) | Element::Number(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_object(&self) -> Option<&ElementList<Member>> {
        match self {
            Element::Object(members) => Some(members),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ElementList<Element>> {
        match self {
            Element::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The raw string payload.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Element::String(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// The string payload as UTF-8 text, if it happens to be valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|bytes| core::str::from_utf8(bytes).ok())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Element::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The value of the first member with the given key, if this element is
    /// an object.
    pub fn get(&self, name: &str) -> Option<&Element> {
        self.as_object()?
            .iter()
            .find(|member| member.name.as_ref() == name.as_bytes())
            .map(|member| &member.value)
    }
}
