// SPDX-License-Identifier: Apache-2.0

//! A dependency-light JSON tree parser for embeddable use.
//!
//! [`parse`] turns a buffer of JSON text into a fully-owned [`Element`]
//! tree; [`free`] releases it. A failed parse returns a typed error and
//! leaves nothing behind — no partial tree ever reaches the caller.
//!
//! The grammar is deliberately small: objects, arrays, strings without
//! escape processing, and numbers. The allocation gate and the numeric
//! converter are capabilities the host can swap out, see [`Parser`].
//!
//! ```
//! let tree = jsontree::parse(br#"{"a":1,"b":[1,2,3]}"#).unwrap();
//! assert_eq!(tree.get("a").and_then(|e| e.as_number()), Some(1.0));
//! assert_eq!(tree.get("b").map(|b| b.len()), Some(3));
//! jsontree::free(tree);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod allocator;
pub use allocator::{AllocError, Allocator, SystemAlloc};

mod dealloc;

mod element;
pub use element::{Element, ElementKind, Member};

mod element_list;
pub use element_list::ElementList;

mod input_cursor;

mod number_converter;
pub use number_converter::{DecimalConverter, NumberConverter};

mod parse_error;
pub use parse_error::ParseError;

mod tree_parser;
pub use tree_parser::{Parser, DEFAULT_MAX_DEPTH};

/// Parses a JSON document with the default allocator and numeric converter.
///
/// The input must begin with `{` or `[`; empty input is malformed.
pub fn parse(input: &[u8]) -> Result<Element, ParseError> {
    Parser::new().parse(input)
}

/// Releases a tree obtained from a successful [`parse`]. Call it exactly
/// once per tree; a failed parse returns no tree, so there is nothing to
/// free.
pub fn free(tree: Element) {
    Parser::new().free(tree)
}
