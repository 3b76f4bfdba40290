// SPDX-License-Identifier: Apache-2.0

use alloc::boxed::Box;
use log::trace;

use crate::allocator::{Allocator, SystemAlloc};
use crate::dealloc::{self, NODE_FOOTPRINT};
use crate::element::{Element, Member};
use crate::element_list::ElementList;
use crate::input_cursor::InputCursor;
use crate::number_converter::{DecimalConverter, NumberConverter};
use crate::parse_error::ParseError;

/// Default cap on container nesting. Recursion depth mirrors nesting depth,
/// so the cap keeps adversarial input from exhausting the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// A recursive-descent parser that builds an owned [`Element`] tree.
///
/// The parser carries two capabilities fixed at construction: an allocation
/// gate and a numeric converter. `Parser::new()` binds both to the host
/// defaults; hosts without a general-purpose allocator or numeric parser
/// supply their own via [`Parser::with_parts`].
///
/// A failed parse never leaks: every node, string buffer and child list
/// admitted by the gate during the attempt has been released again by the
/// time the error is returned, so the caller receives either a complete tree
/// or nothing to free.
pub struct Parser<A = SystemAlloc, N = DecimalConverter>
where
    A: Allocator,
    N: NumberConverter,
{
    alloc: A,
    numbers: N,
    max_depth: usize,
}

impl Parser {
    /// A parser over the host's default allocator and numeric converter.
    pub fn new() -> Self {
        Self::with_parts(SystemAlloc, DecimalConverter)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Allocator, N: NumberConverter> Parser<A, N> {
    /// A parser over custom capabilities.
    pub fn with_parts(alloc: A, numbers: N) -> Self {
        Parser {
            alloc,
            numbers,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replaces the nesting cap. Depth counts every open container, so the
    /// root sits at depth 1.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses a complete document. The first byte must open an object or an
    /// array; trailing whitespace is allowed, anything else after the root is
    /// malformed.
    pub fn parse(&self, input: &[u8]) -> Result<Element, ParseError> {
        Engine {
            alloc: &self.alloc,
            numbers: &self.numbers,
            cursor: InputCursor::new(input),
            max_depth: self.max_depth,
        }
        .parse_document()
    }

    /// Releases a tree obtained from a successful [`parse`](Self::parse),
    /// reporting every buffer back to this parser's allocation gate. Call it
    /// exactly once per tree.
    pub fn free(&self, tree: Element) {
        dealloc::release_tree(&self.alloc, tree);
    }
}

struct Engine<'p, 'a, A, N> {
    alloc: &'p A,
    numbers: &'p N,
    cursor: InputCursor<'a>,
    max_depth: usize,
}

impl<A: Allocator, N: NumberConverter> Engine<'_, '_, A, N> {
    fn parse_document(mut self) -> Result<Element, ParseError> {
        // The very first byte decides; no leading whitespace is tolerated
        // and nothing has been allocated yet when this check fails.
        match self.cursor.peek() {
            Some(b'{') | Some(b'[') => {}
            _ => {
                trace!("document does not start with an object or array");
                return Err(ParseError::MalformedInput);
            }
        }
        let root = self.parse_value(1)?;

        self.cursor.skip_whitespace();
        if !self.cursor.at_end() {
            trace!("trailing bytes after the root element");
            dealloc::release_tree(self.alloc, root);
            return Err(ParseError::MalformedInput);
        }
        Ok(root)
    }

    /// Dispatches on one byte of lookahead. On success the returned element
    /// is fully populated; on failure everything this frame admitted through
    /// the gate, the node included, has been released again.
    fn parse_value(&mut self, depth: usize) -> Result<Element, ParseError> {
        let Some(byte) = self.cursor.peek() else {
            return Err(ParseError::MalformedInput);
        };
        self.alloc.allocate(NODE_FOOTPRINT)?;
        let result = match byte {
            b'{' => self.parse_object(depth),
            b'[' => self.parse_array(depth),
            b'"' => self.parse_string_value(),
            b'0'..=b'9' | b'.' => self.parse_number(),
            _ => {
                trace!("no production starts with byte {byte:#04x}");
                Err(ParseError::MalformedInput)
            }
        };
        if result.is_err() {
            self.alloc.release(NODE_FOOTPRINT);
        }
        result
    }

    fn parse_object(&mut self, depth: usize) -> Result<Element, ParseError> {
        if depth > self.max_depth {
            return Err(ParseError::MalformedInput);
        }
        self.cursor.advance(); // '{'
        let mut members: ElementList<Member> = ElementList::new(self.alloc)?;

        self.cursor.skip_whitespace();
        if self.cursor.peek() == Some(b'}') {
            self.cursor.advance();
            return Ok(Element::Object(members));
        }

        loop {
            let name = match self.read_member_name() {
                Ok(name) => name,
                Err(e) => return Err(self.abandon_members(members, e)),
            };
            self.cursor.skip_whitespace();
            let value = match self.parse_value(depth + 1) {
                Ok(value) => value,
                Err(e) => {
                    self.alloc.release(name.len());
                    return Err(self.abandon_members(members, e));
                }
            };
            if let Err(grow) = members.reserve_for_push(self.alloc) {
                self.alloc.release(name.len());
                dealloc::release_tree(self.alloc, value);
                return Err(self.abandon_members(members, grow.into()));
            }
            members.push(Member { name, value });

            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b',') => {
                    // A `,` must introduce another member; `}` right after
                    // it fails in the key read below. Trailing commas stay
                    // rejected as a compatibility constraint.
                    self.cursor.advance();
                    self.cursor.skip_whitespace();
                }
                Some(b'}') => {
                    self.cursor.advance();
                    return Ok(Element::Object(members));
                }
                _ => return Err(self.abandon_members(members, ParseError::MalformedInput)),
            }
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<Element, ParseError> {
        if depth > self.max_depth {
            return Err(ParseError::MalformedInput);
        }
        self.cursor.advance(); // '['
        let mut items: ElementList<Element> = ElementList::new(self.alloc)?;

        self.cursor.skip_whitespace();
        if self.cursor.peek() == Some(b']') {
            self.cursor.advance();
            return Ok(Element::Array(items));
        }

        loop {
            let item = match self.parse_value(depth + 1) {
                Ok(item) => item,
                Err(e) => return Err(self.abandon_items(items, e)),
            };
            if let Err(grow) = items.reserve_for_push(self.alloc) {
                dealloc::release_tree(self.alloc, item);
                return Err(self.abandon_items(items, grow.into()));
            }
            items.push(item);

            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b',') => {
                    self.cursor.advance();
                    self.cursor.skip_whitespace();
                }
                Some(b']') => {
                    self.cursor.advance();
                    return Ok(Element::Array(items));
                }
                _ => return Err(self.abandon_items(items, ParseError::MalformedInput)),
            }
        }
    }

    /// Reads a quoted key and the `:` that must follow it (after
    /// whitespace). On error every gate admission made here is released.
    fn read_member_name(&mut self) -> Result<Box<[u8]>, ParseError> {
        let name = self.read_quoted()?;
        self.cursor.skip_whitespace();
        if self.cursor.peek() != Some(b':') {
            self.alloc.release(name.len());
            return Err(ParseError::MalformedInput);
        }
        self.cursor.advance();
        Ok(name)
    }

    /// A string value: quoted bytes whose closing quote must be followed
    /// (after whitespace) by `,`, `}` or `]`.
    fn parse_string_value(&mut self) -> Result<Element, ParseError> {
        let bytes = self.read_quoted()?;
        if let Err(e) = self.require_value_terminator() {
            self.alloc.release(bytes.len());
            return Err(e);
        }
        Ok(Element::String(bytes))
    }

    /// Copies the bytes strictly between the quotes into a fresh owned
    /// buffer. Escapes are not interpreted; an embedded quote always
    /// terminates the scan, which is a documented limitation of this
    /// grammar, not an oversight to patch here.
    fn read_quoted(&mut self) -> Result<Box<[u8]>, ParseError> {
        if self.cursor.peek() != Some(b'"') {
            return Err(ParseError::MalformedInput);
        }
        self.cursor.advance();
        let rest = self.cursor.remaining();
        let Some(length) = rest.iter().position(|&b| b == b'"') else {
            trace!("unterminated string");
            return Err(ParseError::MalformedInput);
        };
        self.alloc.allocate(length)?;
        let bytes: Box<[u8]> = rest[..length].into();
        self.cursor.advance_by(length + 1); // content plus closing quote
        Ok(bytes)
    }

    fn parse_number(&mut self) -> Result<Element, ParseError> {
        let rest = self.cursor.remaining();
        let (value, consumed) = self.numbers.convert(rest);
        let consumed = if consumed == 0 {
            // A lone '.' is a defined legacy case: the converter's value
            // stands and exactly one byte is consumed.
            if rest.first() != Some(&b'.') {
                return Err(ParseError::MalformedInput);
            }
            1
        } else {
            consumed
        };
        self.cursor.advance_by(consumed);
        self.require_value_terminator()?;
        Ok(Element::Number(value))
    }

    /// After a string or number value the next significant byte must keep
    /// the enclosing production going: `,`, `}` or `]`. The byte is left for
    /// the container to consume; end of input here is premature.
    fn require_value_terminator(&mut self) -> Result<(), ParseError> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            Some(b',') | Some(b'}') | Some(b']') => Ok(()),
            _ => Err(ParseError::MalformedInput),
        }
    }

    /// Releases completed members and their storage, passing the original
    /// error through.
    fn abandon_members(&self, members: ElementList<Member>, error: ParseError) -> ParseError {
        let storage = members.storage_footprint();
        for member in members {
            dealloc::release_member(self.alloc, member);
        }
        self.alloc.release(storage);
        error
    }

    /// Releases completed items and their storage, passing the original
    /// error through.
    fn abandon_items(&self, items: ElementList<Element>, error: ParseError) -> ParseError {
        let storage = items.storage_footprint();
        for item in items {
            dealloc::release_tree(self.alloc, item);
        }
        self.alloc.release(storage);
        error
    }
}
