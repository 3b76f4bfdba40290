// SPDX-License-Identifier: Apache-2.0

use core::mem::size_of;

use crate::allocator::Allocator;
use crate::element::{Element, Member};

/// Gated size of one tree node.
pub(crate) const NODE_FOOTPRINT: usize = size_of::<Element>();

/// Post-order teardown of a tree, reporting every buffer back to the gate.
///
/// Numbers release only their node; strings release the byte buffer and the
/// node; containers release every child recursively, then the (possibly
/// empty) child storage, then the node. The same routine serves both
/// caller-driven `free` and the engine's cleanup of partial trees on
/// failure.
pub(crate) fn release_tree<A: Allocator>(alloc: &A, element: Element) {
    match element {
        Element::Number(_) => {}
        Element::String(bytes) => alloc.release(bytes.len()),
        Element::Array(items) => {
            let storage = items.storage_footprint();
            for item in items {
                release_tree(alloc, item);
            }
            alloc.release(storage);
        }
        Element::Object(members) => {
            let storage = members.storage_footprint();
            for member in members {
                release_member(alloc, member);
            }
            alloc.release(storage);
        }
    }
    alloc.release(NODE_FOOTPRINT);
}

/// Releases a member's name buffer, then its value subtree.
pub(crate) fn release_member<A: Allocator>(alloc: &A, member: Member) {
    alloc.release(member.name.len());
    release_tree(alloc, member.value);
}
