// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;
use core::mem::size_of;

use crate::allocator::{AllocError, Allocator};

/// Containers start this small and double from here.
pub(crate) const INITIAL_CAPACITY: usize = 2;

/// An append-only, doubling-capacity sequence of owned children, used for
/// both object members and array items. Insertion order is the document
/// order and is preserved.
///
/// Growth goes through the allocation gate: the list asks for its initial
/// storage on creation and asks again each time the capacity doubles, so a
/// refused growth surfaces as `OutOfMemory` rather than aborting the host.
#[derive(Debug)]
pub struct ElementList<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> ElementList<T> {
    pub(crate) fn new<A: Allocator>(alloc: &A) -> Result<Self, AllocError> {
        alloc.allocate(INITIAL_CAPACITY * size_of::<T>())?;
        Ok(Self {
            items: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        })
    }

    /// Makes room for one more item, doubling the storage if the list is
    /// full. The capacity is only committed once the gate admits the growth.
    pub(crate) fn reserve_for_push<A: Allocator>(&mut self, alloc: &A) -> Result<(), AllocError> {
        if self.items.len() == self.capacity {
            let grown = self.capacity * 2;
            alloc.reallocate(self.capacity * size_of::<T>(), grown * size_of::<T>())?;
            self.items.reserve_exact(grown - self.items.len());
            self.capacity = grown;
        }
        Ok(())
    }

    /// Appends an item. Callers go through `reserve_for_push` first.
    pub(crate) fn push(&mut self, item: T) {
        debug_assert!(self.items.len() < self.capacity);
        self.items.push(item);
    }

    /// The gated size of the child storage, for the deallocator.
    pub(crate) fn storage_footprint(&self) -> usize {
        self.capacity * size_of::<T>()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for ElementList<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'l, T> IntoIterator for &'l ElementList<T> {
    type Item = &'l T;
    type IntoIter = core::slice::Iter<'l, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> core::ops::Index<usize> for ElementList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

// Equality compares the items only; capacity is a storage detail.
impl<T: PartialEq> PartialEq for ElementList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}
