// SPDX-License-Identifier: Apache-2.0

/// An allocation request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError;

impl core::fmt::Display for AllocError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "allocation failed")
    }
}

/// Allocation gate consulted by the parser around every heap operation.
///
/// The tree's storage itself lives in ordinary owned buffers; the gate sits
/// in front of them. Every node, string buffer and child-list buffer asks the
/// gate with `allocate`/`reallocate` before coming into being, and the
/// recursive deallocator reports every `release`. This keeps the engine
/// usable in hosts that must budget memory, and lets tests refuse any single
/// allocation and audit that allocations and releases balance.
///
/// Methods take `&self` so a gate can be shared and can keep its counters in
/// interior-mutable cells.
pub trait Allocator {
    /// Admit an allocation of `size` bytes.
    fn allocate(&self, size: usize) -> Result<(), AllocError>;

    /// Admit growing an existing `old_size`-byte buffer to `new_size` bytes.
    fn reallocate(&self, old_size: usize, new_size: usize) -> Result<(), AllocError>;

    /// Record that `size` bytes were returned.
    fn release(&self, size: usize);
}

/// Default gate: the host's general-purpose allocator is trusted to serve
/// every request, so everything is admitted and releases are not tracked.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAlloc;

impl Allocator for SystemAlloc {
    fn allocate(&self, _size: usize) -> Result<(), AllocError> {
        Ok(())
    }

    fn reallocate(&self, _old_size: usize, _new_size: usize) -> Result<(), AllocError> {
        Ok(())
    }

    fn release(&self, _size: usize) {}
}

impl<A: Allocator + ?Sized> Allocator for &A {
    fn allocate(&self, size: usize) -> Result<(), AllocError> {
        (**self).allocate(size)
    }

    fn reallocate(&self, old_size: usize, new_size: usize) -> Result<(), AllocError> {
        (**self).reallocate(old_size, new_size)
    }

    fn release(&self, size: usize) {
        (**self).release(size)
    }
}
