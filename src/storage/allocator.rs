//! Allocation strategy for heap-allocated machines.

/// Provides and releases storage for machines created by
/// [`OwnedFsm::construct`](super::OwnedFsm::construct).
///
/// The strategy is passed explicitly at construction time. Storage is
/// always a `Box` from the global allocator; an implementation can count,
/// refuse or observe allocations, which is what test doubles use it for.
pub trait FsmAllocator {
    /// Move `value` into freshly allocated storage.
    ///
    /// Returning `None` reports an allocation failure; `value` is dropped.
    fn allocate<T>(&self, value: T) -> Option<Box<T>>;

    /// Release storage previously returned by [`allocate`](Self::allocate).
    fn deallocate<T>(&self, storage: Box<T>);
}

/// The platform's global allocator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemAllocator;

impl FsmAllocator for SystemAllocator {
    fn allocate<T>(&self, value: T) -> Option<Box<T>> {
        Some(Box::new(value))
    }

    fn deallocate<T>(&self, storage: Box<T>) {
        drop(storage);
    }
}

impl<A: FsmAllocator> FsmAllocator for &A {
    fn allocate<T>(&self, value: T) -> Option<Box<T>> {
        (**self).allocate(value)
    }

    fn deallocate<T>(&self, storage: Box<T>) {
        (**self).deallocate(storage)
    }
}
