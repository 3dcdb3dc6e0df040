//! Heap construction and destruction of machines.
//!
//! Machines embedded in caller storage never come through here. This module
//! covers the other path: Construct asks an [`FsmAllocator`] for storage and
//! hands back an [`OwnedFsm`], and Destroy gives that storage back.

mod allocator;
mod owned;

pub use allocator::{FsmAllocator, SystemAllocator};
pub use owned::OwnedFsm;
