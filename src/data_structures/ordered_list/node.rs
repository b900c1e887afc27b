// Copyright (c) 2025 Reel Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the ordered list.
//!
//! Each node exclusively owns its successor, so unlinking a node transfers
//! ownership of the rest of the chain to the predecessor link.

/// Owning link to the next node, `None` at the end of the chain.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A node in the ordered list.
///
/// # Type Parameters
///
/// * `T` - Type of the value stored in the node.
#[derive(Debug)]
pub(crate) struct Node<T> {
    /// The value stored in this node
    pub(crate) value: T,

    /// The next node in the list
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a boxed node holding `value` in front of `next`.
    pub(crate) fn boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}
