//! Linked list implementation
//!
//! This module provides `LinkedList`, an ordered sequence of elements
//! kept in a singly linked chain of reference-counted nodes. The list
//! tracks its head, its tail, and its length, so prepending, appending,
//! and length queries take constant time, while positional access walks
//! the chain from the head. Removing the tail also walks from the head:
//! the chain carries no back links, so cheap appends pair with a linear
//! tail removal.
//!
//! Failed operations never mutate the list. A freed list rejects every
//! subsequent operation with `ListError::NotAllocated`; see the crate
//! docs for the full status taxonomy. `print` renders the sequence as
//! `20 -> 10 -> 5 -> END`, where `END` is the sentinel closing every
//! non-empty rendering.

mod singly;

pub use self::singly::LinkedList;
