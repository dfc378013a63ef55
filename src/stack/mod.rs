//! Stack implementation
//!
//! This module provides `ListStack`, a LIFO stack restricted to one end
//! of a singly linked chain of owned nodes. The layout follows
//! [this blog post](http://cglab.ca/~abeinges/blah/too-many-lists/book/):
//! each node owns its successor, and the top of the stack is the head of
//! the chain, so pushes and pops take constant time.
//!
//! Beyond push/pop/peek, the stack can report its size, render itself top
//! to bottom (`3 -> 2 -> 1 -> END`), duplicate its contents into a second
//! stack with freshly allocated nodes, clear itself back to empty while
//! staying allocated, and free itself entirely. A freed stack rejects
//! every subsequent operation with `ListError::NotAllocated`.

mod list;

pub use self::list::ListStack;
