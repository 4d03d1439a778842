//! Concurrency-safe positional collections.
//!
//! The crate currently provides one structure: [`GuardedList`], a
//! doubly linked list addressed by 0-based position and guarded by a
//! single instance-wide exclusive lock.

#![no_std]

extern crate alloc;

pub mod positional;

pub use positional::{GuardedList, NodeRef};
