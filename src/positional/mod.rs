//! # Guarded Positional List
//!
//! A doubly linked list addressed by 0-based position, safe for
//! simultaneous use from many threads. One exclusive lock covers the
//! whole structure, so every operation is atomic with respect to every
//! other operation on the same instance.
//!
//! ## Core Components
//!
//! - [`guarded::GuardedList`]: the public, lock-guarded list.
//! - [`arena::NodeRef`]: a stable handle to a node, handed out by
//!   `find`. A handle to a node that has since been erased resolves to
//!   absent instead of dangling.
//!
//! ## Position semantics
//!
//! - `insert` clamps a past-the-end position to an append and silently
//!   ignores a negative one.
//! - `erase` reports via `bool` whether a node existed at the position.
//!
//! ## Examples
//!
//! ```
//! use guarded_list::GuardedList;
//!
//! let list = GuardedList::new();
//! list.insert(10, 0);
//! list.insert(20, 0);
//! list.insert(30, 5); // past the end, appends
//! assert_eq!(list.snapshot(), vec![20, 10, 30]);
//!
//! assert!(list.erase(1));
//! assert!(!list.erase(5));
//! assert_eq!(list.len(), 2);
//!
//! let hits = list.find(&30);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(list.view(hits[0], |v| *v), Some(30));
//!
//! list.clear();
//! assert!(list.is_empty());
//! ```

pub mod arena;
pub mod guarded;
mod raw;


pub use arena::NodeRef;
pub use guarded::GuardedList;
