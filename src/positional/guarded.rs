use core::fmt;

use alloc::vec::Vec;
use crossbeam_utils::CachePadded;
use spin::Mutex;

use super::arena::NodeRef;
use super::raw::RawList;

/// A concurrency-safe doubly linked list addressed by 0-based position.
///
/// A single exclusive lock covers the whole structure. Every operation
/// acquires it for its full duration, blocking the caller until it is
/// available, so each call is atomic and serializable with respect to
/// every other call on the same instance. No operation releases the
/// lock mid-traversal, and no caller can observe a partially spliced
/// chain.
///
/// Invalid positions are not errors: `insert` ignores a negative
/// position and clamps a past-the-end one to an append, and `erase`
/// answers `false` when no node exists at the position.
///
/// [`find`](Self::find) hands out [`NodeRef`] snapshots rather than
/// references. A handle is inert without the lock; resolving it goes
/// back through [`view`](Self::view), which re-acquires the lock and
/// answers `None` once the node has been erased.
pub struct GuardedList<T> {
    inner: CachePadded<Mutex<RawList<T>>>,
}

impl<T> GuardedList<T> {
    /// Create a new, empty list.
    pub const fn new() -> Self {
        Self {
            inner: CachePadded::new(Mutex::new(RawList::new())),
        }
    }

    /// Insert `value` immediately before the element at `position`.
    ///
    /// A position at or past the current length appends at the end. A
    /// negative position is a silent no-op.
    pub fn insert(&self, value: T, position: isize) {
        self.inner.lock().insert(value, position);
    }

    /// Remove the element at `position`.
    ///
    /// Returns `true` iff an element existed there and was removed.
    /// Negative and out-of-range positions leave the list unchanged.
    pub fn erase(&self, position: isize) -> bool {
        self.inner.lock().erase(position)
    }

    /// Reset to the empty list in one atomic step.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Number of elements currently in the list.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Resolve a handle under the lock and apply `f` to the value.
    ///
    /// Answers `None` if the handle has gone stale, i.e. the node it
    /// named was erased (or the list cleared) after the handle was
    /// obtained.
    ///
    /// The closure runs under the lock and should complete quickly
    /// without sleeping.
    pub fn view<F, R>(&self, node: NodeRef, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        let list = self.inner.lock();
        list.get(node).map(f)
    }

    /// Apply `f` to every element in forward order, holding the lock
    /// for the duration of the traversal.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        let list = self.inner.lock();
        for value in list.iter() {
            f(value);
        }
    }
}

impl<T: PartialEq> GuardedList<T> {
    /// Collect a handle to every element equal to `value`, in forward
    /// order.
    ///
    /// The handles are a snapshot: any later mutation may invalidate
    /// them, after which they resolve to absent in
    /// [`view`](Self::view).
    pub fn find(&self, value: &T) -> Vec<NodeRef> {
        self.inner.lock().find(value)
    }
}

impl<T: Clone> GuardedList<T> {
    /// Copy out the forward sequence under the lock.
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.lock().iter().cloned().collect()
    }
}

impl<T> Default for GuardedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for GuardedList<T> {
    /// Space-separated forward rendering, with the lock held for the
    /// whole format call.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self.inner.lock();
        let mut first = true;
        for value in list.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
            first = false;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for GuardedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self.inner.lock();
        f.debug_struct("GuardedList")
            .field("len", &list.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
impl<T> GuardedList<T> {
    pub(crate) fn assert_chain(&self) {
        self.inner.lock().assert_chain();
    }
}
