use alloc::vec::Vec;

use super::arena::{NodeRef, SlotArena};

pub(crate) struct Node<T> {
    value: T,
    next: Option<NodeRef>,
    /// `None` means the predecessor is the head sentinel.
    prev: Option<NodeRef>,
}

/// The unlocked core of the positional list.
///
/// The head sentinel owns no value, so it is folded into the struct
/// itself: `head` is the sentinel's forward link, and a node whose
/// `prev` is `None` has the sentinel as its predecessor. `tail` is
/// `None` exactly when the list is empty, i.e. when the tail is the
/// sentinel. Folding the sentinel in this way keeps front-of-list and
/// interior splices on the same code path: "sentinel" is just one more
/// predecessor arm to rewire.
pub(crate) struct RawList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<NodeRef>,
    tail: Option<NodeRef>,
}

impl<T> RawList<T> {
    pub(crate) const fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.arena.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn node(&self, node: NodeRef) -> &Node<T> {
        self.arena
            .get(node)
            .expect("chain link resolves to a reclaimed slot")
    }

    fn node_mut(&mut self, node: NodeRef) -> &mut Node<T> {
        self.arena
            .get_mut(node)
            .expect("chain link resolves to a reclaimed slot")
    }

    /// Walk `position` hops forward from the first element.
    fn seek(&self, position: usize) -> Option<NodeRef> {
        let mut curr = self.head;
        let mut index = 0;
        while let Some(node) = curr {
            if index == position {
                return Some(node);
            }
            curr = self.node(node).next;
            index += 1;
        }
        None
    }

    /// Splice a new node in immediately before the node at `position`,
    /// or append when `position` is at or past the end. A negative
    /// `position` leaves the list untouched.
    pub(crate) fn insert(&mut self, value: T, position: isize) {
        if position < 0 {
            return;
        }
        let curr = self.seek(position as usize);
        let prev = match curr {
            Some(node) => self.node(node).prev,
            None => self.tail,
        };
        let new = self.arena.insert(Node {
            value,
            next: curr,
            prev,
        });
        match prev {
            Some(prev) => self.node_mut(prev).next = Some(new),
            None => self.head = Some(new),
        }
        match curr {
            Some(curr) => self.node_mut(curr).prev = Some(new),
            None => self.tail = Some(new),
        }
    }

    /// Splice out the node at `position`.
    ///
    /// Returns `true` iff a node existed there; out-of-range and
    /// negative positions leave the list untouched.
    pub(crate) fn erase(&mut self, position: isize) -> bool {
        if position < 0 {
            return false;
        }
        let Some(curr) = self.seek(position as usize) else {
            return false;
        };
        let node = self
            .arena
            .remove(curr)
            .expect("seek returned a reclaimed slot");
        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        true
    }

    /// Reset to the empty-list state, discarding all nodes at once.
    pub(crate) fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Resolve a handle to its value. Stale handles resolve to `None`.
    pub(crate) fn get(&self, node: NodeRef) -> Option<&T> {
        self.arena.get(node).map(|n| &n.value)
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            curr: self.head,
        }
    }
}

impl<T: PartialEq> RawList<T> {
    /// One forward scan collecting a handle for every matching node,
    /// in traversal order.
    pub(crate) fn find(&self, value: &T) -> Vec<NodeRef> {
        let mut matches = Vec::new();
        let mut curr = self.head;
        while let Some(node) = curr {
            let n = self.node(node);
            if n.value == *value {
                matches.push(node);
            }
            curr = n.next;
        }
        matches
    }
}

impl<T> Default for RawList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward iterator over the chain. The caller must not mutate the
/// list while it is alive; the guarded layer enforces this by holding
/// the lock for the iterator's whole lifetime.
pub(crate) struct Iter<'a, T> {
    list: &'a RawList<T>,
    curr: Option<NodeRef>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.curr?;
        let n = self.list.node(node);
        self.curr = n.next;
        Some(&n.value)
    }
}

#[cfg(test)]
impl<T> RawList<T> {
    /// Walk the chain both ways and assert the structural invariants.
    pub(crate) fn assert_chain(&self) {
        let mut forward = Vec::new();
        let mut prev: Option<NodeRef> = None;
        let mut curr = self.head;
        while let Some(node) = curr {
            assert_eq!(
                self.node(node).prev,
                prev,
                "backward link disagrees with forward walk"
            );
            forward.push(node);
            prev = Some(node);
            curr = self.node(node).next;
        }
        assert_eq!(
            self.tail,
            forward.last().copied(),
            "tail is not the last node of the forward chain"
        );
        assert_eq!(
            forward.len(),
            self.arena.len(),
            "chain length disagrees with arena occupancy"
        );

        let mut backward = Vec::new();
        let mut curr = self.tail;
        while let Some(node) = curr {
            backward.push(node);
            curr = self.node(node).prev;
        }
        backward.reverse();
        assert_eq!(
            forward, backward,
            "backward walk does not retrace the forward walk"
        );
    }
}
