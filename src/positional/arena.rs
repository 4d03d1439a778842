use alloc::vec::Vec;

/// A stable handle to one occupancy of one arena slot.
///
/// A handle carries no ownership and no mutation rights. Once the node
/// it named has been reclaimed, every lookup through the handle
/// resolves to `None`, even if the slot has been reused since.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef {
    index: u32,
    generation: u32,
}

struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

enum Entry<T> {
    Occupied(T),
    Vacant { next_free: Option<u32> },
}

/// Slot arena backing the list's nodes.
///
/// Vacant slots form an intrusive free list. Reclaiming a slot bumps
/// its generation, which is what turns outstanding [`NodeRef`]s stale.
pub(crate) struct SlotArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    len: usize,
}

impl<T> SlotArena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn insert(&mut self, value: T) -> NodeRef {
        self.len += 1;
        match self.free_head {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                let next_free = match slot.entry {
                    Entry::Vacant { next_free } => next_free,
                    Entry::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                self.free_head = next_free;
                slot.entry = Entry::Occupied(value);
                NodeRef {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    entry: Entry::Occupied(value),
                });
                NodeRef {
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// Reclaim the slot behind `node`, returning its value.
    ///
    /// Returns `None` if the handle is already stale.
    pub(crate) fn remove(&mut self, node: NodeRef) -> Option<T> {
        let slot = self.slots.get_mut(node.index as usize)?;
        if slot.generation != node.generation || !matches!(slot.entry, Entry::Occupied(_)) {
            return None;
        }
        slot.generation = slot.generation.wrapping_add(1);
        let entry = core::mem::replace(
            &mut slot.entry,
            Entry::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(node.index);
        self.len -= 1;
        match entry {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant { .. } => unreachable!(),
        }
    }

    pub(crate) fn get(&self, node: NodeRef) -> Option<&T> {
        match self.slots.get(node.index as usize) {
            Some(Slot {
                generation,
                entry: Entry::Occupied(value),
            }) if *generation == node.generation => Some(value),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        match self.slots.get_mut(node.index as usize) {
            Some(Slot {
                generation,
                entry: Entry::Occupied(value),
            }) if *generation == node.generation => Some(value),
            _ => None,
        }
    }

    /// Vacate every occupied slot in one pass, keeping the allocation.
    pub(crate) fn clear(&mut self) {
        self.free_head = None;
        self.len = 0;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if matches!(slot.entry, Entry::Occupied(_)) {
                slot.generation = slot.generation.wrapping_add(1);
            }
            slot.entry = Entry::Vacant {
                next_free: self.free_head,
            };
            self.free_head = Some(index as u32);
        }
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
