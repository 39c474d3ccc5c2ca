// SPDX-License-Identifier: MIT OR Apache-2.0
//! Slot arena with lowest-first index reuse.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A `Vec` of optional slots that hands out indices, reusing the lowest
/// vacant one before growing.
#[derive(Debug, Clone)]
pub struct SlotArena<T> {
    slots: Vec<Option<T>>,
    /// Vacant indices below `slots.len()`, smallest on top
    free: BinaryHeap<Reverse<usize>>,
}

impl<T> SlotArena<T> {
    /// Create an empty arena
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: BinaryHeap::new(),
        }
    }

    /// Index the next [`insert`](Self::insert) will occupy
    pub fn next_index(&self) -> usize {
        self.free.peek().map_or(self.slots.len(), |Reverse(index)| *index)
    }

    /// Insert a value built from its assigned index
    pub fn insert(&mut self, make: impl FnOnce(usize) -> T) -> usize {
        match self.free.pop() {
            Some(Reverse(index)) => {
                self.slots[index] = Some(make(index));
                index
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Some(make(index)));
                index
            }
        }
    }

    /// Vacate a slot, returning its value
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let value = self.slots.get_mut(index)?.take()?;
        self.free.push(Reverse(index));
        Some(value)
    }

    /// Get a value by index
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    /// Get a mutable value by index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Whether the slot is occupied
    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Occupied slots in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Whether no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
