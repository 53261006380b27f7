//! Fixed-capacity entity pools
//!
//! Slots are allocated once and recycled through their alive flag. A pool
//! never grows: when every slot is taken, allocation returns `None` and the
//! caller drops whatever it wanted to create.

/// An entity that can occupy a pool slot
pub trait Slot {
    fn is_alive(&self) -> bool;
}

/// Capacity-bounded slot array with first-free allocation
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Slot> Pool<T> {
    /// Create a pool of `capacity` slots, each built by `make` (and expected dead)
    pub fn new(capacity: usize, mut make: impl FnMut() -> T) -> Self {
        let slots = (0..capacity).map(|_| make()).collect();
        Self { slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Index of the first dead slot, if any
    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(|s| !s.is_alive())
    }

    /// The first dead slot, ready to be re-initialised by the caller
    pub fn allocate(&mut self) -> Option<(usize, &mut T)> {
        let index = self.first_free()?;
        Some((index, &mut self.slots[index]))
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }

    /// Live entities with their slot index, in slot order
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots.iter().enumerate().filter(|(_, s)| s.is_alive())
    }

    pub fn iter_alive_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, s)| s.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_alive()).count()
    }
}
