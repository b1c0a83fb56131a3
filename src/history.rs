use log::debug;

//===========================================================================//

/// Number of snapshots kept by the editor's undo history.
pub const DEFAULT_UNDO_CAPACITY: usize = 10;

//===========================================================================//

/// A bounded, linear undo/redo history of whole-state snapshots, stored in a
/// ring buffer.
///
/// `first` is the oldest retained snapshot, `current` the one matching the
/// live state as of the last commit/undo/redo, and `last` the newest one
/// still reachable by redo.  Committing while the ring is full silently
/// drops the oldest snapshot.  Committing after an undo discards the redo
/// path; histories never branch.
#[derive(Clone, Debug)]
pub struct UndoRing<T> {
    slots: Vec<T>,
    first: usize,
    current: usize,
    last: usize,
}

impl<T: Clone + PartialEq> UndoRing<T> {
    /// Creates a history whose every slot holds a copy of `initial`, so that
    /// undo starts out as a no-op.  Panics if `capacity` is zero.
    pub fn new(capacity: usize, initial: &T) -> UndoRing<T> {
        if capacity == 0 {
            panic!("Invalid undo capacity (was 0, but must be at least 1)");
        }
        UndoRing {
            slots: vec![initial.clone(); capacity],
            first: 0,
            current: 0,
            last: 0,
        }
    }

    /// Returns the number of slots in the ring.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the snapshot the history currently points at.
    pub fn current(&self) -> &T {
        &self.slots[self.current]
    }

    /// Returns true if `undo` would change anything.
    pub fn can_undo(&self) -> bool {
        self.current != self.first
    }

    /// Returns true if `redo` would change anything.
    pub fn can_redo(&self) -> bool {
        self.current != self.last && self.next(self.current) != self.first
    }

    /// Returns how many undo steps are available.
    pub fn undo_depth(&self) -> usize {
        (self.current + self.capacity() - self.first) % self.capacity()
    }

    /// Returns how many redo steps are available.
    pub fn redo_depth(&self) -> usize {
        (self.last + self.capacity() - self.current) % self.capacity()
    }

    fn next(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    fn previous(&self, index: usize) -> usize {
        (index + self.capacity() - 1) % self.capacity()
    }

    /// Drops all history and makes `live` the only (current) snapshot.
    pub fn reset(&mut self, live: &T) {
        for slot in self.slots.iter_mut() {
            slot.clone_from(live);
        }
        self.first = 0;
        self.current = 0;
        self.last = 0;
    }

    /// Called once per coalescing interval: records `live` as a new snapshot
    /// if it differs from the current one.  Returns true if a snapshot was
    /// committed.
    pub fn tick(&mut self, live: &T) -> bool {
        if self.slots[self.current] == *live {
            return false;
        }
        self.current = self.next(self.current);
        if self.current == self.first {
            self.first = self.next(self.first);
        }
        self.slots[self.current].clone_from(live);
        self.last = self.current;
        debug!(
            "Committed undo snapshot {} ({} undo steps available)",
            self.current,
            self.undo_depth()
        );
        true
    }

    /// Steps back one snapshot and restores it into `live`.  Returns false
    /// (and does nothing) if already at the oldest snapshot.
    pub fn undo(&mut self, live: &mut T) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.current = self.previous(self.current);
        if *live != self.slots[self.current] {
            live.clone_from(&self.slots[self.current]);
        }
        true
    }

    /// Steps forward one snapshot along the most recently undone path and
    /// restores it into `live`.  Returns false (and does nothing) if there
    /// is nothing to redo.
    pub fn redo(&mut self, live: &mut T) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.current = self.next(self.current);
        if *live != self.slots[self.current] {
            live.clone_from(&self.slots[self.current]);
        }
        true
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::UndoRing;

    #[test]
    fn fresh_ring_has_no_history() {
        let mut live = 7;
        let mut ring = UndoRing::new(4, &live);
        assert!(!ring.can_undo());
        assert!(!ring.can_redo());
        assert!(!ring.undo(&mut live));
        assert!(!ring.redo(&mut live));
        assert_eq!(live, 7);
    }

    #[test]
    fn tick_skips_unchanged_state() {
        let mut ring = UndoRing::new(4, &1);
        assert!(!ring.tick(&1));
        assert!(!ring.can_undo());
        assert!(ring.tick(&2));
        assert!(!ring.tick(&2));
        assert_eq!(ring.undo_depth(), 1);
    }

    #[test]
    fn tick_after_undo_drops_redo_path() {
        let mut live = 0;
        let mut ring = UndoRing::new(5, &live);
        for value in 1..=3 {
            live = value;
            ring.tick(&live);
        }
        ring.undo(&mut live);
        ring.undo(&mut live);
        assert_eq!(live, 1);
        assert_eq!(ring.redo_depth(), 2);
        live = 10;
        ring.tick(&live);
        assert!(!ring.can_redo());
        assert!(!ring.redo(&mut live));
        ring.undo(&mut live);
        assert_eq!(live, 1);
    }

    #[test]
    fn capacity_one_never_undoes() {
        let mut live = 0;
        let mut ring = UndoRing::new(1, &live);
        live = 1;
        assert!(ring.tick(&live));
        assert!(!ring.undo(&mut live));
        assert_eq!(live, 1);
        assert_eq!(*ring.current(), 1);
    }

    #[test]
    fn reset_discards_history() {
        let mut live = 0;
        let mut ring = UndoRing::new(3, &live);
        live = 1;
        ring.tick(&live);
        live = 42;
        ring.reset(&live);
        assert!(!ring.can_undo());
        assert!(!ring.undo(&mut live));
        assert_eq!(*ring.current(), 42);
    }

    #[test]
    #[should_panic(expected = "Invalid undo capacity")]
    fn zero_capacity_panics() {
        let _ = UndoRing::new(0, &0u8);
    }
}

//===========================================================================//
