extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Link value marking the absence of a neighbour (or an empty free-list).
const NIL: usize = usize::MAX;

/// A stable reference to a slot in a [`List`].
///
/// Handles stay valid until the slot they name is removed from the list;
/// after that the slot index may be handed out again by a later `add`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Handle(usize);

/// A storage slot in the arena.
///
/// Occupied slots are linked into the recency list through `prev`/`next`.
/// Vacant slots hold `None` and are chained through `next` into the free-list.
struct Slot<T> {
    val: Option<T>,
    prev: usize,
    next: usize,
}

/// A doubly linked list whose nodes live in a `Vec` arena.
///
/// Links are slot indices rather than pointers, so the list needs no `unsafe`
/// code and can be moved freely. Removed slots are recycled through a
/// free-list, which keeps allocation flat once the list has reached its
/// working size.
///
/// The front of the list is the most recently added (or moved) element and
/// the back is the oldest one.
///
/// # Examples
///
/// ```ignore
/// let mut list = List::with_capacity(3);
/// let a = list.add(10);
/// let b = list.add(20);
/// list.move_to_front(a);
/// assert_eq!(list.remove_last(), Some(20));
/// ```
pub(crate) struct List<T> {
    slots: Vec<Slot<T>>,
    head: usize,
    tail: usize,
    free: usize,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list with room for `cap` elements before reallocating.
    pub(crate) fn with_capacity(cap: usize) -> Self {
        List {
            slots: Vec::with_capacity(cap),
            head: NIL,
            tail: NIL,
            free: NIL,
            len: 0,
        }
    }

    /// Returns the current number of elements in the list.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `val` at the front of the list and returns its handle.
    pub(crate) fn add(&mut self, val: T) -> Handle {
        let idx = self.alloc(val);
        self.attach(idx);
        self.len += 1;
        Handle(idx)
    }

    /// Returns a reference to the element behind `handle`.
    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> Option<&T> {
        self.slots.get(handle.0).and_then(|slot| slot.val.as_ref())
    }

    /// Returns a mutable reference to the element behind `handle`.
    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.slots
            .get_mut(handle.0)
            .and_then(|slot| slot.val.as_mut())
    }

    /// Moves the element behind `handle` to the front of the list.
    ///
    /// Relative order of every other element is unchanged.
    pub(crate) fn move_to_front(&mut self, handle: Handle) {
        let idx = handle.0;
        if self.head == idx || !self.is_occupied(idx) {
            return;
        }
        self.detach(idx);
        self.attach(idx);
    }

    /// Unlinks the element behind `handle` and returns it.
    ///
    /// The slot goes back on the free-list; `handle` must not be used again.
    pub(crate) fn remove(&mut self, handle: Handle) -> Option<T> {
        let idx = handle.0;
        if !self.is_occupied(idx) {
            return None;
        }
        self.detach(idx);
        self.len -= 1;
        self.release(idx)
    }

    /// Removes and returns the element at the back (the oldest one).
    pub(crate) fn remove_last(&mut self) -> Option<T> {
        if self.tail == NIL {
            return None;
        }
        self.remove(Handle(self.tail))
    }

    /// Returns the element at the back without unlinking it.
    pub(crate) fn last(&self) -> Option<&T> {
        if self.tail == NIL {
            return None;
        }
        self.get(Handle(self.tail))
    }

    /// Drops every element and forgets all slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.head = NIL;
        self.tail = NIL;
        self.free = NIL;
        self.len = 0;
    }

    /// Iterates from the front (newest) to the back (oldest).
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            cursor: self.head,
            remaining: self.len,
        }
    }

    #[inline]
    fn is_occupied(&self, idx: usize) -> bool {
        self.slots.get(idx).is_some_and(|slot| slot.val.is_some())
    }

    /// Places `val` in a vacant slot, reusing the free-list before growing.
    fn alloc(&mut self, val: T) -> usize {
        if self.free != NIL {
            let idx = self.free;
            let slot = &mut self.slots[idx];
            self.free = slot.next;
            slot.val = Some(val);
            slot.prev = NIL;
            slot.next = NIL;
            idx
        } else {
            self.slots.push(Slot {
                val: Some(val),
                prev: NIL,
                next: NIL,
            });
            self.slots.len() - 1
        }
    }

    /// Empties slot `idx` and pushes it on the free-list.
    fn release(&mut self, idx: usize) -> Option<T> {
        let slot = &mut self.slots[idx];
        let val = slot.val.take();
        slot.prev = NIL;
        slot.next = self.free;
        self.free = idx;
        val
    }

    /// Links slot `idx` in as the new head.
    fn attach(&mut self, idx: usize) {
        self.slots[idx].prev = NIL;
        self.slots[idx].next = self.head;
        if self.head != NIL {
            self.slots[self.head].prev = idx;
        } else {
            self.tail = idx;
        }
        self.head = idx;
    }

    /// Unlinks slot `idx` from its neighbours without freeing it.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        if prev != NIL {
            self.slots[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.slots[next].prev = prev;
        } else {
            self.tail = prev;
        }
        self.slots[idx].prev = NIL;
        self.slots[idx].next = NIL;
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .finish()
    }
}

/// Front-to-back iterator over a [`List`].
pub(crate) struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let slot = &self.slots[self.cursor];
        self.cursor = slot.next;
        self.remaining -= 1;
        slot.val.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::vec::Vec;

    fn collect<T: Copy>(list: &List<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_add_orders_newest_first() {
        let mut list = List::with_capacity(3);
        list.add(1);
        list.add(2);
        list.add(3);
        assert_eq!(list.len(), 3);
        assert_eq!(collect(&list), [3, 2, 1]);
    }

    #[test]
    fn test_move_to_front_keeps_others_in_order() {
        let mut list = List::with_capacity(4);
        let a = list.add('a');
        list.add('b');
        list.add('c');
        list.add('d');
        list.move_to_front(a);
        assert_eq!(collect(&list), ['a', 'd', 'c', 'b']);

        // Moving the head is a no-op.
        list.move_to_front(a);
        assert_eq!(collect(&list), ['a', 'd', 'c', 'b']);
    }

    #[test]
    fn test_remove_middle_and_ends() {
        let mut list = List::with_capacity(3);
        let a = list.add(1);
        let b = list.add(2);
        let c = list.add(3);

        assert_eq!(list.remove(b), Some(2));
        assert_eq!(collect(&list), [3, 1]);
        assert_eq!(list.remove(c), Some(3));
        assert_eq!(collect(&list), [1]);
        assert_eq!(list.remove(a), Some(1));
        assert!(list.is_empty());
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn test_remove_twice_is_none() {
        let mut list = List::with_capacity(1);
        let a = list.add(7);
        assert_eq!(list.remove(a), Some(7));
        assert_eq!(list.remove(a), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_remove_last_pops_oldest() {
        let mut list = List::with_capacity(3);
        list.add(1);
        list.add(2);
        list.add(3);
        assert_eq!(list.last(), Some(&1));
        assert_eq!(list.remove_last(), Some(1));
        assert_eq!(list.remove_last(), Some(2));
        assert_eq!(list.remove_last(), Some(3));
        assert_eq!(list.remove_last(), None);
        assert_eq!(list.last(), None);
    }

    #[test]
    fn test_slots_are_reused() {
        let mut list = List::with_capacity(2);
        let a = list.add(1);
        list.add(2);
        list.remove(a);
        let c = list.add(3);
        assert_eq!(c, a);
        assert_eq!(list.slots.len(), 2);
        assert_eq!(collect(&list), [3, 2]);
    }

    #[test]
    fn test_get_and_get_mut() {
        let mut list = List::with_capacity(2);
        let a = list.add(10);
        assert_eq!(list.get(a), Some(&10));
        if let Some(v) = list.get_mut(a) {
            *v = 11;
        }
        assert_eq!(list.get(a), Some(&11));
        list.remove(a);
        assert_eq!(list.get(a), None);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut list = List::with_capacity(2);
        list.add(1);
        list.add(2);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.remove_last(), None);
        list.add(3);
        assert_eq!(collect(&list), [3]);
    }

    #[test]
    fn test_iter_size_hint() {
        let mut list = List::with_capacity(3);
        list.add(1);
        list.add(2);
        let iter = list.iter();
        assert_eq!(iter.len(), 2);
    }
}
