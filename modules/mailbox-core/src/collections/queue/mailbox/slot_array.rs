use alloc::{
  alloc::{handle_alloc_error, Layout},
  boxed::Box,
  vec::Vec,
};
use core::{marker::PhantomData, ptr};

use portable_atomic::{AtomicPtr, Ordering};


/// Fixed-length array of slots, each owning at most one boxed element.
///
/// A null pointer marks an empty slot. Stores publish with `Release` and removals observe with
/// `Acquire`, so a producer filling the slot a consumer is inspecting never races on the element.
pub(crate) struct SlotArray<E> {
  slots: Box<[AtomicPtr<E>]>,
  _pd:   PhantomData<E>,
}

impl<E> SlotArray<E> {
  /// Allocates `len` empty slots, aborting the process if the allocation fails.
  pub(crate) fn with_len(len: usize) -> Self {
    let mut slots = Vec::new();
    if slots.try_reserve_exact(len).is_err() {
      let layout = Layout::array::<AtomicPtr<E>>(len).unwrap_or_else(|_| Layout::new::<AtomicPtr<E>>());
      handle_alloc_error(layout);
    }
    slots.extend((0..len).map(|_| AtomicPtr::new(ptr::null_mut())));
    Self { slots: slots.into_boxed_slice(), _pd: PhantomData }
  }

  pub(crate) fn len(&self) -> usize {
    self.slots.len()
  }

  pub(crate) fn next_index(&self, index: usize) -> usize {
    (index + 1) % self.slots.len()
  }

  pub(crate) fn prev_index(&self, index: usize) -> usize {
    if index == 0 {
      self.slots.len() - 1
    } else {
      index - 1
    }
  }

  #[cfg(test)]
  pub(crate) fn is_occupied(&self, index: usize) -> bool {
    !self.slots[index].load(Ordering::Acquire).is_null()
  }

  /// Moves `element` into the slot. The slot must be empty.
  pub(crate) fn put(&self, index: usize, element: E) {
    let raw = Box::into_raw(Box::new(element));
    let previous = self.slots[index].swap(raw, Ordering::AcqRel);
    debug_assert!(previous.is_null(), "slot {index} overwritten while occupied");
  }

  /// Moves the element out of the slot, leaving it empty.
  pub(crate) fn take(&self, index: usize) -> Option<E> {
    let raw = self.slots[index].swap(ptr::null_mut(), Ordering::AcqRel);
    if raw.is_null() {
      return None;
    }
    // SAFETY: non-null slot pointers come from `Box::into_raw` in `put` or `transfer_from`, and
    // the swap above gave this call exclusive ownership of the pointer.
    let boxed = unsafe { Box::from_raw(raw) };
    Some(*boxed)
  }

  /// Borrows the element stored in the slot.
  ///
  /// # Safety
  ///
  /// The caller must prevent the slot from being emptied, and the array from being dropped, for
  /// as long as the returned reference is alive.
  pub(crate) unsafe fn get<'a>(&self, index: usize) -> Option<&'a E> {
    let raw = self.slots[index].load(Ordering::Acquire);
    // SAFETY: the pointer is null or refers to a live boxed element that the caller keeps in
    // place for `'a`.
    unsafe { raw.as_ref() }
  }

  /// Moves the boxed element at `from` in `source` into the slot `to` of `self`, without
  /// reallocating the element.
  pub(crate) fn transfer_from(&self, source: &SlotArray<E>, from: usize, to: usize) {
    let raw = source.slots[from].swap(ptr::null_mut(), Ordering::AcqRel);
    self.slots[to].store(raw, Ordering::Release);
  }
}

impl<E> Drop for SlotArray<E> {
  fn drop(&mut self) {
    for index in 0..self.slots.len() {
      drop(self.take(index));
    }
  }
}
