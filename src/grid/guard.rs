//! Scoped plane borrowing
//!
//! The grid has to move caller-owned items to render them in place. A
//! `PlaneGuard` snapshots an item's plane when acquired and writes the
//! snapshot back when dropped, so the item is restored on every exit path:
//! normal completion, an early `?` return, or unwinding.

use crate::models::{Depictable, Plane};
use std::ops::{Deref, DerefMut};

pub struct PlaneGuard<'a, D: Depictable + ?Sized> {
    item: &'a mut D,
    snapshot: Plane,
}

impl<'a, D: Depictable + ?Sized> PlaneGuard<'a, D> {
    pub fn acquire(item: &'a mut D) -> Self {
        let snapshot = item.plane().clone();
        Self { item, snapshot }
    }

    /// The plane as it was at acquisition
    pub fn original(&self) -> &Plane {
        &self.snapshot
    }
}

impl<D: Depictable + ?Sized> Deref for PlaneGuard<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        &*self.item
    }
}

impl<D: Depictable + ?Sized> DerefMut for PlaneGuard<'_, D> {
    fn deref_mut(&mut self) -> &mut D {
        &mut *self.item
    }
}

impl<D: Depictable + ?Sized> Drop for PlaneGuard<'_, D> {
    fn drop(&mut self) {
        *self.item.plane_mut() = std::mem::take(&mut self.snapshot);
    }
}
