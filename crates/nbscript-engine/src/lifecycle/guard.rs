use std::ops::{Deref, DerefMut};

use super::DocumentHost;

/// Marks a host buffer read-only for as long as the guard lives.
///
/// Write access is restored in `Drop`, so every exit path (early return, `?`,
/// panic unwinding) gives the buffer back.
pub struct ReadOnlyGuard<'a, H: DocumentHost + ?Sized> {
    host: &'a mut H,
}

impl<'a, H: DocumentHost + ?Sized> ReadOnlyGuard<'a, H> {
    pub fn new(host: &'a mut H) -> Self {
        host.set_modifiable(false);
        Self { host }
    }
}

impl<H: DocumentHost + ?Sized> Deref for ReadOnlyGuard<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: DocumentHost + ?Sized> DerefMut for ReadOnlyGuard<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: DocumentHost + ?Sized> Drop for ReadOnlyGuard<'_, H> {
    fn drop(&mut self) {
        self.host.set_modifiable(true);
    }
}
