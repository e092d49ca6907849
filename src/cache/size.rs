//! Byte Size Module
//!
//! Defines the size capability every cached value must expose.

use std::rc::Rc;
use std::sync::Arc;

// == Byte Size ==
/// Reports the in-memory footprint of a value in bytes.
///
/// This is the only requirement the cache places on stored values. The
/// reported size is charged against the cache budget together with the
/// length of the key, so it should be stable for as long as the value
/// is cached.
///
/// # Example
/// ```
/// use byte_lru::ByteSize;
///
/// struct Blob {
///     data: Vec<u8>,
/// }
///
/// impl ByteSize for Blob {
///     fn byte_size(&self) -> usize {
///         self.data.len()
///     }
/// }
///
/// assert_eq!(Blob { data: vec![0; 16] }.byte_size(), 16);
/// ```
pub trait ByteSize {
    /// Returns the size of the value in bytes.
    fn byte_size(&self) -> usize;
}

impl ByteSize for str {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl ByteSize for [u8] {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl ByteSize for String {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl ByteSize for Vec<u8> {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> ByteSize for [u8; N] {
    fn byte_size(&self) -> usize {
        N
    }
}

// Pointers charge the pointee, not the pointer.
impl<T: ByteSize + ?Sized> ByteSize for &T {
    fn byte_size(&self) -> usize {
        (**self).byte_size()
    }
}

impl<T: ByteSize + ?Sized> ByteSize for Box<T> {
    fn byte_size(&self) -> usize {
        (**self).byte_size()
    }
}

impl<T: ByteSize + ?Sized> ByteSize for Arc<T> {
    fn byte_size(&self) -> usize {
        (**self).byte_size()
    }
}

impl<T: ByteSize + ?Sized> ByteSize for Rc<T> {
    fn byte_size(&self) -> usize {
        (**self).byte_size()
    }
}
