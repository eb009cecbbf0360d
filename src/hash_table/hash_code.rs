//! Bucket selection.
//!
//! Hashing is chosen per table type, once, at compile time: a table is
//! generic over a [`HashStrategy`], and the default strategy, [`ElementHash`],
//! asks the element for its [`HashCode`]. Element kinds with no natural code
//! must either implement [`HashCode`] or be stored in a table that names a
//! strategy explicitly ([`ConstantHash`] or a closure).

use alloc::{boxed::Box, string::String};

/// Base of the polynomial string hash.
pub const STRING_HASH_BASE: usize = 31;

/// A fixed numeric code for an element, reduced modulo the bucket count by
/// the table.
pub trait HashCode {
    fn hash_code(&self) -> usize;
}

// Sign-extending or truncating cast, so negative values land on large codes.
macro_rules! integral_hash_code {
    ($($t:ty),* $(,)?) => {
        $(
            impl HashCode for $t {
                #[inline]
                fn hash_code(&self) -> usize {
                    *self as usize
                }
            }
        )*
    };
}

integral_hash_code!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

/// `s[0]*31^(n-1) + s[1]*31^(n-2) + ... + s[n-1]` over the UTF-8 bytes of
/// `s`, in wrapping `usize` arithmetic.
///
/// Bytes are read as unsigned values in `0..=255`, so a non-ASCII byte such
/// as `0xC3` contributes 195, never a negative amount.
///
/// Long strings overflow and wrap; the wrapped value is the code, so bucket
/// assignment depends on the width of `usize`.
pub fn polynomial_hash(bytes: &[u8]) -> usize {
    bytes.iter().fold(0usize, |acc, &byte| {
        acc.wrapping_mul(STRING_HASH_BASE)
            .wrapping_add(usize::from(byte))
    })
}

impl HashCode for str {
    #[inline]
    fn hash_code(&self) -> usize {
        polynomial_hash(self.as_bytes())
    }
}

impl HashCode for String {
    #[inline]
    fn hash_code(&self) -> usize {
        self.as_str().hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for &T {
    #[inline]
    fn hash_code(&self) -> usize {
        (**self).hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for Box<T> {
    #[inline]
    fn hash_code(&self) -> usize {
        (**self).hash_code()
    }
}

/// Maps a value to a code; the table reduces it modulo its capacity.
pub trait HashStrategy<T: ?Sized> {
    fn hash_code(&self, value: &T) -> usize;
}

/// Uses the element's own [`HashCode`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElementHash;

impl<T: HashCode + ?Sized> HashStrategy<T> for ElementHash {
    #[inline]
    fn hash_code(&self, value: &T) -> usize {
        value.hash_code()
    }
}

/// Sends every value to bucket 0, turning the table into a single list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConstantHash;

impl<T: ?Sized> HashStrategy<T> for ConstantHash {
    #[inline]
    fn hash_code(&self, _value: &T) -> usize {
        0
    }
}

impl<T: ?Sized, F: Fn(&T) -> usize> HashStrategy<T> for F {
    #[inline]
    fn hash_code(&self, value: &T) -> usize {
        self(value)
    }
}
