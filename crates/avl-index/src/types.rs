//! Payload capability traits.
//!
//! A payload stored in [`AvlTree`](crate::AvlTree) needs two things:
//!
//! - an order, taken from [`PartialOrd`] and used by `insert`;
//! - a string key, taken from [`Keyed`] and used by `find`.
//!
//! `PartialOrd` rather than `Ord` keeps "no defined order" representable, so
//! insertion can reject such a payload with
//! [`TreeError::Unordered`](crate::TreeError::Unordered) instead of guessing.

use std::borrow::Cow;

/// String key accessor used by lookups.
///
/// Lookups compare keys case-insensitively, while insertion uses the
/// payload's own [`PartialOrd`]. The two should agree up to letter case.
pub trait Keyed {
    fn key(&self) -> Cow<'_, str>;
}

impl Keyed for String {
    fn key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Keyed for &str {
    fn key(&self) -> Cow<'_, str> {
        Cow::Borrowed(*self)
    }
}

macro_rules! keyed_via_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Keyed for $t {
                fn key(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

keyed_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
);
