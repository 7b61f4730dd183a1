//! Presence of stored values.
//!
//! An [`OrderedList`](super::OrderedList) never stores an absent value. Most
//! types cannot be absent at all and use the default implementation; optional
//! types report `None` as absent so that inserting one fails with
//! [`OrderedListError::InputNull`](super::OrderedListError::InputNull)
//! instead of being sorted in among real values.
//!
//! User types opt in with an empty implementation:
//!
//! ```rust
//! use ordlist::ordered::Presence;
//!
//! #[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
//! struct Ticket(u32);
//!
//! impl Presence for Ticket {}
//!
//! assert!(Ticket(7).is_present());
//! assert!(!None::<Ticket>.is_present());
//! ```

use std::borrow::Cow;
use std::cmp::Reverse;
use std::rc::Rc;
use std::sync::Arc;

/// Reports whether a value may be stored in an ordered container.
pub trait Presence {
    /// Returns `false` for values that stand for "nothing".
    #[inline]
    fn is_present(&self) -> bool {
        true
    }
}

macro_rules! impl_always_present {
    ($($ty:ty),* $(,)?) => {
        $(impl Presence for $ty {})*
    };
}

impl_always_present!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, (),
    str, String,
);

impl<T> Presence for Vec<T> {}

impl<T> Presence for [T] {}

impl<B: ?Sized + ToOwned> Presence for Cow<'_, B> {}

impl<T> Presence for Option<T> {
    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

impl<T: Presence> Presence for Reverse<T> {
    #[inline]
    fn is_present(&self) -> bool {
        self.0.is_present()
    }
}

macro_rules! impl_delegating_presence {
    ($($pointer:ident),* $(,)?) => {
        $(
            impl<T: ?Sized + Presence> Presence for $pointer<T> {
                #[inline]
                fn is_present(&self) -> bool {
                    (**self).is_present()
                }
            }
        )*
    };
}

impl_delegating_presence!(Box, Rc, Arc);

impl<T: ?Sized + Presence> Presence for &T {
    #[inline]
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<A: Presence, B: Presence> Presence for (A, B) {
    #[inline]
    fn is_present(&self) -> bool {
        self.0.is_present() && self.1.is_present()
    }
}
