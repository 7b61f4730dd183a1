//! Lock primitive shared by the containers.
//!
//! Normal builds use `parking_lot`. With the `loom` feature the lock is
//! swapped for loom's model-checked mutex so the containers can be explored
//! under `loom::model`; such builds only work inside a loom model.

#[cfg(not(feature = "loom"))]
pub(crate) use parking_lot::Mutex;

#[cfg(feature = "loom")]
pub(crate) use self::loom_mutex::Mutex;

#[cfg(feature = "loom")]
mod loom_mutex {
    use std::sync::PoisonError;

    /// `loom::sync::Mutex` with the poison-free `lock` signature of
    /// `parking_lot`.
    pub(crate) struct Mutex<T>(loom::sync::Mutex<T>);

    impl<T> Mutex<T> {
        pub(crate) fn new(value: T) -> Self {
            Self(loom::sync::Mutex::new(value))
        }

        pub(crate) fn lock(&self) -> loom::sync::MutexGuard<'_, T> {
            self.0.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }
}
