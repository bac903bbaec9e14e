//! Compute-once deferred values.
//!
//! A [`Deferred`] wraps a closure that runs the first time the value is
//! forced. Later forces return the cached value. Clones share the same cell,
//! so forcing through any clone is visible to all of them.

use std::fmt;
use std::rc::Rc;

use once_cell::unsync::Lazy;

type Thunk<T> = Box<dyn FnOnce() -> T>;

/// A lazily computed, memoized value.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use shephy::rules::Deferred;
///
/// let calls = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&calls);
/// let value = Deferred::new(move || {
///     counter.set(counter.get() + 1);
///     42
/// });
///
/// assert!(!value.is_forced());
/// assert_eq!(*value.force(), 42);
/// assert_eq!(*value.clone().force(), 42);
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Deferred<T> {
    cell: Rc<Lazy<T, Thunk<T>>>,
}

impl<T> Deferred<T> {
    /// Defer `compute` until the value is first forced.
    pub fn new(compute: impl FnOnce() -> T + 'static) -> Self {
        let thunk: Thunk<T> = Box::new(compute);
        Self {
            cell: Rc::new(Lazy::new(thunk)),
        }
    }

    /// Evaluate on first call, return the cached value afterwards.
    pub fn force(&self) -> &T {
        Lazy::force(&self.cell)
    }

    /// Whether the value has been computed.
    #[must_use]
    pub fn is_forced(&self) -> bool {
        Lazy::get(&self.cell).is_some()
    }

    /// Whether two handles share one cell.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Lazy::get(&self.cell) {
            Some(value) => f.debug_tuple("Deferred").field(value).finish(),
            None => f.write_str("Deferred(<pending>)"),
        }
    }
}
