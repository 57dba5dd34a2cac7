//! Type aliases for the shared state handed between the shell and plugins.
//!
//! HelioCAD runs everything on one thread, so sharing is always
//! `Rc<RefCell<T>>` and never crosses a thread boundary.
//!
//! ## Usage
//!
//! ```rust
//! use heliocad_core::types::{shared, Shared};
//!
//! let counter: Shared<u32> = shared(0);
//! *counter.borrow_mut() += 1;
//! assert_eq!(*counter.borrow(), 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// The canvas is held this way by the session and by every loaded plugin.
pub type Shared<T> = Rc<RefCell<T>>;

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
