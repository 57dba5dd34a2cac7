//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for `Rc<RefCell<T>>` sharing on the UI thread.

pub mod aliases;

pub use aliases::*;
