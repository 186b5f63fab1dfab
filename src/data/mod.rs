//! Concrete data types implementing the type classes.
//!
//! - [`option::Option`]: an optional value (`Some` or `None`), the reference
//!   instance of every type class in [`crate::typeclass`]

pub mod option;
