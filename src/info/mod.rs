//! Provide the static type description consumed during descriptor construction.
//!
//! ## Menu
//!
//! - [`TypePath`]: A trait for obtaining stable type names, without prefix `::`.
//!     - [`type_path`](TypePath::type_path): Full name, a fixed and unique identifier for the type.
//!     - [`type_name`](TypePath::type_name): The name without module path, may be duplicated.
//!
//! - [`TypePathTable`]: A struct storing function pointers for a single type's
//!   `TypePath` implementation.
//!
//! - [`Type`]: A struct containing a `TypeId` and a `TypePathTable`.
//!
//! Implementations of [`TypePath`] for foreign and local types are written with
//! the [`impl_type_path!`](crate::impl_type_path) macro; impls for the common
//! primitives ship with the crate.

// -----------------------------------------------------------------------------
// Modules

mod primitives;
mod type_path;

// -----------------------------------------------------------------------------
// Exports

pub use type_path::{Type, TypePath, TypePathTable};
