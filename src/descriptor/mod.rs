//! Accumulation and finalization of object-serialization descriptors.
//!
//! ## Menu
//!
//! - [`DescriptorBuilder`]: The mutable accumulator an introspection pass
//!   populates over time; ordered properties, view-filtered properties, the
//!   any-getter fallback, the opaque filter id, and the two identity bindings.
//!
//! - [`ObjectDescriptor`]: The immutable finalized snapshot a downstream
//!   emitter walks; produced by [`DescriptorBuilder::build`] or by
//!   [`ObjectDescriptor::empty`].
//!
//! - [`FilterId`]: Opaque selector for an externally named property filter,
//!   resolved at emission time.
//!
//! - [`DescriptorError`]: The fail-fast identity-exclusivity errors.

// -----------------------------------------------------------------------------
// Modules

mod builder;
mod descriptor;
mod error;
mod filter;

// -----------------------------------------------------------------------------
// Exports

pub use builder::DescriptorBuilder;
pub use descriptor::ObjectDescriptor;
pub use error::DescriptorError;
pub use filter::FilterId;
