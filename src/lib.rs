#![doc = include_str!("../README.md")]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod descriptor;
pub mod info;
pub mod writer;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use descriptor::{DescriptorBuilder, DescriptorError, FilterId, ObjectDescriptor};
pub use info::{Type, TypePath};
pub use writer::{AccessFn, AnyGetterWriter, MemberRef, PropertyWriter};
