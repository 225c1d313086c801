use thiserror::Error;

use crate::writer::MemberRef;

// -----------------------------------------------------------------------------
// Error

/// Validation failures raised while accumulating descriptor state.
///
/// Both variants are raised synchronously by the identity setters on
/// [`DescriptorBuilder`](crate::descriptor::DescriptorBuilder); a legitimate
/// configuration never assigns an identity binding twice, so the second
/// assignment fails even when the incoming member equals the existing one.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DescriptorError {
    #[error("multiple object id members specified: `{existing}` and `{conflict}`")]
    DuplicateObjectId {
        existing: MemberRef,
        conflict: MemberRef,
    },

    #[error("multiple type id members specified: `{existing}` and `{conflict}`")]
    DuplicateTypeId {
        existing: MemberRef,
        conflict: MemberRef,
    },
}
