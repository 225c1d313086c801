use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

// -----------------------------------------------------------------------------
// FilterId

/// Opaque selector for an externally named property filter.
///
/// The id is stored as-is during accumulation and carried on the finalized
/// descriptor; the downstream emitter resolves it against its filter provider
/// at emission time. Whether the id actually resolves is not validated here.
///
/// # Examples
///
/// ```
/// use objser::FilterId;
///
/// let id = FilterId::from_static("public-view");
/// assert_eq!(id.as_str(), "public-view");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FilterId(Cow<'static, str>);

impl FilterId {
    /// Creates a new [`FilterId`] from a static name.
    #[inline]
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Creates a new [`FilterId`] from a runtime-computed name.
    #[inline]
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    /// Returns the selector as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for FilterId {
    #[inline]
    fn from(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }
}

impl From<String> for FilterId {
    #[inline]
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
