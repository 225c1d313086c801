use core::fmt;

use crate::info::{Type, TypePath};

// -----------------------------------------------------------------------------
// MemberRef

/// A reference to one member of a host type.
///
/// Carries the host [`Type`], the member name, and the member's declared
/// [`Type`]. Identity bindings are expressed with member references, and the
/// any-getter names the member it reads from.
///
/// Comparison and hashing use the host type id and the member name; the
/// declared type goes along for error messages and emitter use.
///
/// # Examples
///
/// ```
/// use objser::MemberRef;
///
/// struct Employee;
///
/// objser::impl_type_path!(Employee => "payroll::Employee", "Employee");
///
/// let member = MemberRef::new::<Employee, u32>("id");
///
/// assert_eq!(member.name(), "id");
/// assert_eq!(member.to_string(), "payroll::Employee::id");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MemberRef {
    host: Type,
    name: &'static str,
    ty: Type,
}

impl MemberRef {
    /// Creates a new [`MemberRef`] for the member `name` of host type `H`,
    /// declared as type `T`.
    #[inline]
    pub const fn new<H: TypePath, T: TypePath + ?Sized>(name: &'static str) -> Self {
        Self {
            host: Type::of::<H>(),
            name,
            ty: Type::of::<T>(),
        }
    }

    /// Creates a new [`MemberRef`] from already-erased parts.
    ///
    /// Useful for an introspection pass that operates on [`Type`] values
    /// rather than generic parameters.
    #[inline]
    pub const fn from_parts(host: Type, name: &'static str, ty: Type) -> Self {
        Self { host, name, ty }
    }

    /// Returns the host [`Type`] the member belongs to.
    #[inline(always)]
    pub const fn host(&self) -> &Type {
        &self.host
    }

    /// Returns the member name.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the member's declared [`Type`].
    #[inline(always)]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }
}

impl PartialEq for MemberRef {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.host == other.host && self.name == other.name
    }
}

impl Eq for MemberRef {}

impl core::hash::Hash for MemberRef {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.host.hash(state);
        self.name.hash(state);
    }
}

/// Writes `host::member`, the form used in error messages.
impl fmt::Display for MemberRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.host.path(), self.name)
    }
}
