use core::any::Any;
use core::fmt;

use serde_core::ser::Error;
use serde_core::{Serialize, Serializer};

use crate::writer::{AccessFn, MemberRef};

// -----------------------------------------------------------------------------
// AnyGetterWriter

/// The wildcard catch-all property of a host object.
///
/// Borrows one map-like value whose entries the downstream emitter flattens
/// into the enclosing JSON-like object, after all named properties. The writer
/// is independent of the named property set; it may coexist with one or stand
/// alone as the sole serialization mechanism.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use objser::{AnyGetterWriter, MemberRef};
///
/// struct Extras(BTreeMap<String, String>);
///
/// struct Employee {
///     extra: Extras,
/// }
///
/// objser::impl_type_path!(Employee => "payroll::Employee", "Employee");
/// objser::impl_type_path!(Extras => "payroll::Extras", "Extras");
///
/// let writer = AnyGetterWriter::new(
///     MemberRef::new::<Employee, Extras>("extra"),
///     |host| host.downcast_ref::<Employee>().map(|e| &e.extra.0 as _),
/// );
///
/// let mut employee = Employee {
///     extra: Extras(BTreeMap::new()),
/// };
/// employee.extra.0.insert("badge".into(), "blue".into());
///
/// let value = writer.access(&employee).unwrap();
/// assert_eq!(
///     serde_json::to_string(value).unwrap(),
///     r#"{"badge":"blue"}"#,
/// );
/// ```
#[derive(Clone, Copy)]
pub struct AnyGetterWriter {
    member: MemberRef,
    access: AccessFn,
}

impl AnyGetterWriter {
    /// Creates a new [`AnyGetterWriter`] reading the map-like value of
    /// `member`.
    #[inline]
    pub const fn new(member: MemberRef, access: AccessFn) -> Self {
        Self { member, access }
    }

    /// Returns the member the catch-all value is read from.
    #[inline(always)]
    pub const fn member(&self) -> &MemberRef {
        &self.member
    }

    /// Borrows the map-like value out of `host`.
    ///
    /// Returns `None` if `host` is not of the type this writer was built for.
    #[inline]
    pub fn access<'a>(&self, host: &'a dyn Any) -> Option<&'a dyn erased_serde::Serialize> {
        (self.access)(host)
    }

    /// Extracts the map-like value from `host` and serializes it whole.
    ///
    /// A host of the wrong type surfaces as the serializer's custom error.
    pub fn serialize_value<S: Serializer>(
        &self,
        host: &dyn Any,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match (self.access)(host) {
            Some(value) => value.serialize(serializer),
            None => Err(S::Error::custom(format_args!(
                "any-getter `{}` cannot be read from the given host value",
                self.member,
            ))),
        }
    }
}

impl fmt::Debug for AnyGetterWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyGetterWriter")
            .field("member", &self.member)
            .finish()
    }
}
