use alloc::borrow::Cow;
use core::any::Any;
use core::fmt;

use serde_core::ser::Error;
use serde_core::{Serialize, Serializer};

use crate::info::{Type, TypePath};
use crate::writer::AccessFn;

// -----------------------------------------------------------------------------
// PropertyWriter

/// How to extract and serialize one named property of a host object.
///
/// A writer owns the serialized property name, the property's declared
/// [`Type`], and an [`AccessFn`] that borrows the value out of the host.
/// Writers are accumulated in a
/// [`DescriptorBuilder`](crate::descriptor::DescriptorBuilder) and shared by
/// reference with every finalized
/// [`ObjectDescriptor`](crate::descriptor::ObjectDescriptor).
///
/// The writer is the per-property strategy only; walking a descriptor and
/// emitting the enclosing object is the downstream emitter's job.
///
/// # Examples
///
/// ```
/// use objser::PropertyWriter;
///
/// struct Employee {
///     age: u32,
/// }
///
/// objser::impl_type_path!(Employee => "payroll::Employee", "Employee");
///
/// let writer = PropertyWriter::new::<u32>("age", |host| {
///     host.downcast_ref::<Employee>().map(|e| &e.age as _)
/// });
///
/// let employee = Employee { age: 41 };
///
/// let mut output = String::new();
/// let mut serializer = ron::Serializer::new(&mut output, None).unwrap();
/// writer.serialize_value(&employee, &mut serializer).unwrap();
///
/// assert_eq!(output, "41");
/// ```
#[derive(Clone)]
pub struct PropertyWriter {
    name: Cow<'static, str>,
    ty: Type,
    access: AccessFn,
}

impl PropertyWriter {
    /// Creates a new [`PropertyWriter`] for a property declared as type `T`,
    /// serialized under `name`.
    #[inline]
    pub const fn new<T: TypePath + ?Sized>(name: &'static str, access: AccessFn) -> Self {
        Self {
            name: Cow::Borrowed(name),
            ty: Type::of::<T>(),
            access,
        }
    }

    /// Creates a new [`PropertyWriter`] from already-erased parts.
    ///
    /// The introspection pass reaches for this form when the serialized name
    /// is computed at runtime (renaming strategies) or when the declared type
    /// is only known as a [`Type`] value.
    #[inline]
    pub fn from_parts(name: impl Into<Cow<'static, str>>, ty: Type, access: AccessFn) -> Self {
        Self {
            name: name.into(),
            ty,
            access,
        }
    }

    /// Returns the serialized property name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the property's declared [`Type`].
    #[inline(always)]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Borrows the property value out of `host`.
    ///
    /// Returns `None` if `host` is not of the type this writer was built for.
    #[inline]
    pub fn access<'a>(&self, host: &'a dyn Any) -> Option<&'a dyn erased_serde::Serialize> {
        (self.access)(host)
    }

    /// Extracts the property value from `host` and serializes it.
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
                "property `{}` cannot be read from the given host value",
                self.name,
            ))),
        }
    }
}

impl fmt::Debug for PropertyWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyWriter")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::*;

    struct Employee {
        age: u32,
        name: String,
    }

    crate::impl_type_path!(Employee => "objser_tests::Employee", "Employee");

    fn age_writer() -> PropertyWriter {
        PropertyWriter::new::<u32>("age", |host| {
            host.downcast_ref::<Employee>().map(|e| &e.age as _)
        })
    }

    #[test]
    fn access_borrows_the_field() {
        let employee = Employee {
            age: 41,
            name: "Ann".to_string(),
        };

        let writer = age_writer();
        let value = writer.access(&employee).unwrap();

        assert_eq!(serde_json::to_string(value).unwrap(), "41");
    }

    #[test]
    fn access_rejects_a_foreign_host() {
        let writer = age_writer();
        assert!(writer.access(&0u32).is_none());
    }

    #[test]
    fn serialize_value_reports_a_foreign_host() {
        let writer = age_writer();

        let mut output = String::new();
        let mut serializer = ron::Serializer::new(&mut output, None).unwrap();

        let err = writer.serialize_value(&0u32, &mut serializer).unwrap_err();
        assert!(err.to_string().contains("property `age`"));
    }

    #[test]
    fn runtime_names_use_from_parts() {
        let name = String::from("name");
        let writer = PropertyWriter::from_parts(name, Type::of::<String>(), |host| {
            host.downcast_ref::<Employee>().map(|e| &e.name as _)
        });

        let employee = Employee {
            age: 41,
            name: "Ann".to_string(),
        };

        assert_eq!(writer.name(), "name");
        assert_eq!(
            serde_json::to_string(writer.access(&employee).unwrap()).unwrap(),
            "\"Ann\"",
        );
    }
}
