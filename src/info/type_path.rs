use core::any::{Any, TypeId};

// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// Provide a stable alternative to [`core::any::type_name`] that works across
/// compiler versions and survives code refactoring.
///
/// # Methods
///
/// - [`type_path`]: The unique identifier of the type, cannot be duplicated.
/// - [`type_name`]: Type name without module path, may be duplicated.
///
/// We guarantee that these names do not have the prefix `::`.
/// Users should also ensure this when implementing the trait.
///
/// # Implementation
///
/// Use the [`impl_type_path!`](crate::impl_type_path) macro:
///
/// ```
/// use objser::info::TypePath;
///
/// struct Employee;
///
/// objser::impl_type_path!(Employee => "payroll::Employee", "Employee");
///
/// assert_eq!(Employee::type_path(), "payroll::Employee");
/// assert_eq!(Employee::type_name(), "Employee");
/// ```
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
pub trait TypePath: 'static {
    /// Returns the fully qualified path of the type.
    ///
    /// This is the complete unique identifier of a type,
    /// and should **not** be duplicated in different types.
    fn type_path() -> &'static str;

    /// Returns a short name of the type, without module path.
    ///
    /// This name allows for duplication.
    fn type_name() -> &'static str;
}

// -----------------------------------------------------------------------------
// TypePathTable

/// Lightweight vtable providing dynamic access to [`TypePath`] APIs.
///
/// This struct stores function pointers to a type's `TypePath` implementation,
/// keeping initialization minimal for types that are rarely queried.
///
/// # Examples
///
/// ```
/// use objser::info::TypePathTable;
///
/// let table = TypePathTable::of::<bool>();
/// assert_eq!(table.path(), "bool");
/// assert_eq!(table.name(), "bool");
/// ```
#[derive(Clone, Copy)]
pub struct TypePathTable {
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
}

impl TypePathTable {
    /// Creates a new table from a type.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path: T::type_path,
            type_name: T::type_name,
        }
    }

    /// See [`TypePath::type_path`]
    #[inline(always)]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    /// See [`TypePath::type_name`]
    #[inline(always)]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }
}

impl core::fmt::Debug for TypePathTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypePathTable")
            .field("type_path", &self.path())
            .field("type_name", &self.name())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The base representation of a Rust type.
///
/// Includes a [`TypeId`] and a [`TypePathTable`],
/// re-exporting their functions.
///
/// # Examples
///
/// ```
/// # use core::any::TypeId;
/// use objser::info::Type;
///
/// let ty = Type::of::<u32>();
///
/// assert!(ty.is::<u32>());
/// assert_eq!(ty.path(), "u32");
///
/// let type_id: TypeId = ty.id();
/// // ...
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    type_path_table: TypePathTable,
    type_id: TypeId,
}

impl Type {
    /// Creates a new [`Type`] from a type that implements [`TypePath`].
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path_table: TypePathTable::of::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Check if the given type matches this one.
    ///
    /// This only compares the [`TypeId`] of the types.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    /// Returns the [`TypePathTable`] of the type.
    #[inline(always)]
    pub const fn path_table(&self) -> TypePathTable {
        self.type_path_table
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        self.type_path_table.path()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        self.type_path_table.name()
    }
}

/// This implementation purely relies on the [`TypeId`] of the type.
impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

/// This implementation purely relies on the [`TypeId`] of the type.
impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

/// This implementation will only output the [`TypePath`] of the type.
impl core::fmt::Debug for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements [`TypePath`](crate::info::TypePath) for a type, given its full
/// path and short name as string literals.
///
/// The given path is the type's unique identifier and must not carry a leading
/// `::`.
///
/// # Examples
///
/// ```
/// use objser::info::TypePath;
///
/// struct Employee;
///
/// objser::impl_type_path!(Employee => "payroll::Employee", "Employee");
///
/// assert_eq!(Employee::type_path(), "payroll::Employee");
/// ```
#[macro_export]
macro_rules! impl_type_path {
    ($ty:ty => $path:literal, $name:literal) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }
        }
    };
}
