use core::any::Any;

// -----------------------------------------------------------------------------
// AccessFn

/// Type-erased accessor extracting one serializable value out of a host object.
///
/// The function downcasts the host to its concrete type and borrows the value
/// the owning writer stands for. `None` means the host is not of the expected
/// type; writers surface that as a custom serializer error when asked to
/// serialize.
///
/// Plain function pointers keep writers `Copy`-cheap, `Send + Sync`, and free
/// of allocation; a non-capturing closure coerces directly.
///
/// # Examples
///
/// ```
/// use objser::AccessFn;
///
/// struct Employee {
///     age: u32,
/// }
///
/// let access: AccessFn = |host| host.downcast_ref::<Employee>().map(|e| &e.age as _);
///
/// let employee = Employee { age: 41 };
/// assert!(access(&employee).is_some());
/// assert!(access(&"not an employee").is_none());
/// ```
pub type AccessFn = fn(&dyn Any) -> Option<&dyn erased_serde::Serialize>;
