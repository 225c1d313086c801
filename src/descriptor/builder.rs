use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::descriptor::{DescriptorError, FilterId, ObjectDescriptor};
use crate::info::{Type, TypePath};
use crate::writer::{AnyGetterWriter, MemberRef, PropertyWriter};

// -----------------------------------------------------------------------------
// DescriptorBuilder

/// Mutable accumulator for the serialization metadata of one object type.
///
/// An upstream introspection pass populates the builder over several steps:
/// the ordered named properties, the optional view-filtered parallel array,
/// the optional any-getter fallback, the opaque filter id, and at most one
/// object-id and one type-id binding. [`build`](Self::build) finalizes the
/// accumulated state into an immutable
/// [`ObjectDescriptor`](crate::descriptor::ObjectDescriptor) without consuming
/// or locking the builder; every call takes a fresh, independent snapshot.
///
/// The builder is single-owner state for one construction pass; it provides
/// no internal synchronization.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use objser::{DescriptorBuilder, PropertyWriter};
///
/// struct Point {
///     x: u32,
/// }
///
/// objser::impl_type_path!(Point => "demo::Point", "Point");
///
/// let mut builder = DescriptorBuilder::of::<Point>();
///
/// // An empty builder describes nothing.
/// assert!(builder.build().is_none());
///
/// builder.set_properties(vec![Arc::new(PropertyWriter::new::<u32>("x", |host| {
///     host.downcast_ref::<Point>().map(|p| &p.x as _)
/// }))]);
///
/// let descriptor = builder.build().unwrap();
/// assert_eq!(descriptor.properties()[0].name(), "x");
/// ```
#[derive(Debug)]
pub struct DescriptorBuilder {
    ty: Type,
    /// Named properties, in order of serialization.
    properties: Vec<Arc<PropertyWriter>>,
    /// Optional array of view-filtered property slots; `None` disables
    /// view-based filtering altogether.
    filtered: Option<Box<[Option<Arc<PropertyWriter>>]>>,
    /// Writer used for "any getter" properties, if any.
    any_getter: Option<AnyGetterWriter>,
    /// Id of the property filter to use for the object, if any.
    filter_id: Option<FilterId>,
    /// Member that is used for object id.
    object_id: Option<MemberRef>,
    /// Member that is used for type id (and not serialized as a regular
    /// property).
    type_id: Option<MemberRef>,
}

impl DescriptorBuilder {
    /// Creates an empty builder for the object type described by `ty`.
    pub fn new(ty: Type) -> Self {
        Self {
            ty,
            properties: Vec::new(),
            filtered: None,
            any_getter: None,
            filter_id: None,
            object_id: None,
            type_id: None,
        }
    }

    /// Creates an empty builder for the object type `T`.
    #[inline]
    pub fn of<T: TypePath>() -> Self {
        Self::new(Type::of::<T>())
    }

    /// Duplicates the accumulated state for a specializing builder.
    ///
    /// Property writers are shared, not copied. Identity bindings are not
    /// carried over; the specializing caller re-establishes them before
    /// finalization.
    pub fn duplicate(&self) -> Self {
        Self {
            ty: self.ty,
            properties: self.properties.clone(),
            filtered: self.filtered.clone(),
            any_getter: self.any_getter.clone(),
            filter_id: self.filter_id.clone(),
            object_id: None,
            type_id: None,
        }
    }

    // -------------------------------------------------------------------------
    // Setters

    /// Replaces the entire ordered property set in one assignment.
    ///
    /// The previous set is discarded, not merged. Insertion order of the
    /// given sequence defines the serialization order of every descriptor
    /// built afterwards.
    #[inline]
    pub fn set_properties(&mut self, properties: Vec<Arc<PropertyWriter>>) {
        self.properties = properties;
    }

    /// Stores the view-filtered parallel array as given.
    ///
    /// Slots align by position with the named property set; a `None` slot
    /// suppresses the property for the active view. Length alignment is the
    /// caller's contract and is not checked here; a misaligned array fails
    /// downstream in the emitter.
    #[inline]
    pub fn set_filtered_properties(&mut self, filtered: Box<[Option<Arc<PropertyWriter>>]>) {
        self.filtered = Some(filtered);
    }

    /// Stores the wildcard any-getter writer.
    ///
    /// The any-getter may coexist with a non-empty property set (its entries
    /// are emitted after all named properties) or stand alone as the sole
    /// serialization mechanism.
    #[inline]
    pub fn set_any_getter(&mut self, any_getter: AnyGetterWriter) {
        self.any_getter = Some(any_getter);
    }

    /// Stores the opaque property-filter selector.
    ///
    /// Resolution against an actual named filter happens in the downstream
    /// emitter; no resolvability check happens here.
    #[inline]
    pub fn set_filter_id(&mut self, filter_id: FilterId) {
        self.filter_id = Some(filter_id);
    }

    /// Binds `member` as the object id.
    ///
    /// # Errors
    ///
    /// Fails with [`DescriptorError::DuplicateObjectId`] if an object id is
    /// already bound, even when `member` equals the existing binding.
    pub fn set_object_id(&mut self, member: MemberRef) -> Result<(), DescriptorError> {
        // Not legal to use multiple ones.
        if let Some(existing) = self.object_id {
            return Err(DescriptorError::DuplicateObjectId {
                existing,
                conflict: member,
            });
        }
        self.object_id = Some(member);
        Ok(())
    }

    /// Binds `member` as the type discriminator.
    ///
    /// # Errors
    ///
    /// Fails with [`DescriptorError::DuplicateTypeId`] if a type id is
    /// already bound, even when `member` equals the existing binding.
    pub fn set_type_id(&mut self, member: MemberRef) -> Result<(), DescriptorError> {
        // Not legal to use multiple ones.
        if let Some(existing) = self.type_id {
            return Err(DescriptorError::DuplicateTypeId {
                existing,
                conflict: member,
            });
        }
        self.type_id = Some(member);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors

    /// Returns the described object [`Type`].
    #[inline(always)]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns `true` if a non-empty property set is currently held.
    #[inline]
    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }

    /// Returns the live property sequence.
    ///
    /// Before finalization the sequence may still change; callers that need a
    /// stable view take a snapshot via [`build`](Self::build).
    #[inline]
    pub fn properties(&self) -> &[Arc<PropertyWriter>] {
        &self.properties
    }

    /// Returns mutable access to the live property sequence.
    #[inline]
    pub fn properties_mut(&mut self) -> &mut Vec<Arc<PropertyWriter>> {
        &mut self.properties
    }

    /// Returns the view-filtered parallel array, if set.
    #[inline]
    pub fn filtered_properties(&self) -> Option<&[Option<Arc<PropertyWriter>>]> {
        self.filtered.as_deref()
    }

    /// Returns the any-getter writer, if set.
    #[inline]
    pub fn any_getter(&self) -> Option<&AnyGetterWriter> {
        self.any_getter.as_ref()
    }

    /// Returns the opaque property-filter selector, if set.
    #[inline]
    pub fn filter_id(&self) -> Option<&FilterId> {
        self.filter_id.as_ref()
    }

    /// Returns the member bound as object id, if any.
    #[inline]
    pub fn object_id(&self) -> Option<&MemberRef> {
        self.object_id.as_ref()
    }

    /// Returns the member bound as type discriminator, if any.
    #[inline]
    pub fn type_id(&self) -> Option<&MemberRef> {
        self.type_id.as_ref()
    }

    // -------------------------------------------------------------------------
    // Build

    /// Finalizes the accumulated state into an immutable descriptor.
    ///
    /// Returns `None` when the property set is empty and no any-getter is
    /// bound; there is nothing to describe, and the caller decides the
    /// fallback strategy (an always-empty descriptor via
    /// [`empty_descriptor`](Self::empty_descriptor), or an error of its own).
    ///
    /// The snapshot owns independent storage: mutating the builder afterwards
    /// never changes a descriptor already produced, and `build` may be called
    /// again after further mutation for a new, independent snapshot.
    pub fn build(&self) -> Option<ObjectDescriptor> {
        if self.properties.is_empty() && self.any_getter.is_none() {
            return None;
        }

        Some(ObjectDescriptor::new(
            self.ty,
            self.properties.iter().cloned().collect(),
            self.filtered.clone(),
            self.any_getter.clone(),
            self.filter_id.clone(),
            self.object_id,
            self.type_id,
        ))
    }

    /// Creates a minimal valid descriptor with zero properties, regardless of
    /// accumulated state.
    ///
    /// See [`ObjectDescriptor::empty`].
    #[inline]
    pub fn empty_descriptor(&self) -> ObjectDescriptor {
        ObjectDescriptor::empty(self.ty)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::{String, ToString};
    use alloc::vec;

    use super::*;

    struct Employee {
        age: u32,
        name: String,
        extra: BTreeMap<String, String>,
    }

    crate::impl_type_path!(Employee => "objser_tests::Employee", "Employee");
    crate::impl_type_path!(
        BTreeMap<String, String> =>
        "alloc::collections::BTreeMap<alloc::string::String, alloc::string::String>",
        "BTreeMap<String, String>"
    );

    fn sample() -> Employee {
        let mut extra = BTreeMap::new();
        extra.insert("badge".to_string(), "blue".to_string());
        Employee {
            age: 41,
            name: "Ann".to_string(),
            extra,
        }
    }

    fn writers() -> Vec<Arc<PropertyWriter>> {
        vec![
            Arc::new(PropertyWriter::new::<u32>("age", |host| {
                host.downcast_ref::<Employee>().map(|e| &e.age as _)
            })),
            Arc::new(PropertyWriter::new::<String>("name", |host| {
                host.downcast_ref::<Employee>().map(|e| &e.name as _)
            })),
        ]
    }

    fn any_getter() -> AnyGetterWriter {
        AnyGetterWriter::new(
            MemberRef::new::<Employee, BTreeMap<String, String>>("extra"),
            |host| host.downcast_ref::<Employee>().map(|e| &e.extra as _),
        )
    }

    fn names(descriptor: &ObjectDescriptor) -> Vec<&str> {
        descriptor.properties().iter().map(|p| p.name()).collect()
    }

    #[test]
    fn property_order_is_preserved() {
        let mut builder = DescriptorBuilder::of::<Employee>();
        builder.set_properties(writers());

        let descriptor = builder.build().unwrap();

        assert_eq!(names(&descriptor), ["age", "name"]);
        assert!(descriptor.filtered_properties().is_none());
        assert!(descriptor.any_getter().is_none());
        assert!(descriptor.filter_id().is_none());
        assert!(descriptor.object_id().is_none());
        assert!(descriptor.type_id().is_none());
    }

    #[test]
    fn empty_builder_describes_nothing() {
        let builder = DescriptorBuilder::of::<Employee>();
        assert!(builder.build().is_none());
    }

    #[test]
    fn any_getter_alone_is_enough() {
        let mut builder = DescriptorBuilder::of::<Employee>();
        builder.set_any_getter(any_getter());

        let descriptor = builder.build().unwrap();

        assert!(!descriptor.has_properties());
        let any = descriptor.any_getter().unwrap();
        assert_eq!(any.member().name(), "extra");

        let employee = sample();
        assert_eq!(
            serde_json::to_string(any.access(&employee).unwrap()).unwrap(),
            r#"{"badge":"blue"}"#,
        );
    }

    #[test]
    fn object_id_is_single_assignment() {
        let mut builder = DescriptorBuilder::of::<Employee>();
        let member = MemberRef::new::<Employee, u32>("id");

        builder.set_object_id(member).unwrap();

        // A second assignment fails even for the identical member.
        let err = builder.set_object_id(member).unwrap_err();
        assert_eq!(
            err,
            DescriptorError::DuplicateObjectId {
                existing: member,
                conflict: member,
            },
        );
        assert!(format!("{err}").contains("objser_tests::Employee::id"));
    }

    #[test]
    fn type_id_is_single_assignment() {
        let mut builder = DescriptorBuilder::of::<Employee>();
        let first = MemberRef::new::<Employee, String>("kind");
        let second = MemberRef::new::<Employee, String>("variant");

        builder.set_type_id(first).unwrap();

        let err = builder.set_type_id(second).unwrap_err();
        assert_eq!(
            err,
            DescriptorError::DuplicateTypeId {
                existing: first,
                conflict: second,
            },
        );

        // The object id slot is unaffected by the type id slot.
        builder.set_object_id(MemberRef::new::<Employee, u32>("id")).unwrap();
    }

    #[test]
    fn empty_descriptor_ignores_accumulated_state() {
        let mut builder = DescriptorBuilder::of::<Employee>();
        builder.set_properties(writers());
        builder.set_any_getter(any_getter());

        let descriptor = builder.empty_descriptor();

        assert!(!descriptor.has_properties());
        assert!(descriptor.any_getter().is_none());
        assert_eq!(descriptor.ty().path(), "objser_tests::Employee");
    }

    #[test]
    fn snapshots_are_independent_of_later_mutation() {
        let mut builder = DescriptorBuilder::of::<Employee>();
        builder.set_properties(writers());

        let first = builder.build().unwrap();

        builder.properties_mut().remove(0);
        builder.set_filter_id(FilterId::from_static("public-view"));

        assert_eq!(names(&first), ["age", "name"]);
        assert!(first.filter_id().is_none());

        let second = builder.build().unwrap();
        assert_eq!(names(&second), ["name"]);
        assert_eq!(second.filter_id().unwrap().as_str(), "public-view");
    }

    #[test]
    fn set_properties_replaces_the_previous_set() {
        let mut builder = DescriptorBuilder::of::<Employee>();
        builder.set_properties(writers());
        builder.set_properties(vec![Arc::new(PropertyWriter::new::<String>(
            "name",
            |host| host.downcast_ref::<Employee>().map(|e| &e.name as _),
        ))]);

        assert_eq!(names(&builder.build().unwrap()), ["name"]);
    }

    #[test]
    fn filtered_properties_are_stored_as_given() {
        let mut builder = DescriptorBuilder::of::<Employee>();
        let writers = writers();
        builder.set_properties(writers.clone());

        // One slot short of the property set; alignment is the caller's
        // contract and must survive finalization untouched.
        builder.set_filtered_properties(Box::from([Some(writers[0].clone())]));

        let descriptor = builder.build().unwrap();
        let filtered = descriptor.filtered_properties().unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].as_ref().unwrap().name(), "age");
        assert_eq!(descriptor.properties().len(), 2);
    }

    #[test]
    fn view_suppression_uses_empty_slots() {
        let mut builder = DescriptorBuilder::of::<Employee>();
        let writers = writers();
        builder.set_properties(writers.clone());
        builder.set_filtered_properties(Box::from([None, Some(writers[1].clone())]));

        let descriptor = builder.build().unwrap();
        let filtered = descriptor.filtered_properties().unwrap();

        assert!(filtered[0].is_none());
        assert_eq!(filtered[1].as_ref().unwrap().name(), "name");
    }

    #[test]
    fn duplicate_shares_writers_but_drops_identity_bindings() {
        let mut builder = DescriptorBuilder::of::<Employee>();
        builder.set_properties(writers());
        builder.set_any_getter(any_getter());
        builder.set_filter_id(FilterId::from_static("public-view"));
        builder.set_object_id(MemberRef::new::<Employee, u32>("id")).unwrap();
        builder.set_type_id(MemberRef::new::<Employee, String>("kind")).unwrap();

        let copy = builder.duplicate();

        assert_eq!(copy.properties().len(), 2);
        assert!(Arc::ptr_eq(&copy.properties()[0], &builder.properties()[0]));
        assert!(copy.any_getter().is_some());
        assert_eq!(copy.filter_id().unwrap().as_str(), "public-view");

        // The specializing caller re-establishes identity bindings.
        assert!(copy.object_id().is_none());
        assert!(copy.type_id().is_none());
    }

    #[test]
    fn build_is_repeatable() {
        let mut builder = DescriptorBuilder::of::<Employee>();
        builder.set_properties(writers());

        let first = builder.build().unwrap();
        let second = builder.build().unwrap();

        assert_eq!(names(&first), names(&second));
        assert!(builder.has_properties());
    }

    #[test]
    fn descriptors_cross_threads() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<ObjectDescriptor>();
        assert_send_sync::<DescriptorBuilder>();
    }
}
