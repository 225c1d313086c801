use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::descriptor::FilterId;
use crate::info::Type;
use crate::writer::{AnyGetterWriter, MemberRef, PropertyWriter};

// -----------------------------------------------------------------------------
// ObjectDescriptor

/// The immutable, finalized description of how one object type serializes.
///
/// A descriptor is a snapshot of the state a
/// [`DescriptorBuilder`](crate::descriptor::DescriptorBuilder) accumulated:
/// the named properties in serialization order, the optional view-filtered
/// parallel array, the optional any-getter fallback, the optional filter id,
/// and the optional identity bindings. Property writers are shared with the
/// builder by reference; the snapshot itself owns independent storage, so
/// later builder mutation never changes a descriptor already produced.
///
/// Descriptors are cheap to clone and safe to share across threads; the
/// downstream emitter walks [`properties`](Self::properties) in order,
/// consults [`filtered_properties`](Self::filtered_properties) for the active
/// view, and appends the [`any_getter`](Self::any_getter) entries last.
#[derive(Clone, Debug)]
pub struct ObjectDescriptor {
    ty: Type,
    properties: Box<[Arc<PropertyWriter>]>,
    filtered: Option<Box<[Option<Arc<PropertyWriter>>]>>,
    any_getter: Option<AnyGetterWriter>,
    filter_id: Option<FilterId>,
    object_id: Option<MemberRef>,
    type_id: Option<MemberRef>,
}

impl ObjectDescriptor {
    pub(crate) fn new(
        ty: Type,
        properties: Box<[Arc<PropertyWriter>]>,
        filtered: Option<Box<[Option<Arc<PropertyWriter>>]>>,
        any_getter: Option<AnyGetterWriter>,
        filter_id: Option<FilterId>,
        object_id: Option<MemberRef>,
        type_id: Option<MemberRef>,
    ) -> Self {
        Self {
            ty,
            properties,
            filtered,
            any_getter,
            filter_id,
            object_id,
            type_id,
        }
    }

    /// Creates a minimal valid descriptor with zero properties.
    ///
    /// Unlike [`DescriptorBuilder::build`](crate::descriptor::DescriptorBuilder::build),
    /// this never signals absence; callers that want an always-valid
    /// empty-object strategy (keeping discriminator emission for a type with
    /// no fields, for example) use this factory directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use objser::{ObjectDescriptor, Type};
    ///
    /// let descriptor = ObjectDescriptor::empty(Type::of::<u32>());
    ///
    /// assert!(!descriptor.has_properties());
    /// assert!(descriptor.any_getter().is_none());
    /// ```
    pub fn empty(ty: Type) -> Self {
        Self {
            ty,
            properties: Box::default(),
            filtered: None,
            any_getter: None,
            filter_id: None,
            object_id: None,
            type_id: None,
        }
    }

    /// Returns the described object [`Type`].
    #[inline(always)]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the named properties in serialization order.
    #[inline]
    pub fn properties(&self) -> &[Arc<PropertyWriter>] {
        &self.properties
    }

    /// Returns `true` if the descriptor has at least one named property.
    #[inline]
    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }

    /// Returns the view-filtered parallel array, if one was configured.
    ///
    /// Slots align by position with [`properties`](Self::properties); a `None`
    /// slot suppresses the property for the active view. Alignment is the
    /// configuring introspection pass's contract, not checked here.
    #[inline]
    pub fn filtered_properties(&self) -> Option<&[Option<Arc<PropertyWriter>>]> {
        self.filtered.as_deref()
    }

    /// Returns the catch-all any-getter writer, if one was configured.
    #[inline]
    pub fn any_getter(&self) -> Option<&AnyGetterWriter> {
        self.any_getter.as_ref()
    }

    /// Returns the opaque property-filter selector, if one was configured.
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
    ///
    /// A bound member is emitted as the type tag and not as a regular
    /// property.
    #[inline]
    pub fn type_id(&self) -> Option<&MemberRef> {
        self.type_id.as_ref()
    }
}
