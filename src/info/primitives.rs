//! [`TypePath`](crate::info::TypePath) implementations for the primitive types
//! an introspection pass commonly hands to this crate.

use crate::impl_type_path;

impl_type_path!(() => "()", "()");

impl_type_path!(bool => "bool", "bool");
impl_type_path!(char => "char", "char");

impl_type_path!(u8 => "u8", "u8");
impl_type_path!(u16 => "u16", "u16");
impl_type_path!(u32 => "u32", "u32");
impl_type_path!(u64 => "u64", "u64");
impl_type_path!(u128 => "u128", "u128");
impl_type_path!(usize => "usize", "usize");

impl_type_path!(i8 => "i8", "i8");
impl_type_path!(i16 => "i16", "i16");
impl_type_path!(i32 => "i32", "i32");
impl_type_path!(i64 => "i64", "i64");
impl_type_path!(i128 => "i128", "i128");
impl_type_path!(isize => "isize", "isize");

impl_type_path!(f32 => "f32", "f32");
impl_type_path!(f64 => "f64", "f64");

impl_type_path!(str => "str", "str");
impl_type_path!(&'static str => "&str", "&str");
impl_type_path!(alloc::string::String => "alloc::string::String", "String");
