//! C# declaration model for the sharpts generator.
//!
//! An owned, immutable tree of declaration nodes as produced by a C#
//! parser: classes with their members and nested types, interfaces,
//! enums, namespaces and files. The emitter crate traverses this model
//! read-only; nothing here is mutated during emission.
//!
//! Nesting mirrors lexical containment in the source, so the tree is
//! acyclic by construction and plain structural recursion over it is
//! safe.

pub mod ast;
pub mod types;

pub use ast::{
    CsClass, CsEnum, CsEnumMember, CsField, CsFile, CsInterface, CsMethod, CsMethodParameter,
    CsNamespace, CsProperty,
};
pub use types::{CsAccessModifier, CsType, CsTypeConstraint, CsTypeParameter};
