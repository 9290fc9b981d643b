//! Type references, type parameters and access modifiers.

use serde::{Deserialize, Serialize};

/// A reference to a C# type, possibly parameterized by other type
/// references.
///
/// Value-like: compared and rendered structurally, never by identity.
/// `is_nullable` covers the `T?` shorthand; an explicit `Nullable<T>`
/// reference is carried as a regular generic and normalized by the
/// emitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsType {
    pub name: String,
    #[serde(default)]
    pub generic_arguments: Vec<CsType>,
    #[serde(default)]
    pub is_nullable: bool,
}

impl CsType {
    pub fn new(name: impl Into<String>) -> Self {
        CsType {
            name: name.into(),
            generic_arguments: Vec::new(),
            is_nullable: false,
        }
    }

    pub fn generic(name: impl Into<String>, arguments: Vec<CsType>) -> Self {
        CsType {
            name: name.into(),
            generic_arguments: arguments,
            is_nullable: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }
}

/// A generic type parameter declaration, e.g. `T` in `class Box<T>`,
/// with its `where` constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsTypeParameter {
    pub name: String,
    #[serde(default)]
    pub constraints: Vec<CsTypeConstraint>,
}

impl CsTypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        CsTypeParameter {
            name: name.into(),
            constraints: Vec::new(),
        }
    }

    pub fn constrained(name: impl Into<String>, constraints: Vec<CsTypeConstraint>) -> Self {
        CsTypeParameter {
            name: name.into(),
            constraints,
        }
    }
}

/// One `where` clause constraint on a type parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CsTypeConstraint {
    /// `where T : SomeBase` or `where T : ISomeInterface`
    Type(CsType),
    /// `where T : new()`
    DefaultConstructor,
    /// `where T : class`
    ReferenceType,
    /// `where T : struct`
    ValueType,
    /// `where T : notnull`
    NotNull,
}

/// C# member access level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CsAccessModifier {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

impl CsAccessModifier {
    pub fn is_public(self) -> bool {
        matches!(self, CsAccessModifier::Public)
    }
}
