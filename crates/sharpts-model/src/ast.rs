//! Declaration nodes: members, classes, interfaces, enums, namespaces
//! and files.
//!
//! All sequences preserve source declaration order. Nodes are created
//! once by the parser and treated as read-only afterwards.

use serde::{Deserialize, Serialize};

use crate::types::{CsAccessModifier, CsType, CsTypeParameter};

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsField {
    pub name: String,
    pub ty: CsType,
    #[serde(default)]
    pub access_modifier: CsAccessModifier,
    #[serde(default)]
    pub is_readonly: bool,
}

impl CsField {
    pub fn new(name: impl Into<String>, ty: CsType) -> Self {
        CsField {
            name: name.into(),
            ty,
            access_modifier: CsAccessModifier::Public,
            is_readonly: false,
        }
    }
}

/// A property declaration. Accessor bodies are irrelevant to the
/// generated surface and are not modeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsProperty {
    pub name: String,
    pub ty: CsType,
    #[serde(default)]
    pub access_modifier: CsAccessModifier,
}

impl CsProperty {
    pub fn new(name: impl Into<String>, ty: CsType) -> Self {
        CsProperty {
            name: name.into(),
            ty,
            access_modifier: CsAccessModifier::Public,
        }
    }
}

/// One parameter of a method signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsMethodParameter {
    pub name: String,
    pub ty: CsType,
}

impl CsMethodParameter {
    pub fn new(name: impl Into<String>, ty: CsType) -> Self {
        CsMethodParameter {
            name: name.into(),
            ty,
        }
    }
}

/// A method declaration. Only the signature is modeled; bodies never
/// reach the generated output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsMethod {
    pub name: String,
    pub return_type: CsType,
    #[serde(default)]
    pub generic_parameters: Vec<CsTypeParameter>,
    #[serde(default)]
    pub parameters: Vec<CsMethodParameter>,
    #[serde(default)]
    pub access_modifier: CsAccessModifier,
    #[serde(default)]
    pub is_static: bool,
}

impl CsMethod {
    pub fn new(name: impl Into<String>, return_type: CsType) -> Self {
        CsMethod {
            name: name.into(),
            return_type,
            generic_parameters: Vec::new(),
            parameters: Vec::new(),
            access_modifier: CsAccessModifier::Public,
            is_static: false,
        }
    }
}

/// One enum member, with its explicit value when the source gives one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsEnumMember {
    pub name: String,
    #[serde(default)]
    pub value: Option<i64>,
}

impl CsEnumMember {
    pub fn new(name: impl Into<String>) -> Self {
        CsEnumMember {
            name: name.into(),
            value: None,
        }
    }

    pub fn with_value(name: impl Into<String>, value: i64) -> Self {
        CsEnumMember {
            name: name.into(),
            value: Some(value),
        }
    }
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsEnum {
    pub name: String,
    #[serde(default)]
    pub members: Vec<CsEnumMember>,
    #[serde(default)]
    pub access_modifier: CsAccessModifier,
}

impl CsEnum {
    pub fn new(name: impl Into<String>) -> Self {
        CsEnum {
            name: name.into(),
            members: Vec::new(),
            access_modifier: CsAccessModifier::Public,
        }
    }
}

/// An interface declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsInterface {
    pub name: String,
    #[serde(default)]
    pub generic_parameters: Vec<CsTypeParameter>,
    #[serde(default)]
    pub inherits_from: Vec<CsType>,
    #[serde(default)]
    pub properties: Vec<CsProperty>,
    #[serde(default)]
    pub methods: Vec<CsMethod>,
    #[serde(default)]
    pub access_modifier: CsAccessModifier,
}

impl CsInterface {
    pub fn new(name: impl Into<String>) -> Self {
        CsInterface {
            name: name.into(),
            generic_parameters: Vec::new(),
            inherits_from: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            access_modifier: CsAccessModifier::Public,
        }
    }
}

/// A class declaration, including everything nested inside it.
///
/// `name` is required and unique within the enclosing scope. Nested
/// classes are owned by their parent; nesting may be arbitrarily deep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsClass {
    pub name: String,
    #[serde(default)]
    pub generic_parameters: Vec<CsTypeParameter>,
    #[serde(default)]
    pub inherits_from: Option<CsType>,
    #[serde(default)]
    pub implements: Vec<CsType>,
    #[serde(default)]
    pub enums: Vec<CsEnum>,
    #[serde(default)]
    pub properties: Vec<CsProperty>,
    #[serde(default)]
    pub fields: Vec<CsField>,
    #[serde(default)]
    pub methods: Vec<CsMethod>,
    #[serde(default)]
    pub interfaces: Vec<CsInterface>,
    #[serde(default)]
    pub classes: Vec<CsClass>,
    #[serde(default)]
    pub access_modifier: CsAccessModifier,
}

impl CsClass {
    pub fn new(name: impl Into<String>) -> Self {
        CsClass {
            name: name.into(),
            generic_parameters: Vec::new(),
            inherits_from: None,
            implements: Vec::new(),
            enums: Vec::new(),
            properties: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            interfaces: Vec::new(),
            classes: Vec::new(),
            access_modifier: CsAccessModifier::Public,
        }
    }
}

/// A namespace declaration and its contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsNamespace {
    pub name: String,
    #[serde(default)]
    pub enums: Vec<CsEnum>,
    #[serde(default)]
    pub interfaces: Vec<CsInterface>,
    #[serde(default)]
    pub classes: Vec<CsClass>,
    #[serde(default)]
    pub namespaces: Vec<CsNamespace>,
}

impl CsNamespace {
    pub fn new(name: impl Into<String>) -> Self {
        CsNamespace {
            name: name.into(),
            enums: Vec::new(),
            interfaces: Vec::new(),
            classes: Vec::new(),
            namespaces: Vec::new(),
        }
    }
}

/// The parse result for one source file: its top-level declarations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CsFile {
    #[serde(default)]
    pub enums: Vec<CsEnum>,
    #[serde(default)]
    pub interfaces: Vec<CsInterface>,
    #[serde(default)]
    pub classes: Vec<CsClass>,
    #[serde(default)]
    pub namespaces: Vec<CsNamespace>,
}
