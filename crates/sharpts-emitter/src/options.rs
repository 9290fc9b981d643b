//! Emission options and the per-class option resolver.
//!
//! Every class-level option field is an `Option`: absence means "inherit
//! from the enclosing options", and is distinct from overriding a field
//! back to its default. The merge is field-wise with absence-preserving
//! fallback, and shallow per top-level category — a per-class override
//! that supplies `property_emit_options` replaces the whole bundle, it is
//! not deep-merged. Callers wanting a partial override of a nested bundle
//! supply the full bundle.
//!
//! Filters, per-class factories and type mappers are plain function
//! values injected through configuration, not trait hooks; a panicking
//! predicate is a caller configuration bug and propagates unchanged.

use std::fmt;
use std::sync::Arc;

use sharpts_model::{CsClass, CsInterface, CsType};

/// Decides whether a class is emitted at all. Exclusion is total: a
/// filtered-out class contributes no header and no descendants.
pub type ClassFilter = Arc<dyn Fn(&CsClass) -> bool + Send + Sync>;

/// Decides whether an interface is emitted.
pub type InterfaceFilter = Arc<dyn Fn(&CsInterface) -> bool + Send + Sync>;

/// Maps a type reference to its final TypeScript spelling. Receives the
/// type and the suggested default rendering, returns the text to use.
pub type TypeMapper = Arc<dyn Fn(&CsType, &str) -> String + Send + Sync>;

/// Produces the per-class override for one class node.
pub type PerClassOptionsFactory = Arc<dyn Fn(&CsClass) -> PerClassEmitOptions + Send + Sync>;

fn fmt_present<T>(value: &Option<T>) -> &'static str {
    if value.is_some() { "Some(<fn>)" } else { "None" }
}

/// How type references are rendered.
#[derive(Clone, Default)]
pub struct TypeEmitOptions {
    pub mapper: Option<TypeMapper>,
}

impl fmt::Debug for TypeEmitOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeEmitOptions")
            .field("mapper", &fmt_present(&self.mapper))
            .finish()
    }
}

/// How enum declarations are rendered.
#[derive(Debug, Clone, Default)]
pub struct EnumEmitOptions {
    /// Prefix the declaration with `declare`.
    pub declare: bool,
}

/// How property members are rendered.
#[derive(Debug, Clone, Default)]
pub struct PropertyEmitOptions {
    /// Prefix every property with `readonly`.
    pub readonly: bool,
    /// Render a nullable C# type as `name?: T` instead of `name: T | null`.
    pub optional_nullable: bool,
    pub type_emit_options: TypeEmitOptions,
}

/// How field members are rendered.
#[derive(Debug, Clone)]
pub struct FieldEmitOptions {
    /// Carry C# `readonly` over as TypeScript `readonly`.
    pub respect_readonly: bool,
    pub type_emit_options: TypeEmitOptions,
}

impl Default for FieldEmitOptions {
    fn default() -> Self {
        FieldEmitOptions {
            respect_readonly: true,
            type_emit_options: TypeEmitOptions::default(),
        }
    }
}

/// How method signatures are rendered.
#[derive(Debug, Clone, Default)]
pub struct MethodEmitOptions {
    pub argument_type_emit_options: TypeEmitOptions,
    pub return_type_emit_options: TypeEmitOptions,
}

/// How interface declarations are rendered.
#[derive(Clone, Default)]
pub struct InterfaceEmitOptions {
    /// Prefix the declaration with `declare`.
    pub declare: bool,
    pub filter: Option<InterfaceFilter>,
    pub property_emit_options: PropertyEmitOptions,
    pub method_emit_options: MethodEmitOptions,
    pub generic_parameter_type_emit_options: TypeEmitOptions,
    pub inherited_type_emit_options: TypeEmitOptions,
}

impl fmt::Debug for InterfaceEmitOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfaceEmitOptions")
            .field("declare", &self.declare)
            .field("filter", &fmt_present(&self.filter))
            .field("property_emit_options", &self.property_emit_options)
            .field("method_emit_options", &self.method_emit_options)
            .field(
                "generic_parameter_type_emit_options",
                &self.generic_parameter_type_emit_options,
            )
            .field(
                "inherited_type_emit_options",
                &self.inherited_type_emit_options,
            )
            .finish()
    }
}

/// The inheritable class-emission settings. Every field is optional;
/// `None` means "use the enclosing value".
#[derive(Clone, Default)]
pub struct ClassEmitOptionsBase {
    pub declare: Option<bool>,
    pub filter: Option<ClassFilter>,
    pub enum_emit_options: Option<EnumEmitOptions>,
    pub property_emit_options: Option<PropertyEmitOptions>,
    pub interface_emit_options: Option<InterfaceEmitOptions>,
    pub method_emit_options: Option<MethodEmitOptions>,
    pub field_emit_options: Option<FieldEmitOptions>,
    pub generic_parameter_type_emit_options: Option<TypeEmitOptions>,
    pub inherited_type_emit_options: Option<TypeEmitOptions>,
}

impl ClassEmitOptionsBase {
    /// Field-wise merge: every field present in `overrides` replaces the
    /// corresponding field here; absent fields keep this value. Shallow
    /// per category.
    pub fn merged_with(&self, overrides: &ClassEmitOptionsBase) -> ClassEmitOptionsBase {
        ClassEmitOptionsBase {
            declare: overrides.declare.or(self.declare),
            filter: overrides.filter.clone().or_else(|| self.filter.clone()),
            enum_emit_options: overrides
                .enum_emit_options
                .clone()
                .or_else(|| self.enum_emit_options.clone()),
            property_emit_options: overrides
                .property_emit_options
                .clone()
                .or_else(|| self.property_emit_options.clone()),
            interface_emit_options: overrides
                .interface_emit_options
                .clone()
                .or_else(|| self.interface_emit_options.clone()),
            method_emit_options: overrides
                .method_emit_options
                .clone()
                .or_else(|| self.method_emit_options.clone()),
            field_emit_options: overrides
                .field_emit_options
                .clone()
                .or_else(|| self.field_emit_options.clone()),
            generic_parameter_type_emit_options: overrides
                .generic_parameter_type_emit_options
                .clone()
                .or_else(|| self.generic_parameter_type_emit_options.clone()),
            inherited_type_emit_options: overrides
                .inherited_type_emit_options
                .clone()
                .or_else(|| self.inherited_type_emit_options.clone()),
        }
    }
}

impl fmt::Debug for ClassEmitOptionsBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassEmitOptionsBase")
            .field("declare", &self.declare)
            .field("filter", &fmt_present(&self.filter))
            .field("enum_emit_options", &self.enum_emit_options)
            .field("property_emit_options", &self.property_emit_options)
            .field("interface_emit_options", &self.interface_emit_options)
            .field("method_emit_options", &self.method_emit_options)
            .field("field_emit_options", &self.field_emit_options)
            .field(
                "generic_parameter_type_emit_options",
                &self.generic_parameter_type_emit_options,
            )
            .field(
                "inherited_type_emit_options",
                &self.inherited_type_emit_options,
            )
            .finish()
    }
}

/// Options for `emit_classes`/`emit_class`: the base settings plus an
/// optional per-class override factory.
#[derive(Clone, Default)]
pub struct ClassEmitOptions {
    pub base: ClassEmitOptionsBase,
    pub per_class_emit_options: Option<PerClassOptionsFactory>,
}

impl fmt::Debug for ClassEmitOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassEmitOptions")
            .field("base", &self.base)
            .field(
                "per_class_emit_options",
                &fmt_present(&self.per_class_emit_options),
            )
            .finish()
    }
}

/// The override a per-class factory returns: any subset of the base
/// settings, plus an optional replacement name for the emitted class.
#[derive(Debug, Clone, Default)]
pub struct PerClassEmitOptions {
    pub base: ClassEmitOptionsBase,
    /// Rename the class on emission without mutating the source model.
    pub name: Option<String>,
}

/// The fully resolved options actually used for one class emission.
///
/// Category bundles are concrete here — member emitters are never asked
/// to infer defaults. `merged_base` carries the merged (still-optional)
/// form down into nested-class recursion, so a nested class inherits the
/// parent's effective settings and can still be overridden again.
#[derive(Clone)]
pub struct EffectiveClassOptions {
    pub declare: bool,
    pub name: Option<String>,
    pub filter: Option<ClassFilter>,
    pub enum_emit_options: EnumEmitOptions,
    pub property_emit_options: PropertyEmitOptions,
    pub interface_emit_options: InterfaceEmitOptions,
    pub method_emit_options: MethodEmitOptions,
    pub field_emit_options: FieldEmitOptions,
    pub generic_parameter_type_emit_options: TypeEmitOptions,
    pub inherited_type_emit_options: TypeEmitOptions,
    pub merged_base: ClassEmitOptionsBase,
}

/// Resolve the effective options for one class node.
///
/// With no factory the effective options equal `base`. Otherwise the
/// factory is invoked with the class and the result merged over `base`,
/// override fields winning. Always builds a fresh value — sibling
/// classes at the same recursion depth never observe each other's
/// overrides. No cross-validation is performed on what the factory
/// returns.
pub fn resolve_class_options(
    base: &ClassEmitOptionsBase,
    factory: Option<&PerClassOptionsFactory>,
    class: &CsClass,
) -> EffectiveClassOptions {
    let (merged, name) = match factory {
        Some(factory) => {
            let overrides = factory(class);
            (base.merged_with(&overrides.base), overrides.name)
        }
        None => (base.clone(), None),
    };

    EffectiveClassOptions {
        declare: merged.declare.unwrap_or(false),
        name,
        filter: merged.filter.clone(),
        enum_emit_options: merged.enum_emit_options.clone().unwrap_or_default(),
        property_emit_options: merged.property_emit_options.clone().unwrap_or_default(),
        interface_emit_options: merged.interface_emit_options.clone().unwrap_or_default(),
        method_emit_options: merged.method_emit_options.clone().unwrap_or_default(),
        field_emit_options: merged.field_emit_options.clone().unwrap_or_default(),
        generic_parameter_type_emit_options: merged
            .generic_parameter_type_emit_options
            .clone()
            .unwrap_or_default(),
        inherited_type_emit_options: merged
            .inherited_type_emit_options
            .clone()
            .unwrap_or_default(),
        merged_base: merged,
    }
}

impl fmt::Debug for EffectiveClassOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectiveClassOptions")
            .field("declare", &self.declare)
            .field("name", &self.name)
            .field("filter", &fmt_present(&self.filter))
            .field("merged_base", &self.merged_base)
            .finish_non_exhaustive()
    }
}

/// Options for namespace emission.
#[derive(Debug, Clone, Default)]
pub struct NamespaceEmitOptions {
    /// Emit `declare namespace` at top level; suppressed when nested
    /// inside an enclosing declare namespace.
    pub declare: bool,
    pub class_emit_options: Option<ClassEmitOptions>,
    pub enum_emit_options: Option<EnumEmitOptions>,
    pub interface_emit_options: Option<InterfaceEmitOptions>,
}

/// Options for whole-file emission.
#[derive(Debug, Clone, Default)]
pub struct FileEmitOptions {
    pub class_emit_options: Option<ClassEmitOptions>,
    pub enum_emit_options: Option<EnumEmitOptions>,
    pub interface_emit_options: Option<InterfaceEmitOptions>,
    pub namespace_emit_options: Option<NamespaceEmitOptions>,
}
