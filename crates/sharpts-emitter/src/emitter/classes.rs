//! Class declaration emission — the orchestration core.
//!
//! For each class: resolve the effective options (base merged with the
//! per-class override, if a factory is configured), apply the effective
//! filter, emit the header, then the members in a fixed order — enums,
//! properties, fields, methods, interfaces, nested classes — and close
//! the body. Nested classes recurse through the same pipeline with the
//! resolved options threaded down as their new base, so inheritance is
//! the default and a nested class can still be overridden again by the
//! same factory.

use sharpts_model::CsClass;

use super::DeclarationEmitter;
use crate::options::{
    ClassEmitOptions, ClassEmitOptionsBase, EffectiveClassOptions, PerClassOptionsFactory,
    resolve_class_options,
};

impl DeclarationEmitter {
    /// Emit a sequence of classes in declaration order.
    ///
    /// Each class is fully emitted — including all nested descendants —
    /// before the next sibling begins, so sibling output never
    /// interleaves and the result equals the concatenation of individual
    /// [`emit_class`] calls.
    ///
    /// [`emit_class`]: DeclarationEmitter::emit_class
    pub fn emit_classes(&mut self, classes: &[CsClass], options: &ClassEmitOptions) {
        tracing::debug!(count = classes.len(), "Emitting class declarations");
        for class in classes {
            self.emit_class(class, options);
        }
    }

    /// Emit a single class declaration.
    ///
    /// A configured filter returning `false` suppresses the class and
    /// everything nested inside it — exclusion is total, not just of the
    /// header. A panicking filter or per-class factory indicates a caller
    /// configuration bug and propagates unchanged.
    #[tracing::instrument(level = "trace", skip(self, class, options), fields(name = %class.name))]
    pub fn emit_class(&mut self, class: &CsClass, options: &ClassEmitOptions) {
        self.emit_class_with_base(class, &options.base, options.per_class_emit_options.as_ref());
    }

    fn emit_class_with_base(
        &mut self,
        class: &CsClass,
        base: &ClassEmitOptionsBase,
        factory: Option<&PerClassOptionsFactory>,
    ) {
        let effective = resolve_class_options(base, factory, class);

        if let Some(filter) = &effective.filter
            && !filter(class)
        {
            tracing::trace!(name = %class.name, "Class excluded by filter");
            return;
        }

        self.emit_class_header(class, &effective);
        self.write_line();
        self.increase_indent();
        self.emit_class_members(class, &effective, factory);
        self.decrease_indent();
        self.write("}");
        self.write_line();
    }

    fn emit_class_header(&mut self, class: &CsClass, effective: &EffectiveClassOptions) {
        if effective.declare && !self.inside_declare_namespace {
            self.write("declare ");
        }
        self.write("class ");

        let name = effective.name.as_deref().unwrap_or(&class.name);
        self.write(name);

        self.emit_type_parameters(
            &class.generic_parameters,
            &effective.generic_parameter_type_emit_options,
        );

        if let Some(base_type) = &class.inherits_from {
            self.emit_heritage_types(
                "extends",
                std::slice::from_ref(base_type),
                &effective.inherited_type_emit_options,
            );
        }
        self.emit_heritage_types(
            "implements",
            &class.implements,
            &effective.inherited_type_emit_options,
        );

        self.write(" {");
    }

    fn emit_class_members(
        &mut self,
        class: &CsClass,
        effective: &EffectiveClassOptions,
        factory: Option<&PerClassOptionsFactory>,
    ) {
        for cs_enum in &class.enums {
            if cs_enum.access_modifier.is_public() {
                self.emit_enum(cs_enum, &effective.enum_emit_options);
            }
        }

        for property in &class.properties {
            if property.access_modifier.is_public() {
                self.emit_property(property, &effective.property_emit_options);
            }
        }

        for field in &class.fields {
            if field.access_modifier.is_public() {
                self.emit_field(field, &effective.field_emit_options);
            }
        }

        for method in &class.methods {
            if method.access_modifier.is_public() {
                self.emit_method(method, &effective.method_emit_options);
            }
        }

        for interface in &class.interfaces {
            if interface.access_modifier.is_public() {
                self.emit_interface(interface, &effective.interface_emit_options);
            }
        }

        // The resolved options become the new base: nested classes
        // inherit the parent's effective settings, and the factory still
        // runs for each of them.
        for nested in &class.classes {
            self.emit_class_with_base(nested, &effective.merged_base, factory);
        }
    }
}
