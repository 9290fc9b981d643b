//! File and namespace emission.
//!
//! Orchestrates the per-kind emitters over a whole parse result. Inside
//! a `declare namespace` the `declare` keyword is suppressed on members:
//! the outer modifier already covers them.

use sharpts_model::{CsFile, CsNamespace};

use super::DeclarationEmitter;
use crate::options::{FileEmitOptions, NamespaceEmitOptions};

impl DeclarationEmitter {
    /// Emit a namespace declaration and its contents, recursively.
    #[tracing::instrument(level = "trace", skip(self, namespace, options), fields(name = %namespace.name))]
    pub fn emit_namespace(&mut self, namespace: &CsNamespace, options: &NamespaceEmitOptions) {
        if options.declare && !self.inside_declare_namespace {
            self.write("declare ");
        }
        self.write("namespace ");
        self.write(&namespace.name);
        self.write(" {");
        self.write_line();
        self.increase_indent();

        let was_inside = self.inside_declare_namespace;
        if options.declare {
            self.inside_declare_namespace = true;
        }

        let enum_options = options.enum_emit_options.clone().unwrap_or_default();
        for cs_enum in &namespace.enums {
            if cs_enum.access_modifier.is_public() {
                self.emit_enum(cs_enum, &enum_options);
            }
        }

        let interface_options = options.interface_emit_options.clone().unwrap_or_default();
        for interface in &namespace.interfaces {
            if interface.access_modifier.is_public() {
                self.emit_interface(interface, &interface_options);
            }
        }

        let class_options = options.class_emit_options.clone().unwrap_or_default();
        self.emit_classes(&namespace.classes, &class_options);

        for nested in &namespace.namespaces {
            self.emit_namespace(nested, options);
        }

        self.inside_declare_namespace = was_inside;
        self.decrease_indent();
        self.write("}");
        self.write_line();
    }

    /// Emit a complete file model: top-level enums, interfaces and
    /// classes first, then namespaces.
    pub fn emit_file(&mut self, file: &CsFile, options: &FileEmitOptions) {
        tracing::debug!(
            enums = file.enums.len(),
            interfaces = file.interfaces.len(),
            classes = file.classes.len(),
            namespaces = file.namespaces.len(),
            "Emitting file"
        );

        let enum_options = options.enum_emit_options.clone().unwrap_or_default();
        for cs_enum in &file.enums {
            if cs_enum.access_modifier.is_public() {
                self.emit_enum(cs_enum, &enum_options);
            }
        }

        let interface_options = options.interface_emit_options.clone().unwrap_or_default();
        for interface in &file.interfaces {
            if interface.access_modifier.is_public() {
                self.emit_interface(interface, &interface_options);
            }
        }

        let class_options = options.class_emit_options.clone().unwrap_or_default();
        self.emit_classes(&file.classes, &class_options);

        let namespace_options = options.namespace_emit_options.clone().unwrap_or_default();
        for namespace in &file.namespaces {
            self.emit_namespace(namespace, &namespace_options);
        }
    }
}
