//! Interface declaration emission.

use sharpts_model::CsInterface;

use super::DeclarationEmitter;
use crate::options::InterfaceEmitOptions;

impl DeclarationEmitter {
    /// Emit an interface declaration: header with generic parameters and
    /// `extends` clause, then public property and method signatures.
    pub fn emit_interface(&mut self, interface: &CsInterface, options: &InterfaceEmitOptions) {
        if let Some(filter) = &options.filter
            && !filter(interface)
        {
            tracing::trace!(name = %interface.name, "Interface excluded by filter");
            return;
        }

        if options.declare && !self.inside_declare_namespace {
            self.write("declare ");
        }
        self.write("interface ");
        self.write(&interface.name);

        self.emit_type_parameters(
            &interface.generic_parameters,
            &options.generic_parameter_type_emit_options,
        );
        self.emit_heritage_types(
            "extends",
            &interface.inherits_from,
            &options.inherited_type_emit_options,
        );

        self.write(" {");
        self.write_line();
        self.increase_indent();

        for property in &interface.properties {
            if property.access_modifier.is_public() {
                self.emit_property(property, &options.property_emit_options);
            }
        }
        for method in &interface.methods {
            if method.access_modifier.is_public() {
                self.emit_method(method, &options.method_emit_options);
            }
        }

        self.decrease_indent();
        self.write("}");
        self.write_line();
    }
}
