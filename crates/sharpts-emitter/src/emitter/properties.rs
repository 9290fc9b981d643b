//! Property member emission.

use sharpts_model::CsProperty;

use super::DeclarationEmitter;
use crate::options::PropertyEmitOptions;

impl DeclarationEmitter {
    /// Emit a property as a TypeScript member signature.
    ///
    /// A nullable type renders as `Name: T | null`, or as `Name?: T`
    /// when the options ask for the optional marker instead.
    pub fn emit_property(&mut self, property: &CsProperty, options: &PropertyEmitOptions) {
        if options.readonly {
            self.write("readonly ");
        }
        self.write(&property.name);

        let text = if property.ty.is_nullable && options.optional_nullable {
            self.write("?");
            self.type_emitter
                .print_type_ignoring_nullable(&property.ty, &options.type_emit_options)
        } else {
            self.type_emitter
                .print_type(&property.ty, &options.type_emit_options)
        };

        self.write(": ");
        self.write(&text);
        self.write(";");
        self.write_line();
    }
}
