//! Method signature emission.

use sharpts_model::CsMethod;

use super::DeclarationEmitter;
use crate::options::MethodEmitOptions;

impl DeclarationEmitter {
    /// Emit a method as a declaration-only TypeScript signature. Bodies
    /// are never part of the generated surface.
    pub fn emit_method(&mut self, method: &CsMethod, options: &MethodEmitOptions) {
        if method.is_static {
            self.write("static ");
        }
        self.write(&method.name);

        self.emit_type_parameters(
            &method.generic_parameters,
            &options.argument_type_emit_options,
        );

        self.write("(");
        let mut first = true;
        for parameter in &method.parameters {
            if !first {
                self.write(", ");
            }
            first = false;
            self.write(&parameter.name);
            self.write(": ");
            let text = self
                .type_emitter
                .print_type(&parameter.ty, &options.argument_type_emit_options);
            self.write(&text);
        }
        self.write(")");

        self.write(": ");
        let return_text = self
            .type_emitter
            .print_type(&method.return_type, &options.return_type_emit_options);
        self.write(&return_text);
        self.write(";");
        self.write_line();
    }
}
