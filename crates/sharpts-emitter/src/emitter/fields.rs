//! Field member emission.

use sharpts_model::CsField;

use super::DeclarationEmitter;
use crate::options::FieldEmitOptions;

impl DeclarationEmitter {
    /// Emit a field as a TypeScript member signature.
    pub fn emit_field(&mut self, field: &CsField, options: &FieldEmitOptions) {
        if field.is_readonly && options.respect_readonly {
            self.write("readonly ");
        }
        self.write(&field.name);
        self.write(": ");
        let text = self
            .type_emitter
            .print_type(&field.ty, &options.type_emit_options);
        self.write(&text);
        self.write(";");
        self.write_line();
    }
}
