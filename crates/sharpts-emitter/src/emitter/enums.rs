//! Enum declaration emission.

use sharpts_model::CsEnum;

use super::DeclarationEmitter;
use crate::options::EnumEmitOptions;

impl DeclarationEmitter {
    /// Emit an enum declaration.
    ///
    /// Explicit member values are preserved; members without one
    /// auto-increment from the previous value, starting at zero.
    pub fn emit_enum(&mut self, cs_enum: &CsEnum, options: &EnumEmitOptions) {
        tracing::trace!(name = %cs_enum.name, "Emitting enum declaration");

        if options.declare && !self.inside_declare_namespace {
            self.write("declare ");
        }
        self.write("enum ");
        self.write(&cs_enum.name);
        self.write(" {");
        self.write_line();
        self.increase_indent();

        let mut next_value = 0i64;
        for (i, member) in cs_enum.members.iter().enumerate() {
            let value = member.value.unwrap_or(next_value);
            next_value = value + 1;

            self.write(&member.name);
            self.write(" = ");
            self.write(&value.to_string());
            if i < cs_enum.members.len() - 1 {
                self.write(",");
            }
            self.write_line();
        }

        self.decrease_indent();
        self.write("}");
        self.write_line();
    }
}
