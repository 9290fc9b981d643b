//! The declaration emitter.
//!
//! One struct, with its impl split per syntactic category: classes (the
//! orchestration core), enums, properties, fields, methods, interfaces,
//! and file/namespace emission. Every category writes through the same
//! [`SourceWriter`] and receives a fully resolved options value — member
//! emitters never infer defaults themselves.

mod classes;
mod enums;
mod fields;
mod files;
mod interfaces;
mod methods;
mod properties;

use sharpts_model::{CsType, CsTypeConstraint, CsTypeParameter};

use crate::options::TypeEmitOptions;
use crate::source_writer::{NewLineKind, SourceWriter};
use crate::type_emitter::TypeEmitter;

/// Emits TypeScript declaration text for a C# declaration model.
///
/// All emission is side effects on the internal writer; no emit method
/// returns generated text. Read the result with [`output`] or take it
/// with [`finish`].
///
/// [`output`]: DeclarationEmitter::output
/// [`finish`]: DeclarationEmitter::finish
pub struct DeclarationEmitter {
    writer: SourceWriter,
    type_emitter: TypeEmitter,
    /// Inside a `declare namespace`, members must not repeat the
    /// `declare` keyword.
    inside_declare_namespace: bool,
}

impl DeclarationEmitter {
    pub fn new() -> Self {
        DeclarationEmitter {
            writer: SourceWriter::with_capacity(4096),
            type_emitter: TypeEmitter::new(),
            inside_declare_namespace: false,
        }
    }

    pub fn with_newline(newline: NewLineKind) -> Self {
        DeclarationEmitter {
            writer: SourceWriter::with_newline(newline),
            ..Self::new()
        }
    }

    /// Borrow the text emitted so far.
    pub fn output(&self) -> &str {
        self.writer.get_output()
    }

    /// Consume the emitter and take the emitted text.
    pub fn finish(self) -> String {
        self.writer.into_output()
    }

    // =========================================================================
    // Output helpers (delegate to SourceWriter)
    // =========================================================================

    pub(super) fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    pub(super) fn write_line(&mut self) {
        self.writer.write_line();
    }

    pub(super) fn increase_indent(&mut self) {
        self.writer.increase_indent();
    }

    pub(super) fn decrease_indent(&mut self) {
        self.writer.decrease_indent();
    }

    // =========================================================================
    // Shared syntax helpers
    // =========================================================================

    /// Render a generic parameter list, `<T extends …, U>`. Writes
    /// nothing for an empty list.
    pub(super) fn emit_type_parameters(
        &mut self,
        parameters: &[CsTypeParameter],
        options: &TypeEmitOptions,
    ) {
        if parameters.is_empty() {
            return;
        }

        self.write("<");
        let mut first = true;
        for parameter in parameters {
            if !first {
                self.write(", ");
            }
            first = false;

            self.write(&parameter.name);

            let constraints: Vec<String> = parameter
                .constraints
                .iter()
                .filter_map(|constraint| self.constraint_text(parameter, constraint, options))
                .collect();
            if !constraints.is_empty() {
                self.write(" extends ");
                self.write(&constraints.join(" & "));
            }
        }
        self.write(">");
    }

    fn constraint_text(
        &self,
        parameter: &CsTypeParameter,
        constraint: &CsTypeConstraint,
        options: &TypeEmitOptions,
    ) -> Option<String> {
        match constraint {
            CsTypeConstraint::Type(ty) => Some(self.type_emitter.print_type(ty, options)),
            CsTypeConstraint::DefaultConstructor => Some(format!("new () => {}", parameter.name)),
            // class/struct/notnull constraints have no TypeScript spelling
            CsTypeConstraint::ReferenceType
            | CsTypeConstraint::ValueType
            | CsTypeConstraint::NotNull => None,
        }
    }

    /// Render a heritage clause (` extends A, B` / ` implements A, B`).
    /// Writes nothing for an empty type list.
    pub(super) fn emit_heritage_types(
        &mut self,
        keyword: &str,
        types: &[CsType],
        options: &TypeEmitOptions,
    ) {
        if types.is_empty() {
            return;
        }

        self.write(" ");
        self.write(keyword);
        self.write(" ");

        let mut first = true;
        for ty in types {
            if !first {
                self.write(", ");
            }
            first = false;
            let text = self.type_emitter.print_type(ty, options);
            self.write(&text);
        }
    }
}

impl Default for DeclarationEmitter {
    fn default() -> Self {
        Self::new()
    }
}
