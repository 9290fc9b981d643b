//! TypeScript declaration emitter.
//!
//! Takes the C# declaration model from `sharpts-model` and produces
//! TypeScript declaration text:
//!
//! ```csharp
//! // input model, as parsed from:
//! class Calculator<T> where T : new()
//! {
//!     public int Value { get; set; }
//!     public List<T> History;
//! }
//! ```
//!
//! Generates:
//!
//! ```typescript
//! class Calculator<T extends new () => T> {
//!     Value: number;
//!     History: T[];
//! }
//! ```
//!
//! All emission writes through a single [`SourceWriter`]; callers observe
//! output only through [`DeclarationEmitter::output`] or
//! [`DeclarationEmitter::finish`]. Emission is a synchronous, depth-first
//! walk over the immutable model — output for a class and all of its
//! descendants is contiguous and in declaration order.
//!
//! Diagnostics go through `tracing` and are fire-and-forget: no
//! subscriber needs to be installed for emission to be correct.

pub mod emitter;
pub mod options;
pub mod source_writer;
pub mod type_emitter;

pub use emitter::DeclarationEmitter;
pub use options::{
    ClassEmitOptions, ClassEmitOptionsBase, ClassFilter, EnumEmitOptions, FieldEmitOptions,
    FileEmitOptions, InterfaceEmitOptions, InterfaceFilter, MethodEmitOptions,
    NamespaceEmitOptions, PerClassEmitOptions, PerClassOptionsFactory, PropertyEmitOptions,
    TypeEmitOptions, TypeMapper,
};
pub use source_writer::{NewLineKind, SourceWriter};
pub use type_emitter::TypeEmitter;
