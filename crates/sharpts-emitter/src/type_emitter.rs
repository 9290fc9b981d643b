//! Type Emitter - Convert C# type references to TypeScript syntax.
//!
//! This is the one place that knows how a `CsType` spells in TypeScript.
//! Every other emitter that mentions a type goes through here, so
//! generic parameter lists and heritage clauses can be rendered by plain
//! iteration with a separator.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use sharpts_model::CsType;

use crate::options::TypeEmitOptions;

/// C# scalar types with a direct TypeScript spelling.
static BUILTIN_SCALARS: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    for name in [
        "int", "uint", "long", "ulong", "short", "ushort", "byte", "sbyte", "float", "double",
        "decimal", "Int16", "Int32", "Int64", "UInt16", "UInt32", "UInt64", "Single", "Double",
        "Decimal", "Byte", "SByte",
    ] {
        map.insert(name, "number");
    }
    map.insert("string", "string");
    map.insert("String", "string");
    map.insert("char", "string");
    map.insert("Guid", "string");
    map.insert("TimeSpan", "string");
    map.insert("bool", "boolean");
    map.insert("Boolean", "boolean");
    map.insert("void", "void");
    map.insert("object", "any");
    map.insert("Object", "any");
    map.insert("dynamic", "any");
    map.insert("DateTime", "Date");
    map.insert("DateTimeOffset", "Date");
    map
});

/// Generic containers that flatten to `T[]`.
const ARRAY_LIKE: &[&str] = &[
    "Array",
    "List",
    "IList",
    "IEnumerable",
    "ICollection",
    "IReadOnlyList",
    "IReadOnlyCollection",
    "HashSet",
    "ISet",
];

/// Generic containers that become index signatures.
const DICTIONARY_LIKE: &[&str] = &["Dictionary", "IDictionary", "IReadOnlyDictionary"];

/// Prints C# type references as TypeScript syntax.
///
/// Referentially transparent: the same type and options always produce
/// the same text, so callers may render lists by simple iteration.
///
/// # Examples
///
/// ```
/// use sharpts_emitter::{TypeEmitter, TypeEmitOptions};
/// use sharpts_model::CsType;
///
/// let emitter = TypeEmitter::new();
/// let options = TypeEmitOptions::default();
/// assert_eq!(emitter.print_type(&CsType::new("int"), &options), "number");
/// let list = CsType::generic("List", vec![CsType::new("string")]);
/// assert_eq!(emitter.print_type(&list, &options), "string[]");
/// ```
pub struct TypeEmitter;

impl TypeEmitter {
    pub fn new() -> Self {
        TypeEmitter
    }

    /// Render a type reference, including `| null` for nullable types.
    pub fn print_type(&self, ty: &CsType, options: &TypeEmitOptions) -> String {
        let text = self.print_type_ignoring_nullable(ty, options);
        if ty.is_nullable {
            format!("{text} | null")
        } else {
            text
        }
    }

    /// Render a type reference without its `| null` suffix. Used when the
    /// nullability is expressed elsewhere (an optional `?` member marker).
    pub fn print_type_ignoring_nullable(&self, ty: &CsType, options: &TypeEmitOptions) -> String {
        let suggested = self.print_inner(ty, options);
        match &options.mapper {
            Some(mapper) => mapper(ty, &suggested),
            None => suggested,
        }
    }

    fn print_inner(&self, ty: &CsType, options: &TypeEmitOptions) -> String {
        let name = ty.name.as_str();
        let args = &ty.generic_arguments;

        // `Nullable<T>` is the same surface as `T?`.
        if name == "Nullable" && args.len() == 1 {
            return format!("{} | null", self.print_type(&args[0], options));
        }

        if args.len() == 1 && ARRAY_LIKE.contains(&name) {
            let element = self.print_type(&args[0], options);
            // Union element types need parentheses: `(T | null)[]`.
            return if element.contains(" | ") {
                format!("({element})[]")
            } else {
                format!("{element}[]")
            };
        }

        if args.len() == 2 && DICTIONARY_LIKE.contains(&name) {
            let key = self.print_type(&args[0], options);
            let value = self.print_type(&args[1], options);
            return format!("{{ [key: {key}]: {value} }}");
        }

        if name == "Task" || name == "ValueTask" {
            return match args.len() {
                0 => "Promise<void>".to_string(),
                1 => format!("Promise<{}>", self.print_type(&args[0], options)),
                _ => self.print_reference(name, args, options),
            };
        }

        if (name == "Tuple" || name == "ValueTuple") && !args.is_empty() {
            let elements: Vec<String> = args.iter().map(|a| self.print_type(a, options)).collect();
            return format!("[{}]", elements.join(", "));
        }

        if args.is_empty()
            && let Some(&mapped) = BUILTIN_SCALARS.get(name)
        {
            return mapped.to_string();
        }

        // Unknown types pass through verbatim, keeping their arguments.
        self.print_reference(name, args, options)
    }

    fn print_reference(&self, name: &str, args: &[CsType], options: &TypeEmitOptions) -> String {
        if args.is_empty() {
            return name.to_string();
        }
        let rendered: Vec<String> = args.iter().map(|a| self.print_type(a, options)).collect();
        format!("{name}<{}>", rendered.join(", "))
    }
}

impl Default for TypeEmitter {
    fn default() -> Self {
        Self::new()
    }
}
