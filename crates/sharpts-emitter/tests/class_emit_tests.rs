//! Class emission pipeline tests: ordering, filtering, option
//! inheritance and per-class overrides.

use std::sync::Arc;

use sharpts_emitter::{
    ClassEmitOptions, ClassEmitOptionsBase, DeclarationEmitter, PerClassEmitOptions,
};
use sharpts_model::{
    CsClass, CsField, CsProperty, CsType, CsTypeConstraint, CsTypeParameter,
};

fn string_property(name: &str) -> CsProperty {
    CsProperty::new(name, CsType::new("string"))
}

fn emit(classes: &[CsClass], options: &ClassEmitOptions) -> String {
    let mut emitter = DeclarationEmitter::new();
    emitter.emit_classes(classes, options);
    emitter.finish()
}

/// The two sibling classes of the Class.case fixture: full emission of
/// the first, members in source order, before the second begins.
#[test]
fn test_sibling_classes_preserve_declaration_order() {
    let mut before = CsClass::new("BeforeClass");
    before.properties.push(string_property("MyProperty"));
    before.fields.push(CsField::new("foo", CsType::new("string")));

    let mut other = CsClass::new("OtherClass");
    other.properties.push(string_property("MyProperty"));

    let output = emit(&[before, other], &ClassEmitOptions::default());
    let expected = concat!(
        "class BeforeClass {\n",
        "    MyProperty: string;\n",
        "    foo: string;\n",
        "}\n",
        "class OtherClass {\n",
        "    MyProperty: string;\n",
        "}\n",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_emit_classes_equals_concatenated_emit_class() {
    let mut first = CsClass::new("First");
    first.properties.push(string_property("A"));
    let mut second = CsClass::new("Second");
    second.properties.push(string_property("B"));
    let options = ClassEmitOptions::default();

    let batch = emit(&[first.clone(), second.clone()], &options);

    let mut one = DeclarationEmitter::new();
    one.emit_class(&first, &options);
    let mut two = DeclarationEmitter::new();
    two.emit_class(&second, &options);

    assert_eq!(batch, format!("{}{}", one.output(), two.output()));
}

#[test]
fn test_emit_class_is_deterministic_across_sinks() {
    let mut class = CsClass::new("Stable");
    class.properties.push(string_property("Value"));
    class.classes.push({
        let mut nested = CsClass::new("Inner");
        nested.properties.push(string_property("Deep"));
        nested
    });
    let options = ClassEmitOptions::default();

    let mut a = DeclarationEmitter::new();
    a.emit_class(&class, &options);
    let mut b = DeclarationEmitter::new();
    b.emit_class(&class, &options);

    assert_eq!(a.finish(), b.finish());
}

#[test]
fn test_empty_class_emits_empty_body() {
    let output = emit(&[CsClass::new("Empty")], &ClassEmitOptions::default());
    assert_eq!(output, "class Empty {\n}\n");
}

/// The MainClass fixture: generic parameter with a `new()` constraint,
/// generic property types, and a fully nested SubClass emission.
#[test]
fn test_generic_class_with_constraint_and_nested_class() {
    let mut main = CsClass::new("MainClass");
    main.generic_parameters.push(CsTypeParameter::constrained(
        "Foo",
        vec![CsTypeConstraint::DefaultConstructor],
    ));
    main.properties.push(string_property("MyProperty"));
    main.properties.push(CsProperty::new(
        "BlahProperty",
        CsType::generic(
            "SomeStuff",
            vec![CsType::new("OtherStuff"), CsType::new("RegularStuff")],
        ),
    ));
    main.properties.push(CsProperty::new(
        "OtherBlahProperty",
        CsType::generic("List", vec![CsType::new("OtherStuff")]),
    ));

    let mut sub = CsClass::new("SubClass");
    sub.properties.push(string_property("MyProperty"));
    main.classes.push(sub);

    let output = emit(&[main], &ClassEmitOptions::default());
    let expected = concat!(
        "class MainClass<Foo extends new () => Foo> {\n",
        "    MyProperty: string;\n",
        "    BlahProperty: SomeStuff<OtherStuff, RegularStuff>;\n",
        "    OtherBlahProperty: OtherStuff[];\n",
        "    class SubClass {\n",
        "        MyProperty: string;\n",
        "    }\n",
        "}\n",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_class_heritage_clauses() {
    let mut class = CsClass::new("Derived");
    class.inherits_from = Some(CsType::new("BaseClass"));
    class.implements.push(CsType::new("IFirst"));
    class.implements.push(CsType::new("ISecond"));

    let output = emit(&[class], &ClassEmitOptions::default());
    assert_eq!(
        output,
        "class Derived extends BaseClass implements IFirst, ISecond {\n}\n"
    );
}

#[test]
fn test_filter_exclusion_is_total() {
    let mut parent = CsClass::new("Parent");
    let mut nested = CsClass::new("Nested");
    nested.properties.push(string_property("WouldEmit"));
    parent.classes.push(nested);

    let options = ClassEmitOptions {
        base: ClassEmitOptionsBase {
            filter: Some(Arc::new(|class: &CsClass| class.name != "Parent")),
            ..Default::default()
        },
        ..Default::default()
    };

    // The nested class would pass the filter in isolation, but exclusion
    // of the parent suppresses the whole subtree.
    let output = emit(&[parent], &options);
    assert_eq!(output, "");
}

#[test]
fn test_filter_is_inherited_by_nested_classes() {
    let mut outer = CsClass::new("Outer");
    outer.classes.push(CsClass::new("Hidden"));
    outer.classes.push(CsClass::new("Visible"));

    let options = ClassEmitOptions {
        base: ClassEmitOptionsBase {
            filter: Some(Arc::new(|class: &CsClass| class.name != "Hidden")),
            ..Default::default()
        },
        ..Default::default()
    };

    let output = emit(&[outer], &options);
    assert!(output.contains("class Visible"), "output: {output}");
    assert!(!output.contains("class Hidden"), "output: {output}");
}

#[test]
fn test_per_class_override_can_replace_inherited_filter() {
    let mut outer = CsClass::new("Outer");
    outer.classes.push(CsClass::new("Hidden"));

    let options = ClassEmitOptions {
        base: ClassEmitOptionsBase {
            filter: Some(Arc::new(|class: &CsClass| class.name != "Hidden")),
            ..Default::default()
        },
        per_class_emit_options: Some(Arc::new(|class: &CsClass| {
            if class.name == "Hidden" {
                // Override the inherited filter for this class only.
                PerClassEmitOptions {
                    base: ClassEmitOptionsBase {
                        filter: Some(Arc::new(|_: &CsClass| true)),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            } else {
                PerClassEmitOptions::default()
            }
        })),
    };

    let output = emit(&[outer], &options);
    assert!(output.contains("class Hidden"), "output: {output}");
}

#[test]
fn test_empty_per_class_override_is_a_noop() {
    let mut class = CsClass::new("Plain");
    class.properties.push(string_property("Value"));

    let without_factory = emit(&[class.clone()], &ClassEmitOptions::default());
    let with_factory = emit(
        &[class],
        &ClassEmitOptions {
            per_class_emit_options: Some(Arc::new(|_: &CsClass| PerClassEmitOptions::default())),
            ..Default::default()
        },
    );

    assert_eq!(without_factory, with_factory);
}

#[test]
fn test_per_class_declare_applies_to_that_class_only() {
    let special = CsClass::new("Special");
    let other = CsClass::new("Other");

    let options = ClassEmitOptions {
        per_class_emit_options: Some(Arc::new(|class: &CsClass| {
            if class.name == "Special" {
                PerClassEmitOptions {
                    base: ClassEmitOptionsBase {
                        declare: Some(true),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            } else {
                PerClassEmitOptions::default()
            }
        })),
        ..Default::default()
    };

    let output = emit(&[special, other], &options);
    assert_eq!(
        output,
        "declare class Special {\n}\nclass Other {\n}\n"
    );
}

#[test]
fn test_per_class_rename_does_not_touch_the_model() {
    let class = CsClass::new("Internal");
    let options = ClassEmitOptions {
        per_class_emit_options: Some(Arc::new(|_: &CsClass| PerClassEmitOptions {
            name: Some("PublicName".to_string()),
            ..Default::default()
        })),
        ..Default::default()
    };

    let output = emit(&[class.clone()], &options);
    assert_eq!(output, "class PublicName {\n}\n");
    assert_eq!(class.name, "Internal");
}

#[test]
fn test_base_options_are_inherited_by_nested_classes() {
    let mut outer = CsClass::new("Outer");
    outer.classes.push(CsClass::new("Inner"));

    let options = ClassEmitOptions {
        base: ClassEmitOptionsBase {
            declare: Some(true),
            ..Default::default()
        },
        ..Default::default()
    };

    let output = emit(&[outer], &options);
    let expected = concat!(
        "declare class Outer {\n",
        "    declare class Inner {\n",
        "    }\n",
        "}\n",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_sibling_overrides_do_not_leak() {
    // Renaming one sibling must not affect the other: effective options
    // are resolved fresh per class.
    let first = CsClass::new("First");
    let second = CsClass::new("Second");

    let options = ClassEmitOptions {
        per_class_emit_options: Some(Arc::new(|class: &CsClass| {
            if class.name == "First" {
                PerClassEmitOptions {
                    base: ClassEmitOptionsBase {
                        declare: Some(true),
                        ..Default::default()
                    },
                    name: Some("Renamed".to_string()),
                }
            } else {
                PerClassEmitOptions::default()
            }
        })),
        ..Default::default()
    };

    let output = emit(&[first, second], &options);
    assert_eq!(output, "declare class Renamed {\n}\nclass Second {\n}\n");
}
