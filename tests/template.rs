// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use commitmoji::error::Error;
use commitmoji::services::resolver::load_builtin;
use commitmoji::services::template::{Template, TemplateValue, Values};
use proptest::prelude::*;

fn no_values() -> Values {
    Values::new()
}

// ─── Text coercion ───────────────────────────────────────────────────────────

#[test]
fn text_is_source_until_rendered() {
    let template = Template::new("Hello {name}");
    assert_eq!(template.to_string(), "Hello {name}");
    assert_eq!(template.as_str(), "Hello {name}");
    assert_eq!(String::from(template), "Hello {name}");
}

#[test]
fn placeholders_are_listed_once_in_order() {
    let template = Template::new("{b} {a} {b} {}{c}");
    assert_eq!(template.placeholders(), ["b", "a", "c"]);
}

// ─── render ──────────────────────────────────────────────────────────────────

#[test]
fn render_substitutes_every_occurrence() {
    let template = Template::new("{name} and {name} again");
    let out = template.render([("name", "Sam")]).unwrap();
    insta::assert_snapshot!(out, @"Sam and Sam again");
}

#[test]
fn render_is_repeatable_and_leaves_template_untouched() {
    let template = Template::new("Hello {name}");

    let first = template.render([("name", "Sam")]).unwrap();
    let second = template.render([("name", "Alex")]).unwrap();

    assert_eq!(first, "Hello Sam");
    assert_eq!(second, "Hello Alex");
    assert_eq!(template.as_str(), "Hello {name}");
}

#[test]
fn render_uses_defaults() {
    let template = Template::with_defaults("Hi {first} {last}", [("last", "Doe")]);
    let out = template.render([("first", "Jane")]).unwrap();
    assert_eq!(out, "Hi Jane Doe");
}

#[test]
fn explicit_values_beat_defaults() {
    let template = Template::with_defaults("{greeting}, {name}", [("greeting", "Hello"), ("name", "you")]);
    let out = template.render([("name", "Sam")]).unwrap();
    assert_eq!(out, "Hello, Sam");
}

#[test]
fn render_fails_on_missing_values() {
    let template = Template::new("{a} {b} {a} {c}");

    let err = template.render([("b", "x")]).unwrap_err();
    match err {
        Error::MissingPlaceholder { names } => assert_eq!(names, ["a", "c"]),
        other => panic!("expected MissingPlaceholder, got {other:?}"),
    }
}

#[test]
fn missing_placeholder_message_names_them() {
    let err = Template::new("{type}: {subject}").render(no_values()).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Missing value for placeholder(s): type, subject");
}

#[test]
fn render_without_placeholders_needs_no_values() {
    let template = Template::new("plain text");
    assert_eq!(template.render(no_values()).unwrap(), "plain text");
}

#[test]
fn scalar_values_use_canonical_text() {
    let template = Template::new("{int} {float} {whole} {flag}");
    let values: Values = [
        ("int".to_owned(), TemplateValue::from(42)),
        ("float".to_owned(), TemplateValue::from(1.5)),
        ("whole".to_owned(), TemplateValue::from(2.0)),
        ("flag".to_owned(), TemplateValue::from(true)),
    ]
    .into_iter()
    .collect();

    assert_eq!(template.render(&values).unwrap(), "42 1.5 2 true");
}

#[test]
fn non_finite_floats_have_fixed_text() {
    let template = Template::new("{nan} {inf} {neg}");
    let values: Values = [
        ("nan".to_owned(), TemplateValue::from(f64::NAN)),
        ("inf".to_owned(), TemplateValue::from(f64::INFINITY)),
        ("neg".to_owned(), TemplateValue::from(f64::NEG_INFINITY)),
    ]
    .into_iter()
    .collect();

    assert_eq!(template.render(&values).unwrap(), "NaN Infinity -Infinity");
}

#[test]
fn braces_that_are_not_placeholders_stay() {
    let template = Template::new("{} {{x}} {a{b}");
    let out = template.render([("x", "1"), ("b", "2")]).unwrap();
    assert_eq!(out, "{} {1} {a2");
}

#[test]
fn substituted_values_are_not_rescanned() {
    let template = Template::new("{a}");
    let out = template.render([("a", "{b}")]).unwrap();
    assert_eq!(out, "{b}");
}

// ─── partial_render ──────────────────────────────────────────────────────────

#[test]
fn partial_render_keeps_open_placeholders_and_their_defaults() {
    let template = Template::with_defaults(
        "My name is {first_name} {last_name}",
        [("first_name", "Unknown"), ("last_name", "Unknown")],
    );

    let partial = template.partial_render([("first_name", "Sam")]);

    assert_eq!(partial.to_string(), "My name is Sam {last_name}");
    assert_eq!(partial.defaults().len(), 1);
    assert_eq!(
        partial.defaults().get("last_name"),
        Some(&TemplateValue::from("Unknown"))
    );
    // the original is unchanged
    assert_eq!(template.as_str(), "My name is {first_name} {last_name}");
    assert_eq!(template.defaults().len(), 2);
}

#[test]
fn partial_render_leaves_defaulted_placeholders_open() {
    let template = Template::with_defaults("{a}-{b}-{c}", [("b", "B")]);
    let partial = template.partial_render([("a", "A")]);

    assert_eq!(partial.as_str(), "A-{b}-{c}");
    assert_eq!(partial.defaults().get("b"), Some(&TemplateValue::from("B")));
    assert_eq!(partial.defaults().len(), 1);
}

#[test]
fn partial_then_render_uses_carried_defaults() {
    let template = Template::with_defaults(
        "My name is {first_name} {last_name}",
        [("first_name", "Unknown"), ("last_name", "Unknown")],
    );

    let partial = template.partial_render([("first_name", "Sam")]);
    let out = partial.render(no_values()).unwrap();

    insta::assert_snapshot!(out, @"My name is Sam Unknown");
    assert_eq!(
        template.render(no_values()).unwrap(),
        "My name is Unknown Unknown"
    );
    assert_eq!(template.defaults().len(), 2);
    assert_eq!(
        template.defaults().get("first_name"),
        Some(&TemplateValue::from("Unknown"))
    );
}

#[test]
fn partial_then_render_completes() {
    let template = Template::new("{emoji} {type}: {subject}");
    let partial = template.partial_render([("emoji", "✨"), ("type", "feat")]);

    insta::assert_snapshot!(partial.as_str(), @"✨ feat: {subject}");
    let out = partial.render([("subject", "add search")]).unwrap();
    insta::assert_snapshot!(out, @"✨ feat: add search");
}

#[test]
fn partial_render_explicit_values_beat_defaults() {
    let template = Template::with_defaults("{x} {y}", [("x", "default")]);
    let partial = template.partial_render([("x", "given")]);
    assert_eq!(partial.as_str(), "given {y}");
    assert!(partial.defaults().is_empty());
}

#[test]
fn partial_render_keeps_defaults_for_absent_placeholders() {
    let template = Template::with_defaults("{a}", [("unused", "u")]);
    let partial = template.partial_render([("a", "1")]);
    assert_eq!(partial.as_str(), "1");
    assert!(partial.defaults().contains_key("unused"));
}

// ─── Commit types as values ──────────────────────────────────────────────────

#[test]
fn renders_commit_type_values() {
    let config = load_builtin().unwrap();
    let feat = config.find_type_by_name("feat").unwrap();

    let template = Template::new("{emoji} {type}({code}) {title} [{semver}] #{index} changelog={changelog}");
    let out = template.render(&feat.template_values()).unwrap();
    insta::assert_snapshot!(out, @"✨ feat(:sparkles:) Features [minor] #0 changelog=true");
}

#[test]
fn renders_alias_values() {
    let config = load_builtin().unwrap();
    let alias = config.find_alias_by_name("dependencies").unwrap();

    let out = Template::new("{emoji} {name} -> {type}")
        .render(&alias.template_values())
        .unwrap();
    assert_eq!(out, "➕ dependencies -> build");
}

// ─── Proptest: never panics ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn render_never_panics(source in ".*", value in ".*") {
        let template = Template::new(source.clone());
        let _ = template.render([("name", value.as_str())]);
        let partial = template.partial_render([("name", value.as_str())]);
        prop_assert_eq!(template.as_str(), source.as_str());
        let _ = partial.render(no_values());
    }

    #[test]
    fn full_values_always_render(names in proptest::collection::vec("[a-z]{1,8}", 1..5)) {
        let source = names.iter().map(|n| format!("{{{n}}}")).collect::<Vec<_>>().join(" ");
        let template = Template::new(source);
        let values: Vec<(String, String)> = names.iter().map(|n| (n.clone(), n.to_uppercase())).collect();

        let out = template.render(values).unwrap();
        prop_assert_eq!(out, names.iter().map(|n| n.to_uppercase()).collect::<Vec<_>>().join(" "));
    }
}
