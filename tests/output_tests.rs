// tests/output_tests.rs

use graphql_insights::ast::Directive;
use graphql_insights::{parse, render, to_json, to_json_pretty};

// ============================================================================
// Outline rendering
// ============================================================================

#[test]
fn test_render_simple_query() {
    let query = parse(r#"query GetUser { user(id: "123") { name } }"#).unwrap();
    let expected = "\
Query: GetUser
  Field: user
    Arg: id = 123
    Field: name
";
    assert_eq!(render(&query), expected);
}

#[test]
fn test_render_directives_and_nesting() {
    let query = parse(
        r#"query GetUser @persist @trace {
            user(id: "123") @cache(ttl: "300") {
                name
                friends { name }
            }
        }"#,
    )
    .unwrap();

    let expected = "\
Query: GetUser
  Directive: @persist
  Directive: @trace
  Field: user
    Arg: id = 123
    Directive: @cache
      Arg: ttl = 300
    Field: name
    Field: friends
      Field: name
";
    assert_eq!(render(&query), expected);
}

#[test]
fn test_render_field_subtree() {
    let query = parse(r#"query Q { user(id: "1") { name } }"#).unwrap();
    assert_eq!(
        render(&query.selection_set[0]),
        "Field: user\n  Arg: id = 1\n  Field: name\n"
    );
}

#[test]
fn test_render_directive_node() {
    let mut directive = Directive::new("cache");
    directive.arguments.insert("ttl".to_string(), "300".to_string());
    directive.arguments.insert("scope".to_string(), "private".to_string());
    assert_eq!(
        render(&directive),
        "Directive: cache\n  Arg: ttl = 300\n  Arg: scope = private\n"
    );
}

#[test]
fn test_render_arguments_in_source_order() {
    let a = parse(r#"query Q { f @d(b: "2" a: "1") }"#).unwrap();
    let b = parse(r#"query Q { f @d(a: "1" b: "2") }"#).unwrap();

    assert_eq!(
        render(&a),
        "Query: Q\n  Field: f\n    Directive: @d\n      Arg: b = 2\n      Arg: a = 1\n"
    );
    assert_ne!(render(&a), render(&b));
}

#[test]
fn test_render_is_deterministic() {
    let text = r#"query Q @x(k: "v" j: "w") { a(id: "1") @y { b c { d } } e }"#;
    let first = render(&parse(text).unwrap());
    for _ in 0..10 {
        assert_eq!(render(&parse(text).unwrap()), first);
    }
}

#[test]
fn test_rendered_output_is_not_query_syntax() {
    let query = parse("query Q { a }").unwrap();
    assert!(parse(&render(&query)).is_err());
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_to_json() {
    let query = parse(r#"query Q @p { a(id: "1") @c(t: "2") }"#).unwrap();
    let value: serde_json::Value = serde_json::from_str(&to_json(&query).unwrap()).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "name": "Q",
            "directives": [{"name": "p", "arguments": {}}],
            "selection_set": [{
                "name": "a",
                "arguments": {"id": "1"},
                "directives": [{"name": "c", "arguments": {"t": "2"}}],
                "selection_set": []
            }]
        })
    );
}

#[test]
fn test_to_json_pretty_is_indented() {
    let query = parse("query Q { a }").unwrap();
    let json = to_json_pretty(&query).unwrap();
    assert!(json.starts_with("{\n  \"name\": \"Q\""));
}
