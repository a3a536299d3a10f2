mod support;

use oslopolicy2rego::generator::rego::HEADER;
use oslopolicy2rego::ErrorKind;

struct Case {
    description: &'static str,
    input: &'static str,
    want: &'static [&'static str],
}

const ALWAYS_TRUE: &[&str] = &["allow {\n    action_name = \"secrets:get\"\n    true\n}"];

#[test]
fn translation_successes() {
    let cases = [
        Case {
            description: "one rule and one action",
            input: r#"{"admin": "role:admin", "secrets:get": "rule:admin"}"#,
            want: &[
                "admin {\n    credentials.roles[_] = \"admin\"\n}",
                "allow {\n    action_name = \"secrets:get\"\n    admin\n}",
            ],
        },
        Case {
            description: "always false",
            input: r#"{"secrets:get": "!"}"#,
            want: &["allow {\n    action_name = \"secrets:get\"\n    false\n}"],
        },
        Case {
            description: "not statement",
            input: r#"{"secrets:get": "not rule:admin"}"#,
            want: &["allow {\n    action_name = \"secrets:get\"\n    not admin\n}"],
        },
        Case {
            description: "always true from empty string",
            input: r#"{"secrets:get": ""}"#,
            want: ALWAYS_TRUE,
        },
        Case {
            description: "always true from empty list",
            input: r#"{"secrets:get": []}"#,
            want: ALWAYS_TRUE,
        },
        Case {
            description: "always true from @",
            input: r#"{"secrets:get": "@"}"#,
            want: ALWAYS_TRUE,
        },
        Case {
            description: "multiple assertions with and",
            input: r#"{"secrets:get": "rule:admin and rule:creator and rule:reader and not rule:audit"}"#,
            want: &["allow {\n    action_name = \"secrets:get\"\n    admin\n    creator\n    reader\n    not audit\n}"],
        },
        Case {
            description: "multiple rules with or",
            input: r#"{"secrets:get": "rule:admin or rule:creator or rule:reader"}"#,
            want: &[
                "allow {\n    action_name = \"secrets:get\"\n    admin\n}",
                "allow {\n    action_name = \"secrets:get\"\n    creator\n}",
                "allow {\n    action_name = \"secrets:get\"\n    reader\n}",
            ],
        },
        Case {
            description: "yaml input",
            input: "admin: role:admin\nsecrets:get: rule:admin\n",
            want: &[
                "admin {\n    credentials.roles[_] = \"admin\"\n}",
                "allow {\n    action_name = \"secrets:get\"\n    admin\n}",
            ],
        },
    ];

    for case in cases {
        let got = oslopolicy2rego::translate(case.input)
            .unwrap_or_else(|e| panic!("{}: unexpected error {e}", case.description));
        assert!(
            got.starts_with(HEADER),
            "{}: header missing, got:\n{got}",
            case.description
        );
        let blocks = support::blocks(&got);
        assert_eq!(blocks.len(), case.want.len(), "{}: got:\n{got}", case.description);
        for wanted in case.want {
            assert!(
                blocks.iter().any(|block| block == wanted),
                "{}: missing block:\n{wanted}\ngot:\n{got}",
                case.description
            );
        }
    }
}

#[test]
fn translation_errors() {
    let cases = [
        (
            "invalidly formatted input",
            "{\n  \"admin\": \"role:admin\",\n  \"secrets:get\": \"rule:admin\"\n",
            ErrorKind::DocumentParse,
        ),
        ("list with items", r#"{"secrets:get": [1, 2, 3]}"#, ErrorKind::InvalidExpression),
        ("numeric value", r#"{"secrets:get": 1}"#, ErrorKind::InvalidExpression),
        ("null value", r#"{"secrets:get": null}"#, ErrorKind::InvalidExpression),
        ("empty map", r#"{"secrets:get": {}}"#, ErrorKind::InvalidExpression),
        (
            "nested map",
            r#"{"secrets:get": {"this map": "shouldn't work"}}"#,
            ErrorKind::InvalidExpression,
        ),
        ("invalid value", r#"{"secrets:get": "aljksdfklasdf"}"#, ErrorKind::InvalidExpression),
        ("missing right operand", r#"{"secrets:get": "badtoken:"}"#, ErrorKind::MalformedComparison),
        ("missing left operand", r#"{"secrets:get": ":admin"}"#, ErrorKind::MalformedComparison),
        (
            "unterminated target reference",
            r#"{"secrets:get": "project_id:%(project_id"}"#,
            ErrorKind::UnmatchedTargetReference,
        ),
        (
            "error deep inside a chain",
            r#"{"admin": "role:admin", "secrets:get": "rule:admin or not user_id:%(user_id) and @"}"#,
            ErrorKind::UnmatchedTargetReference,
        ),
    ];

    for (description, input, kind) in cases {
        let err = oslopolicy2rego::translate(input)
            .expect_err(&format!("{description}: translation should fail"));
        assert_eq!(err.kind(), kind, "{description}: {err}");
    }
}

#[test]
fn fixtures_translate_deterministically() {
    for fixture in ["barbican", "keystone"] {
        let first = support::translate_fixture(fixture);
        let second = support::translate_fixture(fixture);
        assert_eq!(first, second, "{fixture} output should be stable");
    }
}
