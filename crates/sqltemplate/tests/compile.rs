use sqltemplate::prelude::*;
use sqltemplate::{SKIP_MARKER, StandardEscaper, args_from_json};

fn build(template: &str, args: &[Arg]) -> TemplateResult<String> {
    Compiler::new(MysqlEscaper).compile(template, args)
}

#[test]
fn select_with_int_and_escaped_text() {
    let sql = build(
        "SELECT * FROM users WHERE id = ?d AND name = ?",
        &args![5, "O'Brien"],
    )
    .unwrap();
    assert_eq!(sql, r"SELECT * FROM users WHERE id = 5 AND name = 'O\'Brien'");
}

#[test]
fn quote_never_terminates_literal_early() {
    for input in ["'", "a' OR '1'='1", "\\'", "''; DROP TABLE users; --"] {
        let sql = build("SELECT ?", &args![input]).unwrap();
        let body = &sql["SELECT '".len()..sql.len() - 1];
        // Every quote in the body is preceded by an escaping backslash.
        let bytes = body.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                b'\'' => panic!("unescaped quote in {sql}"),
                _ => i += 1,
            }
        }
    }
}

#[test]
fn standard_escaper_doubles_quotes() {
    let sql = Compiler::new(StandardEscaper)
        .compile("SELECT ?", &args!["a' OR '1'='1"])
        .unwrap();
    assert_eq!(sql, "SELECT 'a'' OR ''1''=''1'");
}

#[test]
fn block_elision_examples() {
    assert_eq!(
        build("SELECT * FROM users {WHERE id = ?d}", &[skip()]).unwrap(),
        "SELECT * FROM users "
    );
    assert_eq!(
        build("SELECT * FROM users {WHERE id = ?d}", &args![5]).unwrap(),
        "SELECT * FROM users WHERE id = 5"
    );
}

#[test]
fn array_and_ident_examples() {
    assert_eq!(build("?a", &[Arg::list([1, 2, 3])]).unwrap(), "1, 2, 3");
    assert_eq!(
        build(
            "?a",
            &[Arg::map([("name", Arg::from("x")), ("age", Arg::from(5))])]
        )
        .unwrap(),
        "`name` = 'x', `age` = 5"
    );
    assert_eq!(build("?#", &args![vec!["login", "id"]]).unwrap(), "`login`, `id`");
}

#[test]
fn matching_counts_succeed_and_others_fail() {
    let template = "SELECT ?, ?d, ?f, ?# FROM t";
    let full = args!["a", 1, 1.5, "c"];
    assert!(build(template, &full).is_ok());
    for n in [0, 1, 2, 3, 5] {
        let args: Vec<Arg> = (0..n).map(|i| Arg::from(i as i64)).collect();
        let err = build(template, &args).unwrap_err();
        assert!(err.is_mismatch(), "{n} args: {err}");
    }
}

#[test]
fn json_arguments() {
    let args = args_from_json(serde_json::json!([
        ["name", "email"],
        {"name": "Jack", "active": true},
        7
    ]))
    .unwrap();
    let sql = build("UPDATE users SET ?a WHERE id = ?d RETURNING ?#", &[
        args[1].clone(),
        args[2].clone(),
        args[0].clone(),
    ])
    .unwrap();
    assert_eq!(
        sql,
        "UPDATE users SET `name` = 'Jack', `active` = 1 WHERE id = 7 RETURNING `name`, `email`"
    );
}

#[test]
fn error_messages_are_descriptive() {
    let err = build("SELECT ?", &[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Template mismatch: 1 placeholder(s) but 0 argument(s)"
    );
    let err = build("SELECT ?a", &args![1]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported type at placeholder #1 (?a): int"
    );
}

#[test]
fn skip_without_block_keeps_marker_in_sql() {
    let sql = build("SELECT * FROM users WHERE id = ?d", &[skip()]).unwrap();
    assert_eq!(sql, "SELECT * FROM users WHERE id = __--!!--__");
    assert!(sql.ends_with(SKIP_MARKER));
}
