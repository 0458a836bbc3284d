//! End-to-end checks through the public API.

use sqlchain::prelude::*;
use sqlchain::{render_field_list, render_in_clause, render_keyed_clause, render_value};
use std::fmt;
use std::sync::Arc;
use std::thread;

struct Isbn(&'static str);

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ISBN-{}", self.0)
    }
}

#[test]
fn numeric_values_same_in_both_modes() {
    let values: Vec<Value> = vec![
        i8::MIN.into(),
        i16::MAX.into(),
        (-7i32).into(),
        i64::MIN.into(),
        u8::MAX.into(),
        u16::MAX.into(),
        u32::MAX.into(),
        u64::MAX.into(),
        usize::MIN.into(),
    ];
    for value in &values {
        let quoted = render_value(value, Quoting::Quoted).unwrap();
        let unquoted = render_value(value, Quoting::Unquoted).unwrap();
        assert_eq!(quoted, unquoted);
        assert!(!quoted.contains('\''));
    }
}

#[test]
fn text_quoted_exactly_once_unless_parenthesized() {
    for text in ["Kelly", "O Brien", "", "a,b", "x)"] {
        let quoted = render_value(&text.into(), Quoting::Quoted).unwrap();
        assert_eq!(quoted, format!("'{}'", text));
    }
    for text in ["(", "(SELECT 1)", "(a) OR (b)"] {
        assert_eq!(render_value(&text.into(), Quoting::Quoted).unwrap(), text);
        assert_eq!(render_value(&text.into(), Quoting::Unquoted).unwrap(), text);
    }
}

#[test]
fn custom_display_values_follow_text_rules() {
    let v = Value::display(Isbn("0131103628"));
    assert_eq!(
        render_value(&v, Quoting::Quoted).unwrap(),
        "'ISBN-0131103628'"
    );
    let sub = Value::display(
        SelectBuilder::new()
            .select(&["MAX(Price)"])
            .from("Stock.Product")
            .to_sql(),
    );
    assert_eq!(
        render_value(&sub, Quoting::Quoted).unwrap(),
        "'SELECT MAX(Price) FROM Stock.Product'"
    );
}

#[test]
fn keyed_clause_permutations_agree() {
    let entries = [(0usize, "a=1 AND"), (1, "b=2 OR"), (2, "c=3 AND"), (3, "d=4")];
    let orders: [[usize; 4]; 4] = [[0, 1, 2, 3], [3, 2, 1, 0], [2, 0, 3, 1], [1, 3, 0, 2]];

    let rendered: Vec<String> = orders
        .iter()
        .map(|order| {
            let set: FragmentSet<Value> = order.iter().map(|&i| entries[i]).collect();
            render_keyed_clause("WHERE", &set, false, Quoting::Unquoted).unwrap()
        })
        .collect();

    for sql in &rendered {
        assert_eq!(sql, " WHERE a=1 AND b=2 OR c=3 AND d=4");
    }
}

#[test]
fn separator_counts_for_lengths_0_1_n() {
    for n in 0..6usize {
        let names: Vec<String> = (0..n).map(|i| format!("col{}", i)).collect();
        let list = render_field_list("SELECT", false, &names);
        if n == 0 {
            assert_eq!(list, "");
        } else {
            assert_eq!(list.matches(',').count(), n - 1);
            assert!(!list.ends_with(','));
        }

        let values: Vec<Value> = (0..n as u32).map(Value::from).collect();
        let in_clause = render_in_clause("id", &values, Quoting::Quoted).unwrap();
        if n == 0 {
            assert_eq!(in_clause, "");
        } else {
            assert_eq!(in_clause.matches(',').count(), n - 1);
            assert!(in_clause.ends_with(')'));
        }
    }
}

#[test]
fn renderers_are_safe_to_share_across_threads() {
    let set: Arc<FragmentSet<Value>> = Arc::new(FragmentSet::from_seq([
        Value::from("'Mrs'"),
        Value::display(Isbn("1")),
        Value::from(3u8),
    ]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let set = Arc::clone(&set);
            thread::spawn(move || {
                render_keyed_clause("VALUES", &set, true, Quoting::Quoted).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), " VALUES('Mrs'),(ISBN-1),(3)");
    }
}

#[test]
fn strict_and_lenient_policies() {
    let values = [Value::from("a"), Value::from(false)];

    let strict = SelectBuilder::new()
        .select_all("t")
        .where_in("flag", values.clone());
    assert!(strict.build().unwrap_err().is_unsupported());

    let config = RenderConfig::from_toml_str("policy = \"lenient\"").unwrap();
    let lenient = SelectBuilder::with_config(config)
        .select_all("t")
        .where_in("flag", values);
    assert_eq!(lenient.build().unwrap(), "SELECT * FROM t WHERE flag IN('a')");
}

#[test]
fn full_statement_round() {
    let row: FragmentSet<Value> = FragmentSet::from_seq([
        Value::from("Mrs"),
        Value::from(Some("Susan")),
        Value::from(27u8),
    ]);
    let sql = InsertBuilder::new()
        .insert("Person.Contact")
        .fields(&["Title", "FirstName", "Age"])
        .values(&row)
        .returning(&["ContactID"])
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "INSERT INTO Person.Contact (Title,FirstName,Age) VALUES('Mrs','Susan',27) RETURNING ContactID"
    );

    let cond = ops::eq("ContactID", 1u32).unwrap();
    let sql = DeleteBuilder::new()
        .delete("Person.Contact")
        .where_(&cond)
        .build()
        .unwrap();
    assert_eq!(sql, "DELETE FROM Person.Contact WHERE ContactID=1");
}
