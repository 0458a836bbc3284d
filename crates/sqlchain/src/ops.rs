//! Condition helpers.
//!
//! Small functions that produce predicate text for `where_`, `and`, `or` or a
//! keyed WHERE set. Comparison values go through the value renderer with
//! quoting on, so text becomes `'text'` while integers stay bare.
//!
//! # Example
//! ```
//! use sqlchain::ops;
//!
//! assert_eq!(ops::eq("FirstName", "Kelly")?, "FirstName='Kelly'");
//! assert_eq!(ops::gte("TotalAmount", 21213i32)?, "TotalAmount>=21213");
//! assert_eq!(ops::and(ops::is_null("DeletedAt")), "AND DeletedAt IS NULL");
//! # Ok::<(), sqlchain::RenderError>(())
//! ```

use crate::error::RenderResult;
use crate::value::{Quoting, Value, render_value};
use std::fmt::Display;

fn compare(field: &str, op: &str, value: Value) -> RenderResult<String> {
    Ok(format!("{}{}{}", field, op, render_value(&value, Quoting::Quoted)?))
}

/// `field=value`
pub fn eq(field: &str, value: impl Into<Value>) -> RenderResult<String> {
    compare(field, "=", value.into())
}

/// `field!=value`
pub fn ne(field: &str, value: impl Into<Value>) -> RenderResult<String> {
    compare(field, "!=", value.into())
}

/// `field>value`
pub fn gt(field: &str, value: impl Into<Value>) -> RenderResult<String> {
    compare(field, ">", value.into())
}

/// `field<value`
pub fn lt(field: &str, value: impl Into<Value>) -> RenderResult<String> {
    compare(field, "<", value.into())
}

/// `field>=value`
pub fn gte(field: &str, value: impl Into<Value>) -> RenderResult<String> {
    compare(field, ">=", value.into())
}

/// `field<=value`
pub fn lte(field: &str, value: impl Into<Value>) -> RenderResult<String> {
    compare(field, "<=", value.into())
}

/// Equate a field to a subquery: `field=(subquery)`.
pub fn sub_query(field: &str, query: &impl Display) -> String {
    format!("{}=({})", field, query)
}

/// Prefix a condition with `AND` (for keyed WHERE sets).
pub fn and(cond: impl AsRef<str>) -> String {
    format!("AND {}", cond.as_ref())
}

/// Prefix a condition with `OR` (for keyed WHERE sets).
pub fn or(cond: impl AsRef<str>) -> String {
    format!("OR {}", cond.as_ref())
}

pub fn is_null(expr: impl AsRef<str>) -> String {
    format!("{} IS NULL", expr.as_ref())
}

pub fn is_not_null(expr: impl AsRef<str>) -> String {
    format!("{} IS NOT NULL", expr.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SelectBuilder;
    use crate::error::RenderError;

    #[test]
    fn comparisons() {
        assert_eq!(eq("FirstName", "Kelly").unwrap(), "FirstName='Kelly'");
        assert_eq!(ne("DueDate", "11/02/2020").unwrap(), "DueDate!='11/02/2020'");
        assert_eq!(gt("ContactID", 100i32).unwrap(), "ContactID>100");
        assert_eq!(lt("StoreID", 5u8).unwrap(), "StoreID<5");
        assert_eq!(gte("TotalAmount", 21213i64).unwrap(), "TotalAmount>=21213");
        assert_eq!(lte("StoreID", 100u64).unwrap(), "StoreID<=100");
    }

    #[test]
    fn comparison_with_parenthesized_text() {
        assert_eq!(
            eq("Price", "(SELECT MAX(Price) FROM Stock.Product)").unwrap(),
            "Price=(SELECT MAX(Price) FROM Stock.Product)"
        );
    }

    #[test]
    fn comparison_errors() {
        assert_eq!(eq("id", Value::null()).unwrap_err(), RenderError::NullReference);
        assert!(gt("ratio", 0.5f64).unwrap_err().is_unsupported());
    }

    #[test]
    fn sub_query_wraps_builder_text() {
        let inner = SelectBuilder::new().select(&["ContactID"]).from("Person.Contact");
        assert_eq!(
            sub_query("ContactID", &inner),
            "ContactID=(SELECT ContactID FROM Person.Contact)"
        );
    }

    #[test]
    fn connectives() {
        assert_eq!(and("Quantity=400"), "AND Quantity=400");
        assert_eq!(or(String::from("UnitPrice=300")), "OR UnitPrice=300");
        assert_eq!(is_null("DeletedAt"), "DeletedAt IS NULL");
        assert_eq!(is_not_null("Email"), "Email IS NOT NULL");
    }
}
