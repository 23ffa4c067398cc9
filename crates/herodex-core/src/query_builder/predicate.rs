//! Filter predicates

use super::column::Column;
use super::value::Value;

/// Comparison operator between a column and a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}

/// A boolean filter over one or more tables
///
/// SQL three-valued logic applies: a comparison against a NULL column is
/// never true, so rows with an absent age match neither `gt` nor `range` nor
/// `outside_range`.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `column <op> literal`
    Compare {
        column: Column,
        op: CompareOp,
        value: Value,
    },
    /// `left = right`, typically a foreign key against an identity
    ColumnsEqual { left: Column, right: Column },
    IsNull(Column),
    IsNotNull(Column),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn compare(column: Column, op: CompareOp, value: impl Into<Value>) -> Self {
        Predicate::Compare {
            column,
            op,
            value: value.into(),
        }
    }

    /// Equality; comparing against NULL renders `IS NULL`
    pub fn eq(column: Column, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Eq, value)
    }

    /// Inequality; comparing against NULL renders `IS NOT NULL`
    pub fn ne(column: Column, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Ne, value)
    }

    pub fn lt(column: Column, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Lt, value)
    }

    pub fn le(column: Column, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Le, value)
    }

    /// Strictly greater than
    pub fn gt(column: Column, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Gt, value)
    }

    pub fn ge(column: Column, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Ge, value)
    }

    pub fn is_null(column: Column) -> Self {
        Predicate::IsNull(column)
    }

    pub fn is_not_null(column: Column) -> Self {
        Predicate::IsNotNull(column)
    }

    pub fn columns_equal(left: Column, right: Column) -> Self {
        Predicate::ColumnsEqual { left, right }
    }

    /// Inclusive range: `column >= min AND column <= max`
    pub fn range(column: Column, min: impl Into<Value>, max: impl Into<Value>) -> Self {
        Predicate::And(vec![Self::ge(column, min), Self::le(column, max)])
    }

    /// Exclusion range: `column < min OR column > max`
    ///
    /// Bounds are strict, so a value equal to `min` or `max` never matches.
    /// [`Predicate::range`] does match it.
    pub fn outside_range(column: Column, min: impl Into<Value>, max: impl Into<Value>) -> Self {
        Predicate::Or(vec![Self::lt(column, min), Self::gt(column, max)])
    }

    /// Conjunction with another predicate, flattening nested ANDs
    pub fn and(self, other: Predicate) -> Self {
        match self {
            Predicate::And(mut parts) => {
                parts.push(other);
                Predicate::And(parts)
            }
            first => Predicate::And(vec![first, other]),
        }
    }

    /// Disjunction with another predicate, flattening nested ORs
    pub fn or(self, other: Predicate) -> Self {
        match self {
            Predicate::Or(mut parts) => {
                parts.push(other);
                Predicate::Or(parts)
            }
            first => Predicate::Or(vec![first, other]),
        }
    }

    /// Render into `sql`, appending bound literals to `params` in order
    pub fn render(&self, sql: &mut String, params: &mut Vec<Value>) {
        match self {
            Predicate::Compare { column, op, value } if value.is_null() => {
                sql.push_str(&column.qualified());
                match op {
                    CompareOp::Ne => sql.push_str(" IS NOT NULL"),
                    // Ordering against NULL is never true; keep the SQL honest
                    CompareOp::Eq => sql.push_str(" IS NULL"),
                    other => {
                        sql.push(' ');
                        sql.push_str(other.as_sql());
                        sql.push_str(" NULL");
                    }
                }
            }
            Predicate::Compare { column, op, value } => {
                sql.push_str(&column.qualified());
                sql.push(' ');
                sql.push_str(op.as_sql());
                sql.push_str(" ?");
                params.push(value.clone());
            }
            Predicate::ColumnsEqual { left, right } => {
                sql.push_str(&format!("{} = {}", left, right));
            }
            Predicate::IsNull(column) => {
                sql.push_str(&format!("{} IS NULL", column));
            }
            Predicate::IsNotNull(column) => {
                sql.push_str(&format!("{} IS NOT NULL", column));
            }
            Predicate::And(parts) => render_group(parts, " AND ", "1", sql, params),
            Predicate::Or(parts) => render_group(parts, " OR ", "0", sql, params),
        }
    }
}

fn render_group(
    parts: &[Predicate],
    separator: &str,
    empty: &str,
    sql: &mut String,
    params: &mut Vec<Value>,
) {
    if parts.is_empty() {
        sql.push_str(empty);
        return;
    }
    sql.push('(');
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            sql.push_str(separator);
        }
        part.render(sql, params);
    }
    sql.push(')');
}
