//! SELECT statements with joins, ordering and pagination

use super::column::Column;
use super::predicate::Predicate;
use super::value::Value;
use crate::model::Entity;

/// How a joined table combines with the rows already selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// Only rows with a match on both sides
    Inner,
    /// Every left row; the right side is NULL when unmatched
    LeftOuter,
}

impl JoinKind {
    fn as_sql(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::LeftOuter => "LEFT OUTER JOIN",
        }
    }
}

/// A joined table and its equality condition
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: &'static str,
    pub on: Predicate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: Column,
    pub order: SortOrder,
}

/// A SELECT over one entity table, optionally joined with others
///
/// The projection is the concatenation of each participating entity's
/// column list, in join order, so row readers can decode entity `n` at a
/// fixed offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    table: &'static str,
    columns: Vec<Column>,
    joins: Vec<Join>,
    filter: Option<Predicate>,
    order_by: Vec<OrderBy>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Select {
    /// Select every column of `E`
    pub fn from<E: Entity>() -> Self {
        Self {
            table: E::TABLE,
            columns: E::COLUMNS.to_vec(),
            joins: Vec::new(),
            filter: None,
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Inner join `E` on `left = right`, appending its columns to the projection
    pub fn join<E: Entity>(self, left: Column, right: Column) -> Self {
        self.push_join::<E>(JoinKind::Inner, left, right)
    }

    /// Left outer join `E` on `left = right`, appending its columns to the projection
    pub fn left_join<E: Entity>(self, left: Column, right: Column) -> Self {
        self.push_join::<E>(JoinKind::LeftOuter, left, right)
    }

    fn push_join<E: Entity>(mut self, kind: JoinKind, left: Column, right: Column) -> Self {
        self.joins.push(Join {
            kind,
            table: E::TABLE,
            on: Predicate::columns_equal(left, right),
        });
        self.columns.extend_from_slice(E::COLUMNS);
        self
    }

    /// Add a filter; repeated calls AND together
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => existing.and(predicate),
            None => predicate,
        });
        self
    }

    pub fn order_by(mut self, column: Column, order: SortOrder) -> Self {
        self.order_by.push(OrderBy { column, order });
        self
    }

    /// Cap the number of rows returned
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skip rows before applying the limit
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Projected columns, in decode order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Render SQL text and its parameters in placeholder order
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let mut params = Vec::new();
        let projection = self
            .columns
            .iter()
            .map(Column::qualified)
            .collect::<Vec<_>>()
            .join(", ");

        let mut sql = format!("SELECT {} FROM {}", projection, self.table);

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join.kind.as_sql());
            sql.push(' ');
            sql.push_str(join.table);
            sql.push_str(" ON ");
            join.on.render(&mut sql, &mut params);
        }

        if let Some(filter) = &self.filter {
            sql.push_str(" WHERE ");
            filter.render(&mut sql, &mut params);
        }

        if !self.order_by.is_empty() {
            let order = self
                .order_by
                .iter()
                .map(|o| {
                    let dir = match o.order {
                        SortOrder::Asc => "ASC",
                        SortOrder::Desc => "DESC",
                    };
                    format!("{} {}", o.column, dir)
                })
                .collect::<Vec<_>>()
                .join(", ");
            sql.push_str(" ORDER BY ");
            sql.push_str(&order);
        }

        // SQLite only accepts OFFSET after a LIMIT; -1 means unbounded
        match (self.limit, self.offset) {
            (Some(limit), Some(offset)) => {
                sql.push_str(&format!(" LIMIT {} OFFSET {}", limit, offset))
            }
            (Some(limit), None) => sql.push_str(&format!(" LIMIT {}", limit)),
            (None, Some(offset)) => sql.push_str(&format!(" LIMIT -1 OFFSET {}", offset)),
            (None, None) => {}
        }

        (sql, params)
    }
}
