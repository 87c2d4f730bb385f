//! Composable fetch options for entity queries.
//!
//! A [`FetchOptions`] value describes everything about a `SELECT` except the
//! table it runs against: predicates, joins, ordering, windowing, and optional
//! projection or grouping. Repositories take the description and apply it to a
//! [`Select`] at the last moment, which keeps count queries and fetch queries
//! built from one description in agreement.

use sea_orm::{
    sea_query::{Condition, Expr, SimpleExpr},
    EntityTrait, JoinType, Order, QueryFilter, QueryOrder, QuerySelect, RelationDef, Select, Value,
};

/// Fallback window size when the caller sets no limit.
pub const DEFAULT_FETCH_LIMIT: u64 = 1000;

/// A parameterized SQL fragment, such as `payment.user_id = ?`.
///
/// Placeholders bind positionally, so the fragment never interpolates caller
/// values into the SQL text.
#[derive(Debug, Clone)]
pub struct Predicate {
    template: String,
    values: Vec<Value>,
}

impl Predicate {
    pub fn new<I, V>(template: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Predicate {
            template: template.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn into_expr(self) -> SimpleExpr {
        Expr::cust_with_values(self.template, self.values)
    }
}

/// Builder describing one fetch.
///
/// `with_query` replaces the predicate set while `with_join` and `with_order`
/// accumulate, so a helper can pin the joins a listing needs and callers can
/// still swap the filter per request.
pub struct FetchOptions {
    predicates: Vec<Predicate>,
    joins: Vec<(JoinType, RelationDef)>,
    order: Vec<(SimpleExpr, Order)>,
    offset: u64,
    limit: u64,
    projection: Option<String>,
    group_by: Option<String>,
    having: Option<Predicate>,
}

impl FetchOptions {
    pub fn new() -> Self {
        FetchOptions {
            predicates: Vec::new(),
            joins: Vec::new(),
            order: Vec::new(),
            offset: 0,
            limit: DEFAULT_FETCH_LIMIT,
            projection: None,
            group_by: None,
            having: None,
        }
    }

    /// Replace the predicate set. The last call wins.
    pub fn with_query(mut self, predicates: Vec<Predicate>) -> Self {
        self.predicates = predicates;
        self
    }

    /// Append a join over an entity relation. Calls accumulate in order.
    pub fn with_join(mut self, join: JoinType, relation: RelationDef) -> Self {
        self.joins.push((join, relation));
        self
    }

    /// Append an ordering term. When none is set, results order by `id`
    /// ascending so windows stay stable across pages.
    pub fn with_order(mut self, expr: SimpleExpr, direction: Order) -> Self {
        self.order.push((expr, direction));
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Replace the projection with a raw column list.
    pub fn with_select(mut self, columns: &str) -> Self {
        self.projection = Some(columns.to_string());
        self
    }

    pub fn with_group_by(mut self, expr: &str) -> Self {
        self.group_by = Some(expr.to_string());
        self
    }

    pub fn with_having(mut self, predicate: Predicate) -> Self {
        self.having = Some(predicate);
        self
    }

    /// Apply the full description, windowing and ordering included.
    pub fn apply<E: EntityTrait>(self, select: Select<E>) -> Select<E> {
        let FetchOptions {
            predicates,
            joins,
            order,
            offset,
            limit,
            projection,
            group_by,
            having,
        } = self;

        let mut query = select.filter(Self::condition_from(predicates));

        for (join, relation) in joins {
            query = query.join(join, relation);
        }
        if let Some(columns) = projection {
            query = query.select_only().expr(Expr::cust(columns));
        }
        if let Some(expr) = group_by {
            query = query.group_by(Expr::cust(expr));
        }
        if let Some(predicate) = having {
            query = query.having(predicate.into_expr());
        }

        if order.is_empty() {
            query = query.order_by(Expr::cust("id"), Order::Asc);
        } else {
            for (expr, direction) in order {
                query = query.order_by(expr, direction);
            }
        }

        query.offset(offset).limit(limit)
    }

    /// Apply only the row-selecting parts: predicates, joins, grouping.
    ///
    /// Windowing and ordering are dropped so that a count built from the same
    /// description sees every matching row.
    pub fn apply_filters<E: EntityTrait>(self, select: Select<E>) -> Select<E> {
        let FetchOptions {
            predicates,
            joins,
            group_by,
            having,
            ..
        } = self;

        let mut query = select.filter(Self::condition_from(predicates));

        for (join, relation) in joins {
            query = query.join(join, relation);
        }
        if let Some(expr) = group_by {
            query = query.group_by(Expr::cust(expr));
        }
        if let Some(predicate) = having {
            query = query.having(predicate.into_expr());
        }

        query
    }

    fn condition_from(predicates: Vec<Predicate>) -> Condition {
        let mut condition = Condition::all();
        for predicate in predicates {
            condition = condition.add(predicate.into_expr());
        }
        condition
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::new()
    }
}
