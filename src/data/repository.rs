//! Generic repository over a soft-deleting entity.
//!
//! The repository is parameterized over the connection, so the same type runs
//! against the pool or inside a [`sea_orm::DatabaseTransaction`]. Scoped
//! methods exclude soft-deleted rows; `_unscoped` variants see everything.

use std::marker::PhantomData;

use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::{Condition, Expr},
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, QueryFilter, Select, Value,
};

use crate::{
    data::options::{FetchOptions, Predicate},
    error::Error,
};

/// An entity carrying the standard `id` and `deleted_at` columns.
pub trait SoftDeleteEntity: EntityTrait {
    fn id_column() -> Self::Column;
    fn deleted_at_column() -> Self::Column;
}

macro_rules! impl_soft_delete_entity {
    ($($module:ident),* $(,)?) => {
        $(
            impl SoftDeleteEntity for entity::$module::Entity {
                fn id_column() -> Self::Column {
                    entity::$module::Column::Id
                }

                fn deleted_at_column() -> Self::Column {
                    entity::$module::Column::DeletedAt
                }
            }
        )*
    };
}

impl_soft_delete_entity!(coupon, event, payment, payment_line, ticket, ticket_type, user);

/// CRUD port for a single entity over any connection.
pub struct Repository<'a, C, E> {
    conn: &'a C,
    entity: PhantomData<E>,
}

impl<'a, C, E> Repository<'a, C, E>
where
    C: ConnectionTrait,
    E: SoftDeleteEntity,
    E::Model: Send + Sync + 'static + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior + Send + 'static,
{
    pub fn new(conn: &'a C) -> Self {
        Repository {
            conn,
            entity: PhantomData,
        }
    }

    fn scoped() -> Select<E> {
        E::find().filter(E::deleted_at_column().is_null())
    }

    /// Fetch the rows selected by `options`, excluding soft-deleted ones.
    pub async fn find(&self, options: FetchOptions) -> Result<Vec<E::Model>, Error> {
        Ok(options.apply(Self::scoped()).all(self.conn).await?)
    }

    /// Fetch the rows selected by `options`, soft-deleted ones included.
    pub async fn find_unscoped(&self, options: FetchOptions) -> Result<Vec<E::Model>, Error> {
        Ok(options.apply(E::find()).all(self.conn).await?)
    }

    /// Fetch the first row selected by `options`.
    pub async fn find_one(&self, options: FetchOptions) -> Result<E::Model, Error> {
        options
            .apply(Self::scoped())
            .one(self.conn)
            .await?
            .ok_or(Error::NotFound)
    }

    pub async fn find_by_id<V>(&self, id: V) -> Result<Option<E::Model>, Error>
    where
        V: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        Ok(E::find_by_id(id)
            .filter(E::deleted_at_column().is_null())
            .one(self.conn)
            .await?)
    }

    /// Count rows matching `options`. Windowing and ordering are ignored, so
    /// the count agrees with an unwindowed `find` over the same options.
    pub async fn count(&self, options: FetchOptions) -> Result<u64, Error> {
        Ok(options
            .apply_filters(Self::scoped())
            .count(self.conn)
            .await?)
    }

    pub async fn count_unscoped(&self, options: FetchOptions) -> Result<u64, Error> {
        Ok(options.apply_filters(E::find()).count(self.conn).await?)
    }

    pub async fn create(&self, model: E::ActiveModel) -> Result<E::Model, Error> {
        Ok(model.insert(self.conn).await?)
    }

    /// Insert `models` in chunks of `batch_size` statements.
    ///
    /// An empty input or a zero batch size inserts nothing.
    pub async fn create_in_batches(
        &self,
        models: Vec<E::ActiveModel>,
        batch_size: usize,
    ) -> Result<(), Error> {
        if models.is_empty() || batch_size == 0 {
            return Ok(());
        }

        let mut models = models.into_iter().peekable();
        while models.peek().is_some() {
            let chunk: Vec<E::ActiveModel> = models.by_ref().take(batch_size).collect();
            E::insert_many(chunk)
                .exec_without_returning(self.conn)
                .await?;
        }

        Ok(())
    }

    pub async fn update(&self, model: E::ActiveModel) -> Result<E::Model, Error> {
        Ok(model.update(self.conn).await?)
    }

    /// Soft-delete one row by primary key, stamping `deleted_at`.
    ///
    /// Already-deleted rows are left untouched, so the returned count is zero
    /// when the row is missing or was deleted earlier.
    pub async fn delete<V>(&self, id: V) -> Result<u64, Error>
    where
        V: Into<Value>,
    {
        let result = E::update_many()
            .col_expr(
                E::deleted_at_column(),
                Expr::value(Some(Utc::now().naive_utc())),
            )
            .filter(E::id_column().eq(id))
            .filter(E::deleted_at_column().is_null())
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Hard-delete every row matching `predicates`.
    ///
    /// An empty predicate list deletes nothing rather than everything.
    pub async fn force_delete(&self, predicates: Vec<Predicate>) -> Result<u64, Error> {
        if predicates.is_empty() {
            return Ok(0);
        }

        let mut condition = Condition::all();
        for predicate in predicates {
            condition = condition.add(predicate.into_expr());
        }

        let result = E::delete_many()
            .filter(condition)
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Clear `deleted_at` on the given rows, bringing them back into scope.
    pub async fn restore_by_ids<V>(&self, ids: Vec<V>) -> Result<u64, Error>
    where
        V: Into<Value>,
    {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = E::update_many()
            .col_expr(
                E::deleted_at_column(),
                Expr::value(Option::<NaiveDateTime>::None),
            )
            .filter(E::id_column().is_in(ids))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }
}
