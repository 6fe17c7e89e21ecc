//! Expense repository for PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, sea_query::Expr,
};
use spendbook_core::expense::{Expense, ExpenseDraft, ExpenseFilter, ExpenseStore, StoreError};
use spendbook_shared::types::ExpenseId;

use crate::entities::expenses;

impl From<expenses::Model> for Expense {
    fn from(model: expenses::Model) -> Self {
        Self {
            id: ExpenseId::from_uuid(model.id),
            title: model.title,
            amount: model.amount,
            category: model.category,
            date: model.date.with_timezone(&Utc),
        }
    }
}

fn store_error(err: DbErr) -> StoreError {
    StoreError::new(err.to_string())
}

/// Expense repository implementing the store contract over `SeaORM`.
///
/// Each write is a single statement, so per-record atomicity comes from the
/// database itself.
#[derive(Debug)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an expense by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: ExpenseId) -> Result<Option<Expense>, DbErr> {
        expenses::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map(|model| model.map(Expense::from))
    }
}

#[async_trait]
impl ExpenseStore for ExpenseRepository {
    async fn find(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, StoreError> {
        let mut query = expenses::Entity::find();

        if let Some(category) = &filter.category {
            query = query.filter(expenses::Column::Category.eq(category.as_str()));
        }

        if let Some(start) = filter.start {
            query = query.filter(expenses::Column::Date.gte(start));
        }

        if let Some(end) = filter.end {
            query = query.filter(expenses::Column::Date.lte(end));
        }

        let models = query
            .order_by_desc(expenses::Column::Date)
            .order_by_desc(expenses::Column::Id)
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(models.into_iter().map(Expense::from).collect())
    }

    async fn insert_one(&self, draft: &ExpenseDraft) -> Result<Expense, StoreError> {
        let now = Utc::now().into();
        let expense = expenses::ActiveModel {
            id: Set(ExpenseId::new().into_inner()),
            title: Set(draft.title().to_string()),
            amount: Set(draft.amount()),
            category: Set(draft.category().to_string()),
            date: Set(draft.date().into()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        expense
            .insert(&self.db)
            .await
            .map(Expense::from)
            .map_err(store_error)
    }

    async fn update_one(&self, id: ExpenseId, draft: &ExpenseDraft) -> Result<u64, StoreError> {
        let result = expenses::Entity::update_many()
            .col_expr(expenses::Column::Title, Expr::value(draft.title().to_string()))
            .col_expr(expenses::Column::Amount, Expr::value(draft.amount()))
            .col_expr(expenses::Column::Category, Expr::value(draft.category().to_string()))
            .col_expr(expenses::Column::Date, Expr::value(draft.date()))
            .col_expr(expenses::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(expenses::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected)
    }

    async fn delete_one(&self, id: ExpenseId) -> Result<u64, StoreError> {
        let result = expenses::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.ping().await.map_err(store_error)
    }
}
