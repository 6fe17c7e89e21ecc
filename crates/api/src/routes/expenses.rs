//! Expense management routes.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use serde::Serialize;
use serde_json::{Map, Value};
use spendbook_core::expense::{Expense, ExpenseError, ListExpensesQuery};
use tracing::{debug, info};

use crate::{AppState, error::ApiError};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", patch(update_expense).delete(delete_expense))
}

/// Confirmation returned by update and delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: &'static str,
}

/// Unwraps a JSON object body; anything else becomes an empty payload so that
/// validation reports the first missing field.
fn into_payload(body: Result<Json<Value>, JsonRejection>) -> Map<String, Value> {
    match body {
        Ok(Json(Value::Object(map))) => map,
        _ => Map::new(),
    }
}

/// GET `/expenses` - List expenses, newest first.
///
/// Optional query parameters: `category`, `start`, `end`.
async fn list_expenses(
    State(state): State<AppState>,
    query: Result<Query<ListExpensesQuery>, QueryRejection>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let Query(query) = query.map_err(|e| ExpenseError::InvalidQuery(e.body_text()))?;
    let filter = query.into_filter()?;
    debug!(?filter, "Listing expenses");

    let expenses = state.expenses().list(&filter).await?;
    Ok(Json(expenses))
}

/// POST `/expenses` - Create a new expense.
async fn create_expense(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let expense = state.expenses().create(&into_payload(body)).await?;

    info!(
        expense_id = %expense.id,
        category = %expense.category,
        "Expense created"
    );

    Ok((StatusCode::CREATED, Json(expense)))
}

/// PATCH `/expenses/{id}` - Replace the title, amount, category and date.
async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let expense = state.expenses().update(&id, &into_payload(body)).await?;

    info!(expense_id = %expense.id, "Expense updated");

    Ok(Json(MessageResponse {
        message: "Expense updated successfully",
    }))
}

/// DELETE `/expenses/{id}` - Delete an expense.
async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let expense_id = state.expenses().delete(&id).await?;

    info!(expense_id = %expense_id, "Expense deleted");

    Ok(Json(MessageResponse {
        message: "Expense deleted successfully",
    }))
}
