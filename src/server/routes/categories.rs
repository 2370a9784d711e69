use std::collections::BTreeMap;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::categories::{get_all_categories, get_category},
        queries::questions::get_questions_for_category,
        Question,
    },
    server::{app::AppState, error::ApiError, extract::ApiPath},
};

use super::category_map;

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
    total_questions: usize,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    total_questions: usize,
    #[serde(rename = "currentCategory")]
    current_category: String,
}

async fn list_categories(
    State(pool): State<SqlitePool>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = get_all_categories(&pool)
        .await
        .map_err(ApiError::not_found)?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    // Legacy wire contract: this key reports the category count.
    let total_questions = categories.len();
    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
        total_questions,
    }))
}

async fn questions_for_category(
    State(pool): State<SqlitePool>,
    ApiPath(category_id): ApiPath<i64>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    // An unknown category is 404; an existing category with no questions
    // is an empty success.
    let category = get_category(&pool, category_id)
        .await
        .map_err(ApiError::not_found)?
        .ok_or(ApiError::NotFound)?;
    let questions = get_questions_for_category(&pool, category_id)
        .await
        .map_err(ApiError::not_found)?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category.name,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions_for_category),
        )
        .with_state(state)
}
