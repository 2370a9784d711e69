use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::categories,
        queries::questions,
        Question,
    },
    server::{
        app::AppState,
        deserializers::{first_page, lenient_page},
        error::ApiError,
        extract::{ApiJson, ApiPath},
    },
};

use super::category_map;

pub const QUESTIONS_PER_PAGE: u32 = 10;

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default = "first_page", deserialize_with = "lenient_page")]
    page: u32,
}

impl PageQuery {
    fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(QUESTIONS_PER_PAGE)
    }
}

#[derive(Deserialize)]
struct NewQuestion {
    question: Option<String>,
    answer: Option<String>,
    category: Option<i64>,
    difficulty: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm", default)]
    search_term: String,
    #[serde(default)]
    quiz_category: Option<Value>,
}

#[derive(Serialize)]
struct QuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    total_questions: i64,
    categories: BTreeMap<i64, String>,
    #[serde(rename = "currentCategory")]
    current_category: String,
}

#[derive(Serialize)]
struct DeleteResponse {
    success: bool,
    delete: i64,
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
    question: Question,
}

#[derive(Serialize)]
struct SearchResponse {
    success: bool,
    questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    total_questions: i64,
    #[serde(rename = "currentCategory")]
    current_category: Option<Value>,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let total = questions::count_questions(&pool)
        .await
        .map_err(ApiError::not_found)?;
    if total == 0 {
        return Err(ApiError::NotFound);
    }

    let page = questions::get_questions_page(&pool, QUESTIONS_PER_PAGE.into(), query.offset())
        .await
        .map_err(ApiError::not_found)?;
    // A page past the end has no last question to derive the current
    // category from.
    let last = page.last().ok_or(ApiError::NotFound)?;
    let current_category = categories::get_category(&pool, last.category)
        .await
        .map_err(ApiError::not_found)?
        .ok_or(ApiError::NotFound)?
        .name;
    let all_categories = categories::get_all_categories(&pool)
        .await
        .map_err(ApiError::not_found)?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions: page,
        total_questions: total,
        categories: category_map(all_categories),
        current_category,
    }))
}

async fn add_question(
    State(pool): State<SqlitePool>,
    ApiJson(body): ApiJson<NewQuestion>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = questions::create_question(
        &pool,
        body.question.as_deref(),
        body.answer.as_deref(),
        body.category,
        body.difficulty,
    )
    .await
    .map_err(ApiError::unprocessable)?;
    let question = questions::get_question(&pool, id)
        .await
        .map_err(ApiError::unprocessable)?
        .ok_or(ApiError::Unprocessable)?;

    Ok(Json(CreatedResponse {
        success: true,
        question,
    }))
}

async fn remove_question(
    State(pool): State<SqlitePool>,
    ApiPath(question_id): ApiPath<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    // Legacy mapping: an unknown id is 422, not 404.
    let question = questions::get_question(&pool, question_id)
        .await
        .map_err(ApiError::unprocessable)?
        .ok_or(ApiError::Unprocessable)?;
    questions::delete_question(&pool, question.id)
        .await
        .map_err(ApiError::unprocessable)?;

    Ok(Json(DeleteResponse {
        success: true,
        delete: question.id,
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    Query(query): Query<PageQuery>,
    ApiJson(body): ApiJson<SearchBody>,
) -> Result<Json<SearchResponse>, ApiError> {
    let total = questions::count_search_matches(&pool, &body.search_term)
        .await
        .map_err(ApiError::not_found)?;
    let matches = questions::search_questions(
        &pool,
        &body.search_term,
        QUESTIONS_PER_PAGE.into(),
        query.offset(),
    )
    .await
    .map_err(ApiError::not_found)?;

    Ok(Json(SearchResponse {
        success: true,
        questions: matches,
        total_questions: total,
        // quiz_category is echoed back, never applied as a filter
        current_category: body.quiz_category,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(add_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{question_id}", delete(remove_question))
        .with_state(state)
}
