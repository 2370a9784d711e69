use axum::{extract::State, routing::post, Json, Router};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions, Question},
    server::{app::AppState, error::ApiError, extract::ApiJson},
    telemetry::QUIZ_QUESTION_CNTR,
};

#[derive(Deserialize)]
struct QuizCategory {
    id: Option<i64>,
    #[serde(rename = "type")]
    name: Option<String>,
}

#[derive(Deserialize)]
struct QuizBody {
    quiz_category: Option<QuizCategory>,
    #[serde(default)]
    previous_questions: Vec<i64>,
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<Question>,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    ApiJson(body): ApiJson<QuizBody>,
) -> Result<Json<QuizResponse>, ApiError> {
    let quiz_category = body.quiz_category.ok_or(ApiError::NotFound)?;
    let category_id = quiz_category.id.ok_or(ApiError::NotFound)?;

    // Category 0 means "all"; otherwise the quiz matches on the category
    // display name.
    let candidates = if category_id == 0 {
        questions::get_all_questions(&pool).await
    } else {
        let name = quiz_category.name.as_deref().ok_or(ApiError::NotFound)?;
        questions::get_questions_for_category_name(&pool, name).await
    }
    .map_err(ApiError::not_found)?;

    let remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !body.previous_questions.contains(&q.id))
        .collect();

    match remaining.choose(&mut rand::thread_rng()).cloned() {
        Some(question) => {
            let label = quiz_category.name.as_deref().unwrap_or("all");
            QUIZ_QUESTION_CNTR.with_label_values(&[label]).inc();
            Ok(Json(QuizResponse {
                success: true,
                question: Some(question),
            }))
        }
        // An exhausted category is not an error: the client stops asking.
        None => Ok(Json(QuizResponse {
            success: false,
            question: None,
        })),
    }
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
