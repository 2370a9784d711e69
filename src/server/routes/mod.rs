use std::collections::BTreeMap;

use crate::db::Category;

mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

/// Categories are served as an id-to-name object, e.g. `{"1": "Science"}`.
pub(crate) fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.name)).collect()
}
