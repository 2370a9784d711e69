mod common;

use common::{seed_questions, setup_db};
use trivia_api::db::queries::categories::{get_all_categories, get_category};
use trivia_api::db::queries::questions::{
    count_questions, count_search_matches, create_question, delete_question, get_question,
    get_questions_for_category, get_questions_for_category_name, get_questions_page,
    import_questions, search_questions,
};
use trivia_api::db::Question;

#[tokio::test]
async fn migrations_seed_six_categories() {
    let db = setup_db().await;
    let categories = get_all_categories(&db.pool).await.unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0].name, "Science");
    assert_eq!(categories[5].name, "Sports");

    let science = get_category(&db.pool, 1).await.unwrap().unwrap();
    assert_eq!(science.name, "Science");
    assert!(get_category(&db.pool, 100).await.unwrap().is_none());
}

#[tokio::test]
async fn question_pages_are_windows_over_the_ordered_set() {
    let db = setup_db().await;
    seed_questions(&db.pool).await;

    assert_eq!(count_questions(&db.pool).await.unwrap(), 12);

    let first = get_questions_page(&db.pool, 10, 0).await.unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].id, 1);
    assert_eq!(first[9].id, 10);

    let second = get_questions_page(&db.pool, 10, 10).await.unwrap();
    assert_eq!(second.len(), 2);
    assert_eq!(second[1].id, 12);

    let third = get_questions_page(&db.pool, 10, 20).await.unwrap();
    assert!(third.is_empty());
}

#[tokio::test]
async fn search_matches_substrings_case_insensitively() {
    let db = setup_db().await;
    seed_questions(&db.pool).await;

    assert_eq!(count_search_matches(&db.pool, "title").await.unwrap(), 1);
    assert_eq!(count_search_matches(&db.pool, "WHICH").await.unwrap(), 3);
    assert_eq!(count_search_matches(&db.pool, "zzz").await.unwrap(), 0);

    let matches = search_questions(&db.pool, "title", 10, 0).await.unwrap();
    assert_eq!(matches.len(), 1);
    assert!(matches[0].question.contains("entitled"));
}

#[tokio::test]
async fn create_enforces_store_constraints() {
    let db = setup_db().await;

    let id = create_question(&db.pool, Some("Q?"), Some("A."), Some(1), Some(2))
        .await
        .unwrap();
    let question = get_question(&db.pool, id).await.unwrap().unwrap();
    assert_eq!(question.question, "Q?");
    assert_eq!(question.category, 1);

    // unknown category violates the foreign key
    assert!(create_question(&db.pool, Some("Q?"), Some("A."), Some(99), Some(2))
        .await
        .is_err());
    // missing fields violate NOT NULL
    assert!(create_question(&db.pool, None, Some("A."), Some(1), Some(2))
        .await
        .is_err());
}

#[tokio::test]
async fn delete_removes_exactly_one_row() {
    let db = setup_db().await;
    seed_questions(&db.pool).await;

    assert_eq!(delete_question(&db.pool, 5).await.unwrap(), 1);
    assert!(get_question(&db.pool, 5).await.unwrap().is_none());
    assert_eq!(count_questions(&db.pool).await.unwrap(), 11);

    // second delete hits nothing
    assert_eq!(delete_question(&db.pool, 5).await.unwrap(), 0);
}

#[tokio::test]
async fn category_filters_match_by_id_and_by_name() {
    let db = setup_db().await;
    seed_questions(&db.pool).await;

    let science = get_questions_for_category(&db.pool, 1).await.unwrap();
    assert_eq!(science.len(), 3);
    assert!(science.iter().all(|q| q.category == 1));

    let art = get_questions_for_category_name(&db.pool, "Art").await.unwrap();
    assert_eq!(art.len(), 3);
    assert!(art.iter().all(|q| q.category == 2));

    assert!(get_questions_for_category_name(&db.pool, "Nope")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn import_preserves_explicit_ids() {
    let db = setup_db().await;
    let questions = vec![Question {
        id: 42,
        question: "Imported?".to_owned(),
        answer: "Yes".to_owned(),
        category: 1,
        difficulty: 1,
    }];
    import_questions(&db.pool, questions).await.unwrap();
    let imported = get_question(&db.pool, 42).await.unwrap().unwrap();
    assert_eq!(imported.answer, "Yes");
}
