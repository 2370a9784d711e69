use sqlx::SqlitePool;
use tempfile::NamedTempFile;

use trivia_api::db;
use trivia_api::db::queries::questions::create_question;

pub struct TestDb {
    pub pool: SqlitePool,
    _file: NamedTempFile, // keeps the database file alive for the test
}

pub async fn setup_db() -> TestDb {
    let file = NamedTempFile::new().expect("cannot create temp db file");
    let path = file.path().display().to_string();
    let pool = db::establish_connection(&path)
        .await
        .expect("cannot open test database");
    db::run_migrations(&pool)
        .await
        .expect("cannot run migrations");
    TestDb { pool, _file: file }
}

// Twelve questions over the six seeded categories. Ids are assigned in
// insertion order on a fresh database: Science owns 4-6, Art owns 10-12,
// Sports stays empty.
pub async fn seed_questions(pool: &SqlitePool) {
    let rows: [(&str, &str, i64, i64); 12] = [
        ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
        (
            "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
            "Apollo 13",
            5,
            4,
        ),
        (
            "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
            "Maya Angelou",
            4,
            2,
        ),
        ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
        ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
        (
            "Hematology is a branch of medicine involving the study of what?",
            "Blood",
            1,
            4,
        ),
        ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
        (
            "In which royal palace would you find the Hall of Mirrors?",
            "The Palace of Versailles",
            3,
            3,
        ),
        ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
        (
            "Which Dutch graphic artist's work is known for optical illusions?",
            "M.C. Escher",
            2,
            1,
        ),
        ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
        ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ];
    for (question, answer, category, difficulty) in rows {
        create_question(
            pool,
            Some(question),
            Some(answer),
            Some(category),
            Some(difficulty),
        )
        .await
        .expect("cannot seed question");
    }
}
