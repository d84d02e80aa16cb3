//! Integration tests for RecipeDb and ChordDb.
//! Run with: OJAKH_DATABASE_URL=... NVAG_DATABASE_URL=... \
//!   cargo test -p ojakh-storage -- --ignored pg_

#![allow(clippy::unwrap_used, reason = "integration test code")]

use ojakh_core::{ChordInput, IngredientEntry, RecipeInput};
use ojakh_storage::{ChordDb, ChordStore, IngredientStore, RecipeDb, RecipeStore, StorageError};
use uuid::Uuid;

async fn recipe_db() -> RecipeDb {
    let url = std::env::var("OJAKH_DATABASE_URL")
        .expect("OJAKH_DATABASE_URL must be set for RecipeDb integration tests");
    RecipeDb::new(&url).await.expect("Failed to connect to PostgreSQL")
}

async fn chord_db() -> ChordDb {
    let url = std::env::var("NVAG_DATABASE_URL")
        .expect("NVAG_DATABASE_URL must be set for ChordDb integration tests");
    ChordDb::new(&url).await.expect("Failed to connect to PostgreSQL")
}

fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

fn entry(name: &str, amount: &str) -> IngredientEntry {
    IngredientEntry { name: name.to_owned(), amount: Some(amount.to_owned()) }
}

fn make_input(title: &str, category: Option<&str>, ingredients: Vec<IngredientEntry>) -> RecipeInput {
    RecipeInput {
        title: title.to_owned(),
        category: category.map(str::to_owned),
        cover_image_url: None,
        ingredients,
        steps: vec!["mix".to_owned(), "bake".to_owned()],
    }
}

// ── Ingredient normalization ─────────────────────────────────────

#[tokio::test]
#[ignore]
async fn pg_ingredient_upsert_is_case_insensitive() {
    let db = recipe_db().await;
    let lower = unique("tomato");
    let upper = lower.to_uppercase();

    let first = db.upsert_ingredient(&upper).await.unwrap();
    let second = db.upsert_ingredient(&lower).await.unwrap();
    assert_eq!(first, second, "both casings must resolve to one id");

    let names = db.list_ingredient_names().await.unwrap();
    assert_eq!(names.iter().filter(|n| **n == lower).count(), 1, "stored lowercased, once");
    assert!(!names.contains(&upper));
}

#[tokio::test]
#[ignore]
async fn pg_ingredient_names_are_sorted() {
    let db = recipe_db().await;
    db.upsert_ingredient(&unique("zaatar")).await.unwrap();
    db.upsert_ingredient(&unique("anise")).await.unwrap();

    let names = db.list_ingredient_names().await.unwrap();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

// ── Recipe writes ────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn pg_create_and_get_roundtrip() {
    let db = recipe_db().await;
    let flour = unique("flour");
    let egg = unique("egg");
    let title = unique("Gata");
    let input = make_input(&title, Some("dessert"), vec![entry(&flour, "2 cups"), entry(&egg, "3")]);

    let id = db.create_recipe(input).await.unwrap();
    let recipe = db.get_recipe(&id).await.unwrap();

    assert_eq!(recipe.id, id);
    assert_eq!(recipe.title, title);
    assert_eq!(recipe.category.as_deref(), Some("dessert"));
    assert_eq!(recipe.steps, vec!["mix", "bake"]);

    let mut got: Vec<(String, Option<String>)> =
        recipe.ingredients.into_iter().map(|i| (i.name, i.amount)).collect();
    got.sort();
    let mut want =
        vec![(flour, Some("2 cups".to_owned())), (egg, Some("3".to_owned()))];
    want.sort();
    assert_eq!(got, want, "ingredient order is unspecified, content must match");
}

#[tokio::test]
#[ignore]
async fn pg_create_skips_blank_ingredient_names() {
    let db = recipe_db().await;
    let salt = unique("salt");
    let input = make_input(
        &unique("Lavash"),
        None,
        vec![entry(&salt, "1 tsp"), entry("", "ghost"), entry("   ", "ghost")],
    );

    let id = db.create_recipe(input).await.unwrap();
    let recipe = db.get_recipe(&id).await.unwrap();
    assert_eq!(recipe.ingredients.len(), 1);
    assert_eq!(recipe.ingredients[0].name, salt);
}

#[tokio::test]
#[ignore]
async fn pg_create_rolls_back_on_link_failure() {
    let db = recipe_db().await;
    let good = unique("butter");
    let title = unique("Khachapuri");
    // A name this large exceeds the btree index row limit, so the unique
    // index insert fails mid-transaction, after the header and the first
    // link already ran.
    let oversized = "x".repeat(10_000);
    let input = make_input(&title, None, vec![entry(&good, "100 g"), entry(&oversized, "1")]);

    let err = db.create_recipe(input).await.unwrap_err();
    assert!(matches!(err, StorageError::Database(_)), "unexpected error: {err:?}");

    let summaries = db.list_recipes().await.unwrap();
    assert!(summaries.iter().all(|s| s.title != title), "header must not persist");
    let names = db.list_ingredient_names().await.unwrap();
    assert!(!names.contains(&good), "earlier upsert must roll back too");
}

#[tokio::test]
#[ignore]
async fn pg_list_recipes_most_recent_first() {
    let db = recipe_db().await;
    let older = db.create_recipe(make_input(&unique("First"), None, vec![])).await.unwrap();
    let newer = db.create_recipe(make_input(&unique("Second"), None, vec![])).await.unwrap();

    let ids: Vec<String> = db.list_recipes().await.unwrap().into_iter().map(|s| s.id).collect();
    let pos_older = ids.iter().position(|i| *i == older).unwrap();
    let pos_newer = ids.iter().position(|i| *i == newer).unwrap();
    assert!(pos_newer < pos_older);
}

#[tokio::test]
#[ignore]
async fn pg_update_replaces_links_fully() {
    let db = recipe_db().await;
    let a = unique("a-walnut");
    let b = unique("b-honey");
    let c = unique("c-apricot");
    let id = db
        .create_recipe(make_input(&unique("Alani"), None, vec![entry(&a, "1"), entry(&b, "2")]))
        .await
        .unwrap();

    let replacement =
        make_input(&unique("Alani v2"), None, vec![entry(&b, "2"), entry(&c, "3")]);
    db.update_recipe(&id, replacement.clone()).await.unwrap();

    let recipe = db.get_recipe(&id).await.unwrap();
    assert_eq!(recipe.title, replacement.title);
    let mut names: Vec<String> = recipe.ingredients.into_iter().map(|i| i.name).collect();
    names.sort();
    assert_eq!(names, vec![b, c], "exactly the new set, nothing from the old one");
}

#[tokio::test]
#[ignore]
async fn pg_update_missing_recipe_is_not_found() {
    let db = recipe_db().await;
    let ghost = unique("ghost-ingredient");
    let err = db
        .update_recipe(&unique("no-such-id"), make_input("Ghost", None, vec![entry(&ghost, "1")]))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }), "unexpected error: {err:?}");

    // The rolled-back relink phase must not leak the ingredient.
    let names = db.list_ingredient_names().await.unwrap();
    assert!(!names.contains(&ghost));
}

#[tokio::test]
#[ignore]
async fn pg_delete_cascades_join_rows() {
    let db = recipe_db().await;
    let title = unique("Dolma");
    let id = db
        .create_recipe(make_input(
            &title,
            None,
            vec![entry(&unique("rice"), "1 cup"), entry(&unique("grape-leaf"), "20")],
        ))
        .await
        .unwrap();

    let deleted = db.delete_recipe(&id).await.unwrap();
    assert_eq!(deleted, title);

    let err = db.get_recipe(&id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));

    let url = std::env::var("OJAKH_DATABASE_URL").unwrap();
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .unwrap();
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM recipe_ingredients WHERE recipe_id = $1")
            .bind(&id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 0, "cascade must remove join rows");
}

#[tokio::test]
#[ignore]
async fn pg_delete_missing_recipe_is_not_found() {
    let db = recipe_db().await;
    let err = db.delete_recipe(&unique("no-such-id")).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

// ── Ingredient-match search ──────────────────────────────────────

#[tokio::test]
#[ignore]
async fn pg_find_by_ingredients_containment() {
    let db = recipe_db().await;
    let egg = unique("egg");
    let flour = unique("flour");
    let milk = unique("milk");
    let id = db
        .create_recipe(make_input(
            &unique("Blinchik"),
            None,
            vec![entry(&egg, "2"), entry(&flour, "1 cup")],
        ))
        .await
        .unwrap();

    let superset = vec![egg.clone(), flour.clone(), milk];
    let found = db.find_recipes_by_ingredients(&superset).await.unwrap();
    assert!(found.iter().any(|s| s.id == id), "superset of requirements must match");

    let subset = vec![egg.clone()];
    let found = db.find_recipes_by_ingredients(&subset).await.unwrap();
    assert!(!found.iter().any(|s| s.id == id), "missing requirement must exclude");

    // Candidates are normalized before comparison.
    let shouted = vec![egg.to_uppercase(), flour.to_uppercase()];
    let found = db.find_recipes_by_ingredients(&shouted).await.unwrap();
    assert!(found.iter().any(|s| s.id == id), "candidate casing must not under-match");
}

#[tokio::test]
#[ignore]
async fn pg_find_by_ingredients_empty_input_returns_empty() {
    let db = recipe_db().await;
    let found = db.find_recipes_by_ingredients(&[]).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
#[ignore]
async fn pg_find_by_ingredients_vacuous_match() {
    let db = recipe_db().await;
    let id = db.create_recipe(make_input(&unique("Plain bread"), None, vec![])).await.unwrap();

    let found = db.find_recipes_by_ingredients(&[unique("anything")]).await.unwrap();
    assert!(found.iter().any(|s| s.id == id), "recipe with zero links matches any set");
}

// ── Categories ───────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn pg_categories_distinct_and_sorted() {
    let db = recipe_db().await;
    let category = unique("soup");
    db.create_recipe(make_input(&unique("Spas"), Some(&category), vec![])).await.unwrap();
    db.create_recipe(make_input(&unique("Bozbash"), Some(&category), vec![])).await.unwrap();
    db.create_recipe(make_input(&unique("Uncategorized"), None, vec![])).await.unwrap();
    db.create_recipe(make_input(&unique("Blank"), Some(""), vec![])).await.unwrap();

    let categories = db.list_categories().await.unwrap();
    assert_eq!(categories.iter().filter(|c| **c == category).count(), 1);
    assert!(!categories.iter().any(|c| c.is_empty()), "empty categories excluded");
    let mut sorted = categories.clone();
    sorted.sort();
    assert_eq!(categories, sorted);
}

// ── Chords ───────────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn pg_chords_sorted_by_name() {
    let db = chord_db().await;
    let late = unique("Z-chord");
    let early = unique("A-chord");
    db.add_chord(ChordInput { name: late.clone(), frets: "x32010".to_owned(), fingering: None })
        .await
        .unwrap();
    db.add_chord(ChordInput {
        name: early.clone(),
        frets: "022100".to_owned(),
        fingering: Some("231".to_owned()),
    })
    .await
    .unwrap();

    let chords = db.list_chords().await.unwrap();
    let pos_early = chords.iter().position(|c| c.name == early).unwrap();
    let pos_late = chords.iter().position(|c| c.name == late).unwrap();
    assert!(pos_early < pos_late);

    let added = &chords[pos_early];
    assert_eq!(added.frets, "022100");
    assert_eq!(added.fingering.as_deref(), Some("231"));
}
