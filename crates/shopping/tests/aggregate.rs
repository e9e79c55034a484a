use mealplanner_shared::{Category, Error, ShoppingListEntry, Store};
use mealplanner_shopping::{aggregate, append_lines, save};
use temp_dir::TempDir;

mod helpers;

fn entry(ingredient: &str, count: u32) -> ShoppingListEntry {
    ShoppingListEntry {
        ingredient: ingredient.to_owned(),
        count,
    }
}

async fn three_meal_week(state: &mut helpers::TestState) -> anyhow::Result<()> {
    helpers::add_meal(state, Category::Breakfast, "Oatmeal", &["oats", "milk"]).await?;
    helpers::add_meal(state, Category::Lunch, "Soup", &["broth", "salt"]).await?;
    helpers::add_meal(state, Category::Dinner, "Pasta", &["pasta", "salt"]).await?;

    helpers::plan_week(state, |_, category| {
        match category {
            Category::Breakfast => "Oatmeal",
            Category::Lunch => "Soup",
            Category::Dinner => "Pasta",
        }
        .to_owned()
    })
    .await
}

#[tokio::test]
async fn test_three_meal_week() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    three_meal_week(&mut state).await?;

    let entries = aggregate(&state.planner, &state.catalog)?;
    assert_eq!(
        entries,
        vec![
            entry("oats", 7),
            entry("milk", 7),
            entry("broth", 7),
            entry("salt", 14),
            entry("pasta", 7),
        ]
    );

    let lines = entries.iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(
        lines,
        vec!["oats x7", "milk x7", "broth x7", "salt x14", "pasta x7"]
    );

    Ok(())
}

#[tokio::test]
async fn test_store_totals_match_aggregate() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    three_meal_week(&mut state).await?;

    let entries = aggregate(&state.planner, &state.catalog)?;
    let totals = state.store.query_ingredient_totals_for_plan().await?;
    assert_eq!(totals, entries);

    Ok(())
}

#[tokio::test]
async fn test_store_totals_follow_slot_order_over_meal_age() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    helpers::add_meal(&mut state, Category::Lunch, "Soup", &["b"]).await?;
    helpers::add_meal(&mut state, Category::Breakfast, "Toast", &["a", "b"]).await?;
    helpers::add_meal(&mut state, Category::Dinner, "Pasta", &["c"]).await?;

    helpers::plan_week(&mut state, |_, category| {
        match category {
            Category::Breakfast => "Toast",
            Category::Lunch => "Soup",
            Category::Dinner => "Pasta",
        }
        .to_owned()
    })
    .await?;

    let entries = aggregate(&state.planner, &state.catalog)?;
    assert_eq!(entries, vec![entry("a", 7), entry("b", 14), entry("c", 7)]);

    let totals = state.store.query_ingredient_totals_for_plan().await?;
    assert_eq!(totals, entries);

    Ok(())
}

#[tokio::test]
async fn test_distinct_ingredients_count_once() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let letters = [
        "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q",
        "r", "s", "t", "u",
    ];
    for (i, category) in Category::ALL
        .iter()
        .cycle()
        .take(21)
        .enumerate()
    {
        let name = format!("Meal {}", letters[i]);
        let ingredient = format!("item {}", letters[i]);
        helpers::add_meal(&mut state, *category, &name, &[&ingredient]).await?;
    }

    helpers::plan_week(&mut state, |day, category| {
        let slot = day * 3 + Category::ALL.iter().position(|c| *c == category).unwrap();
        format!("Meal {}", letters[slot])
    })
    .await?;

    let entries = aggregate(&state.planner, &state.catalog)?;
    assert_eq!(entries.len(), 21);
    assert!(entries.iter().all(|entry| entry.count == 1));
    assert!(entries.iter().all(|entry| !entry.to_string().contains(" x")));

    Ok(())
}

#[tokio::test]
async fn test_shared_ingredient_across_three_meals() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    helpers::add_meal(&mut state, Category::Breakfast, "Omelette", &["eggs", "butter"]).await?;
    helpers::add_meal(&mut state, Category::Breakfast, "Toast", &["bread"]).await?;
    helpers::add_meal(&mut state, Category::Lunch, "Sandwich", &["bread"]).await?;
    helpers::add_meal(&mut state, Category::Dinner, "Cake", &["eggs", "flour"]).await?;
    helpers::add_meal(&mut state, Category::Dinner, "Rice", &["rice"]).await?;
    helpers::add_meal(&mut state, Category::Lunch, "Quiche", &["eggs", "cream"]).await?;

    helpers::plan_week(&mut state, |day, category| {
        match (day, category) {
            (0, Category::Breakfast) => "Omelette",
            (0, Category::Lunch) => "Quiche",
            (0, Category::Dinner) => "Cake",
            (_, Category::Breakfast) => "Toast",
            (_, Category::Lunch) => "Sandwich",
            (_, Category::Dinner) => "Rice",
        }
        .to_owned()
    })
    .await?;

    let entries = aggregate(&state.planner, &state.catalog)?;
    let eggs = entries.iter().filter(|e| e.ingredient == "eggs").collect::<Vec<_>>();
    assert_eq!(eggs, vec![&entry("eggs", 3)]);
    assert_eq!(eggs[0].to_string(), "eggs x3");
    assert!(entries.contains(&entry("bread", 12)));
    assert!(entries.contains(&entry("butter", 1)));

    Ok(())
}

#[tokio::test]
async fn test_repeated_ingredient_within_meal_counts_each_line() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    helpers::add_meal(&mut state, Category::Breakfast, "Oatmeal", &["oats"]).await?;
    helpers::add_meal(&mut state, Category::Lunch, "Soup", &["salt", "broth", "salt"]).await?;
    helpers::add_meal(&mut state, Category::Dinner, "Pasta", &["Pasta"]).await?;

    helpers::plan_week(&mut state, |_, category| {
        match category {
            Category::Breakfast => "Oatmeal",
            Category::Lunch => "Soup",
            Category::Dinner => "Pasta",
        }
        .to_owned()
    })
    .await?;

    let entries = aggregate(&state.planner, &state.catalog)?;
    assert!(entries.contains(&entry("salt", 14)));
    assert!(entries.contains(&entry("Pasta", 7)));
    assert!(!entries.iter().any(|e| e.ingredient == "pasta"));

    Ok(())
}

#[tokio::test]
async fn test_aggregate_without_complete_plan() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let path = dir.child("list.txt");

    let err = aggregate(&state.planner, &state.catalog).unwrap_err();
    assert!(matches!(err, Error::NoPlan));
    assert_eq!(err.to_string(), "Unable to save. Plan your meals first.");

    helpers::add_meal(&mut state, Category::Breakfast, "Oatmeal", &["oats"]).await?;
    state.planner.start().await?;
    state.planner.select(&state.catalog, "Oatmeal").await?;

    let err = aggregate(&state.planner, &state.catalog).unwrap_err();
    assert!(matches!(err, Error::NoPlan));

    let err = save(&state.planner, &state.catalog, &path).await.unwrap_err();
    assert!(matches!(err, Error::NoPlan));
    assert!(!path.exists());

    Ok(())
}

#[tokio::test]
async fn test_save_appends_to_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    three_meal_week(&mut state).await?;

    let path = dir.child("list.txt");
    assert_eq!(save(&state.planner, &state.catalog, &path).await?, 5);
    assert_eq!(
        std::fs::read_to_string(&path)?,
        "oats x7\nmilk x7\nbroth x7\nsalt x14\npasta x7\n"
    );

    save(&state.planner, &state.catalog, &path).await?;
    assert_eq!(std::fs::read_to_string(&path)?.lines().count(), 10);

    Ok(())
}

#[tokio::test]
async fn test_append_lines_reports_unwritable_path() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("missing").join("list.txt");

    let err = append_lines(&path, &["oats".to_owned()]).await.unwrap_err();
    assert!(matches!(err, Error::Export { .. }));

    Ok(())
}
