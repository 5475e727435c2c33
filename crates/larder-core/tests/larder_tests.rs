use jiff::civil::datetime;
use larder_core::{eq, Ingredient, Larder, LarderBuilder, Meal, MealIngredient};
use tempfile::TempDir;

/// Helper function to create a test larder backed by a temp directory
async fn create_test_larder() -> (TempDir, Larder) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let larder = LarderBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to build larder");
    (temp_dir, larder)
}

#[tokio::test]
async fn builder_creates_schema_for_new_file() {
    let (_temp_dir, larder) = create_test_larder().await;

    // schema exists without an explicit init
    let added = larder
        .add_ingredient(Ingredient {
            name: "avocado".to_string(),
            calories: 160.0,
            ..Default::default()
        })
        .await
        .expect("Failed to add ingredient");
    assert!(added.id.is_some());

    let found = larder
        .get_ingredient(added.id.unwrap())
        .await
        .expect("Failed to get ingredient")
        .expect("Ingredient should exist");
    assert_eq!(found.name, "avocado");
}

#[tokio::test]
async fn rebuild_preserves_existing_data() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let larder = LarderBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to build larder");
    larder
        .add_ingredient(Ingredient {
            name: "jajka".to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to add ingredient");
    drop(larder);

    let reopened = LarderBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to rebuild larder");
    let found = reopened
        .get_ingredients(vec![eq("name", "jajka")])
        .await
        .expect("Failed to query ingredients");
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn meal_cascade_through_facade() {
    let (_temp_dir, larder) = create_test_larder().await;

    let meal = Meal {
        name: Some("śniadanie".to_string()),
        date: datetime(2020, 5, 4, 9, 0, 0, 0),
        meal_ingredients: vec![MealIngredient {
            quantity: 60.0,
            ingredient: Some(Ingredient {
                name: "jajka".to_string(),
                calories: 139.0,
                ..Default::default()
            }),
            ..Default::default()
        }],
        ..Default::default()
    };

    let added = larder.add_meal(meal).await.expect("Failed to add meal");
    let meal_id = added.id.expect("Insert should assign an id");

    let links = larder
        .get_meal_ingredients(vec![eq("meal_id", meal_id)])
        .await
        .expect("Failed to query meal ingredients");
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].quantity, 60.0);

    let ingredient = larder
        .get_ingredient(links[0].ingredient_id.unwrap())
        .await
        .expect("Failed to get ingredient")
        .expect("Cascade-inserted ingredient should exist");
    assert_eq!(ingredient.name, "jajka");
}

#[tokio::test]
async fn delete_and_not_found_through_facade() {
    let (_temp_dir, larder) = create_test_larder().await;

    let added = larder
        .add_ingredient(Ingredient {
            name: "test".to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to add ingredient");
    let id = added.id.unwrap();

    larder
        .delete_ingredient(vec![eq("id", id)])
        .await
        .expect("Failed to delete ingredient");

    assert!(larder
        .get_ingredient(id)
        .await
        .expect("Failed to get ingredient")
        .is_none());
    assert!(larder
        .get_meal(999)
        .await
        .expect("Failed to get meal")
        .is_none());
}

#[tokio::test]
async fn clear_and_drop_through_facade() {
    let (_temp_dir, larder) = create_test_larder().await;

    larder
        .add_ingredient(Ingredient {
            name: "test".to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to add ingredient");

    larder.clear().await.expect("Failed to clear");
    assert!(larder
        .get_ingredients(vec![])
        .await
        .expect("Failed to query ingredients")
        .is_empty());

    larder.drop_schema().await.expect("Failed to drop schema");
    larder.init().await.expect("Failed to recreate schema");
    assert!(larder
        .get_ingredients(vec![])
        .await
        .expect("Failed to query ingredients")
        .is_empty());
}

#[tokio::test]
async fn update_ingredient_through_facade() {
    let (_temp_dir, larder) = create_test_larder().await;

    let mut added = larder
        .add_ingredient(Ingredient {
            name: "avocado".to_string(),
            calories: 160.0,
            ..Default::default()
        })
        .await
        .expect("Failed to add ingredient");

    added.calories = 170.0;
    let updated = larder
        .update_ingredient(added)
        .await
        .expect("Failed to update ingredient");

    let found = larder
        .get_ingredient(updated.id.unwrap())
        .await
        .expect("Failed to get ingredient")
        .expect("Ingredient should exist");
    assert_eq!(found.calories, 170.0);
}
