use jiff::civil::datetime;

use super::{Ingredient, Meal, MealIngredient, Record};

#[test]
fn date_round_trips_through_wire_format() {
    let meal = Meal {
        name: Some("obiad".to_string()),
        date: datetime(2017, 1, 25, 13, 40, 0, 0),
        ..Default::default()
    };

    let json = meal.dump().expect("Failed to dump meal");
    assert!(json.contains("\"2017-01-25 13:40\""));

    let parsed = Meal::load(&json).expect("Failed to load meal");
    assert_eq!(parsed.date, datetime(2017, 1, 25, 13, 40, 0, 0));
    assert_eq!(parsed.name, Some("obiad".to_string()));
}

#[test]
fn bad_date_format_is_an_error() {
    assert!(Meal::load(r#"{"date": "2017-01-25T13:40:00Z"}"#).is_err());
    assert!(Meal::load(r#"{"date": "2017-01-25 13:40:00"}"#).is_err());
}

#[test]
fn meal_date_defaults_to_now() {
    let meal = Meal::load(r#"{"name": "kolacja"}"#).expect("Failed to load meal");

    assert!(meal.id.is_none());
    // wire precision is the minute
    assert_eq!(meal.date.second(), 0);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(Ingredient::load(r#"{"name": "jajka", "vitamins": 12}"#).is_err());
    assert!(Meal::load(r#"{"title": "obiad"}"#).is_err());
}

#[test]
fn numeric_fields_default_to_zero() {
    let ingredient = Ingredient::load(r#"{"name": "woda"}"#).expect("Failed to load ingredient");

    assert_eq!(ingredient.id, None);
    assert_eq!(ingredient.calories, 0.0);
    assert_eq!(ingredient.fats, 0.0);
    assert_eq!(ingredient.sugar, 0.0);
    assert_eq!(ingredient.veg_protein, 0.0);
    assert_eq!(ingredient.protein, 0.0);
    assert_eq!(ingredient.carbo, 0.0);
}

#[test]
fn meal_ingredient_requires_quantity() {
    assert!(MealIngredient::load(r#"{"meal_id": 1, "ingredient_id": 2}"#).is_err());
}

#[test]
fn nested_meal_ingredients_load() {
    let json = r#"{
        "name": "śniadanie",
        "date": "2020-05-04 09:00",
        "meal_ingredients": [
            {"quantity": 60.0, "ingredient": {"name": "jajka", "calories": 139.0}},
            {"quantity": 15.0, "ingredient_id": 7}
        ]
    }"#;

    let meal = Meal::load(json).expect("Failed to load meal");

    assert_eq!(meal.meal_ingredients.len(), 2);
    let first = &meal.meal_ingredients[0];
    assert_eq!(first.ingredient.as_ref().unwrap().name, "jajka");
    assert!(first.ingredient_id.is_none());
    assert_eq!(meal.meal_ingredients[1].ingredient_id, Some(7));
}

#[test]
fn transient_records_serialize_without_identity() {
    let ingredient = Ingredient {
        name: "avocado".to_string(),
        ..Default::default()
    };

    let json = ingredient.dump().expect("Failed to dump ingredient");
    assert!(!json.contains("\"id\""));

    let meal = Meal::default();
    let json = meal.dump().expect("Failed to dump meal");
    assert!(!json.contains("\"id\""));
    assert!(!json.contains("meal_ingredients"));
}

#[test]
fn insert_rows_exclude_identity_and_nested_fields() {
    let meal = Meal {
        name: Some("obiad".to_string()),
        date: datetime(2017, 1, 25, 13, 40, 0, 0),
        meal_ingredients: vec![MealIngredient {
            quantity: 60.0,
            ..Default::default()
        }],
        ..Default::default()
    };

    let fields: Vec<&str> = meal.insert_row().iter().map(|(name, _)| *name).collect();
    assert_eq!(fields, vec!["name", "date"]);

    let link = MealIngredient {
        ingredient: Some(Ingredient::default()),
        quantity: 1.0,
        ..Default::default()
    };
    let fields: Vec<&str> = link.insert_row().iter().map(|(name, _)| *name).collect();
    assert_eq!(fields, vec!["meal_id", "ingredient_id", "quantity"]);
}
