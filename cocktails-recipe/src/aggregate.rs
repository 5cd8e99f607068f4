//! Shopping-list view across many recipes.

use std::collections::BTreeMap;

use crate::recipe::Recipe;

/// Map each ingredient name to the titles of the recipes that use it.
///
/// Names are grouped case-insensitively and reported in the spelling they
/// first appear with. Titles keep the order of `recipes` and are not
/// repeated when a recipe lists the same ingredient twice.
pub fn aggregate(recipes: &[Recipe]) -> BTreeMap<String, Vec<String>> {
    let mut by_key: BTreeMap<String, (String, Vec<String>)> = BTreeMap::new();
    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            let name = ingredient.ingredient.trim();
            let (_, titles) = by_key
                .entry(name.to_lowercase())
                .or_insert_with(|| (name.to_string(), Vec::new()));
            if !titles.contains(&recipe.title) {
                titles.push(recipe.title.clone());
            }
        }
    }
    by_key.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Ingredient;

    fn recipe(title: &str, ingredients: &[&str]) -> Recipe {
        let mut recipe = Recipe::new(title, 1);
        recipe.ingredients = ingredients.iter().map(|name| Ingredient::new(*name)).collect();
        recipe
    }

    #[test]
    fn groups_titles_by_ingredient() {
        let recipes = vec![
            recipe("Negroni", &["Gin", "Campari", "Sweet Vermouth"]),
            recipe("Martini", &["gin", "Dry Vermouth", "Gin"]),
        ];
        let list = aggregate(&recipes);

        let keys: Vec<&str> = list.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Campari", "Dry Vermouth", "Gin", "Sweet Vermouth"]);
        assert_eq!(list["Gin"], vec!["Negroni", "Martini"]);
        assert_eq!(list["Campari"], vec!["Negroni"]);
    }

    #[test]
    fn empty_input() {
        assert!(aggregate(&[]).is_empty());
    }
}
