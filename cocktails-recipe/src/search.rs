//! Finding recipes by what is in the cabinet.

use crate::recipe::{Ingredient, Recipe};

/// How well a recipe matches a list of available ingredients.
#[derive(Debug, Clone)]
pub struct RecipeScore<'a> {
    pub recipe: &'a Recipe,
    /// Ingredients not covered by any available name.
    pub missing: Vec<&'a Ingredient>,
}

impl<'a> RecipeScore<'a> {
    pub fn new<S: AsRef<str>>(recipe: &'a Recipe, available: &[S]) -> Self {
        let missing = recipe
            .ingredients
            .iter()
            .filter(|ingredient| !available.iter().any(|name| ingredient.is_named(name.as_ref())))
            .collect();
        Self { recipe, missing }
    }

    /// Number of ingredients already on hand.
    pub fn score(&self) -> usize {
        self.recipe.ingredients.len() - self.missing.len()
    }

    pub fn missing_names(&self) -> Vec<&'a str> {
        self.missing.iter().map(|i| i.ingredient.as_str()).collect()
    }
}

/// Score every recipe, keep those missing at most `max_missing`
/// ingredients, and order them by score then title.
pub fn rank<'a, S: AsRef<str>>(
    recipes: &'a [Recipe],
    available: &[S],
    max_missing: usize,
) -> Vec<RecipeScore<'a>> {
    let mut scores: Vec<RecipeScore<'a>> = recipes
        .iter()
        .map(|recipe| RecipeScore::new(recipe, available))
        .filter(|score| score.missing.len() <= max_missing)
        .collect();
    scores.sort_by(|a, b| {
        a.score()
            .cmp(&b.score())
            .then_with(|| a.recipe.title.cmp(&b.recipe.title))
    });
    scores
}

/// Recipes in which every term appears, case-insensitively, inside the
/// name of at least one ingredient.
pub fn containing_all<'a, S: AsRef<str>>(recipes: &'a [Recipe], terms: &[S]) -> Vec<&'a Recipe> {
    let terms: Vec<String> = terms.iter().map(|t| t.as_ref().to_lowercase()).collect();
    recipes
        .iter()
        .filter(|recipe| {
            terms.iter().all(|term| {
                recipe
                    .ingredients
                    .iter()
                    .any(|i| i.ingredient.to_lowercase().contains(term.as_str()))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str, ingredients: &[&str]) -> Recipe {
        let mut recipe = Recipe::new(title, 1);
        recipe.ingredients = ingredients.iter().map(|name| Ingredient::new(*name)).collect();
        recipe
    }

    fn library() -> Vec<Recipe> {
        vec![
            recipe("Negroni", &["Gin", "Campari", "Sweet Vermouth"]),
            recipe("Gin and Tonic", &["Gin", "Tonic Water", "Lime"]),
            recipe("Gimlet", &["Gin", "Lime Juice", "Simple Syrup"]),
            recipe("Daiquiri", &["White Rum", "Lime Juice", "Simple Syrup"]),
        ]
    }

    #[test]
    fn score_counts_available_ingredients() {
        let recipes = library();
        let score = RecipeScore::new(&recipes[1], &[" gin ", "TONIC WATER"]);
        assert_eq!(score.score(), 2);
        assert_eq!(score.missing_names(), vec!["Lime"]);
    }

    #[test]
    fn rank_filters_by_missing_and_sorts() {
        let recipes = library();
        let available = ["gin", "lime juice", "simple syrup", "tonic water"];

        let exact = rank(&recipes, &available, 0);
        let titles: Vec<&str> = exact.iter().map(|s| s.recipe.title.as_str()).collect();
        assert_eq!(titles, vec!["Gimlet"]);

        let loose = rank(&recipes, &available, 1);
        let titles: Vec<&str> = loose.iter().map(|s| s.recipe.title.as_str()).collect();
        // Daiquiri and Gin and Tonic both score 2; ties break on title.
        assert_eq!(titles, vec!["Daiquiri", "Gin and Tonic", "Gimlet"]);
    }

    #[test]
    fn rank_with_nothing_available() {
        let recipes = library();
        let none: [&str; 0] = [];
        assert!(rank(&recipes, &none, 2).is_empty());
        assert_eq!(rank(&recipes, &none, 3).len(), 4);
    }

    #[test]
    fn containing_all_matches_substrings() {
        let recipes = library();
        let found = containing_all(&recipes, &["LIME", "gin"]);
        let titles: Vec<&str> = found.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Gin and Tonic", "Gimlet"]);

        assert_eq!(containing_all(&recipes, &["rum", "syrup"]).len(), 1);
        assert!(containing_all(&recipes, &["mezcal"]).is_empty());
    }
}
