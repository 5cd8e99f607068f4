//! Recipe document types.
//!
//! Field names match the YAML schema; optional fields are omitted when
//! serializing so round-tripped files stay minimal.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::{fraction, pluralize};

/// Measurement unit for an ingredient quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Barspoon,
    Cup,
    Dash,
    Drop,
    Gram,
    Ounce,
    Rinse,
    Splash,
    Spritz,
    Teaspoon,
    Tablespoon,
    Twist,
}

impl Unit {
    pub const ALL: [Unit; 12] = [
        Unit::Barspoon,
        Unit::Cup,
        Unit::Dash,
        Unit::Drop,
        Unit::Gram,
        Unit::Ounce,
        Unit::Rinse,
        Unit::Splash,
        Unit::Spritz,
        Unit::Teaspoon,
        Unit::Tablespoon,
        Unit::Twist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Barspoon => "barspoon",
            Unit::Cup => "cup",
            Unit::Dash => "dash",
            Unit::Drop => "drop",
            Unit::Gram => "gram",
            Unit::Ounce => "ounce",
            Unit::Rinse => "rinse",
            Unit::Splash => "splash",
            Unit::Spritz => "spritz",
            Unit::Teaspoon => "teaspoon",
            Unit::Tablespoon => "tablespoon",
            Unit::Twist => "twist",
        }
    }
}

/// How the drink is mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preparation {
    Blended,
    Built,
    Stirred,
    Shaken,
}

impl Preparation {
    pub const ALL: [Preparation; 4] = [
        Preparation::Blended,
        Preparation::Built,
        Preparation::Stirred,
        Preparation::Shaken,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preparation::Blended => "blended",
            Preparation::Built => "built",
            Preparation::Stirred => "stirred",
            Preparation::Shaken => "shaken",
        }
    }
}

/// How the drink is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Served {
    #[serde(rename = "neat")]
    Neat,
    #[serde(rename = "on a rock")]
    OnARock,
    #[serde(rename = "on crushed ice")]
    OnCrushedIce,
    #[serde(rename = "on the rocks")]
    OnTheRocks,
    #[serde(rename = "straight up")]
    StraightUp,
}

impl Served {
    pub const ALL: [Served; 5] = [
        Served::Neat,
        Served::OnARock,
        Served::OnCrushedIce,
        Served::OnTheRocks,
        Served::StraightUp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Served::Neat => "neat",
            Served::OnARock => "on a rock",
            Served::OnCrushedIce => "on crushed ice",
            Served::OnTheRocks => "on the rocks",
            Served::StraightUp => "straight up",
        }
    }
}

/// Glassware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glass {
    Collins,
    Coupe,
    Fishbowl,
    Highball,
    Hurricane,
    Lowball,
    Martini,
    Mug,
    Shot,
    Tiki,
    Toddy,
    Wine,
}

impl Glass {
    pub const ALL: [Glass; 12] = [
        Glass::Collins,
        Glass::Coupe,
        Glass::Fishbowl,
        Glass::Highball,
        Glass::Hurricane,
        Glass::Lowball,
        Glass::Martini,
        Glass::Mug,
        Glass::Shot,
        Glass::Tiki,
        Glass::Toddy,
        Glass::Wine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Glass::Collins => "collins",
            Glass::Coupe => "coupe",
            Glass::Fishbowl => "fishbowl",
            Glass::Highball => "highball",
            Glass::Hurricane => "hurricane",
            Glass::Lowball => "lowball",
            Glass::Martini => "martini",
            Glass::Mug => "mug",
            Glass::Shot => "shot",
            Glass::Tiki => "tiki",
            Glass::Toddy => "toddy",
            Glass::Wine => "wine",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Unit, Preparation, Served, Glass);

/// One line of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub ingredient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl Ingredient {
    pub fn new(ingredient: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            unit: None,
            quantity: None,
            notes: None,
            suggested: None,
            examples: Vec::new(),
        }
    }

    /// Quantity and unit as printed before the ingredient name, e.g.
    /// `"1 1/2 ounces"`. Empty when neither is given.
    ///
    /// A missing quantity counts as one for pluralization.
    pub fn measure_label(&self) -> String {
        let mut parts = Vec::new();
        if let Some(quantity) = self.quantity {
            let amount = fraction(quantity);
            if !amount.is_empty() {
                parts.push(amount);
            }
        }
        if let Some(unit) = self.unit {
            let plural = self.quantity.unwrap_or(1.0) > 1.0;
            parts.push(if plural {
                pluralize(unit.as_str())
            } else {
                unit.as_str().to_string()
            });
        }
        parts.join(" ")
    }

    /// Example products other than the suggested one.
    pub fn other_examples(&self) -> Vec<&str> {
        self.examples
            .iter()
            .map(String::as_str)
            .filter(|example| Some(*example) != self.suggested.as_deref())
            .collect()
    }

    /// Case- and whitespace-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.ingredient.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

/// A complete recipe document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "yield", default, skip_serializing_if = "Option::is_none")]
    pub yields: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<Preparation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub served: Option<Served>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glass: Option<Glass>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Recipe {
    pub fn new(title: impl Into<String>, version: u32) -> Self {
        Self {
            title: title.into(),
            version,
            description: None,
            author: None,
            source: None,
            yields: None,
            preparation: None,
            served: None,
            glass: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            notes: None,
        }
    }

    /// `"2 drinks"`, `"1 shot"`, or `None` when no yield is recorded.
    pub fn yield_label(&self) -> Option<String> {
        let count = self.yields?;
        let unit = if self.glass == Some(Glass::Shot) { "shot" } else { "drink" };
        let plural = if count == 1 { "" } else { "s" };
        Some(format!("{count} {unit}{plural}"))
    }

    /// Instructions prefixed with their 1-based step number.
    pub fn numbered_instructions(&self) -> impl Iterator<Item = String> + '_ {
        self.instructions
            .iter()
            .enumerate()
            .map(|(idx, step)| format!("{}. {step}", idx + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_label_combines_quantity_and_unit() {
        let mut ingredient = Ingredient::new("gin");
        ingredient.quantity = Some(1.5);
        ingredient.unit = Some(Unit::Ounce);
        assert_eq!(ingredient.measure_label(), "1 1/2 ounces");
    }

    #[test]
    fn measure_label_singular_and_missing_parts() {
        let mut ingredient = Ingredient::new("bitters");
        assert_eq!(ingredient.measure_label(), "");

        ingredient.unit = Some(Unit::Dash);
        assert_eq!(ingredient.measure_label(), "dash");

        ingredient.quantity = Some(3.0);
        assert_eq!(ingredient.measure_label(), "3 dashes");

        ingredient.unit = None;
        assert_eq!(ingredient.measure_label(), "3");
    }

    #[test]
    fn other_examples_skip_suggested() {
        let mut ingredient = Ingredient::new("rum");
        ingredient.suggested = Some("Plantation".into());
        ingredient.examples = vec!["Plantation".into(), "Appleton".into(), "Smith & Cross".into()];
        assert_eq!(ingredient.other_examples(), vec!["Appleton", "Smith & Cross"]);
    }

    #[test]
    fn ingredient_names_match_loosely() {
        let ingredient = Ingredient::new("Lime Juice ");
        assert!(ingredient.is_named("lime juice"));
        assert!(!ingredient.is_named("lime"));
    }

    #[test]
    fn yield_label_depends_on_glass() {
        let mut recipe = Recipe::new("B-52", 1);
        assert_eq!(recipe.yield_label(), None);

        recipe.yields = Some(1);
        assert_eq!(recipe.yield_label().as_deref(), Some("1 drink"));

        recipe.yields = Some(3);
        recipe.glass = Some(Glass::Shot);
        assert_eq!(recipe.yield_label().as_deref(), Some("3 shots"));
    }

    #[test]
    fn numbered_instructions() {
        let mut recipe = Recipe::new("Daiquiri", 1);
        recipe.instructions = vec!["Shake with ice.".into(), "Strain.".into()];
        let steps: Vec<String> = recipe.numbered_instructions().collect();
        assert_eq!(steps, vec!["1. Shake with ice.", "2. Strain."]);
    }

    #[test]
    fn enums_serialize_as_schema_names() {
        assert_eq!(serde_yaml::to_string(&Served::OnTheRocks).ok().as_deref(), Some("on the rocks\n"));
        assert_eq!(Glass::Highball.to_string(), "highball");
        let unit: Unit = serde_yaml::from_str("tablespoon").unwrap();
        assert_eq!(unit, Unit::Tablespoon);
    }

    #[test]
    fn as_str_round_trips_through_serde() {
        for unit in Unit::ALL {
            let parsed: Unit = serde_yaml::from_str(unit.as_str()).unwrap();
            assert_eq!(parsed, unit);
        }
        for served in Served::ALL {
            let parsed: Served = serde_yaml::from_str(&format!("'{}'", served.as_str())).unwrap();
            assert_eq!(parsed, served);
        }
    }
}
