//! Category taxonomy and keyword matching.
//!
//! The upstream API has no reliable category ids, so filtering is
//! heuristic: each storefront category carries a short list of lowercase
//! keyword fragments, and a plant belongs to the category when any
//! fragment appears in its category, name, or short description
//! (case-insensitive substring match). The matcher sits behind the
//! `Classifier` trait so the heuristic can be swapped without touching
//! the store.

use rustc_hash::FxHashMap;
use smallvec::{smallvec, SmallVec};

use crate::plant::Plant;

/// Keyword fragment list per category. Two inline slots cover every
/// current rule.
type Fragments = SmallVec<[&'static str; 2]>;

// ============================================================================
// Category Ids
// ============================================================================

/// The fixed storefront categories, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryId {
    All,
    Fruit,
    Flowering,
    Shade,
    Medicinal,
    Timber,
    Evergreen,
    Ornamental,
    Bamboo,
    Climbers,
    Aquatic,
}

/// Sidebar display order.
pub const CATEGORY_IDS: [CategoryId; 11] = [
    CategoryId::All,
    CategoryId::Fruit,
    CategoryId::Flowering,
    CategoryId::Shade,
    CategoryId::Medicinal,
    CategoryId::Timber,
    CategoryId::Evergreen,
    CategoryId::Ornamental,
    CategoryId::Bamboo,
    CategoryId::Climbers,
    CategoryId::Aquatic,
];

impl CategoryId {
    /// URL slug for routes and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::All => "all",
            CategoryId::Fruit => "fruit",
            CategoryId::Flowering => "flowering",
            CategoryId::Shade => "shade",
            CategoryId::Medicinal => "medicinal",
            CategoryId::Timber => "timber",
            CategoryId::Evergreen => "evergreen",
            CategoryId::Ornamental => "ornamental",
            CategoryId::Bamboo => "bamboo",
            CategoryId::Climbers => "climbers",
            CategoryId::Aquatic => "aquatic",
        }
    }

    /// Human-readable sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryId::All => "All Trees",
            CategoryId::Fruit => "Fruit Trees",
            CategoryId::Flowering => "Flowering Trees",
            CategoryId::Shade => "Shade Trees",
            CategoryId::Medicinal => "Medicinal Trees",
            CategoryId::Timber => "Timber Trees",
            CategoryId::Evergreen => "Evergreen Trees",
            CategoryId::Ornamental => "Ornamental Plants",
            CategoryId::Bamboo => "Bamboo",
            CategoryId::Climbers => "Climbers",
            CategoryId::Aquatic => "Aquatic Plants",
        }
    }

    /// Parse a URL slug. Unknown slugs yield `None`.
    pub fn from_slug(slug: &str) -> Option<CategoryId> {
        match slug {
            "all" => Some(CategoryId::All),
            "fruit" => Some(CategoryId::Fruit),
            "flowering" => Some(CategoryId::Flowering),
            "shade" => Some(CategoryId::Shade),
            "medicinal" => Some(CategoryId::Medicinal),
            "timber" => Some(CategoryId::Timber),
            "evergreen" => Some(CategoryId::Evergreen),
            "ornamental" => Some(CategoryId::Ornamental),
            "bamboo" => Some(CategoryId::Bamboo),
            "climbers" => Some(CategoryId::Climbers),
            "aquatic" => Some(CategoryId::Aquatic),
            _ => None,
        }
    }
}

// ============================================================================
// Classifier
// ============================================================================

/// Swappable category membership test.
pub trait Classifier: Send + Sync {
    /// Does this plant belong to the category?
    fn matches(&self, plant: &Plant, category: CategoryId) -> bool;

    /// Filter a plant list by slug.
    ///
    /// "all" returns the input order untouched; an unknown slug matches
    /// nothing and returns an empty list.
    fn filter(&self, plants: &[Plant], slug: &str) -> Vec<Plant> {
        match CategoryId::from_slug(slug) {
            Some(CategoryId::All) => plants.to_vec(),
            Some(id) => plants
                .iter()
                .filter(|plant| self.matches(plant, id))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Keyword-fragment classifier used by the storefront.
pub struct KeywordClassifier {
    rules: FxHashMap<CategoryId, Fragments>,
}

impl KeywordClassifier {
    pub fn new() -> Self {
        let mut rules: FxHashMap<CategoryId, Fragments> = FxHashMap::default();
        rules.insert(CategoryId::Fruit, smallvec!["fruit"]);
        rules.insert(CategoryId::Flowering, smallvec!["flower", "blossom"]);
        rules.insert(CategoryId::Shade, smallvec!["shade"]);
        rules.insert(CategoryId::Medicinal, smallvec!["medicin", "herb"]);
        rules.insert(CategoryId::Timber, smallvec!["timber", "wood"]);
        rules.insert(CategoryId::Evergreen, smallvec!["evergreen"]);
        rules.insert(CategoryId::Ornamental, smallvec!["ornamental", "decor"]);
        rules.insert(CategoryId::Bamboo, smallvec!["bamboo"]);
        rules.insert(CategoryId::Climbers, smallvec!["climber", "vine"]);
        rules.insert(CategoryId::Aquatic, smallvec!["aquatic", "water"]);
        Self { rules }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for KeywordClassifier {
    fn matches(&self, plant: &Plant, category: CategoryId) -> bool {
        if category == CategoryId::All {
            return true;
        }
        let fragments = match self.rules.get(&category) {
            Some(fragments) => fragments,
            None => return false,
        };

        let category_text = plant.category.to_lowercase();
        let name = plant.name.to_lowercase();
        let short = plant.short_description.to_lowercase();

        fragments.iter().any(|&fragment| {
            category_text.contains(fragment) || name.contains(fragment) || short.contains(fragment)
        })
    }
}
