//! Closed vocabulary of clothing terms.
//!
//! Every term belongs to exactly one [`Category`]; the category fixes the
//! term's weight. A term's position in the lexicon is its vector index.

use crate::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Semantic group of a lexicon term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    GarmentType,
    Style,
    Season,
    Fit,
    Color,
    Material,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::GarmentType,
        Category::Style,
        Category::Season,
        Category::Fit,
        Category::Color,
        Category::Material,
    ];

    /// Importance weight shared by every term in the category
    #[inline]
    pub fn weight(self) -> f32 {
        match self {
            Category::Style => 2.0,
            Category::GarmentType => 1.6,
            Category::Fit => 1.4,
            Category::Season => 1.3,
            Category::Color | Category::Material => 1.0,
        }
    }
}

pub const GARMENT_TYPES: &[&str] = &[
    "dress", "jacket", "coat", "shirt", "top", "jeans", "pants", "skirt", "sneakers", "boots",
    "hoodie", "suit",
];
pub const STYLES: &[&str] = &[
    "formal", "casual", "vintage", "streetwear", "sport", "festival", "y2k", "minimal", "preppy",
    "boho",
];
pub const SEASONS: &[&str] = &["winter", "summer", "spring", "autumn"];
pub const FITS: &[&str] = &["oversized", "slim", "regular", "relaxed"];
pub const COLORS: &[&str] = &[
    "black", "white", "red", "blue", "green", "yellow", "brown", "beige", "purple", "pink", "navy",
    "cream", "grey",
];
pub const MATERIALS: &[&str] = &[
    "cotton", "denim", "leather", "silk", "linen", "wool", "satin", "cashmere",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub term: String,
    pub category: Category,
}

/// Immutable vocabulary, built once and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    index: AHashMap<String, usize>,
    weights: Vec<f32>,
}

impl Lexicon {
    /// Build a lexicon from entries in vector-position order.
    ///
    /// Terms are lowercased. A term listed twice is rejected.
    pub fn new(entries: Vec<LexiconEntry>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(entries.len());
        let mut normalized = Vec::with_capacity(entries.len());

        for entry in entries {
            let term = entry.term.trim().to_lowercase();
            if term.is_empty() {
                return Err(Error::InvalidConfig("empty lexicon term".to_string()));
            }
            if index.insert(term.clone(), normalized.len()).is_some() {
                return Err(Error::InvalidConfig(format!(
                    "lexicon term {term:?} listed more than once"
                )));
            }
            normalized.push(LexiconEntry {
                term,
                category: entry.category,
            });
        }

        let weights = normalized.iter().map(|e| e.category.weight()).collect();

        Ok(Self {
            entries: normalized,
            index,
            weights,
        })
    }

    /// The built-in clothing vocabulary
    pub fn standard() -> Self {
        let groups: [(Category, &[&str]); 6] = [
            (Category::GarmentType, GARMENT_TYPES),
            (Category::Style, STYLES),
            (Category::Season, SEASONS),
            (Category::Fit, FITS),
            (Category::Color, COLORS),
            (Category::Material, MATERIALS),
        ];

        let entries = groups
            .iter()
            .flat_map(|(category, terms)| {
                terms.iter().map(move |term| LexiconEntry {
                    term: (*term).to_string(),
                    category: *category,
                })
            })
            .collect();

        // The built-in tables have no duplicates; covered by tests.
        match Self::new(entries) {
            Ok(lexicon) => lexicon,
            Err(e) => unreachable!("standard lexicon is invalid: {e}"),
        }
    }

    /// Vector dimension
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Index of `term` only if it belongs to `category`
    pub fn index_in(&self, term: &str, category: Category) -> Option<usize> {
        self.index_of(term)
            .filter(|&i| self.entries[i].category == category)
    }

    pub fn category_of(&self, term: &str) -> Option<Category> {
        self.index_of(term).map(|i| self.entries[i].category)
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Per-position weight array
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn terms_in(&self, category: Category) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.category == category)
            .map(|e| e.term.as_str())
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}
