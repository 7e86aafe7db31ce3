//! Onboarding style quiz answers and persona presets

use crate::lexicon::{Category, Lexicon};
use serde::{Deserialize, Serialize};

/// Raw answers to the style quiz.
///
/// Stored on a user in sanitized form, see [`QuizAnswers::sanitized`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizAnswers {
    #[serde(default, alias = "preferred_styles")]
    pub styles: Vec<String>,
    #[serde(default, alias = "preferred_colors")]
    pub colors: Vec<String>,
    #[serde(default)]
    pub seasons: Vec<String>,
    #[serde(default, alias = "preferred_fits")]
    pub fits: Vec<String>,
    /// Garment types the user rarely wears
    #[serde(default)]
    pub avoid_types: Vec<String>,
}

impl QuizAnswers {
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
            && self.colors.is_empty()
            && self.seasons.is_empty()
            && self.fits.is_empty()
            && self.avoid_types.is_empty()
    }

    /// Lowercase every answer and keep only terms from the matching lexicon
    /// category. Unknown terms are dropped without error.
    pub fn sanitized(&self, lexicon: &Lexicon) -> QuizAnswers {
        let keep = |xs: &[String], category: Category| -> Vec<String> {
            xs.iter()
                .map(|x| x.trim().to_lowercase())
                .filter(|x| lexicon.index_in(x, category).is_some())
                .collect()
        };

        QuizAnswers {
            styles: keep(&self.styles, Category::Style),
            colors: keep(&self.colors, Category::Color),
            seasons: keep(&self.seasons, Category::Season),
            fits: keep(&self.fits, Category::Fit),
            avoid_types: keep(&self.avoid_types, Category::GarmentType),
        }
    }

    /// Merge the presets of the named personas, keeping first occurrences.
    /// Unknown persona names are skipped.
    pub fn from_personas<S: AsRef<str>>(names: &[S]) -> QuizAnswers {
        let mut answers = QuizAnswers::default();
        for name in names {
            let Some(persona) = Persona::find(name.as_ref()) else {
                continue;
            };
            extend_unique(&mut answers.styles, persona.styles);
            extend_unique(&mut answers.colors, persona.colors);
            extend_unique(&mut answers.fits, persona.fits);
            extend_unique(&mut answers.seasons, persona.seasons);
        }
        answers
    }
}

fn extend_unique(out: &mut Vec<String>, items: &[&str]) {
    for item in items {
        if !out.iter().any(|x| x == item) {
            out.push((*item).to_string());
        }
    }
}

/// Canned quiz answers offered during onboarding
#[derive(Debug, Clone, Copy)]
pub struct Persona {
    pub name: &'static str,
    pub styles: &'static [&'static str],
    pub colors: &'static [&'static str],
    pub fits: &'static [&'static str],
    pub seasons: &'static [&'static str],
}

impl Persona {
    pub const ALL: &'static [Persona] = &[
        Persona {
            name: "basic",
            styles: &["minimal", "casual"],
            colors: &["black", "white", "blue", "grey", "beige"],
            fits: &["regular", "relaxed"],
            seasons: &[],
        },
        Persona {
            name: "uni going",
            styles: &["casual", "streetwear"],
            colors: &["blue", "black", "white", "navy"],
            fits: &["oversized", "regular"],
            seasons: &["autumn", "spring"],
        },
        Persona {
            name: "classy",
            styles: &["formal", "minimal", "preppy"],
            colors: &["black", "cream", "navy", "white", "red"],
            fits: &["slim", "regular"],
            seasons: &[],
        },
        Persona {
            name: "sporty",
            styles: &["sport", "casual"],
            colors: &["black", "grey", "blue", "white"],
            fits: &["relaxed", "regular"],
            seasons: &["summer", "autumn"],
        },
        Persona {
            name: "traditional",
            styles: &["formal", "boho"],
            colors: &["red", "cream", "green", "yellow"],
            fits: &["regular", "slim"],
            seasons: &[],
        },
        Persona {
            name: "street",
            styles: &["streetwear", "y2k"],
            colors: &["black", "white", "blue", "red"],
            fits: &["oversized", "relaxed"],
            seasons: &["winter", "autumn"],
        },
    ];

    pub fn find(name: &str) -> Option<&'static Persona> {
        let name = name.trim();
        Self::ALL.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
