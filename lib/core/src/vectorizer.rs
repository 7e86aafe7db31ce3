//! Text and quiz vectorizer
//!
//! Converts free text and quiz answers into weighted bag-of-terms vectors over
//! the [`Lexicon`]. Every vector produced here is either zero or unit length.

use crate::lexicon::{Category, Lexicon};
use crate::quiz::QuizAnswers;
use crate::vector::Vector;
use std::sync::Arc;

/// Raw count per selected style before weighting
pub const QUIZ_STYLE_COUNT: f32 = 4.0;
/// Raw count per selected color before weighting
pub const QUIZ_COLOR_COUNT: f32 = 2.0;
/// Raw count per selected season before weighting
pub const QUIZ_SEASON_COUNT: f32 = 3.0;
/// Raw count per selected fit before weighting
pub const QUIZ_FIT_COUNT: f32 = 3.0;
/// Raw count per avoided garment type before weighting
pub const QUIZ_AVOID_COUNT: f32 = -0.8;

/// Split text into lowercase runs of alphabetic characters
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Vectorizer bound to a shared lexicon
#[derive(Debug, Clone)]
pub struct Vectorizer {
    lexicon: Arc<Lexicon>,
}

impl Vectorizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Vector dimension (lexicon size)
    #[inline]
    pub fn dim(&self) -> usize {
        self.lexicon.len()
    }

    pub fn zero(&self) -> Vector {
        Vector::zeros(self.dim())
    }

    /// Count recognized terms, weight by category, normalize.
    pub fn text_to_vector(&self, text: &str) -> Vector {
        let mut raw = self.zero();
        let counts = raw.as_mut_slice();
        for token in tokenize(text) {
            if let Some(i) = self.lexicon.index_of(&token) {
                counts[i] += 1.0;
            }
        }
        self.weigh_and_normalize(&raw)
    }

    /// Content vector for a listing, computed from `"{title} {description}"`
    pub fn listing_vector(&self, title: &str, description: &str) -> Vector {
        self.text_to_vector(&format!("{title} {description}"))
    }

    /// Vector for a set of quiz answers.
    ///
    /// Answers are sanitized first, so terms outside their category contribute nothing.
    pub fn quiz_vector(&self, answers: &QuizAnswers) -> Vector {
        let answers = answers.sanitized(&self.lexicon);
        let mut raw = self.zero();
        let counts = raw.as_mut_slice();

        let groups: [(&[String], Category, f32); 5] = [
            (answers.styles.as_slice(), Category::Style, QUIZ_STYLE_COUNT),
            (answers.colors.as_slice(), Category::Color, QUIZ_COLOR_COUNT),
            (answers.seasons.as_slice(), Category::Season, QUIZ_SEASON_COUNT),
            (answers.fits.as_slice(), Category::Fit, QUIZ_FIT_COUNT),
            (answers.avoid_types.as_slice(), Category::GarmentType, QUIZ_AVOID_COUNT),
        ];

        for (terms, category, count) in groups {
            for term in terms {
                if let Some(i) = self.lexicon.index_in(term, category) {
                    counts[i] += count;
                }
            }
        }

        self.weigh_and_normalize(&raw)
    }

    /// Mean of already-weighted vectors, re-normalized
    pub fn average_vector(&self, vectors: &[Vector]) -> Vector {
        Vector::average(vectors, self.dim())
    }

    fn weigh_and_normalize(&self, raw: &Vector) -> Vector {
        let mut v = raw.hadamard(self.lexicon.weights());
        v.normalize();
        v
    }
}

impl Default for Vectorizer {
    fn default() -> Self {
        Self::new(Arc::new(Lexicon::standard()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(v: &Vector, lexicon: &Lexicon, term: &str) -> f32 {
        v.as_slice()[lexicon.index_of(term).unwrap()]
    }

    #[test]
    fn test_tokenize_letter_runs() {
        let tokens: Vec<String> = tokenize("Blue-denim JACKET, size 10!").collect();
        assert_eq!(tokens, vec!["blue", "denim", "jacket", "size"]);
    }

    #[test]
    fn test_digits_split_tokens() {
        // "y2k" is not a letter run, so it never matches from text
        let vectorizer = Vectorizer::default();
        assert!(vectorizer.text_to_vector("y2k").is_zero());
    }

    #[test]
    fn test_text_vector_is_zero_or_unit() {
        let vectorizer = Vectorizer::default();
        let samples = [
            "",
            "nothing to see here",
            "Black leather boots",
            "boots boots boots winter",
            "Red silk dress, formal evening satin",
        ];
        for text in samples {
            let v = vectorizer.text_to_vector(text);
            let n = v.norm();
            assert!(n == 0.0 || (n - 1.0).abs() < 1e-5, "{text:?} has norm {n}");
        }
    }

    #[test]
    fn test_unrecognized_text_is_zero() {
        let vectorizer = Vectorizer::default();
        let v = vectorizer.text_to_vector("a lovely thing from grandma");
        assert_eq!(v.dim(), vectorizer.dim());
        assert!(v.is_zero());
    }

    #[test]
    fn test_repeated_terms_accumulate() {
        let vectorizer = Vectorizer::default();
        let lexicon = vectorizer.lexicon().clone();
        // boots: 2 * 1.6 = 3.2, black: 1 * 1.0
        let v = vectorizer.text_to_vector("boots BOOTS black");
        let ratio = component(&v, &lexicon, "boots") / component(&v, &lexicon, "black");
        assert!((ratio - 3.2).abs() < 1e-5);
    }

    #[test]
    fn test_quiz_vector_streetwear_black() {
        let vectorizer = Vectorizer::default();
        let lexicon = vectorizer.lexicon().clone();
        let answers = QuizAnswers {
            styles: vec!["streetwear".into()],
            colors: vec!["black".into()],
            ..Default::default()
        };
        let v = vectorizer.quiz_vector(&answers);
        // weighted [8.0, 2.0] normalized
        assert!((component(&v, &lexicon, "streetwear") - 0.9701).abs() < 1e-3);
        assert!((component(&v, &lexicon, "black") - 0.2425).abs() < 1e-3);
        assert!((v.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_quiz_avoid_is_negative() {
        let vectorizer = Vectorizer::default();
        let lexicon = vectorizer.lexicon().clone();
        let answers = QuizAnswers {
            styles: vec!["minimal".into()],
            avoid_types: vec!["suit".into(), "spacesuit".into()],
            ..Default::default()
        };
        let v = vectorizer.quiz_vector(&answers);
        assert!(component(&v, &lexicon, "suit") < 0.0);
        assert!(component(&v, &lexicon, "minimal") > 0.0);
    }

    #[test]
    fn test_quiz_ignores_wrong_category() {
        let vectorizer = Vectorizer::default();
        let answers = QuizAnswers {
            styles: vec!["black".into()],
            fits: vec!["enormous".into()],
            ..Default::default()
        };
        assert!(vectorizer.quiz_vector(&answers).is_zero());
    }

    #[test]
    fn test_listing_vector_joins_title_and_description() {
        let vectorizer = Vectorizer::default();
        let joined = vectorizer.listing_vector("Black leather boots", "winter streetwear");
        let direct = vectorizer.text_to_vector("Black leather boots winter streetwear");
        assert_eq!(joined, direct);
    }
}
