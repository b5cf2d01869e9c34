//! Catalog of self-care tips.
//!
//! The catalog is built once at startup by an explicit constructor and is
//! read-only afterwards.

use crate::config::TipsConfig;
use rand::seq::SliceRandom;
use rand::Rng;

/// Returned by [`TipCatalog::pick_random`] when the catalog has no tips
pub const NO_TIPS_FALLBACK: &str = "No tips available.";

/// Built-in tips, in display order
const DEFAULT_TIPS: [&str; 8] = [
    "Feeling anxious? Try grounding: Name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste.",
    "Low energy? Take a 5-minute walk outside or stretch gently.",
    "Overwhelmed? Write down 3 things you're grateful for right now.",
    "Sad? Listen to your favorite uplifting song and dance along.",
    "Stressed? Close your eyes and imagine a peaceful place for 2 minutes.",
    "Irritable? Drink a glass of water and take 10 deep breaths.",
    "Lonely? Reach out to a friend with a quick message.",
    "Happy? Share your joy—tell someone about it!",
];

/// Fixed, ordered collection of self-care tips
#[derive(Clone, Debug)]
pub struct TipCatalog {
    tips: Vec<String>,
}

impl TipCatalog {
    /// Build a catalog from an explicit list of tips
    pub fn new(tips: Vec<String>) -> Self {
        Self { tips }
    }

    /// Build the catalog with the built-in tips
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_TIPS.iter().map(|t| t.to_string()).collect())
    }

    /// Built-in tips followed by any custom tips from configuration
    ///
    /// Blank custom entries are skipped.
    pub fn from_config(config: &TipsConfig) -> Self {
        let mut catalog = Self::with_defaults();
        let before = catalog.tips.len();
        catalog.tips.extend(
            config
                .custom
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        );
        tracing::debug!(
            "Built tip catalog: {} built-in, {} custom",
            before,
            catalog.tips.len() - before
        );
        catalog
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    /// Pick one tip uniformly at random
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.tips
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(NO_TIPS_FALLBACK)
    }

    /// Every tip with its 1-based position
    pub fn list_all(&self) -> impl Iterator<Item = (usize, &str)> {
        self.tips
            .iter()
            .enumerate()
            .map(|(i, tip)| (i + 1, tip.as_str()))
    }
}
