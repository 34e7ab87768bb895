//! Random accompanying phrases for automatic archive replies.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Phrases that may precede the rewritten links in an automatic reply.
pub const FLAVOR_PHRASES: &[&str] = &[
    "📦 Here's an archived copy:",
    "🗄️ Paywall? Try the archive:",
    "🔗 Archived for your convenience:",
    "📚 From the archives:",
    "🕰️ A snapshot, just in case:",
];

/// Picks one of [`FLAVOR_PHRASES`] uniformly at random.
pub fn random_phrase<G: Rng + ?Sized>(rng: &mut G) -> &'static str {
    FLAVOR_PHRASES.choose(rng).copied().unwrap_or(FLAVOR_PHRASES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_phrase_comes_from_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(FLAVOR_PHRASES.contains(&random_phrase(&mut rng)));
        }
    }

    #[test]
    fn test_all_phrases_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(random_phrase(&mut rng));
        }
        assert_eq!(seen.len(), FLAVOR_PHRASES.len());
    }
}
