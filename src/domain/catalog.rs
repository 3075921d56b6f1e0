//! Seed catalog: named, immutable starting patterns.
//!
//! The catalog is an ordinary value built once at startup and passed by
//! reference to whoever needs a seed. Unknown names resolve to the
//! [`DEFAULT_SEED`] pattern instead of failing.

use std::collections::BTreeMap;

use tracing::debug;

use super::Pattern;

/// Name of the pattern returned for unknown lookups
pub const DEFAULT_SEED: &str = "infinite";

/// Classic seed patterns
pub mod presets {
    use super::*;

    /// Diehard - vanishes after 130 generations
    pub fn diehard() -> Pattern {
        Pattern::new(
            "diehard",
            "Methuselah - dies out at gen 130",
            &[
                &[0, 0, 0, 0, 0, 0, 1, 0],
                &[1, 1, 0, 0, 0, 0, 0, 0],
                &[0, 1, 0, 0, 0, 1, 1, 1],
            ],
        )
    }

    /// Boat - still life
    pub fn boat() -> Pattern {
        Pattern::new(
            "boat",
            "Still life",
            &[
                &[1, 1, 0],
                &[1, 0, 1],
                &[0, 1, 0],
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "r_pentomino",
            "Methuselah - stabilizes at gen 1103",
            &[
                &[0, 1, 1],
                &[1, 1, 0],
                &[0, 1, 0],
            ],
        )
    }

    /// Row of ten cells that evolves into the pentadecathlon (period 15)
    pub fn pentadecathlon() -> Pattern {
        Pattern::new(
            "pentadecathlon",
            "Oscillator (period 15)",
            &[&[1, 1, 1, 1, 1, 1, 1, 1, 1, 1]],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            "Oscillator (period 2)",
            &[
                &[1, 1, 0, 0],
                &[1, 1, 0, 0],
                &[0, 0, 1, 1],
                &[0, 0, 1, 1],
            ],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "acorn",
            "Methuselah - stabilizes at gen 5206",
            &[
                &[0, 1, 0, 0, 0, 0, 0],
                &[0, 0, 0, 1, 0, 0, 0],
                &[1, 1, 0, 0, 1, 1, 1],
            ],
        )
    }

    /// Lightweight spaceship
    pub fn spaceship() -> Pattern {
        Pattern::new(
            "spaceship",
            "Lightweight spaceship (period 4)",
            &[
                &[0, 0, 1, 1, 0],
                &[1, 1, 0, 1, 1],
                &[1, 1, 1, 1, 0],
                &[0, 1, 1, 0, 0],
            ],
        )
    }

    /// Block-laying switch engine
    pub fn block_switch_engine() -> Pattern {
        Pattern::new(
            "block_switch_engine",
            "Infinite growth",
            &[
                &[0, 0, 0, 0, 0, 0, 1, 0],
                &[0, 0, 0, 0, 1, 0, 1, 1],
                &[0, 0, 0, 0, 1, 0, 1, 0],
                &[0, 0, 0, 0, 1, 0, 0, 0],
                &[0, 0, 1, 0, 0, 0, 0, 0],
                &[1, 0, 1, 0, 0, 0, 0, 0],
            ],
        )
    }

    /// Smallest pattern with unbounded growth on an infinite plane
    pub fn infinite() -> Pattern {
        Pattern::new(
            "infinite",
            "Infinite growth (5x5)",
            &[
                &[1, 1, 1, 0, 1],
                &[1, 0, 0, 0, 0],
                &[0, 0, 0, 1, 1],
                &[0, 1, 1, 0, 1],
                &[1, 0, 1, 0, 1],
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Moves diagonally (period 4)",
            &[
                &[0, 0, 1],
                &[1, 0, 1],
                &[0, 1, 1],
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            diehard(),
            boat(),
            r_pentomino(),
            pentadecathlon(),
            beacon(),
            acorn(),
            spaceship(),
            block_switch_engine(),
            infinite(),
            glider(),
        ]
    }
}

/// Immutable name -> pattern mapping with a fallback seed
#[derive(Clone, Debug)]
pub struct SeedCatalog {
    seeds: BTreeMap<&'static str, Pattern>,
    fallback: Pattern,
}

impl SeedCatalog {
    /// Catalog holding every preset, falling back to `infinite`
    pub fn builtin() -> Self {
        Self::from_patterns(presets::all_patterns(), presets::infinite())
    }

    /// Catalog from arbitrary patterns, keyed by their names.
    /// Later patterns replace earlier ones with the same name.
    pub fn from_patterns(patterns: impl IntoIterator<Item = Pattern>, fallback: Pattern) -> Self {
        let seeds = patterns
            .into_iter()
            .map(|pattern| (pattern.name, pattern))
            .collect();
        Self { seeds, fallback }
    }

    /// Pattern registered under `name`, or the fallback seed
    pub fn lookup(&self, name: &str) -> &Pattern {
        self.seeds.get(name).unwrap_or_else(|| {
            debug!(seed = name, fallback = self.fallback.name, "unknown seed, using fallback");
            &self.fallback
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seeds.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.seeds.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> + '_ {
        self.seeds.values()
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_falls_back_to_infinite() {
        let catalog = SeedCatalog::builtin();
        assert_eq!(catalog.lookup("nonexistent-name"), catalog.lookup("infinite"));
        assert_eq!(catalog.lookup("").name, DEFAULT_SEED);
    }

    #[test]
    fn test_known_names_resolve_to_themselves() {
        let catalog = SeedCatalog::builtin();
        for name in catalog.names() {
            assert_eq!(catalog.lookup(name).name, name);
        }
    }

    #[test]
    fn test_builtin_contains_every_preset() {
        let catalog = SeedCatalog::builtin();
        assert_eq!(catalog.names().count(), presets::all_patterns().len());
        assert!(catalog.contains("glider"));
        assert!(catalog.contains(DEFAULT_SEED));
        assert!(!catalog.contains("Glider"));
    }

    #[test]
    fn test_presets_are_rectangular_and_nonempty() {
        for pattern in presets::all_patterns() {
            let (width, height) = pattern.dimensions();
            assert!(width > 0 && height > 0, "{} is empty", pattern.name);
            assert!(pattern.population() > 0, "{} has no live cells", pattern.name);
        }
    }

    #[test]
    fn test_custom_fallback() {
        let catalog = SeedCatalog::from_patterns([presets::boat()], presets::glider());
        assert_eq!(catalog.lookup("boat").name, "boat");
        assert_eq!(catalog.lookup("acorn").name, "glider");
    }
}
