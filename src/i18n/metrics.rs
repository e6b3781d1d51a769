//! Lookup metrics for the translation engine.
//!
//! Tracks how often keys resolve directly, fall back to the default
//! language, or are missing altogether (and render as the raw key).

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters owned by a single [`Translator`](crate::i18n::Translator).
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Keys found in the requested language
    direct_hits: AtomicUsize,

    /// Keys served from the default language
    fallbacks: AtomicUsize,

    /// Keys found nowhere and rendered verbatim
    misses: AtomicUsize,
}

impl TranslationMetrics {
    pub fn record_direct_hit(&self) {
        self.direct_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn direct_hits(&self) -> usize {
        self.direct_hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let direct_hits = self.direct_hits();
        let fallbacks = self.fallbacks();
        let misses = self.misses();
        let lookups = direct_hits + fallbacks + misses;

        let rate = |n: usize| {
            if lookups > 0 {
                (n as f64 / lookups as f64) * 100.0
            } else {
                0.0
            }
        };

        MetricsReport {
            lookups,
            direct_hits,
            fallbacks,
            misses,
            fallback_rate: rate(fallbacks),
            miss_rate: rate(misses),
        }
    }
}

/// Snapshot of translation lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total lookups performed
    pub lookups: usize,

    pub direct_hits: usize,

    pub fallbacks: usize,

    pub misses: usize,

    /// Fallback lookups as a percentage (0-100)
    pub fallback_rate: f64,

    /// Missing-key lookups as a percentage (0-100)
    pub miss_rate: f64,
}
