//! Lookup metrics.
//!
//! Counts lookup outcomes and language fallbacks for one `ItemsLang`
//! context. Counters are atomics so any number of readers can record into
//! them through a shared reference.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters owned by a translation context.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Lookups that returned a translation
    hits: AtomicUsize,

    /// Lookups that returned nothing
    misses: AtomicUsize,

    /// Free-text languages that fell back to the default language
    language_fallbacks: AtomicUsize,

    /// Invalid-language warnings actually emitted
    warnings_emitted: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup that found a translation.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that found nothing.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup outcome.
    pub fn record_lookup(&self, found: bool) {
        if found {
            self.record_hit();
        } else {
            self.record_miss();
        }
    }

    /// Record a fallback to the default language.
    pub fn record_language_fallback(&self) {
        self.language_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an emitted warning.
    pub fn record_warning(&self) {
        self.warnings_emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn language_fallbacks(&self) -> usize {
        self.language_fallbacks.load(Ordering::Relaxed)
    }

    pub fn warnings_emitted(&self) -> usize {
        self.warnings_emitted.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let misses = self.misses();
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            misses,
            hit_rate,
            language_fallbacks: self.language_fallbacks(),
            warnings_emitted: self.warnings_emitted(),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.language_fallbacks.store(0, Ordering::Relaxed);
        self.warnings_emitted.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of lookups that found a translation
    pub hits: usize,

    /// Number of lookups that found nothing
    pub misses: usize,

    /// Hit rate as a percentage (0-100)
    pub hit_rate: f64,

    /// Number of fallbacks to the default language
    pub language_fallbacks: usize,

    /// Number of warnings emitted
    pub warnings_emitted: usize,
}
