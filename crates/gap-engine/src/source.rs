//! Ports to the upstream facility/boundary provider and its cache.
//!
//! # Pluggability
//!
//! The engine never talks to a map service directly.  Applications implement
//! [`FacilitySource`] over whatever provider they use (an OSM extract, a
//! geocoding API, a CSV dump) and optionally wrap it in a [`CachedSource`]
//! so repeated runs over the same districts skip the upstream round-trip.
//! The cache is an injected [`FacilityCache`], never a process global.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use gap_core::{Facility, FacilityCategory, Region};

use crate::UpstreamError;

/// Short report key for a district query: the text before the first comma.
///
/// `"Oktyabrsky district, Bishkek, Kyrgyzstan"` → `"Oktyabrsky district"`.
pub fn district_label(query: &str) -> &str {
    query.split(',').next().unwrap_or(query).trim()
}

// ── FacilitySource ────────────────────────────────────────────────────────────

/// Supplies boundary and facility data per district.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so districts can be fetched from
/// Rayon workers when the `parallel` feature is on.
pub trait FacilitySource: Send + Sync {
    /// Bounding box of `district`.
    fn boundary(&self, district: &str) -> Result<Region, UpstreamError>;

    /// Facilities inside `district`, restricted to `category` when given.
    fn facilities(
        &self,
        district: &str,
        category: Option<&FacilityCategory>,
    ) -> Result<Vec<Facility>, UpstreamError>;
}

impl<S: FacilitySource + ?Sized> FacilitySource for &S {
    fn boundary(&self, district: &str) -> Result<Region, UpstreamError> {
        (**self).boundary(district)
    }

    fn facilities(
        &self,
        district: &str,
        category: Option<&FacilityCategory>,
    ) -> Result<Vec<Facility>, UpstreamError> {
        (**self).facilities(district, category)
    }
}

// ── FacilityCache ─────────────────────────────────────────────────────────────

/// Cache key for one facility lookup.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    pub district: String,
    pub category: Option<FacilityCategory>,
}

impl CacheKey {
    pub fn new(district: &str, category: Option<&FacilityCategory>) -> Self {
        Self { district: district.to_owned(), category: category.cloned() }
    }
}

/// Storage for previously fetched facility lists.
///
/// Only successful lookups are stored; a failed fetch is retried next time.
pub trait FacilityCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<Vec<Facility>>;
    fn put(&self, key: CacheKey, facilities: Vec<Facility>);
}

/// In-process [`FacilityCache`] backed by a mutex-guarded `HashMap`.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<CacheKey, Vec<Facility>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl FacilityCache for MemoryCache {
    fn get(&self, key: &CacheKey) -> Option<Vec<Facility>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn put(&self, key: CacheKey, facilities: Vec<Facility>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, facilities);
    }
}

// ── CachedSource ──────────────────────────────────────────────────────────────

/// A [`FacilitySource`] that consults a [`FacilityCache`] before the inner
/// source.  Boundaries are passed through uncached.
pub struct CachedSource<S: FacilitySource, C: FacilityCache> {
    inner: S,
    cache: C,
}

impl<S: FacilitySource, C: FacilityCache> CachedSource<S, C> {
    pub fn new(inner: S, cache: C) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn into_inner(self) -> (S, C) {
        (self.inner, self.cache)
    }
}

impl<S: FacilitySource, C: FacilityCache> FacilitySource for CachedSource<S, C> {
    fn boundary(&self, district: &str) -> Result<Region, UpstreamError> {
        self.inner.boundary(district)
    }

    fn facilities(
        &self,
        district: &str,
        category: Option<&FacilityCategory>,
    ) -> Result<Vec<Facility>, UpstreamError> {
        let key = CacheKey::new(district, category);
        if let Some(hit) = self.cache.get(&key) {
            log::debug!("facility cache hit for {district}");
            return Ok(hit);
        }
        let fetched = self.inner.facilities(district, category)?;
        self.cache.put(key, fetched.clone());
        Ok(fetched)
    }
}
