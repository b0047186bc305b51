//! Name-based facility filtering.
//!
//! Upstream amenity tags are noisy: a query for schools also returns
//! driving schools, music schools, sports schools, and after-school centres.
//! `NameFilter` keeps a facility only if its lower-cased name contains at
//! least one include keyword (when any are configured) and none of the
//! exclude keywords.

use gap_core::Facility;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl NameFilter {
    /// A filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for general-education schools in Russian-language OSM data:
    /// names must contain "школа" and must not name a driving, music,
    /// sports, or art school, a centre, or supplementary education.
    pub fn general_schools() -> Self {
        Self::new()
            .include("школа")
            .exclude("авто")
            .exclude("муз")
            .exclude("спорт")
            .exclude("искусств")
            .exclude("центр")
            .exclude("дополн")
    }

    /// Require `keyword` (any include keyword suffices).  Empty keywords are
    /// ignored.
    pub fn include(mut self, keyword: &str) -> Self {
        push_keyword(&mut self.include, keyword);
        self
    }

    /// Reject names containing `keyword`.  Empty keywords are ignored.
    pub fn exclude(mut self, keyword: &str) -> Self {
        push_keyword(&mut self.exclude, keyword);
        self
    }

    /// `true` if a facility with this name passes.  A missing name is
    /// treated as the empty string, so it fails any include list.
    pub fn matches(&self, name: Option<&str>) -> bool {
        let lower = name.unwrap_or("").to_lowercase();
        let included = self.include.is_empty() || self.include.iter().any(|k| lower.contains(k.as_str()));
        included && !self.exclude.iter().any(|k| lower.contains(k.as_str()))
    }

    pub fn apply(&self, mut facilities: Vec<Facility>) -> Vec<Facility> {
        facilities.retain(|f| self.matches(f.name.as_deref()));
        facilities
    }
}

fn push_keyword(list: &mut Vec<String>, keyword: &str) {
    let k = keyword.trim().to_lowercase();
    if !k.is_empty() {
        list.push(k);
    }
}
