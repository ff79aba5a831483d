//! In-memory `Surface` for controller tests.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::config::RegionIds;
use crate::consts::HIDDEN_MARKER;
use crate::surface::{StyleProp, Surface};

/// Recorded state of one region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeRegion {
    pub text: String,
    pub value: String,
    pub styles: BTreeMap<StyleProp, String>,
    pub markers: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeSurface {
    regions: HashMap<String, FakeRegion>,
}

impl FakeSurface {
    /// A surface containing exactly `ids`, all empty and visible.
    pub fn with_regions(ids: &[&str]) -> Self {
        let regions = ids.iter().map(|id| ((*id).to_owned(), FakeRegion::default())).collect();
        Self { regions }
    }

    /// The markup the page renders: every default region, success panel hidden.
    pub fn standard() -> Self {
        let mut surface = Self::with_regions(&RegionIds::default().all());
        surface.mark(RegionIds::default().success_panel, HIDDEN_MARKER);
        surface
    }

    pub fn region(&self, id: &str) -> FakeRegion {
        self.regions.get(id).cloned().unwrap_or_default()
    }

    pub fn without(mut self, id: &str) -> Self {
        self.regions.remove(id);
        self
    }

    /// Simulate the user typing into a region.
    pub fn type_value(&mut self, id: &str, value: &str) {
        if let Some(region) = self.regions.get_mut(id) {
            region.value = value.to_owned();
        }
    }

    pub fn mark(&mut self, id: &str, marker: &str) {
        if let Some(region) = self.regions.get_mut(id) {
            region.markers.insert(marker.to_owned());
        }
    }

    pub fn visible(&self, id: &str) -> bool {
        !self.region(id).markers.contains(HIDDEN_MARKER)
    }
}

impl Surface for FakeSurface {
    type Handle = String;

    fn lookup(&self, id: &str) -> Option<String> {
        self.regions.contains_key(id).then(|| id.to_owned())
    }

    fn text(&self, region: &String) -> String {
        self.region(region).text
    }

    fn set_text(&mut self, region: &String, text: &str) {
        self.regions.entry(region.clone()).or_default().text = text.to_owned();
    }

    fn value(&self, region: &String) -> String {
        self.region(region).value
    }

    fn set_value(&mut self, region: &String, value: &str) {
        self.regions.entry(region.clone()).or_default().value = value.to_owned();
    }

    fn style(&self, region: &String, prop: StyleProp) -> Option<String> {
        self.regions.get(region).and_then(|r| r.styles.get(&prop).cloned())
    }

    fn set_style(&mut self, region: &String, prop: StyleProp, value: Option<&str>) {
        let styles = &mut self.regions.entry(region.clone()).or_default().styles;
        match value {
            Some(value) => {
                styles.insert(prop, value.to_owned());
            }
            None => {
                styles.remove(&prop);
            }
        }
    }

    fn has_marker(&self, region: &String, marker: &str) -> bool {
        self.regions.get(region).is_some_and(|r| r.markers.contains(marker))
    }

    fn add_marker(&mut self, region: &String, marker: &str) {
        self.regions.entry(region.clone()).or_default().markers.insert(marker.to_owned());
    }

    fn remove_marker(&mut self, region: &String, marker: &str) {
        if let Some(r) = self.regions.get_mut(region) {
            r.markers.remove(marker);
        }
    }
}
