//! One-shot entrance reveals per page region.
//!
//! Each registered region is `Armed` until its top edge first reaches the
//! trigger line, then `Fired` for the rest of the page lifetime.

use std::collections::BTreeMap;

use crate::config::RevealConfig;
use crate::section::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionPhase {
    Armed,
    Fired,
}

/// Transition parameters for one element of a firing region.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealStep {
    pub index: usize,
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub from_offset_px: f64,
}

impl RevealStep {
    /// Milliseconds from firing until the element's transition has finished,
    /// rounded up. Negative or non-finite timings settle immediately.
    pub fn settle_after_ms(&self) -> u32 {
        let total = self.delay_ms + self.duration_ms;
        if !total.is_finite() || total <= 0.0 {
            return 0;
        }
        total.ceil().min(f64::from(u32::MAX)) as u32
    }
}

pub fn stagger_plan(count: usize, config: &RevealConfig) -> Vec<RevealStep> {
    (0..count)
        .map(|index| RevealStep {
            index,
            delay_ms: index as f64 * config.stagger_ms,
            duration_ms: config.duration_ms,
            from_offset_px: config.offset_px,
        })
        .collect()
}

pub fn is_triggered(region_top: f64, viewport_height: f64, start_fraction: f64) -> bool {
    region_top.is_finite() && region_top <= viewport_height * start_fraction
}

#[derive(Clone, Copy, Debug)]
struct RegionEntry {
    phase: RegionPhase,
    element_count: usize,
}

#[derive(Clone, Debug)]
pub struct RevealTracker {
    config: RevealConfig,
    regions: BTreeMap<Section, RegionEntry>,
}

impl RevealTracker {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            regions: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Arms `region`. Returns `false` if it was already registered, in which
    /// case its phase is left untouched.
    pub fn register(&mut self, region: Section, element_count: usize) -> bool {
        if self.regions.contains_key(&region) {
            return false;
        }
        self.regions.insert(
            region,
            RegionEntry {
                phase: RegionPhase::Armed,
                element_count,
            },
        );
        true
    }

    pub fn phase(&self, region: Section) -> Option<RegionPhase> {
        self.regions.get(&region).map(|entry| entry.phase)
    }

    pub fn armed(&self) -> impl Iterator<Item = Section> + '_ {
        self.regions
            .iter()
            .filter(|(_, entry)| entry.phase == RegionPhase::Armed)
            .map(|(region, _)| *region)
    }

    pub fn is_settled(&self) -> bool {
        self.armed().next().is_none()
    }

    /// Feeds the region's current position. Yields the transition plan the
    /// first time the region crosses the trigger line, `None` otherwise.
    pub fn observe(
        &mut self,
        region: Section,
        region_top: f64,
        viewport_height: f64,
    ) -> Option<Vec<RevealStep>> {
        let entry = self.regions.get_mut(&region)?;
        if entry.phase == RegionPhase::Fired {
            return None;
        }
        if !is_triggered(region_top, viewport_height, self.config.start_fraction) {
            return None;
        }
        entry.phase = RegionPhase::Fired;
        Some(stagger_plan(entry.element_count, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_relative_to_first_element() {
        let plan = stagger_plan(3, &RevealConfig::default());
        let delays: Vec<f64> = plan.iter().map(|step| step.delay_ms).collect();
        assert_eq!(delays, vec![0.0, 100.0, 200.0]);
        assert!(plan.iter().all(|step| step.duration_ms == 800.0));
        assert!(plan.iter().all(|step| step.from_offset_px == 30.0));
    }

    #[test]
    fn settle_time_covers_delay_and_duration() {
        let plan = stagger_plan(3, &RevealConfig::default());
        let settle: Vec<u32> = plan.iter().map(RevealStep::settle_after_ms).collect();
        assert_eq!(settle, vec![800, 900, 1000]);

        let odd = RevealStep {
            index: 0,
            delay_ms: 0.2,
            duration_ms: f64::NAN,
            from_offset_px: 30.0,
        };
        assert_eq!(odd.settle_after_ms(), 0);
        let fractional = RevealStep {
            duration_ms: 10.5,
            ..odd
        };
        assert_eq!(fractional.settle_after_ms(), 11);
    }

    #[test]
    fn trigger_line_is_fraction_of_viewport() {
        assert!(is_triggered(640.0, 800.0, 0.8));
        assert!(!is_triggered(641.0, 800.0, 0.8));
        assert!(is_triggered(-2000.0, 800.0, 0.8));
        assert!(!is_triggered(f64::NAN, 800.0, 0.8));
    }

    #[test]
    fn unregistered_region_never_fires() {
        let mut tracker = RevealTracker::new(RevealConfig::default());
        assert!(tracker.observe(Section::Resume, 0.0, 800.0).is_none());
        assert!(tracker.is_settled());
    }

    #[test]
    fn reregistering_does_not_rearm() {
        let mut tracker = RevealTracker::new(RevealConfig::default());
        assert!(tracker.register(Section::About, 2));
        assert!(tracker.observe(Section::About, 10.0, 800.0).is_some());
        assert!(!tracker.register(Section::About, 2));
        assert_eq!(tracker.phase(Section::About), Some(RegionPhase::Fired));
    }
}
