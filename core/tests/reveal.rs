use folio_core::{RegionPhase, RevealConfig, RevealTracker, Section};

const VIEWPORT: f64 = 800.0;

fn tracker_with(regions: &[(Section, usize)]) -> RevealTracker {
    let mut tracker = RevealTracker::new(RevealConfig::default());
    for (region, count) in regions {
        assert!(tracker.register(*region, *count));
    }
    tracker
}

#[test]
fn region_fires_once_across_reentries() {
    let mut tracker = tracker_with(&[(Section::Portfolio, 7)]);
    // below the trigger line, then in, out, in again
    let tops = [1200.0, 900.0, 500.0, 1100.0, 300.0, -400.0, 620.0];
    let fired: Vec<usize> = tops
        .iter()
        .filter_map(|top| tracker.observe(Section::Portfolio, *top, VIEWPORT))
        .map(|plan| plan.len())
        .collect();
    assert_eq!(fired, vec![7]);
    assert_eq!(tracker.phase(Section::Portfolio), Some(RegionPhase::Fired));
}

#[test]
fn regions_fire_independently() {
    let mut tracker = tracker_with(&[(Section::About, 3), (Section::Resume, 5)]);
    assert!(tracker.observe(Section::About, 200.0, VIEWPORT).is_some());
    assert_eq!(tracker.armed().collect::<Vec<_>>(), vec![Section::Resume]);
    assert!(!tracker.is_settled());

    assert!(tracker.observe(Section::Resume, 700.0, VIEWPORT).is_none());
    let plan = tracker
        .observe(Section::Resume, 640.0, VIEWPORT)
        .expect("resume should fire at the trigger line");
    assert_eq!(plan.len(), 5);
    assert!(tracker.is_settled());
}

#[test]
fn stagger_delays_follow_element_order() {
    let mut config = RevealConfig::default();
    config.stagger_ms = 250.0;
    config.duration_ms = 400.0;
    let mut tracker = RevealTracker::new(config);
    tracker.register(Section::Certificates, 4);
    let plan = tracker
        .observe(Section::Certificates, 0.0, VIEWPORT)
        .expect("region above the line fires immediately");
    let delays: Vec<f64> = plan.iter().map(|step| step.delay_ms).collect();
    assert_eq!(delays, vec![0.0, 250.0, 500.0, 750.0]);
    assert!(plan.iter().all(|step| step.duration_ms == 400.0));
    assert_eq!(
        plan.iter().map(|step| step.index).collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
}

#[test]
fn empty_region_still_settles() {
    let mut tracker = tracker_with(&[(Section::Contact, 0)]);
    let plan = tracker.observe(Section::Contact, 10.0, VIEWPORT);
    assert_eq!(plan, Some(Vec::new()));
    assert!(tracker.is_settled());
}
