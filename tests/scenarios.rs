//! End-to-end learner scenarios over a shared store.

use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use waymark::core::{GuideDefinition, Step};
use waymark::navigator::{NavigatorBuilder, ResumePolicy, StepNavigator};
use waymark::progress::ProgressTracker;
use waymark::store::{FileStore, MemoryStore, ProgressStore};

const GUIDE_ID: &str = "bs7671-dead-testing";

fn dead_testing_guide() -> GuideDefinition {
    GuideDefinition::new(
        GUIDE_ID,
        vec![
            Step::new("isolate", "Safe isolation")
                .with_instruction("Isolate, lock off and prove dead")
                .with_equipment(["Voltage indicator", "Proving unit", "Lock-off kit"]),
            Step::new("continuity", "Continuity of protective conductors")
                .with_expected_result("R1+R2 within design limits"),
            Step::new("insulation", "Insulation resistance")
                .with_expected_result("Not less than 1 MΩ at 500 V"),
            Step::new("polarity", "Polarity"),
        ],
    )
    .unwrap()
}

fn guide_with(step_count: usize) -> GuideDefinition {
    let steps = (0..step_count)
        .map(|i| Step::new(format!("s{i}"), format!("Step {i}")))
        .collect();
    GuideDefinition::new(GUIDE_ID, steps).unwrap()
}

#[test]
fn fresh_guide_starts_at_beginning() {
    let nav = StepNavigator::open(dead_testing_guide(), ProgressTracker::new(MemoryStore::new()));

    assert_eq!(nav.current_step_index(), 0);
    assert_eq!(nav.progress_percent(), 0.0);
    assert!(!nav.is_last_step());
}

#[test]
fn completing_three_steps_reaches_last_step() {
    let mut nav = StepNavigator::open(dead_testing_guide(), ProgressTracker::new(MemoryStore::new()));

    for _ in 0..3 {
        nav.complete_current_step();
    }

    assert_eq!(nav.current_step_index(), 3);
    assert_eq!(nav.tracker().completed_steps(GUIDE_ID), vec![0, 1, 2]);
    assert_eq!(nav.progress_percent(), 75.0);
    assert!(nav.is_last_step());
}

#[test]
fn finishing_from_last_step_completes_guide() {
    let mut nav = StepNavigator::open(dead_testing_guide(), ProgressTracker::new(MemoryStore::new()));
    for _ in 0..3 {
        nav.complete_current_step();
    }

    assert!(nav.complete_guide());

    assert_eq!(nav.tracker().completed_steps(GUIDE_ID), vec![0, 1, 2, 3]);
    assert!(nav.is_test_complete());
    assert_eq!(nav.progress_percent(), 100.0);
}

#[test]
fn out_of_range_selection_changes_nothing() {
    let mut nav = StepNavigator::open(dead_testing_guide(), ProgressTracker::new(MemoryStore::new()));
    nav.next();

    assert!(!nav.select_step(10));
    assert_eq!(nav.current_step_index(), 1);
}

#[test]
fn previous_at_start_changes_nothing() {
    let mut nav = StepNavigator::open(dead_testing_guide(), ProgressTracker::new(MemoryStore::new()));

    assert!(!nav.previous());
    assert_eq!(nav.current_step_index(), 0);
}

#[test]
fn reopening_resumes_recorded_position() {
    let mut store = MemoryStore::new();
    ProgressTracker::new(&mut store).set_last_step_viewed(GUIDE_ID, 2);

    let nav = StepNavigator::open(dead_testing_guide(), ProgressTracker::new(&mut store));

    assert_eq!(nav.current_step_index(), 2);
}

#[test]
fn two_of_five_is_forty_percent() {
    let mut tracker = ProgressTracker::new(MemoryStore::new());
    tracker.mark_step_complete(GUIDE_ID, 0);
    tracker.mark_step_complete(GUIDE_ID, 3);

    let nav = StepNavigator::open(guide_with(5), tracker);
    assert_eq!(nav.progress_percent(), 40.0);
}

#[test]
fn shrunk_guide_clamps_or_restarts() {
    let mut store = MemoryStore::new();
    {
        let mut nav = StepNavigator::open(guide_with(8), ProgressTracker::new(&mut store));
        nav.select_step(6);
    }

    let clamped = StepNavigator::open(guide_with(4), ProgressTracker::new(&mut store));
    assert_eq!(clamped.current_step_index(), 3);
    drop(clamped);

    let mut progress = ProgressTracker::new(&mut store);
    progress.set_last_step_viewed(GUIDE_ID, 6);
    let restarted = NavigatorBuilder::new()
        .guide(guide_with(4))
        .tracker(progress)
        .resume(ResumePolicy::Restart)
        .build()
        .unwrap();
    assert_eq!(restarted.current_step_index(), 0);
}

#[test]
fn progress_survives_file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("progress.json");

    let mut store = FileStore::open(&path).unwrap();
    {
        let mut nav = StepNavigator::open(dead_testing_guide(), ProgressTracker::new(&mut store));
        nav.complete_current_step();
        nav.complete_current_step();
        nav.exit();
    }
    store.flush().unwrap();

    let reopened = FileStore::open(&path).unwrap();
    let nav = StepNavigator::open(dead_testing_guide(), ProgressTracker::new(reopened));

    assert_eq!(nav.current_step_index(), 2);
    assert!(nav.is_step_complete(0));
    assert!(nav.is_step_complete(1));
    assert_eq!(nav.progress_percent(), 50.0);
}

#[test]
fn completed_guide_notifies_renderer_and_stays_complete() {
    let finished = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&finished);
    let mut store = MemoryStore::new();

    {
        let mut nav = NavigatorBuilder::new()
            .guide(dead_testing_guide())
            .tracker(ProgressTracker::new(&mut store))
            .on_complete(move |event| sink.lock().unwrap().push(event.guide_id.clone()))
            .build()
            .unwrap();

        nav.select_step(3);
        nav.complete_guide();
    }

    assert_eq!(*finished.lock().unwrap(), vec![GUIDE_ID.to_string()]);

    let record = store.get_record(GUIDE_ID);
    assert!(record.test_complete);
    assert!(record.is_step_complete(3));
    assert_eq!(record.last_step_viewed, Some(3));
}

#[test]
fn view_drives_step_pills() {
    let mut nav = StepNavigator::open(dead_testing_guide(), ProgressTracker::new(MemoryStore::new()));
    nav.complete_current_step();
    nav.select_step(3);

    let view = nav.view();
    let pills: Vec<(&str, bool, bool)> = view
        .steps
        .iter()
        .map(|s| (s.id.as_str(), s.complete, s.current))
        .collect();

    assert_eq!(
        pills,
        vec![
            ("isolate", true, false),
            ("continuity", false, false),
            ("insulation", false, false),
            ("polarity", false, true),
        ]
    );
    assert!(view.is_last_step);
    assert_eq!(view.progress_percent, 25.0);
}
