//! Guided Walkthrough
//!
//! This example walks a learner through an interactive testing guide.
//!
//! Key concepts:
//! - Loading a guide from JSON content
//! - Navigating with next/previous/jump and completing steps
//! - Leaving mid-guide and resuming from a file-backed store
//! - Finishing the guide and reacting to the completion event
//!
//! Run with: cargo run --example walkthrough

use std::error::Error;
use waymark::core::GuideDefinition;
use waymark::navigator::{NavigatorBuilder, NavigatorView, StepNavigator};
use waymark::progress::ProgressTracker;
use waymark::store::{FileStore, ProgressStore};

const GUIDE_JSON: &str = r#"{
    "id": "ring-final-continuity",
    "steps": [
        {
            "id": "isolate",
            "title": "Safe isolation",
            "instruction": "Isolate the circuit, lock off and prove dead.",
            "expectedResult": "No voltage present between any conductors.",
            "equipment": ["Approved voltage indicator", "Proving unit", "Lock-off kit"]
        },
        {
            "id": "end-to-end",
            "title": "End-to-end resistance",
            "instruction": "Measure r1, rn and r2 across each ring conductor pair.",
            "expectedResult": "r1 and rn within 0.05 Ω of each other."
        },
        {
            "id": "cross-connect",
            "title": "Cross-connect line and neutral",
            "instruction": "Cross-connect L and N and measure at every socket-outlet.",
            "expectedResult": "Readings substantially the same at each point."
        },
        {
            "id": "r1-r2",
            "title": "Cross-connect line and cpc",
            "instruction": "Cross-connect L and cpc and record the highest reading as R1+R2.",
            "expectedResult": "Highest reading recorded on the schedule of test results."
        }
    ]
}"#;

fn print_view(view: &NavigatorView) {
    let pills: String = view
        .steps
        .iter()
        .map(|s| match (s.current, s.complete) {
            (true, _) => '>',
            (false, true) => '#',
            (false, false) => '.',
        })
        .collect();
    println!(
        "  [{}] step {}/{} - {:.0}% complete",
        pills,
        view.current_step_index + 1,
        view.step_count,
        view.progress_percent
    );
}

fn describe<S: ProgressStore>(nav: &StepNavigator<S>) {
    let step = nav.current_step();
    println!("  {}: {}", step.title, step.instruction);
    if !step.equipment.is_empty() {
        println!("    equipment: {}", step.equipment.join(", "));
    }
    print_view(&nav.view());
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Guided Walkthrough ===\n");

    let guide = GuideDefinition::from_json(GUIDE_JSON)?;
    let dir = std::env::temp_dir().join("waymark-walkthrough");
    let path = dir.join("progress.json");
    let _ = std::fs::remove_file(&path);

    println!("Session 1: start the guide and leave part way");
    let mut store = FileStore::open(&path)?;
    {
        let mut nav = StepNavigator::open(guide.clone(), ProgressTracker::new(&mut store));
        describe(&nav);

        nav.complete_current_step();
        describe(&nav);

        nav.complete_current_step();
        describe(&nav);

        println!("  (peeking at the last step, then back)");
        nav.select_step(3);
        nav.previous();
        describe(&nav);

        nav.exit();
    }
    store.flush()?;
    println!("  progress saved to {}\n", path.display());

    println!("Session 2: resume and finish");
    let store = FileStore::open(&path)?;
    let mut nav = NavigatorBuilder::new()
        .guide(guide)
        .store(store)
        .require_completion_to_advance()
        .on_complete(|event| {
            println!(
                "  Guide '{}' finished: all {} steps complete at {}",
                event.guide_id, event.step_count, event.completed_at
            );
        })
        .build()?;
    describe(&nav);

    nav.complete_current_step();
    describe(&nav);

    nav.complete_guide();
    print_view(&nav.view());

    let mut store = nav.into_tracker().into_store();
    store.flush()?;

    println!("\n=== Summary ===");
    println!("- Progress lives in a store keyed by guide id");
    println!("- Out-of-range and end-of-guide moves are silently ignored");
    println!("- Reopening a guide resumes at the last viewed step");

    Ok(())
}
