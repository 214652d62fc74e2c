//! Check command handler
//!
//! Normalizes a proposal file and prints a completeness report: per-outcome
//! section badges for every course, per-step progress, and the program-wide
//! assessment weight total.

use curriform::completeness::{
    is_abcd_complete, is_cpa_complete, is_methods_complete, is_outcome_mapped, WEIGHT_TOLERANCE,
};
use curriform::config::Config;
use curriform::gate::{step_progress, step_ready, ReviewStep};
use curriform::models::CourseOutcome;
use curriform::normalize::{normalize, FlatViewModel};
use logger::{error, info};
use std::path::Path;

/// Run the check command.
///
/// # Arguments
/// * `input_file` - Path to a proposal JSON file
/// * `strict` - Exit non-zero when any section is incomplete
/// * `config` - Configuration carrying the weight tolerance
pub fn run(input_file: &Path, strict: bool, config: &Config) {
    let raw = match super::load_proposal(input_file) {
        Ok(raw) => raw,
        Err(e) => {
            error!("Check failed for {}: {e}", input_file.display());
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let flat = normalize(&raw);
    let tolerance = effective_tolerance(config);
    info!(
        "Checking '{}' ({} courses, tolerance {tolerance})",
        input_file.display(),
        flat.courses.len()
    );

    print_report(&flat, tolerance);

    let outcomes = flat.all_outcomes();
    let all_ready = ReviewStep::ALL
        .iter()
        .all(|&step| step_ready(step, &outcomes, tolerance));

    if all_ready {
        println!("\n✓ Proposal is submission-ready");
    } else {
        println!("\n✗ Proposal has incomplete sections");
        if strict {
            std::process::exit(1);
        }
    }
}

/// Weight tolerance from config, falling back to the compiled-in default
/// when unset.
fn effective_tolerance(config: &Config) -> f64 {
    if config.validation.weight_tolerance > 0.0 {
        config.validation.weight_tolerance
    } else {
        WEIGHT_TOLERANCE
    }
}

fn badge(ok: bool) -> &'static str {
    if ok {
        "✓"
    } else {
        "✗"
    }
}

fn print_report(flat: &FlatViewModel, tolerance: f64) {
    if !flat.program_name.is_empty() {
        println!("Program: {} ({})", flat.program_name, flat.department);
    }
    println!(
        "Entities: {} missions, {} graduate attributes, {} PEOs, {} POs, {} courses",
        flat.missions.len(),
        flat.graduate_attributes.len(),
        flat.peos.len(),
        flat.program_outcomes.len(),
        flat.courses.len()
    );

    for course in &flat.courses {
        println!("\n{}  {}", course.code, course.title);
        if course.outcomes.is_empty() {
            println!("  (no outcomes yet)");
            continue;
        }
        for outcome in &course.outcomes {
            println!(
                "  {}  ABCD {}  CPA {}  Mapping {}  Methods {}  Tasks {}",
                outcome.name,
                badge(is_abcd_complete(outcome)),
                badge(is_cpa_complete(outcome)),
                badge(is_outcome_mapped(outcome)),
                badge(is_methods_complete(outcome)),
                outcome.tla_tasks.len()
            );
        }
    }

    let outcomes = flat.all_outcomes();
    let total: f64 = outcomes.iter().map(CourseOutcome::task_weight_total).sum();
    println!(
        "\nAssessment weights: {total:.2} of 100.00 (tolerance {tolerance})  {}",
        badge(step_ready(ReviewStep::Tla, &outcomes, tolerance))
    );

    println!("Section progress:");
    for step in ReviewStep::ALL {
        let (done, of) = step_progress(step, &outcomes);
        println!(
            "  {:?}: {done}/{of}  {}",
            step,
            badge(step_ready(step, &outcomes, tolerance))
        );
    }
}
