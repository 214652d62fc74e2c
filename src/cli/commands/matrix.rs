//! Matrix command handler
//!
//! Renders one cross-reference mapping table as plain text, cells marked
//! with ✓ (or the contribution-level code for course-PO cells).

use crate::args::MatrixKind;
use curriform::normalize::{normalize, EdgeRef, FlatViewModel, MappingEdge};
use logger::error;
use std::collections::HashMap;
use std::path::Path;

/// Run the matrix command.
pub fn run(input_file: &Path, kind: MatrixKind) {
    let raw = match super::load_proposal(input_file) {
        Ok(raw) => raw,
        Err(e) => {
            error!("Matrix rendering failed for {}: {e}", input_file.display());
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let flat = normalize(&raw);
    let (row_labels, col_labels, edges) = table_parts(&flat, kind);

    if row_labels.is_empty() || col_labels.is_empty() {
        println!("(no data for this mapping)");
        return;
    }

    print_table(&row_labels, &col_labels, edges);
}

/// Row headers, column headers, and edges for one mapping kind.
///
/// Row/col labels are paired with the `EdgeRef` each table axis uses:
/// positional indices for PEO/PO axes, natural keys for mission/GA/course
/// axes.
fn table_parts(
    flat: &FlatViewModel,
    kind: MatrixKind,
) -> (Vec<(String, EdgeRef)>, Vec<(String, EdgeRef)>, &[MappingEdge]) {
    let peo_axis: Vec<(String, EdgeRef)> = (0..flat.peos.len())
        .map(|i| (format!("PEO{}", i + 1), EdgeRef::Index(i)))
        .collect();
    let po_axis: Vec<(String, EdgeRef)> = flat
        .program_outcomes
        .iter()
        .enumerate()
        .map(|(i, po)| {
            let label = if po.name.is_empty() {
                format!("PO{}", i + 1)
            } else {
                po.name.clone()
            };
            (label, EdgeRef::Index(i))
        })
        .collect();
    let mission_axis: Vec<(String, EdgeRef)> = flat
        .missions
        .iter()
        .map(|m| (m.mission_no.clone(), EdgeRef::Key(m.mission_no.clone())))
        .collect();
    let ga_axis: Vec<(String, EdgeRef)> = flat
        .graduate_attributes
        .iter()
        .map(|g| (g.ga_no.clone(), EdgeRef::Key(g.ga_no.clone())))
        .collect();
    let course_axis: Vec<(String, EdgeRef)> = flat
        .courses
        .iter()
        .map(|c| (c.code.clone(), EdgeRef::Key(c.code.clone())))
        .collect();

    match kind {
        MatrixKind::PeoMission => (peo_axis, mission_axis, flat.peo_mission.as_slice()),
        MatrixKind::GaPeo => (ga_axis, peo_axis, flat.ga_peo.as_slice()),
        MatrixKind::PoPeo => (po_axis, peo_axis, flat.po_peo.as_slice()),
        MatrixKind::PoGa => (po_axis, ga_axis, flat.po_ga.as_slice()),
        MatrixKind::CoursePo => (course_axis, po_axis, flat.course_po.as_slice()),
    }
}

fn print_table(
    row_labels: &[(String, EdgeRef)],
    col_labels: &[(String, EdgeRef)],
    edges: &[MappingEdge],
) {
    let cells: HashMap<(&EdgeRef, &EdgeRef), &MappingEdge> = edges
        .iter()
        .map(|e| ((&e.row, &e.col), e))
        .collect();

    let row_width = row_labels
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0)
        .max(4);

    // Header row
    print!("{:row_width$}", "");
    for (label, _) in col_labels {
        print!("  {label}");
    }
    println!();

    for (row_label, row_ref) in row_labels {
        print!("{row_label:row_width$}");
        for (col_label, col_ref) in col_labels {
            let mark = cells
                .get(&(row_ref, col_ref))
                .map_or("", |e| e.label.as_deref().unwrap_or("✓"));
            print!("  {mark:^width$}", width = col_label.len());
        }
        println!();
    }
}
