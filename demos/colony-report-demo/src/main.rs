//! colony-report-demo — smallest end-to-end run of the analysis pipeline.
//!
//! Classifies survival over the second half of an embedded seven-agent
//! colony run, reconstructs the phylogeny, and writes the survival report
//! and Newick tree to `output/colony-report/`.  Swap the embedded archive
//! for a real run's JSON emit to analyze production data.

use std::io::Cursor;
use std::path::Path;

use anyhow::Result;

use colony_core::TimeWindow;
use colony_data::load_archive_reader;
use colony_phylo::{PhyloForest, tree_to_newick};
use colony_report::{CsvReportWriter, ReportWriter, StyleConfig, render_plan, survival_rows};
use colony_survival::classify_survival;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUT_DIR:      &str = "output/colony-report";
const WINDOW_START: f64  = 0.5; // classify deaths over the second half of the run
const WINDOW_END:   f64  = 1.0;

// ── Embedded archive ──────────────────────────────────────────────────────────

// Five snapshots of a colony growing from one cell to four.  The "0" branch
// sits in the high-antibiotic region and dies off; the "1" branch survives.
const ARCHIVE_JSON: &str = r#"{
    "0.0": {
        "agents": {
            "wcecoli": { "boundary": { "dead": false, "location": [12.0, 12.0] } }
        }
    },
    "100.0": {
        "agents": {
            "wcecoli0": { "boundary": { "dead": false, "location": [10.5, 11.0] } },
            "wcecoli1": { "boundary": { "dead": false, "location": [13.5, 13.0] } }
        }
    },
    "200.0": {
        "agents": {
            "wcecoli0": { "boundary": { "dead": false, "location": [10.4, 10.8] } },
            "wcecoli1": { "boundary": { "dead": false, "location": [13.6, 13.1] } }
        }
    },
    "300.0": {
        "agents": {
            "wcecoli00": { "boundary": { "dead": false, "location": [9.8, 10.2] } },
            "wcecoli01": { "boundary": { "dead": true,  "location": [10.9, 10.6] } },
            "wcecoli10": { "boundary": { "dead": false, "location": [14.0, 13.5] } },
            "wcecoli11": { "boundary": { "dead": false, "location": [13.2, 12.6] } }
        }
    },
    "400.0": {
        "agents": {
            "wcecoli00": { "boundary": { "dead": true,  "location": [9.7, 10.1] } },
            "wcecoli10": { "boundary": { "dead": false, "location": [14.2, 13.7] } },
            "wcecoli11": { "boundary": { "dead": false, "location": [13.1, 12.4] } }
        }
    }
}"#;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== colony-report-demo — colony analysis toolkit ===");
    println!();

    // 1. Load the snapshot archive.
    let archive = load_archive_reader(Cursor::new(ARCHIVE_JSON))?;
    println!(
        "Archive: {} snapshots, final time {}",
        archive.len(),
        archive.max_time().map(|t| t.to_string()).unwrap_or_default()
    );

    // 2. Reconstruct the phylogeny from every observed agent ID.
    let forest = PhyloForest::build(archive.agent_ids())?;
    let root = forest.single_root()?;
    println!(
        "Phylogeny: {} agents, stem {:?}, root {}",
        forest.len(),
        forest.stem(),
        root.name()
    );

    // 3. Classify survival over the observation window.
    let window = TimeWindow::new(WINDOW_START, WINDOW_END)?;
    let labels = classify_survival(&archive, window);
    println!(
        "Window {window}: {} observed, {} died",
        labels.observed_count(),
        labels.dead_count()
    );
    println!();

    // 4. Write the survival report.
    std::fs::create_dir_all(OUT_DIR)?;
    let rows = survival_rows(&labels);
    let mut writer = CsvReportWriter::new(Path::new(OUT_DIR))?;
    writer.write_survival(&rows)?;
    writer.finish()?;

    // 5. Write the Newick tree artifact.
    let newick = tree_to_newick(&forest, root);
    std::fs::write(Path::new(OUT_DIR).join("phylogeny.nwk"), &newick)?;

    println!("survival.csv  : {} rows", rows.len());
    println!("phylogeny.nwk : {newick}");
    println!();

    // 6. Render plan summary table.
    let plan = render_plan(&forest, &labels, &StyleConfig::default());
    println!("{:<12} {:<16} {:<8}", "Agent", "Class", "Color");
    println!("{}", "-".repeat(38));
    for instruction in &plan {
        println!(
            "{:<12} {:<16} {:<8}",
            instruction.agent_id.to_string(),
            format!("{:?}", instruction.class),
            instruction.color,
        );
    }

    Ok(())
}
