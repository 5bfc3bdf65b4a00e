use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use cutlayout::error::WorkshopError;
use cutlayout::io::export;

use crate::config::WorkshopConfig;
use crate::io;
use crate::io::job::ExtJob;
use crate::io::output::{RunSummary, WorkshopOutput};
use crate::notify::{LogNotifier, Notifier};
use crate::session::Workshop;
use crate::store::FileStore;

/// Prefix of the files written to the output folder, so they never replace the job itself
pub const OUTPUT_PREFIX: &str = "sol_";

/// Name of the subfolder of the output folder holding the saved progress
pub const PROGRESS_FOLDER: &str = "progress";

/// Runs a job file against a workshop session and writes `sol_<stem>.json` and `sol_<stem>.svg`
/// into `output_folder`.
///
/// With `resume`, the session continues from the progress saved by an earlier run.
/// If nothing was saved the job starts from scratch. Any other load failure aborts the run
/// before anything is written, leaving the saved progress as it was.
pub fn run(
    job_file: &Path,
    output_folder: &Path,
    config: WorkshopConfig,
    resume: bool,
) -> Result<RunSummary> {
    let job: ExtJob = io::read_json(job_file)?;
    let job_stem = job_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("job file name is not valid unicode")?;

    fs::create_dir_all(output_folder).with_context(|| {
        format!(
            "could not create output folder: {}",
            output_folder.display()
        )
    })?;

    let store = FileStore::new(output_folder.join(PROGRESS_FOLDER))?;
    let mut workshop = Workshop::new(config.clone(), store);
    let mut notifier = LogNotifier;

    let resumed = resume && {
        let loaded = workshop.load_progress();
        notifier.report(&loaded, |report| {
            format!("progress restored with {} cuts", report.n_cuts)
        });
        match loaded {
            Ok(_) => true,
            Err(WorkshopError::SnapshotNotFound) => false,
            Err(err) => {
                return Err(err).context("could not resume, saved progress was left untouched");
            }
        }
    };

    if resumed {
        if workshop.shape_type() != Some(job.shape_type) {
            warn!(
                "[DRIVER] job asks for shape type {}, continuing with the saved one",
                job.shape_type
            );
        }
    } else {
        workshop.choose_shape_type(job.shape_type);
        let created = workshop.create_base(&job.base).map(|_| ());
        notifier.report(&created, |_| "base created".to_string());
        created?;
    }

    let (mut n_placed, mut n_rejected) = (0, 0);
    for job_cut in &job.cuts {
        for _ in 0..job_cut.qty {
            let added = workshop.add_cut(&job_cut.spec).map(|_| ());
            notifier.report(&added, |_| "cut added".to_string());
            match added {
                Ok(()) => n_placed += 1,
                Err(_) => n_rejected += 1,
            }
        }
    }

    let saved = workshop.save_progress();
    notifier.report(&saved, |_| "progress saved".to_string());
    saved?;

    let summary = RunSummary {
        n_placed,
        n_rejected,
        density: workshop.layout().map_or(0.0, |l| l.density()),
        n_probes: workshop.probe_counter,
    };
    info!(
        "[DRIVER] {n_placed} cuts placed, {n_rejected} rejected, remaining weight {:.3}",
        workshop.remaining_weight()
    );

    {
        let output = WorkshopOutput {
            job,
            snapshot: export::export_snapshot(&workshop.snapshot()),
            summary,
            config,
        };
        let json_path = output_folder.join(format!("{OUTPUT_PREFIX}{job_stem}.json"));
        io::write_json(&output, &json_path)?;
    }

    {
        let svg_path = output_folder.join(format!("{OUTPUT_PREFIX}{job_stem}.svg"));
        let svg = workshop.to_svg(job_stem);
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(summary)
}
