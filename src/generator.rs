/// Runs a whole conversion: input tree in, header tree out.
use anyhow::{Context, Result};
use log::{debug, info, trace, warn};
use std::fs;
use std::path::Path;

use crate::header::create_header;
use crate::types::RunSummary;
use crate::walker::find_assets;

/// Convert every web asset under `input_root` into a header under `output_root`.
///
/// A missing input directory is reported and returns early without touching
/// `output_root`. Any other failure stops the run; headers already written stay.
pub fn generate(input_root: &Path, output_root: &Path) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    if !input_root.exists() {
        println!("Input directory does not exist: {}", input_root.display());
        warn!("Nothing to do, {:?} is missing", input_root);
        return Ok(summary);
    }
    summary.input_found = true;

    fs::create_dir_all(output_root)
        .with_context(|| format!("Failed to create output directory {:?}", output_root))?;

    for job in find_assets(input_root, output_root) {
        let job = job?;
        trace!("Converting {:?}", job.relative);
        let identifier = create_header(&job.input, &job.output)?;
        println!("✓ Generated {}", job.output.display());
        debug!("{:?} -> {:?} as {}", job.input, job.output, identifier);
        summary.generated.push(job.output);
    }

    info!(
        "Generated {} header(s) from {:?} into {:?}",
        summary.generated.len(),
        input_root,
        output_root
    );
    Ok(summary)
}
