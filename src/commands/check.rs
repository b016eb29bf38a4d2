//! Check a submitted code list

use std::fs;
use std::io::Read as _;
use std::path::Path;

use anyhow::{Context, bail};
use log::{debug, error};

use codesift::output::{AnalysisSummary, OperationResult, OutputMode};
use codesift::pipeline::{self, FALLBACK_MESSAGE};

/// Read a list from `file` (or stdin) and print its report
pub fn check(file: Option<&Path>, stats: bool, mode: OutputMode) -> anyhow::Result<()> {
    let input = read_input(file)?;
    debug!("Read {} byte(s) of input", input.len());

    match pipeline::try_analyze(&input) {
        Ok(analysis) => {
            AnalysisSummary::from(&analysis).render(mode, stats);
            Ok(())
        },
        Err(e) => {
            error!("Pipeline error: {e}");
            OperationResult {
                success: false,
                message: FALLBACK_MESSAGE.to_string(),
            }
            .render(mode);
            bail!("could not analyze input: {e}")
        },
    }
}

fn read_input(file: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match file {
        Some(path) if path != Path::new("-") => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        },
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf).context("Failed to read stdin")?;
            Ok(buf)
        },
    }
}
