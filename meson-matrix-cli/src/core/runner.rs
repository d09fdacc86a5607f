use crate::core::build::{BuildUnit, Toolchain};
use crate::core::config::ProjectConfig;
use crate::core::outcome::{BuildRecord, StepOutcome};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Drive the configure and build steps for every configuration in `config`,
/// strictly one at a time in map order, and collect one record per
/// configuration.
///
/// A non-zero exit from configure suppresses that configuration's build step
/// and is recorded; it never aborts the run. Clean failures warn and
/// continue. Only a spawn failure (the external tool itself cannot be
/// executed) propagates, since no configuration can succeed without it.
pub fn run_configurations(
    config: &ProjectConfig,
    build_root: &Path,
    tools: &Toolchain,
    clean: bool,
) -> Result<Vec<BuildRecord>> {
    let mut records = Vec::new();

    for (name, options) in config {
        println!("📦 Configuration: {}", name);

        let mut record = BuildRecord::new(name.clone());
        let unit = BuildUnit::new(name.clone(), build_root, options.clone());

        if clean {
            if let Err(e) = unit.clean() {
                eprintln!("{} {:#}", "warning:".yellow().bold(), e);
            }
        }

        record.configure = StepOutcome::from_success(unit.configure(tools)?);
        if record.configure == StepOutcome::Succeeded {
            record.build = StepOutcome::from_success(unit.build(tools)?);
        }

        records.push(record);
    }

    Ok(records)
}
