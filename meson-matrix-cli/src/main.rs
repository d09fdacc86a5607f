use crate::core::build::{Toolchain, DEFAULT_BUILD_COMMAND, DEFAULT_CONFIGURE_COMMAND};
use crate::core::{config, report, runner};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

mod core;

#[derive(Parser)]
#[command(name = "meson-matrix")]
#[command(about = "Builds a meson project under several named option sets and reports which pass")]
struct Cli {
    /// Project name; selects <config-dir>/<project>.json
    project: String,
    /// Root directory for the per-configuration build directories
    #[arg(long, value_name = "PATH", default_value = ".meson-matrix")]
    build_dir: PathBuf,
    /// Delete each configuration's build directory before configuring
    #[arg(long)]
    clean: bool,
    /// Only process the named configuration(s) (can be specified multiple times)
    #[arg(long, value_name = "NAME")]
    test: Vec<String>,
    /// Command for the configure step
    #[arg(long, value_name = "CMD", default_value = DEFAULT_CONFIGURE_COMMAND)]
    configure_command: String,
    /// Command for the build step
    #[arg(long, value_name = "CMD", default_value = DEFAULT_BUILD_COMMAND)]
    build_command: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_root = config::default_config_root()?;
    let config_path = config::project_config_path(&config_root, &cli.project);
    let project_config = config::load_project_config(&config_path)?;
    let project_config = config::filter_config(project_config, &cli.test);

    let tools = Toolchain::new(&cli.configure_command, &cli.build_command)?;
    let records = runner::run_configurations(&project_config, &cli.build_dir, &tools, cli.clean)?;

    let color = std::io::stdout().is_terminal();
    println!();
    println!("Results:");
    println!();
    for line in report::format_report(&records) {
        println!("{}", report::render_line(&line, color));
    }

    let failed = records.iter().filter(|r| r.failed()).count();
    if failed > 0 {
        anyhow::bail!("{} configuration(s) failed", failed);
    }

    Ok(())
}
