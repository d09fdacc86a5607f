use crate::core::config::BuildOptions;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

pub const DEFAULT_CONFIGURE_COMMAND: &str = "meson setup";
pub const DEFAULT_BUILD_COMMAND: &str = "ninja -C";

/// The external commands driven for every configuration, held as argv
/// prefixes; the target path (and any `-D` flags) is appended per invocation.
#[derive(Debug, Clone)]
pub struct Toolchain {
    configure: Vec<String>,
    build: Vec<String>,
}

impl Toolchain {
    /// Parse the configure and build command strings into a toolchain
    pub fn new(configure_command: &str, build_command: &str) -> Result<Self> {
        Ok(Toolchain {
            configure: parse_command(configure_command, "configure")?,
            build: parse_command(build_command, "build")?,
        })
    }
}

fn parse_command(command: &str, step: &str) -> Result<Vec<String>> {
    let parts = shell_words::split(command)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} command '{}': {}", step, command, e))?;
    anyhow::ensure!(!parts.is_empty(), "Empty {} command", step);
    Ok(parts)
}

fn command_from(argv: &[String]) -> Command {
    let mut cmd = Command::new(&argv[0]);
    cmd.args(&argv[1..]);
    cmd
}

/// One named build configuration and the directory it builds into
#[derive(Debug, Clone)]
pub struct BuildUnit {
    pub name: String,
    pub path: PathBuf,
    pub options: BuildOptions,
}

impl BuildUnit {
    pub fn new(name: String, build_root: &Path, options: BuildOptions) -> Self {
        let path = build_root.join(&name);
        BuildUnit {
            name,
            path,
            options,
        }
    }

    /// The configure invocation: the target path, then one `-D<key>=<value>`
    /// flag per option in option order
    pub fn configure_command(&self, tools: &Toolchain) -> Command {
        let mut cmd = command_from(&tools.configure);
        cmd.arg(&self.path);
        for (key, value) in &self.options {
            cmd.arg(format!("-D{}={}", key, value));
        }
        cmd
    }

    /// Run the configure step to completion with stdio inherited, so the
    /// external tool's output reaches the user directly. True iff the
    /// process exited with status 0.
    pub fn configure(&self, tools: &Toolchain) -> Result<bool> {
        let status = self
            .configure_command(tools)
            .status()
            .with_context(|| format!("Failed to run configure command for '{}'", self.name))?;
        Ok(status.success())
    }

    /// The build invocation against the target path
    pub fn build_command(&self, tools: &Toolchain) -> Command {
        let mut cmd = command_from(&tools.build);
        cmd.arg(&self.path);
        cmd
    }

    /// Run the build step to completion with stdio inherited. True iff the
    /// process exited with status 0.
    pub fn build(&self, tools: &Toolchain) -> Result<bool> {
        let status = self
            .build_command(tools)
            .status()
            .with_context(|| format!("Failed to run build command for '{}'", self.name))?;
        Ok(status.success())
    }

    /// Remove the target directory and everything under it. A missing
    /// directory is not an error.
    pub fn clean(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_dir_all(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args_of(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|s| s.to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_clean_removes_directory() {
        let temp_dir = TempDir::new().unwrap();
        let unit = BuildUnit::new("foo".to_string(), temp_dir.path(), BuildOptions::new());
        fs::create_dir(&unit.path).unwrap();
        fs::write(unit.path.join("build.ninja"), "rule cc").unwrap();
        let sibling = temp_dir.path().join("unrelated.txt");
        fs::write(&sibling, "keep me").unwrap();

        unit.clean().unwrap();

        assert!(!unit.path.exists());
        assert!(sibling.exists());
    }

    #[test]
    fn test_clean_no_directory() {
        let temp_dir = TempDir::new().unwrap();
        let unit = BuildUnit::new("foo".to_string(), temp_dir.path(), BuildOptions::new());

        assert!(!unit.path.exists());
        unit.clean().unwrap();
    }

    #[test]
    fn test_configure_argument_building() {
        let mut options = BuildOptions::new();
        options.insert("buildtype".to_string(), "debug".to_string());
        options.insert("b_lto".to_string(), "true".to_string());

        let tools = Toolchain::new(DEFAULT_CONFIGURE_COMMAND, DEFAULT_BUILD_COMMAND).unwrap();
        let unit = BuildUnit::new("debug".to_string(), Path::new("build-test"), options);
        let cmd = unit.configure_command(&tools);

        assert_eq!(cmd.get_program(), "meson");
        assert_eq!(
            args_of(&cmd),
            vec![
                "setup",
                "build-test/debug",
                "-Dbuildtype=debug",
                "-Db_lto=true"
            ]
        );
    }

    #[test]
    fn test_build_argument_building() {
        let tools = Toolchain::new(DEFAULT_CONFIGURE_COMMAND, DEFAULT_BUILD_COMMAND).unwrap();
        let unit =
            BuildUnit::new("debug".to_string(), Path::new("build-test"), BuildOptions::new());
        let cmd = unit.build_command(&tools);

        assert_eq!(cmd.get_program(), "ninja");
        assert_eq!(args_of(&cmd), vec!["-C", "build-test/debug"]);
    }

    #[test]
    fn test_toolchain_parses_quoted_commands() {
        let tools =
            Toolchain::new(r#"meson setup --cross-file "my cross.ini""#, "ninja -C").unwrap();
        let unit = BuildUnit::new("arm".to_string(), Path::new("bt"), BuildOptions::new());
        let cmd = unit.configure_command(&tools);

        assert_eq!(
            args_of(&cmd),
            vec!["setup", "--cross-file", "my cross.ini", "bt/arm"]
        );
    }

    #[test]
    fn test_toolchain_rejects_empty_command() {
        let result = Toolchain::new("", "ninja -C");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Empty configure command"));

        let result = Toolchain::new("meson setup", "   ");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Empty build command"));
    }

    #[test]
    fn test_toolchain_rejects_unbalanced_quotes() {
        let result = Toolchain::new("meson 'unclosed", "ninja -C");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse configure command"));
    }

    #[test]
    fn test_configure_reports_exit_status() {
        let temp_dir = TempDir::new().unwrap();
        let unit = BuildUnit::new("demo".to_string(), temp_dir.path(), BuildOptions::new());

        let ok_tools = Toolchain::new("true", "true").unwrap();
        assert!(unit.configure(&ok_tools).unwrap());
        assert!(unit.build(&ok_tools).unwrap());

        let fail_tools = Toolchain::new("false", "false").unwrap();
        assert!(!unit.configure(&fail_tools).unwrap());
        assert!(!unit.build(&fail_tools).unwrap());
    }

    #[test]
    fn test_configure_missing_program_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let unit = BuildUnit::new("demo".to_string(), temp_dir.path(), BuildOptions::new());
        let tools = Toolchain::new("meson-matrix-no-such-tool", "ninja -C").unwrap();

        let result = unit.configure(&tools);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to run configure command for 'demo'"));
    }
}
