/// Outcome of one step of one configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepOutcome {
    /// The step was never attempted
    #[default]
    NotRun,
    /// The step ran and its process exited non-zero
    Failed,
    /// The step ran and its process exited with status 0
    Succeeded,
}

impl StepOutcome {
    pub fn from_success(success: bool) -> Self {
        if success {
            StepOutcome::Succeeded
        } else {
            StepOutcome::Failed
        }
    }
}

/// Pass/fail record for one configuration, filled in by the runner.
///
/// `build` stays `NotRun` unless `configure` succeeded first; the runner
/// never attempts the build step after a failed configure.
#[derive(Debug, Clone)]
pub struct BuildRecord {
    pub name: String,
    pub configure: StepOutcome,
    pub build: StepOutcome,
}

impl BuildRecord {
    pub fn new(name: String) -> Self {
        BuildRecord {
            name,
            configure: StepOutcome::default(),
            build: StepOutcome::default(),
        }
    }

    /// True when either step ran and failed
    pub fn failed(&self) -> bool {
        self.configure == StepOutcome::Failed || self.build == StepOutcome::Failed
    }
}
