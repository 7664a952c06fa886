/// Planner configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Maximum number of courses a planner may hold.
    pub capacity: usize,
}

impl PlannerConfig {
    /// The capacity used when nothing else is configured.
    pub const DEFAULT_CAPACITY: usize = 50;

    /// Environment variable that overrides the configured capacity.
    pub const CAPACITY_ENV: &str = "PLANNER_CAPACITY";

    /// Build a config with an explicit capacity (useful for tests and CLI flags).
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
