//! Optimization mode and runner configuration.

/// Direction of optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Entries are costs; find the pairing with the smallest total.
    #[default]
    MinimizeCost,

    /// Entries are utilities; find the pairing with the largest total.
    ///
    /// Solved as a minimization over `max - c` for every real entry `c`.
    MaximizeUtility,
}

/// Configuration for [`HungarianRunner`](super::HungarianRunner).
///
/// # Examples
///
/// ```
/// use u_assign::hungarian::{HungarianConfig, Mode};
///
/// let config = HungarianConfig::maximize().with_parallel(true);
/// assert_eq!(config.mode, Mode::MaximizeUtility);
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HungarianConfig {
    /// Whether to minimize cost or maximize utility.
    pub mode: Mode,

    /// Whether [`run_batch`](super::HungarianRunner::run_batch) solves
    /// matrices in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature enabled.
    pub parallel: bool,
}

impl HungarianConfig {
    /// Configuration for minimizing total cost.
    pub fn minimize() -> Self {
        Self::default().with_mode(Mode::MinimizeCost)
    }

    /// Configuration for maximizing total utility.
    pub fn maximize() -> Self {
        Self::default().with_mode(Mode::MaximizeUtility)
    }

    /// Sets the optimization mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables or disables parallel batch solving.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = HungarianConfig::default();
        assert_eq!(config.mode, Mode::MinimizeCost);
        assert!(!config.parallel);
    }

    #[test]
    fn test_config_builder() {
        let config = HungarianConfig::minimize()
            .with_mode(Mode::MaximizeUtility)
            .with_parallel(true);
        assert_eq!(config.mode, Mode::MaximizeUtility);
        assert!(config.parallel);
        assert_eq!(HungarianConfig::minimize().mode, Mode::MinimizeCost);
    }
}
