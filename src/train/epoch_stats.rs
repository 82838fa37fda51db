use serde::{Serialize, Deserialize};

/// Summary of one completed training epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean squared error over the epoch, measured on each example's forward
    /// pass before its weights were updated.
    pub train_loss: f64,
}
