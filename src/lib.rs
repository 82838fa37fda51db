pub mod error;
pub mod math;
pub mod activation;
pub mod data;
pub mod network;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use math::matrix::Matrix;
pub use data::example::Example;
pub use network::network::Network;
pub use network::unit::{Unit, UnitKind};
pub use train::train_config::TrainConfig;
pub use train::epoch_stats::EpochStats;
