use tracing::{debug, info};

use crate::data::example::Example;
use crate::error::Result;
use crate::network::network::Network;
use crate::train::backprop::update;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Trains `network` for `config.max_epoch` epochs, visiting `examples` in
/// order and updating weights after every example.
///
/// Every example is shape-checked before the first update, so a bad example
/// fails the call without touching any weight. With `max_epoch == 0` the
/// weights are left exactly as they were.
pub fn train_network(
    network: &mut Network,
    examples: &[Example],
    config: &TrainConfig,
) -> Result<Vec<EpochStats>> {
    for example in examples {
        network.check_example(example)?;
    }

    let mut history = Vec::with_capacity(config.max_epoch);

    for epoch in 1..=config.max_epoch {
        let mut total_loss = 0.0;
        for example in examples {
            total_loss += update(network, example, config.learning_rate);
        }

        let train_loss = if examples.is_empty() {
            0.0
        } else {
            total_loss / examples.len() as f64
        };
        debug!(epoch, total_epochs = config.max_epoch, train_loss, "epoch complete");

        history.push(EpochStats {
            epoch,
            total_epochs: config.max_epoch,
            train_loss,
        });
    }

    info!(
        epochs = config.max_epoch,
        examples = examples.len(),
        final_loss = history.last().map(|s| s.train_loss),
        "training finished"
    );

    Ok(history)
}
