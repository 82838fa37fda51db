use crate::activation::activation::step_derivative;
use crate::data::example::Example;
use crate::error::Result;
use crate::loss::mse::MseLoss;
use crate::network::network::Network;

/// Weight deltas for one example, laid out like the weight matrices:
/// `output[k][p]` for edge `p` into output unit `k`, `hidden[j][p]` for edge
/// `p` into hidden unit `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub output: Vec<Vec<f64>>,
    pub hidden: Vec<Vec<f64>>,
}

/// Computes every weight delta for the example last run through `forward`.
///
/// Reads only; all deltas come from the same pre-update weights and
/// activations.
pub fn compute_gradients(network: &Network, targets: &[f64], learning_rate: f64) -> Gradients {
    let errors: Vec<f64> = network.output_layer.iter()
        .zip(targets)
        .map(|(unit, &target)| target - unit.activation())
        .collect();
    let derivatives: Vec<f64> = network.output_layer.iter()
        .map(|unit| step_derivative(unit.weighted_sum()))
        .collect();

    let output: Vec<Vec<f64>> = network.output_layer.iter()
        .enumerate()
        .map(|(k, unit)| {
            unit.incoming.iter()
                .map(|c| learning_rate * network.hidden_layer[c.source].activation() * errors[k] * derivatives[k])
                .collect()
        })
        .collect();

    let hidden: Vec<Vec<f64>> = network.hidden_layer[..network.hidden_width()].iter()
        .zip(&network.outgoing)
        .map(|(unit, edges)| {
            let derivative = step_derivative(unit.weighted_sum());
            let summation: f64 = edges.iter()
                .map(|&(k, c)| network.output_layer[k].incoming[c].weight * errors[k] * derivatives[k])
                .sum();
            unit.incoming.iter()
                .map(|c| learning_rate * network.input_layer[c.source].output() * derivative * summation)
                .collect()
        })
        .collect();

    Gradients { output, hidden }
}

/// Adds the output-layer deltas, then the hidden-layer deltas.
pub fn apply_gradients(network: &mut Network, gradients: &Gradients) {
    for (unit, deltas) in network.output_layer.iter_mut().zip(&gradients.output) {
        for (conn, delta) in unit.incoming.iter_mut().zip(deltas) {
            conn.weight += delta;
        }
    }
    for (unit, deltas) in network.hidden_layer.iter_mut().zip(&gradients.hidden) {
        for (conn, delta) in unit.incoming.iter_mut().zip(deltas) {
            conn.weight += delta;
        }
    }
}

/// Forward pass, both gradient passes and the weight update for one example.
/// Returns the example's squared-error loss measured before the update.
pub fn train_example(network: &mut Network, example: &Example, learning_rate: f64) -> Result<f64> {
    network.check_example(example)?;
    Ok(update(network, example, learning_rate))
}

/// `train_example` for an example whose shape has already been checked.
pub(crate) fn update(network: &mut Network, example: &Example, learning_rate: f64) -> f64 {
    network.propagate(&example.attributes);
    let loss = MseLoss::loss(&network.output_activations(), &example.class_values);

    let gradients = compute_gradients(network, &example.class_values, learning_rate);
    apply_gradients(network, &gradients);
    loss
}
