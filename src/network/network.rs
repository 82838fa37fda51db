use tracing::info;

use crate::data::example::Example;
use crate::error::{NetworkError, Result};
use crate::math::matrix::{argmax, Matrix};
use crate::network::connection::Connection;
use crate::network::unit::{Unit, UnitKind};
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_network;

/// Fully connected network with one hidden layer.
///
/// The input and hidden layers each end with a bias unit whose output is the
/// constant 1. Every hidden unit is wired to the whole input layer, every
/// output unit to the whole hidden layer. Topology is fixed at construction;
/// only connection weights change.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) input_layer: Vec<Unit>,
    pub(crate) hidden_layer: Vec<Unit>,
    pub(crate) output_layer: Vec<Unit>,
    /// For hidden unit `j`, the `(output unit, connection index)` pairs of the
    /// edges leaving it.
    pub(crate) outgoing: Vec<Vec<(usize, usize)>>,
    examples: Vec<Example>,
    config: TrainConfig,
}

impl Network {
    /// Builds a network sized from the first training example.
    ///
    /// `hidden_weights` must be `hidden_width x (input_width + 1)` and
    /// `output_weights` must be `output_width x (hidden_width + 1)`, where the
    /// trailing column is the bias weight.
    pub fn new(
        examples: Vec<Example>,
        hidden_width: usize,
        learning_rate: f64,
        max_epoch: usize,
        hidden_weights: Matrix,
        output_weights: Matrix,
    ) -> Result<Network> {
        Network::with_config(
            examples,
            hidden_width,
            TrainConfig::new(learning_rate, max_epoch),
            hidden_weights,
            output_weights,
        )
    }

    pub fn with_config(
        examples: Vec<Example>,
        hidden_width: usize,
        config: TrainConfig,
        hidden_weights: Matrix,
        output_weights: Matrix,
    ) -> Result<Network> {
        let (input_width, output_width) = examples.first()
            .ok_or(NetworkError::EmptyTrainingSet)?
            .shape();

        if let Some(index) = examples.iter().position(|ex| ex.shape() != (input_width, output_width)) {
            return Err(NetworkError::InconsistentTrainingSet { index });
        }
        check_weights("hidden", &hidden_weights, hidden_width, input_width + 1)?;
        check_weights("output", &output_weights, output_width, hidden_width + 1)?;

        let mut input_layer: Vec<Unit> = (0..input_width)
            .map(|_| Unit::new(UnitKind::Input))
            .collect();
        input_layer.push(Unit::new(UnitKind::BiasToHidden));

        let mut hidden_layer: Vec<Unit> = hidden_weights.data.iter()
            .map(|row| Unit::with_incoming(UnitKind::Hidden, connect(row)))
            .collect();
        hidden_layer.push(Unit::new(UnitKind::BiasToOutput));

        let output_layer: Vec<Unit> = output_weights.data.iter()
            .map(|row| Unit::with_incoming(UnitKind::Output, connect(row)))
            .collect();

        let mut outgoing = vec![Vec::with_capacity(output_width); hidden_width];
        for (k, unit) in output_layer.iter().enumerate() {
            for (c, conn) in unit.incoming.iter().enumerate() {
                if conn.source < hidden_width {
                    outgoing[conn.source].push((k, c));
                }
            }
        }

        info!(
            input_width,
            hidden_width,
            output_width,
            examples = examples.len(),
            learning_rate = config.learning_rate,
            max_epoch = config.max_epoch,
            "built network"
        );

        Ok(Network {
            input_layer,
            hidden_layer,
            output_layer,
            outgoing,
            examples,
            config,
        })
    }

    /// Number of attributes an example must carry (bias excluded).
    pub fn input_width(&self) -> usize {
        self.input_layer.len() - 1
    }

    /// Number of hidden units (bias excluded).
    pub fn hidden_width(&self) -> usize {
        self.hidden_layer.len() - 1
    }

    pub fn output_width(&self) -> usize {
        self.output_layer.len()
    }

    pub fn input_layer(&self) -> &[Unit] {
        &self.input_layer
    }

    pub fn hidden_layer(&self) -> &[Unit] {
        &self.hidden_layer
    }

    pub fn output_layer(&self) -> &[Unit] {
        &self.output_layer
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Output activations cached by the most recent forward pass.
    pub fn output_activations(&self) -> Vec<f64> {
        self.output_layer.iter().map(Unit::activation).collect()
    }

    /// Current input-to-hidden weights, `[hidden][input]` with the bias last.
    pub fn hidden_weights(&self) -> Matrix {
        weights_of(&self.hidden_layer[..self.hidden_width()])
    }

    /// Current hidden-to-output weights, `[output][hidden]` with the bias last.
    pub fn output_weights(&self) -> Matrix {
        weights_of(&self.output_layer)
    }

    /// Loads `attributes` into the input layer and evaluates the hidden then
    /// the output layer.
    pub fn forward(&mut self, attributes: &[f64]) -> Result<()> {
        let expected = self.input_width();
        if attributes.len() != expected {
            return Err(NetworkError::AttributeCount { expected, got: attributes.len() });
        }
        self.propagate(attributes);
        Ok(())
    }

    /// Forward pass for input already known to have `input_width` attributes.
    pub(crate) fn propagate(&mut self, attributes: &[f64]) {
        for (unit, &value) in self.input_layer.iter_mut().zip(attributes) {
            unit.set_input(value);
        }
        for unit in self.hidden_layer.iter_mut() {
            unit.calculate_output(&self.input_layer);
        }
        for unit in self.output_layer.iter_mut() {
            unit.calculate_output(&self.hidden_layer);
        }
    }

    /// Runs a forward pass and returns the index of the strongest output.
    /// On ties the later index wins.
    pub fn classify(&mut self, example: &Example) -> Result<usize> {
        self.forward(&example.attributes)?;
        Ok(argmax(&self.output_activations()))
    }

    /// Fraction of `examples` whose predicted class matches their label.
    pub fn accuracy(&mut self, examples: &[Example]) -> Result<f64> {
        if examples.is_empty() {
            return Ok(0.0);
        }
        let mut correct = 0;
        for example in examples {
            self.check_example(example)?;
            self.propagate(&example.attributes);
            if argmax(&self.output_activations()) == example.label() {
                correct += 1;
            }
        }
        Ok(correct as f64 / examples.len() as f64)
    }

    /// Trains on the stored example set with the stored config.
    pub fn train(&mut self) -> Result<()> {
        let examples = std::mem::take(&mut self.examples);
        let config = self.config;
        let result = train_network(self, &examples, &config);
        self.examples = examples;
        result.map(|_| ())
    }

    /// Trains on `examples` with `config`, returning one `EpochStats` per epoch.
    pub fn train_with(&mut self, examples: &[Example], config: &TrainConfig) -> Result<Vec<EpochStats>> {
        train_network(self, examples, config)
    }

    pub(crate) fn check_example(&self, example: &Example) -> Result<()> {
        let (attributes, classes) = example.shape();
        if attributes != self.input_width() {
            return Err(NetworkError::AttributeCount { expected: self.input_width(), got: attributes });
        }
        if classes != self.output_width() {
            return Err(NetworkError::ClassCount { expected: self.output_width(), got: classes });
        }
        Ok(())
    }
}

fn check_weights(layer: &'static str, weights: &Matrix, rows: usize, cols: usize) -> Result<()> {
    let bad_row = weights.ragged_row(cols);
    if weights.data.len() != rows || bad_row.is_some() {
        return Err(NetworkError::WeightShape {
            layer,
            expected_rows: rows,
            expected_cols: cols,
            rows: weights.data.len(),
            bad_row,
        });
    }
    Ok(())
}

fn connect(row: &[f64]) -> Vec<Connection> {
    row.iter()
        .enumerate()
        .map(|(source, &weight)| Connection::new(source, weight))
        .collect()
}

fn weights_of(units: &[Unit]) -> Matrix {
    Matrix::from_data(
        units.iter()
            .map(|unit| unit.incoming.iter().map(|c| c.weight).collect())
            .collect()
    )
}
