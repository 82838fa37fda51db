use crate::activation::activation::sigmoid;
use crate::network::connection::Connection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Input,
    BiasToHidden,
    Hidden,
    BiasToOutput,
    Output,
}

impl UnitKind {
    pub fn is_bias(self) -> bool {
        matches!(self, UnitKind::BiasToHidden | UnitKind::BiasToOutput)
    }
}

/// One neuron or bias constant.
///
/// `weighted_sum` and `activation` are caches written by the forward pass;
/// they are meaningful only for hidden and output units once their layer has
/// been evaluated for the current example.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub kind: UnitKind,
    input_value: f64,
    weighted_sum: f64,
    activation: f64,
    pub incoming: Vec<Connection>,
}

impl Unit {
    /// Creates a unit with no incoming connections (input or bias).
    pub fn new(kind: UnitKind) -> Unit {
        Unit::with_incoming(kind, Vec::new())
    }

    pub fn with_incoming(kind: UnitKind, incoming: Vec<Connection>) -> Unit {
        let input_value = if kind.is_bias() { 1.0 } else { 0.0 };
        Unit {
            kind,
            input_value,
            weighted_sum: 0.0,
            activation: 0.0,
            incoming,
        }
    }

    /// Sets the externally supplied value of an input unit. Ignored by every
    /// other kind; bias units stay at 1.
    pub fn set_input(&mut self, value: f64) {
        if self.kind == UnitKind::Input {
            self.input_value = value;
        }
    }

    /// Value this unit feeds downstream.
    pub fn output(&self) -> f64 {
        match self.kind {
            UnitKind::Input => self.input_value,
            UnitKind::BiasToHidden | UnitKind::BiasToOutput => 1.0,
            UnitKind::Hidden | UnitKind::Output => self.activation,
        }
    }

    pub fn weighted_sum(&self) -> f64 {
        self.weighted_sum
    }

    pub fn activation(&self) -> f64 {
        self.output()
    }

    /// Recomputes `weighted_sum` and `activation` from `upstream`, the layer
    /// this unit's connections point into. No-op for input and bias units.
    pub fn calculate_output(&mut self, upstream: &[Unit]) {
        if !matches!(self.kind, UnitKind::Hidden | UnitKind::Output) {
            return;
        }
        self.weighted_sum = self.incoming.iter()
            .map(|c| c.weight * upstream[c.source].output())
            .sum();
        self.activation = sigmoid(self.weighted_sum);
    }
}
