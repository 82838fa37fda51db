use serde::{Serialize, Deserialize};

use crate::math::matrix::argmax;

/// One labeled training or test example.
///
/// `class_values` is a one-hot (or soft) target vector whose length equals
/// the network's output width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub attributes: Vec<f64>,
    pub class_values: Vec<f64>,
}

impl Example {
    pub fn new(attributes: Vec<f64>, class_values: Vec<f64>) -> Example {
        Example { attributes, class_values }
    }

    /// Index of the target class, using the same tie rule as `Network::classify`.
    pub fn label(&self) -> usize {
        argmax(&self.class_values)
    }

    /// (attribute count, class count)
    pub fn shape(&self) -> (usize, usize) {
        (self.attributes.len(), self.class_values.len())
    }
}
