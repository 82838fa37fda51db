/// Weighted edge into a unit.
///
/// `source` indexes the upstream layer (the input layer for hidden units,
/// the hidden layer for output units). The edge does not own its source;
/// the `Network` owns every unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub source: usize,
    pub weight: f64,
}

impl Connection {
    pub fn new(source: usize, weight: f64) -> Connection {
        Connection { source, weight }
    }
}
