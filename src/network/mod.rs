pub mod connection;
pub mod network;
pub mod unit;

pub use connection::Connection;
pub use network::Network;
pub use unit::{Unit, UnitKind};
