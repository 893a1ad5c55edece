pub mod ports;
pub mod profile;
pub mod transaction;
