pub mod corridor;
pub mod money;
pub mod ports;
pub mod quote;
