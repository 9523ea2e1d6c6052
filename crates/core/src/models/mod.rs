pub mod chart;
pub mod holding;
pub mod position;
pub mod quote;
pub mod session;
pub mod settings;
