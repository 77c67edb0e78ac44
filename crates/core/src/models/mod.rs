pub mod chart;
pub mod settings;
pub mod state;
pub mod transaction;
