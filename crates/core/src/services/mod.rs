pub mod chart_service;
pub mod color_source;
pub mod data_loader;
