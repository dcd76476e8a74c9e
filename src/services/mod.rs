pub mod forecast;
pub mod forecast_types;
pub mod history_yaml;
pub mod projection;
pub mod sampler;
pub mod statistics;
