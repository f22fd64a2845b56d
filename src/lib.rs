pub mod api_client;
pub mod assertions;
pub mod configuration;
pub mod domain;
pub mod error;
pub mod fixture;
pub mod telemetry;
pub mod test_data;
