pub mod client;
pub mod credential;
pub mod params;
pub mod sign;

pub use client::{JdClient, JdConfig};
pub use credential::Credentials;
pub use params::{business_params, system_params, PARAM_JSON_KEY, TIMESTAMP_FORMAT};
pub use sign::compute_sign;
