// Atomic API modules
pub mod client;
pub mod resources;
pub mod templates;

// Re-export commonly used functions
pub use client::{set_silent, ApiClient};
pub use resources::{create_label, get_credential, get_execution_environment, ping};
pub use templates::{get_launch_configuration, get_survey_spec, get_template, launch_template};
