pub mod fields;
pub mod session;
pub mod steps;
pub mod values;

// Re-export commonly used items
pub use fields::PromptField;
pub use session::{submitted_values, WizardSession};
pub use steps::{credential_password_label, needs_credential_passwords, visible_steps, WizardStep};
pub use values::{LaunchValues, OneOrMany};
