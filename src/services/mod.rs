pub mod credential_service;
pub mod label_service;
pub mod launch_service;
pub mod payload_service;
pub mod resolver;
pub mod review_service;

// Re-export commonly used functions
pub use credential_service::{apply_credential_details, credentials_missing_details, load_credential_details};
pub use label_service::resolve_label_ids;
pub use launch_service::{LaunchOutcome, LaunchService};
pub use payload_service::{assemble_payload, PayloadAssembler};
pub use resolver::{LaunchResolver, ResolverState};
pub use review_service::{
    extra_vars_display, load_review_context, mask_passwords, render_review, review_session, ReviewContext,
    ENCRYPTED_SENTINEL,
};
