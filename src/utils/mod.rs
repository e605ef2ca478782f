// URL handling utilities
pub mod url_builder;

// Parsing utilities
pub mod extra_vars;
pub mod tags;

// Display utilities
pub mod emptiness;
pub mod verbosity;

// Re-export all utilities for convenient access
pub use url_builder::absolute_url;
pub use extra_vars::{json_to_yaml, merge_survey_answers, parse_extra_vars};
pub use tags::{join_tag_names, parse_string_to_tag_array};
pub use emptiness::{is_empty, is_empty_field};
pub use verbosity::verbosity_string;
