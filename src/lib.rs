//! Launch job templates and workflow job templates on an automation
//! controller.
//!
//! The crate mirrors the controller UI's "prompt on launch" wizard: it
//! resolves a template and its launch configuration, decides which wizard
//! steps apply, assembles the launch request body from the collected form
//! values and renders a review of what will be submitted.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod wizard;

pub use error::{ApiError, LaunchError, Notification};
