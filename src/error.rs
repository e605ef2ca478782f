/// Error types for talking to the controller and launching templates
use thiserror::Error;

use crate::models::TemplateKind;
use crate::wizard::WizardStep;

/// Title shown when a launch attempt fails.
pub const LAUNCH_FAILURE_TITLE: &str = "Failure to launch";

/// Errors raised by the REST client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// Network-related errors
    #[error("Network error: {0}")]
    Network(String),

    /// The controller answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status {
        status: u16,
        /// Message mined from the response body, or the raw body
        message: String,
    },

    /// The response body did not match the expected shape
    #[error("Failed to decode response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while resolving, assembling or submitting a launch
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Fetching the template or its launch configuration failed
    #[error("Failed to load {what}: {source}")]
    Resolve {
        what: &'static str,
        #[source]
        source: ApiError,
    },

    /// The resource returned for a template id has another kind
    #[error("Template {id} is a {found}, expected a {expected}")]
    KindMismatch {
        id: i64,
        expected: TemplateKind,
        found: String,
    },

    /// The resource is neither a job template nor a workflow job template
    #[error("Unsupported template type \"{0}\"")]
    UnsupportedType(String),

    /// Extra variables are not valid YAML or JSON
    #[error("Extra variables could not be parsed: {0}")]
    ExtraVarsParse(String),

    /// Extra variables parsed to something other than a mapping
    #[error("Extra variables must be a mapping of names to values, got {0}")]
    ExtraVarsNotMapping(&'static str),

    /// A new label cannot be created without an owning organization
    #[error("Cannot create label \"{0}\": template has no organization")]
    LabelOrganizationMissing(String),

    /// Creating a label failed
    #[error("Failed to create label \"{name}\": {source}")]
    Label {
        name: String,
        #[source]
        source: ApiError,
    },

    /// The launch request itself failed
    #[error("{0}")]
    Submit(#[source] ApiError),

    /// The step is hidden by the launch configuration
    #[error("Step \"{}\" is not shown for this template", .0.label())]
    StepHidden(WizardStep),

    /// Reading a values file failed
    #[error("Failed to read values file {path}: {reason}")]
    Values { path: String, reason: String },
}

impl LaunchError {
    /// Non-blocking notification describing this failure.
    pub fn notification(&self) -> Notification {
        Notification {
            title: LAUNCH_FAILURE_TITLE.to_string(),
            message: self.to_string(),
        }
    }
}

/// A user-facing alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}
