use crate::api::{get_launch_configuration, get_template, ApiClient};
use crate::error::LaunchError;
use crate::models::{LaunchConfiguration, Template, TemplateKind};
use crate::wizard::WizardSession;

/// Outcome of resolving a template for launch.
#[derive(Debug)]
pub enum ResolverState {
    /// Nothing fetched yet, or a refresh is in flight
    Loading,
    Ready { template: Template, config: LaunchConfiguration },
    Failed(LaunchError),
}

/// Fetches a template and its launch configuration together.
pub struct LaunchResolver {
    api: ApiClient,
    kind: TemplateKind,
    template_id: i64,
    state: ResolverState,
}

impl LaunchResolver {
    pub fn new(api: ApiClient, kind: TemplateKind, template_id: i64) -> Self {
        LaunchResolver {
            api,
            kind,
            template_id,
            state: ResolverState::Loading,
        }
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn template_id(&self) -> i64 {
        self.template_id
    }

    pub fn state(&self) -> &ResolverState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ResolverState::Loading)
    }

    pub fn error(&self) -> Option<&LaunchError> {
        match &self.state {
            ResolverState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// (Re)issue both requests concurrently. Either failure fails the whole
    /// resolution; nothing partial is kept.
    pub async fn refresh(&mut self) -> &ResolverState {
        self.state = ResolverState::Loading;
        tracing::debug!(kind = %self.kind, id = self.template_id, "resolving template for launch");

        let (template, config) = tokio::join!(
            get_template(&self.api, self.kind, self.template_id),
            get_launch_configuration(&self.api, self.kind, self.template_id),
        );

        self.state = match settle(self.kind, self.template_id, template, config) {
            Ok((template, config)) => ResolverState::Ready { template, config },
            Err(e) => {
                tracing::error!(%e, "failed to resolve template");
                ResolverState::Failed(e)
            }
        };
        &self.state
    }

    /// A fresh wizard session once resolution succeeded.
    pub fn session(&self) -> Option<Result<WizardSession, LaunchError>> {
        match &self.state {
            ResolverState::Ready { template, config } => {
                Some(WizardSession::new(template.clone(), config.clone()))
            }
            _ => None,
        }
    }
}

/// Combine the two fetch results. The template error wins when both fail.
pub fn settle(
    kind: TemplateKind,
    id: i64,
    template: Result<Template, crate::error::ApiError>,
    config: Result<LaunchConfiguration, crate::error::ApiError>,
) -> Result<(Template, LaunchConfiguration), LaunchError> {
    let template = template.map_err(|source| LaunchError::Resolve { what: "template", source })?;
    let config = config.map_err(|source| LaunchError::Resolve {
        what: "launch configuration",
        source,
    })?;
    let Some(found) = template.kind() else {
        return Err(LaunchError::UnsupportedType(template.resource_type.clone()));
    };
    if found != kind {
        return Err(LaunchError::KindMismatch {
            id,
            expected: kind,
            found: template.resource_type.clone(),
        });
    }
    Ok((template, config))
}
