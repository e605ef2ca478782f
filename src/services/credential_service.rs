use futures_util::future::join_all;
use std::collections::HashMap;

use crate::api::{get_credential, ApiClient};
use crate::models::{Credential, LaunchConfiguration, WizardFormState};
use crate::wizard::WizardSession;

/// Selected credentials whose password prompts cannot be judged yet: they
/// carry no inputs and are not among the template's default credentials.
pub fn credentials_missing_details(config: &LaunchConfiguration, form: &WizardFormState) -> Vec<i64> {
    form.credentials
        .credentials
        .iter()
        .flatten()
        .filter(|c| c.inputs.is_none() && config.default_credential(c.id).is_none())
        .map(|c| c.id)
        .collect()
}

/// Swap selected credentials for their fetched details, keeping order.
pub fn apply_credential_details(form: &mut WizardFormState, details: &HashMap<i64, Credential>) {
    if let Some(selected) = form.credentials.credentials.as_mut() {
        for credential in selected.iter_mut() {
            if let Some(detail) = details.get(&credential.id) {
                *credential = detail.clone();
            }
        }
    }
}

/// Fetch details for credentials chosen outside the template defaults so
/// the credential passwords step sees their inputs. Failed lookups leave
/// the credential as it was.
pub async fn load_credential_details(api: &ApiClient, session: &mut WizardSession) {
    let missing = credentials_missing_details(session.config(), session.form());
    if missing.is_empty() {
        return;
    }

    let fetched = join_all(missing.into_iter().map(|id| async move {
        match get_credential(api, id).await {
            Ok(credential) => Some((id, credential)),
            Err(e) => {
                tracing::warn!(%e, credential = id, "credential detail unavailable");
                None
            }
        }
    }))
    .await;
    let details: HashMap<i64, Credential> = fetched.into_iter().flatten().collect();
    if details.is_empty() {
        return;
    }
    session.update(|form| apply_credential_details(form, &details));
}
