use crate::api::{create_label, ApiClient};
use crate::error::LaunchError;
use crate::models::{LabelRef, Template};

/// Label ids for a launch. Existing labels keep their id; new names are
/// created under the template's organization, in order.
pub async fn resolve_label_ids(
    api: &ApiClient,
    labels: &[LabelRef],
    template: &Template,
) -> Result<Vec<i64>, LaunchError> {
    let mut ids = Vec::with_capacity(labels.len());
    for label in labels {
        if let Some(id) = label.id {
            ids.push(id);
            continue;
        }
        let organization = template
            .organization
            .or_else(|| template.summary_fields.organization.as_ref().map(|o| o.id))
            .ok_or_else(|| LaunchError::LabelOrganizationMissing(label.name.clone()))?;
        let created = create_label(api, &label.name, organization)
            .await
            .map_err(|source| LaunchError::Label {
                name: label.name.clone(),
                source,
            })?;
        tracing::info!(label = %created.name, id = created.id, "created label");
        ids.push(created.id);
    }
    Ok(ids)
}
