use thiserror::Error;

use crate::answers::QuestionnaireAnswers;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to serialize site data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Receipt for a staged site export.
#[derive(Debug, Clone)]
pub struct PublishedSiteHandle {
    pub site_name: String,
    /// The serialized aggregate the platform would receive.
    pub payload: String,
}

/// Seam for the external publishing platform. The real integration lives
/// outside this crate.
pub trait Publisher {
    fn publish(&self, answers: &QuestionnaireAnswers)
        -> Result<PublishedSiteHandle, PublishError>;
}

/// Stand-in publisher: serializes the aggregate and confirms. Nothing
/// leaves the process.
pub struct StubPublisher;

impl Publisher for StubPublisher {
    fn publish(
        &self,
        answers: &QuestionnaireAnswers,
    ) -> Result<PublishedSiteHandle, PublishError> {
        let payload = serde_json::to_string_pretty(answers)?;
        let site_name = if answers.business_name.is_empty() {
            "untitled-site".to_string()
        } else {
            slugify(&answers.business_name)
        };
        Ok(PublishedSiteHandle { site_name, payload })
    }
}

/// Lowercase the name and collapse every non-alphanumeric run into one dash.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
