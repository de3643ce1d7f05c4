use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::storage::ApplicationRepository;

/// Per-card command, taken from the last path segment of
/// `/applications/:id/:action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardAction {
    View,
    Copy,
    Delete,
}

impl CardAction {
    pub fn as_str(self) -> &'static str {
        match self {
            CardAction::View => "view",
            CardAction::Copy => "copy",
            CardAction::Delete => "delete",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardAction::View => "View raw",
            CardAction::Copy => "Copy",
            CardAction::Delete => "Delete",
        }
    }

    pub fn path(self, id: &str) -> String {
        format!("/applications/{id}/{}", self.as_str())
    }
}

/// Result of running a card command against the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Pretty-printed JSON of the record.
    Raw(String),
    /// Plain-text summary for the clipboard.
    Summary(String),
    /// Whether a record was actually removed.
    Deleted(bool),
}

/// Runs `action` for the record `id`. View and copy never mutate storage.
pub async fn run_card_action(
    repo: &ApplicationRepository,
    id: &str,
    action: CardAction,
) -> Result<ActionOutcome, AppError> {
    match action {
        CardAction::Delete => Ok(ActionOutcome::Deleted(repo.delete(id).await?)),
        CardAction::View | CardAction::Copy => {
            let Some(record) = repo.find(id).await? else {
                warn!("{} requested for unknown application {id}", action.as_str());
                return Err(AppError::NotFound(format!("Application {id} not found")));
            };
            if action == CardAction::View {
                let raw = serde_json::to_string_pretty(&record)
                    .map_err(|e| AppError::Internal(e.into()))?;
                Ok(ActionOutcome::Raw(raw))
            } else {
                Ok(ActionOutcome::Summary(record.copy_summary()))
            }
        }
    }
}
