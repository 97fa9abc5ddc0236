use crate::core::extract::extract_entries;
use crate::errors::{AppError, AppResult};
use crate::models::{DirectConversation, TimesheetEntry};
use crate::slack::MessageSource;
use chrono::{DateTime, Utc};

pub struct Core;

impl Core {
    /// Id of the direct conversation held with `bot_id`.
    /// If Slack reports more than one, the last one wins.
    pub fn resolve_channel(ims: &[DirectConversation], bot_id: &str) -> AppResult<String> {
        ims.iter()
            .rev()
            .find(|im| im.user_id == bot_id)
            .map(|im| im.id.clone())
            .ok_or_else(|| AppError::NotFound(format!("no direct conversation with {bot_id}")))
    }

    /// Conversations → standup channel → messages since `from` → entries.
    pub fn build_timesheet<S: MessageSource>(
        source: &S,
        bot_id: &str,
        from: DateTime<Utc>,
    ) -> AppResult<Vec<TimesheetEntry>> {
        let ims = source.list_direct_conversations()?;
        tracing::debug!(count = ims.len(), "direct conversations");

        let channel = Self::resolve_channel(&ims, bot_id)?;
        tracing::info!(%channel, "standup conversation found");

        let messages = source.list_messages(&channel, from)?;
        tracing::info!(count = messages.len(), %from, "messages fetched");

        Ok(extract_entries(messages))
    }
}
