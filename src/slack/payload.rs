//! Decoding of Slack web API responses.
//! Only the fields the pipeline needs are read; anything else is ignored.

use crate::errors::{AppError, AppResult};
use crate::models::{DirectConversation, RawMessage};
use crate::utils::time::parse_slack_ts;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct BootResponse {
    ok: Option<bool>,
    error: Option<String>,
    #[serde(default)]
    ims: Vec<ImItem>,
}

#[derive(Debug, Deserialize)]
struct ImItem {
    id: Option<String>,
    user: Option<String>,
    latest: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    ok: Option<bool>,
    error: Option<String>,
    #[serde(default)]
    messages: Vec<MessageItem>,
}

#[derive(Debug, Deserialize)]
struct MessageItem {
    text: Option<String>,
    user: Option<String>,
    bot_id: Option<String>,
    ts: Option<String>,
}

/// Slack answers HTTP 200 with `"ok": false` on API-level failures.
fn ensure_ok(ok: Option<bool>, error: Option<String>) -> AppResult<()> {
    if ok == Some(false) {
        return Err(AppError::Api(
            error.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }
    Ok(())
}

/// `client.boot` → direct conversations (`ims[]`).
pub fn parse_conversations(body: &str) -> AppResult<Vec<DirectConversation>> {
    let resp: BootResponse = serde_json::from_str(body)?;
    ensure_ok(resp.ok, resp.error)?;

    resp.ims
        .into_iter()
        .map(|im| -> AppResult<DirectConversation> {
            // `latest` may be a ts string, an embedded message or absent
            let latest = match im.latest {
                Some(Value::String(ts)) if !ts.is_empty() => Some(parse_slack_ts(&ts)?),
                _ => None,
            };
            Ok(DirectConversation {
                id: im.id.unwrap_or_default(),
                user_id: im.user.unwrap_or_default(),
                latest,
            })
        })
        .collect()
}

/// `conversations.history` → messages (`messages[]`).
pub fn parse_messages(body: &str) -> AppResult<Vec<RawMessage>> {
    let resp: HistoryResponse = serde_json::from_str(body)?;
    ensure_ok(resp.ok, resp.error)?;

    resp.messages
        .into_iter()
        .map(|m| -> AppResult<RawMessage> {
            Ok(RawMessage {
                user_id: m.user.unwrap_or_default(),
                bot_id: m.bot_id.unwrap_or_default(),
                timestamp: parse_slack_ts(m.ts.as_deref().unwrap_or_default())?,
                text: m.text.unwrap_or_default(),
            })
        })
        .collect()
}
