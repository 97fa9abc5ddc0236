use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{DirectConversation, RawMessage};
use crate::slack::{MessageSource, payload};
use crate::utils::time::format_slack_ts;
use chrono::{DateTime, Utc};
use reqwest::blocking::multipart::Form;
use reqwest::header::{COOKIE, USER_AGENT};

/// Single request page size; older messages are not paged in.
const HISTORY_LIMIT: u32 = 1000;

/// Web client build the boot/history fields were captured from.
const CLIENT_VERSION_TS: &str = "1625048244";

/// Web API endpoint of `workspace`, tagged like the Slack web client does.
pub fn endpoint_url(workspace: &str, method: &str, now: i64) -> String {
    format!(
        "https://{workspace}.slack.com/api/{method}?_x_id=noversion-{now}.000000&_x_version_ts=noversion&_x_gantry=true"
    )
}

/// Blocking Slack client authenticated with a web session (`d` cookie + xoxc token).
pub struct SlackClient {
    client: reqwest::blocking::Client,
    workspace: String,
    token: String,
    auth_cookie: String,
    user_agent: String,
}

impl SlackClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            workspace: config.workspace.clone(),
            token: config.token.clone(),
            auth_cookie: config.auth_cookie.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    fn post(&self, method: &str, fields: Vec<(&'static str, String)>) -> AppResult<String> {
        let url = endpoint_url(&self.workspace, method, Utc::now().timestamp());

        let form = fields
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        tracing::debug!(%method, workspace = %self.workspace, "POST slack api");

        let body = self
            .client
            .post(url)
            .header(USER_AGENT, &self.user_agent)
            .header(COOKIE, format!("d={}", self.auth_cookie))
            .multipart(form)
            .send()?
            .error_for_status()?
            .text()?;

        Ok(body)
    }
}

impl MessageSource for SlackClient {
    fn list_direct_conversations(&self) -> AppResult<Vec<DirectConversation>> {
        let fields = vec![
            ("build_version_ts", CLIENT_VERSION_TS.to_string()),
            ("version_ts", CLIENT_VERSION_TS.to_string()),
            ("flannel_api_ver", "4".to_string()),
            ("include_min_version_bump_check", "1".to_string()),
            ("only_self_subteams", "1".to_string()),
            ("token", self.token.clone()),
            ("_x_reason", "deferred-data".to_string()),
            ("_x_sonic", "true".to_string()),
        ];

        let body = self.post("client.boot", fields)?;
        payload::parse_conversations(&body)
    }

    fn list_messages(
        &self,
        channel_id: &str,
        oldest: DateTime<Utc>,
    ) -> AppResult<Vec<RawMessage>> {
        let fields = vec![
            ("channel", channel_id.to_string()),
            ("limit", HISTORY_LIMIT.to_string()),
            ("ignore_replies", "true".to_string()),
            ("include_pin_count", "true".to_string()),
            ("inclusive", "true".to_string()),
            ("no_user_profile", "true".to_string()),
            ("token", self.token.clone()),
            ("_x_reason", "message-pane/requestHistory".to_string()),
            ("_x_mode", "online".to_string()),
            ("_x_sonic", "true".to_string()),
            ("oldest", format_slack_ts(oldest)),
        ];

        let body = self.post("conversations.history", fields)?;
        payload::parse_messages(&body)
    }
}
