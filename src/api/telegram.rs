//! Telegram Bot API `sendMessage` delivery.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{api::client, prelude::*};

pub struct Api {
    client: Client,
    url: String,
    chat_id: String,
}

impl Api {
    pub fn try_new(bot_token: &str, chat_id: String) -> Result<Self> {
        Ok(Self {
            client: client::try_new()?,
            url: format!("https://api.telegram.org/bot{bot_token}/sendMessage"),
            chat_id,
        })
    }

    #[instrument(skip_all)]
    pub async fn send_message(&self, text: &str) -> Result {
        let response = self
            .client
            .post(&self.url)
            .json(&SendMessageRequest { chat_id: &self.chat_id, text })
            .send()
            .await
            .context("failed to call the Telegram API")?
            .error_for_status()
            .context("the request failed")?
            .json::<SendMessageResponse>()
            .await
            .context("failed to deserialize the response")?;
        ensure!(response.ok, "Telegram rejected the message");
        info!("sent");
        Ok(())
    }
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendMessageResponse {
    ok: bool,
}
