use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::parser::Posting;

/// Environment variable holding the webhook address.
pub const WEBHOOK_ENV: &str = "DISCORD_WEBHOOK_URL";

const EMPTY_FIELD: &str = "—";

#[derive(Debug, Serialize)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Build the single-embed payload for one posting.
pub fn build_payload(posting: &Posting) -> WebhookPayload {
    let company = if posting.company.is_empty() {
        "Unknown"
    } else {
        &posting.company
    };
    let description = match &posting.link {
        Some(link) => format!("[Click to apply]({})", link),
        None => "Application link not found.".to_string(),
    };
    let field = |name: &str, value: &str| EmbedField {
        name: name.to_string(),
        value: if value.is_empty() {
            EMPTY_FIELD.to_string()
        } else {
            value.to_string()
        },
        inline: true,
    };

    WebhookPayload {
        embeds: vec![Embed {
            title: format!("New Canada Software Engineering Intern — {}", company),
            description,
            url: posting.link.clone(),
            fields: vec![
                field("Company", &posting.company),
                field("Role", &posting.role),
                field("Location", &posting.location),
                field("Age", &posting.age),
            ],
        }],
    }
}

/// Blocking webhook sender with a fixed per-request timeout.
pub struct WebhookClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl WebhookClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build webhook client")?;
        Ok(WebhookClient { client, url })
    }

    pub fn send(&self, posting: &Posting) -> Result<()> {
        self.client
            .post(&self.url)
            .json(&build_payload(posting))
            .send()
            .and_then(|r| r.error_for_status())
            .context("Webhook request failed")?;
        Ok(())
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(link: Option<&str>) -> Posting {
        Posting {
            company: "Acme".to_string(),
            role: "SWE Intern".to_string(),
            location: "Toronto, Canada".to_string(),
            age: "0d".to_string(),
            link: link.map(str::to_string),
        }
    }

    #[test]
    fn payload_shape_with_link() {
        let payload = build_payload(&posting(Some("https://x.co/a")));
        let json = serde_json::to_value(&payload).unwrap();
        let embed = &json["embeds"][0];
        assert!(embed["title"].as_str().unwrap().contains("Acme"));
        assert_eq!(embed["description"], "[Click to apply](https://x.co/a)");
        assert_eq!(embed["url"], "https://x.co/a");
        assert_eq!(embed["fields"].as_array().unwrap().len(), 4);
        assert_eq!(embed["fields"][0]["name"], "Company");
        assert_eq!(embed["fields"][0]["inline"], true);
    }

    #[test]
    fn payload_without_link() {
        let payload = build_payload(&posting(None));
        let json = serde_json::to_value(&payload).unwrap();
        let embed = &json["embeds"][0];
        assert_eq!(embed["description"], "Application link not found.");
        assert!(embed["url"].is_null());
    }

    #[test]
    fn empty_values_render_placeholders() {
        let mut p = posting(None);
        p.company.clear();
        p.role.clear();
        p.age.clear();
        let payload = build_payload(&p);
        let json = serde_json::to_value(&payload).unwrap();
        let embed = &json["embeds"][0];
        assert!(embed["title"].as_str().unwrap().contains("Unknown"));
        assert_eq!(embed["fields"][1]["value"], "—");
        assert_eq!(embed["fields"][3]["value"], "—");
    }
}
