//! Delivery of contact-form messages.

use crate::config::SiteConfig;
use crate::diag::console_warn;
use crate::error::ContactError;
use crate::model::ContactMessage;
use gloo::net::http::Request;
use gloo::timers::future::TimeoutFuture;

pub const SENT_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";
pub const FAILED_MESSAGE: &str = "Sorry, your message could not be sent. Please try again later.";

/// POSTs the message as JSON to a backend endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpContactSink {
    pub endpoint: String,
}

/// Stand-in used when no endpoint is configured: waits, then reports success.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedContactSink {
    pub delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContactSink {
    Http(HttpContactSink),
    Simulated(SimulatedContactSink),
}

impl ContactSink {
    pub fn from_config(config: &SiteConfig) -> Self {
        match &config.contact_endpoint {
            Some(endpoint) if !endpoint.trim().is_empty() => ContactSink::Http(HttpContactSink {
                endpoint: endpoint.clone(),
            }),
            _ => {
                console_warn!("No contact endpoint configured; contact messages are not delivered");
                ContactSink::Simulated(SimulatedContactSink {
                    delay_ms: config.simulated_submit_ms,
                })
            }
        }
    }

    pub async fn submit(&self, message: &ContactMessage) -> Result<(), ContactError> {
        match self {
            ContactSink::Http(sink) => sink.submit(message).await,
            ContactSink::Simulated(sink) => sink.submit(message).await,
        }
    }
}

impl HttpContactSink {
    pub async fn submit(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let request = Request::post(&self.endpoint)
            .json(message)
            .map_err(|e| ContactError::Encode(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(ContactError::Rejected(resp.status()))
        }
    }
}

impl SimulatedContactSink {
    pub async fn submit(&self, _message: &ContactMessage) -> Result<(), ContactError> {
        TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_selects_http_sink() {
        let config = SiteConfig {
            contact_endpoint: Some("/api/contact".into()),
            ..Default::default()
        };
        assert_eq!(
            ContactSink::from_config(&config),
            ContactSink::Http(HttpContactSink {
                endpoint: "/api/contact".into()
            })
        );
    }

    #[test]
    fn missing_or_blank_endpoint_selects_simulation() {
        let blank = SiteConfig {
            contact_endpoint: Some("  ".into()),
            ..Default::default()
        };
        for config in [SiteConfig::default(), blank] {
            assert_eq!(
                ContactSink::from_config(&config),
                ContactSink::Simulated(SimulatedContactSink { delay_ms: 1500 })
            );
        }
    }

    #[test]
    fn message_serializes_with_form_field_names() {
        let msg = ContactMessage {
            name: "Kai".into(),
            phone: "123".into(),
            message: "Hello".into(),
        };
        let v = serde_json::to_value(&msg).unwrap();
        assert_eq!(v, serde_json::json!({"name": "Kai", "phone": "123", "message": "Hello"}));
    }
}
