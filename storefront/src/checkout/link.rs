//! Messaging hand-off link
//!
//! The server only builds the URL; the client opens it.

use crate::core::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingLink {
    base_url: String,
    phone: String,
}

impl MessagingLink {
    pub fn new(base_url: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            phone: phone.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.messaging_base_url, &config.order_phone)
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// `{base}?phone={phone}&text={percent-encoded text}`
    pub fn url_for(&self, text: &str) -> String {
        format!(
            "{}?phone={}&text={}",
            self.base_url,
            urlencoding::encode(&self.phone),
            urlencoding::encode(text)
        )
    }
}
