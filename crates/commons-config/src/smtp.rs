//! Outbound mail (SMTP) configuration.

use serde::{Deserialize, Serialize};

/// Default SMTP relay host.
fn default_host() -> String {
    String::from("smtp.gmail.com")
}

/// Default SMTP submission port (STARTTLS).
const fn default_port() -> u16 {
    587
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    /// Account user name (also the From address).
    #[serde(default)]
    pub user: String,

    /// App password for the account. Not the account password.
    #[serde(default)]
    pub app_password: String,

    /// Destination inbox for form notifications. Defaults to `user`.
    #[serde(default)]
    pub notify_to: String,

    /// SMTP relay host.
    #[serde(default = "default_host")]
    pub host: String,

    /// SMTP submission port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            user: String::new(),
            app_password: String::new(),
            notify_to: String::new(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl SmtpConfig {
    /// Check if the SMTP config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.user.is_empty() && !self.app_password.is_empty()
    }

    /// The inbox that receives form notifications.
    #[must_use]
    pub fn notify_to(&self) -> &str {
        if self.notify_to.is_empty() {
            &self.user
        } else {
            &self.notify_to
        }
    }
}
