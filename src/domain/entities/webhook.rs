use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Events the auth provider reports to the webhook endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    VerifyEmail,
    PasswordReset,
    MagicLogin,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VerifyEmail => "verify_email",
            Self::PasswordReset => "password_reset",
            Self::MagicLogin => "magic_login",
        }
    }

    pub fn all_types() -> &'static [EventType] {
        &[Self::VerifyEmail, Self::PasswordReset, Self::MagicLogin]
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all_types()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown event type: {s}"))
    }
}

/// Fields every webhook payload carries regardless of event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Opaque record identifier assigned by the auth provider.
    pub recordid: String,
    pub email: String,
    pub name: String,
}

/// A webhook delivery from the auth provider, keyed by `event_type`.
///
/// Each variant owns the link its email needs, so a `verify_email` event
/// cannot be dispatched without a `verificationLink`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum WebhookPayload {
    VerifyEmail {
        #[serde(flatten)]
        recipient: Recipient,
        #[serde(rename = "verificationLink")]
        verification_link: String,
    },
    PasswordReset {
        #[serde(flatten)]
        recipient: Recipient,
        #[serde(rename = "resetLink")]
        reset_link: String,
    },
    MagicLogin {
        #[serde(flatten)]
        recipient: Recipient,
        #[serde(rename = "magicLoginLink")]
        magic_login_link: String,
    },
}

impl WebhookPayload {
    pub fn event_type(&self) -> EventType {
        match self {
            Self::VerifyEmail { .. } => EventType::VerifyEmail,
            Self::PasswordReset { .. } => EventType::PasswordReset,
            Self::MagicLogin { .. } => EventType::MagicLogin,
        }
    }

    pub fn recipient(&self) -> &Recipient {
        match self {
            Self::VerifyEmail { recipient, .. }
            | Self::PasswordReset { recipient, .. }
            | Self::MagicLogin { recipient, .. } => recipient,
        }
    }

    /// The short-lived link embedded in the outgoing email.
    pub fn link(&self) -> &str {
        match self {
            Self::VerifyEmail {
                verification_link, ..
            } => verification_link,
            Self::PasswordReset { reset_link, .. } => reset_link,
            Self::MagicLogin {
                magic_login_link, ..
            } => magic_login_link,
        }
    }
}
