use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::domain::entities::email::EmailMessage;

const EXPIRY_NOTE: &str = "<p><small>This link will expire shortly for security reasons.</small></p>";

/// Subject and both renderings of a transactional email, before addressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
    pub text: String,
}

impl EmailContent {
    pub fn into_message(self, from: &str, to: &str) -> EmailMessage {
        EmailMessage {
            from: from.to_string(),
            to: to.to_string(),
            subject: self.subject,
            html_body: self.html,
            text_body: self.text,
        }
    }
}

fn link_paragraph(link: &str, label: &str) -> String {
    format!(
        r#"<p><a href="{href}">{label}</a></p>"#,
        href = encode_double_quoted_attribute(link)
    )
}

pub fn verification_email(name: &str, link: &str) -> EmailContent {
    let html = format!(
        r#"
<h2>Welcome, {name}!</h2>
<p>Thanks for signing up. Please verify your email address by clicking the link below:</p>
{button}
<p>If you didn't create an account, you can safely ignore this email.</p>
{EXPIRY_NOTE}
"#,
        name = encode_text(name),
        button = link_paragraph(link, "Verify Email Address"),
    );
    let text = format!(
        "Welcome, {name}!\n\nPlease verify your email by visiting: {link}\n\nIf you didn't create an account, ignore this email."
    );

    EmailContent {
        subject: "Verify Your Email Address".to_string(),
        html,
        text,
    }
}

pub fn password_reset_email(name: &str, link: &str) -> EmailContent {
    let html = format!(
        r#"
<h2>Password Reset Request</h2>
<p>Hi {name}, we received a request to reset your password.</p>
{button}
<p>If you didn't request a password reset, you can safely ignore this email. Your password will remain unchanged.</p>
{EXPIRY_NOTE}
"#,
        name = encode_text(name),
        button = link_paragraph(link, "Reset Your Password"),
    );
    let text = format!(
        "Hi {name},\n\nReset your password by visiting: {link}\n\nIf you didn't request this, ignore this email."
    );

    EmailContent {
        subject: "Reset Your Password".to_string(),
        html,
        text,
    }
}

pub fn magic_link_email(name: &str, link: &str) -> EmailContent {
    let html = format!(
        r#"
<h2>Magic Login Link</h2>
<p>Hi {name}, click the link below to sign in to your account:</p>
{button}
<p>If you didn't request this link, you can safely ignore this email.</p>
{EXPIRY_NOTE}
"#,
        name = encode_text(name),
        button = link_paragraph(link, "Sign In"),
    );
    let text = format!(
        "Hi {name},\n\nSign in by visiting: {link}\n\nIf you didn't request this, ignore this email."
    );

    EmailContent {
        subject: "Your Magic Login Link".to_string(),
        html,
        text,
    }
}
