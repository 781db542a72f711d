/// A single transactional email, built fresh for each send.
///
/// `html_body` and `text_body` are parallel renderings of the same content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}
