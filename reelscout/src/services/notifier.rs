//! Notifier
//!
//! [`Notifier`] is the delivery seam. reelscout ships no mail transport; the
//! [`OutboxNotifier`] writes a complete `multipart/alternative` message into
//! a drop directory that a local mail agent (or a person) can pick up.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Message handed to a notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub sender: String,
    pub recipients: Vec<String>,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl OutgoingMessage {
    /// RFC 5322 message with a plain-text and an HTML part
    pub fn to_mime(&self, date: DateTime<Local>) -> String {
        let boundary = format!("reelscout-{}", date.timestamp());

        let mut mime = String::new();
        mime.push_str(&format!("From: {}\r\n", self.sender));
        mime.push_str(&format!("To: {}\r\n", self.recipients.join(", ")));
        mime.push_str(&format!("Subject: {}\r\n", self.subject));
        mime.push_str(&format!("Date: {}\r\n", date.to_rfc2822()));
        mime.push_str("MIME-Version: 1.0\r\n");
        mime.push_str(&format!(
            "Content-Type: multipart/alternative; boundary=\"{}\"\r\n\r\n",
            boundary
        ));

        for (content_type, body) in [("text/plain", &self.text_body), ("text/html", &self.html_body)] {
            mime.push_str(&format!("--{}\r\n", boundary));
            mime.push_str(&format!("Content-Type: {}; charset=\"utf-8\"\r\n", content_type));
            mime.push_str("Content-Transfer-Encoding: 8bit\r\n\r\n");
            mime.push_str(&crlf(body));
            mime.push_str("\r\n");
        }

        mime.push_str(&format!("--{}--\r\n", boundary));
        mime
    }
}

/// Body text with every line ending as CRLF
fn crlf(body: &str) -> String {
    body.replace("\r\n", "\n").replace('\n', "\r\n")
}

/// Where a delivered message ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub location: String,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, message: &OutgoingMessage) -> Result<DeliveryReceipt, NotifyError>;
}

/// Writes each message as an `.eml` file into `outbox_dir`
pub struct OutboxNotifier {
    outbox_dir: PathBuf,
}

impl OutboxNotifier {
    pub fn new(outbox_dir: impl Into<PathBuf>) -> Self {
        Self {
            outbox_dir: outbox_dir.into(),
        }
    }
}

#[async_trait]
impl Notifier for OutboxNotifier {
    async fn deliver(&self, message: &OutgoingMessage) -> Result<DeliveryReceipt, NotifyError> {
        let now = Local::now();
        let stamp = now.format("%Y%m%dT%H%M%S").to_string();

        tokio::fs::create_dir_all(&self.outbox_dir).await?;

        // Never replace an earlier message from the same second
        let mut attempt = 0u32;
        let (path, mut file) = loop {
            let name = match attempt {
                0 => format!("{}-movie-list.eml", stamp),
                n => format!("{}-{}-movie-list.eml", stamp, n),
            };
            let path = self.outbox_dir.join(name);

            match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => break (path, file),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!("{} already exists, trying next name", path.display());
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        };

        file.write_all(message.to_mime(now).as_bytes()).await?;
        file.flush().await?;

        info!(
            recipients = message.recipients.len(),
            "Message written to {}",
            path.display()
        );

        Ok(DeliveryReceipt {
            location: path.display().to_string(),
        })
    }
}
