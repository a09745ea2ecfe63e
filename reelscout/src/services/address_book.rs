//! Address book
//!
//! Plain text, one address per line. The first address is the sender, the
//! rest are recipients. Blank lines and `#` comments are ignored.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("Cannot read address file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Address file has no sender")]
    MissingSender,

    #[error("Address file lists no recipients")]
    NoRecipients,
}

/// Sender and recipients for the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressList {
    pub sender: String,
    pub recipients: Vec<String>,
}

pub fn load_addresses(path: &Path) -> Result<AddressList, AddressError> {
    let content = std::fs::read_to_string(path).map_err(|source| AddressError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_addresses(&content)
}

pub fn parse_addresses(content: &str) -> Result<AddressList, AddressError> {
    let mut addresses = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string);

    let sender = addresses.next().ok_or(AddressError::MissingSender)?;
    let recipients: Vec<String> = addresses.collect();
    if recipients.is_empty() {
        return Err(AddressError::NoRecipients);
    }

    Ok(AddressList { sender, recipients })
}
