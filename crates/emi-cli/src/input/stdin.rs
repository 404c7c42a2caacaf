use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Loan input piped on stdin, parsed straight into the command's input type.
///
/// `Ok(None)` means nothing was piped (interactive terminal or empty input),
/// and the command falls back to its flags.
pub fn read_piped<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;
    let body = raw.trim();
    if body.is_empty() {
        return Ok(None);
    }

    log::debug!("parsing {} bytes of piped input", body.len());
    let parsed = serde_json::from_str(body).map_err(|e| format!("Failed to parse stdin: {e}"))?;
    Ok(Some(parsed))
}
