//! Serialized form of a text buffer
//!
//! Layout: `t1:<byte length>:<UTF-8 payload>`. The version tag comes first
//! so the format can change without breaking old data. The explicit length
//! lets the payload carry anything, including `:` and NUL.

use crate::error::{Result, TextError};

const VERSION_TAG: &str = "t1";

pub fn encode(text: &str) -> String {
    format!("{}:{}:{}", VERSION_TAG, text.len(), text)
}

pub fn decode(data: &str) -> Result<String> {
    let (tag, rest) = data
        .split_once(':')
        .ok_or_else(|| TextError::Decode("missing version tag".to_owned()))?;
    if tag != VERSION_TAG {
        return Err(TextError::Decode(format!("unsupported version `{}`", tag)));
    }

    let (len, payload) = rest
        .split_once(':')
        .ok_or_else(|| TextError::Decode("missing length prefix".to_owned()))?;
    if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TextError::Decode(format!("invalid length `{}`", len)));
    }
    let len: usize = len
        .parse()
        .map_err(|_| TextError::Decode(format!("invalid length `{}`", len)))?;

    if payload.len() != len {
        return Err(TextError::Decode(format!(
            "expected {} payload bytes, found {}",
            len,
            payload.len()
        )));
    }

    log::debug!("decoded {} bytes of serialized text", len);
    Ok(payload.to_owned())
}
