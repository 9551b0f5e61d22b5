use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjectKeyErr {
    #[error("object key is empty")]
    Empty,
    #[error("object key is not valid utf-8 once decoded: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// S3 notifications form encode the object key, so spaces arrive as `+` and everything else
/// reserved is percent encoded.
pub fn decode_object_key(raw_key: &str) -> Result<String, ObjectKeyErr> {
    let spaced = raw_key.replace('+', " ");
    let decoded = urlencoding::decode(&spaced)?;

    if decoded.is_empty() {
        return Err(ObjectKeyErr::Empty);
    }

    Ok(decoded.into_owned())
}
