//! Safe asynchronous text reading.
//!
//! Size and binary checks run before any decoding so a replacement run never
//! drags a multi-gigabyte blob or an executable into memory as "text".

use std::path::Path;

use memchr::memchr;
use tokio::fs as tokio_fs;
use tokio::io::AsyncReadExt;

use crate::error::IoError;

/// How many leading bytes are scanned for NULL when sniffing binaries.
const BINARY_SNIFF_LEN: usize = 8192;

/// Read text from a file with size and binary checks.
///
/// # Arguments
/// * `path` - Path to the file
/// * `max_bytes` - Maximum file size in bytes
///
/// # Errors
/// Returns [`IoError::NotFound`] when the file cannot be stat'd,
/// [`IoError::TooLarge`] when it exceeds `max_bytes`, and
/// [`IoError::BinaryFile`] when NULL bytes are detected. Invalid UTF-8 is
/// decoded lossily and is never an error.
pub async fn read_text<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let path = path.as_ref();

    let metadata = tokio_fs::metadata(path)
        .await
        .map_err(|_| IoError::NotFound(path.to_string_lossy().to_string()))?;

    if metadata.len() > max_bytes {
        return Err(IoError::TooLarge(metadata.len(), max_bytes));
    }

    let mut file = tokio_fs::File::open(path).await?;
    let mut buffer = Vec::with_capacity(metadata.len() as usize);
    file.read_to_end(&mut buffer).await?;

    decode(buffer)
}

/// Quick binary detection - NULL byte scan over the leading bytes.
fn is_binary(buffer: &[u8]) -> bool {
    let check_len = std::cmp::min(buffer.len(), BINARY_SNIFF_LEN);
    memchr(0, &buffer[..check_len]).is_some()
}

/// Decode bytes to String, replacing invalid sequences with U+FFFD.
fn decode(buffer: Vec<u8>) -> Result<String, IoError> {
    if is_binary(&buffer) {
        return Err(IoError::BinaryFile);
    }

    match String::from_utf8(buffer) {
        Ok(s) => Ok(s),
        Err(e) => Ok(String::from_utf8_lossy(&e.into_bytes()).into_owned()),
    }
}
