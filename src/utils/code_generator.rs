//! Digest-based short code generation
//!
//! A short code is a prefix of the URL-safe base64 encoding of the MD5 digest
//! of the original URL, with every non-alphanumeric character removed.
//! Asking for a longer code extends the same string, so the candidates tried
//! for one URL are prefixes of each other.

use base64::{Engine as _, engine::general_purpose::URL_SAFE};

use crate::errors::{MinilinkError, Result};

/// 首次生成的短码长度
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// 128 位摘要编码后最多能提供的字母数字字符数
pub const MAX_CODE_LENGTH: usize = 22;

/// 摘要过滤后的完整字母数字串
fn alphanumeric_digest(url: &str) -> String {
    let digest = md5::compute(url.as_bytes());
    URL_SAFE
        .encode(digest.0)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// 该 URL 的摘要最多能生成多长的短码
pub fn digest_capacity(url: &str) -> usize {
    alphanumeric_digest(url).len()
}

/// Generate the short code of `length` characters for `url`
///
/// Deterministic: the same `url` and `length` always yield the same code.
///
/// # Errors
/// * `InvalidInput` if `length` is zero
/// * `DigestCapacityExceeded` if the filtered digest is shorter than `length`
pub fn generate_short_code(url: &str, length: usize) -> Result<String> {
    if length == 0 {
        return Err(MinilinkError::invalid_input(
            "short code length must be at least 1",
        ));
    }

    let mut code = alphanumeric_digest(url);
    if code.len() < length {
        return Err(MinilinkError::digest_capacity_exceeded(format!(
            "requested a {}-character code but the digest of '{}' only provides {}",
            length,
            url,
            code.len()
        )));
    }

    code.truncate(length);
    Ok(code)
}
