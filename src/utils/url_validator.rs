//! URL 验证模块
//!
//! 在调用 ResolutionService 之前由调用方执行，核心逻辑本身不做 URL 语法校验

use url::Url;

use crate::errors::MinilinkError;

/// URL 验证错误
#[derive(Debug)]
pub enum UrlValidationError {
    EmptyUrl,
    TooLong { length: usize, max: usize },
    InvalidProtocol(String),
    DangerousProtocol(String),
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "URL is {} characters long, the limit is {}", length, max)
            }
            Self::InvalidProtocol(proto) => write!(
                f,
                "Invalid protocol: {}. Only http:// and https:// are allowed",
                proto
            ),
            Self::DangerousProtocol(proto) => {
                write!(f, "Dangerous protocol blocked: {}", proto)
            }
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

impl From<UrlValidationError> for MinilinkError {
    fn from(err: UrlValidationError) -> Self {
        MinilinkError::invalid_input(err.to_string())
    }
}

/// 危险协议列表
const DANGEROUS_PROTOCOLS: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

/// 验证 URL 格式
///
/// 检查项目：
/// 1. URL 不为空
/// 2. 长度不超过 `max_length` 个字符
/// 3. 不是危险协议（javascript:, data:, file: 等）
/// 4. 必须是 http:// 或 https://
/// 5. URL 格式有效
pub fn validate_url(url: &str, max_length: usize) -> Result<(), UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let length = url.chars().count();
    if length > max_length {
        return Err(UrlValidationError::TooLong {
            length,
            max: max_length,
        });
    }

    let url_lower = url.to_lowercase();

    for proto in DANGEROUS_PROTOCOLS {
        if url_lower.starts_with(proto) {
            return Err(UrlValidationError::DangerousProtocol(proto.to_string()));
        }
    }

    if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
        let proto = url_lower
            .split(':')
            .next()
            .map(|s| format!("{}:", s))
            .unwrap_or_default();
        return Err(UrlValidationError::InvalidProtocol(proto));
    }

    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::InvalidFormat(
            "missing host".to_string(),
        ));
    }

    Ok(())
}
