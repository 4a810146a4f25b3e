//! Short code resolution service
//!
//! Assigns each distinct URL a stable short code and resolves codes back to
//! their URLs. Uniqueness is enforced by the store; this service only reacts to
//! the constraint violations it reports.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::config::ShortenerConfig;
use crate::errors::{MinilinkError, Result};
use crate::storage::{MappingStore, UrlMapping};
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, generate_short_code};

/// 短码长度策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePolicy {
    /// 首个候选短码的长度
    pub default_length: usize,
    /// 候选短码的最大数量，每个候选比上一个长一位
    pub max_attempts: u32,
}

impl Default for CodePolicy {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_CODE_LENGTH,
            max_attempts: 10,
        }
    }
}

impl CodePolicy {
    pub fn validate(&self) -> Result<()> {
        if self.default_length == 0 || self.max_attempts == 0 {
            return Err(MinilinkError::invalid_input(
                "code policy needs a positive default length and attempt budget",
            ));
        }
        if self.longest_candidate() > MAX_CODE_LENGTH {
            return Err(MinilinkError::invalid_input(format!(
                "code policy would need {}-character codes, the digest supplies at most {}",
                self.longest_candidate(),
                MAX_CODE_LENGTH
            )));
        }
        Ok(())
    }

    fn longest_candidate(&self) -> usize {
        self.default_length + self.max_attempts as usize - 1
    }
}

impl From<&ShortenerConfig> for CodePolicy {
    fn from(config: &ShortenerConfig) -> Self {
        Self {
            default_length: config.default_code_length,
            max_attempts: config.max_attempts,
        }
    }
}

/// Get-or-create, lookup and click resolution over a shared [`MappingStore`]
///
/// Holds no mutable state; clone the `Arc` or share a reference across tasks.
pub struct ResolutionService {
    store: Arc<dyn MappingStore>,
    policy: CodePolicy,
}

impl ResolutionService {
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self {
            store,
            policy: CodePolicy::default(),
        }
    }

    pub fn with_policy(store: Arc<dyn MappingStore>, policy: CodePolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { store, policy })
    }

    pub fn policy(&self) -> CodePolicy {
        self.policy
    }

    pub fn store(&self) -> &Arc<dyn MappingStore> {
        &self.store
    }

    /// Return the mapping for `original_url`, creating it on first sight
    ///
    /// Collisions with other URLs' codes are resolved by lengthening the
    /// candidate drawn from the same digest, one character per attempt. A lost
    /// race on the URL itself returns the winner's mapping.
    pub async fn get_or_create(&self, original_url: &str) -> Result<UrlMapping> {
        if original_url.trim().is_empty() {
            return Err(MinilinkError::invalid_input("original URL cannot be empty"));
        }

        if let Some(existing) = self.store.find_by_url(original_url).await? {
            return Ok(existing);
        }

        let mut length = self.policy.default_length;
        for attempt in 1..=self.policy.max_attempts {
            let candidate = generate_short_code(original_url, length)?;

            if self.store.exists_by_code(&candidate).await? {
                debug!(
                    "Short code {} already taken (attempt {}/{}), lengthening",
                    candidate, attempt, self.policy.max_attempts
                );
                length += 1;
                continue;
            }

            match self.store.create(original_url, &candidate).await {
                Ok(mapping) => return Ok(mapping),
                Err(MinilinkError::DuplicateCode(_)) => {
                    warn!(
                        "Lost race for short code {} (attempt {}/{}), lengthening",
                        candidate, attempt, self.policy.max_attempts
                    );
                    length += 1;
                }
                Err(MinilinkError::DuplicateUrl(_)) => {
                    debug!("Concurrent caller mapped {} first", original_url);
                    return self.store.find_by_url(original_url).await?.ok_or_else(|| {
                        MinilinkError::database_operation(format!(
                            "store reported {} as mapped but returned no mapping",
                            original_url
                        ))
                    });
                }
                Err(e) => return Err(e),
            }
        }

        error!(
            "Collision resolution exhausted for {} after {} attempts",
            original_url, self.policy.max_attempts
        );
        Err(MinilinkError::collision_exhausted(format!(
            "no free short code for '{}' within {} attempts (lengths {}..={})",
            original_url,
            self.policy.max_attempts,
            self.policy.default_length,
            self.policy.longest_candidate()
        )))
    }

    /// Read-only lookup by short code
    pub async fn lookup(&self, short_code: &str) -> Result<Option<UrlMapping>> {
        if short_code.is_empty() {
            return Ok(None);
        }
        self.store.find_by_code(short_code).await
    }

    /// Count a click on `short_code` and return the URL to redirect to
    pub async fn record_click_and_resolve(&self, short_code: &str) -> Result<Option<String>> {
        if short_code.is_empty() {
            return Ok(None);
        }
        Ok(self
            .store
            .increment_clicks(short_code)
            .await?
            .map(|mapping| mapping.original_url))
    }
}
