use std::collections::HashMap;

use anyhow::{anyhow, bail, Result};
use axum::http::{header::AUTHORIZATION, HeaderMap};

use super::principal::Principal;

/// Why a request's credentials were refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    Malformed,
    UnknownToken,
}

/// Known API tokens, each optionally linked to a customer id.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tokens: HashMap<String, Option<i64>>,
}

impl TokenRegistry {
    /// Parses entries of the form `token` or `token:customer_id`.
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let mut tokens = HashMap::new();
        for entry in entries {
            let entry = entry.as_ref().trim();
            let (token, customer) = match entry.split_once(':') {
                Some((token, id)) => {
                    let id: i64 = id
                        .trim()
                        .parse()
                        .map_err(|_| anyhow!("invalid customer id in API token entry {entry:?}"))?;
                    (token.trim(), Some(id))
                }
                None => (entry, None),
            };
            if token.is_empty() {
                bail!("empty API token in entry {entry:?}");
            }
            tokens.insert(token.to_string(), customer);
        }
        Ok(Self { tokens })
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Resolves the `Authorization` header.
    ///
    /// No header is anonymous (`Ok(None)`); a header that names an unknown
    /// token, or uses an unsupported scheme, is an error.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Option<Principal>, CredentialError> {
        let Some(value) = headers.get(AUTHORIZATION) else {
            return Ok(None);
        };
        let value = value.to_str().map_err(|_| CredentialError::Malformed)?;

        let token = value
            .strip_prefix("Bearer ")
            .or_else(|| value.strip_prefix("Token "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(CredentialError::Malformed)?;

        self.tokens
            .get(token)
            .map(|customer_id| {
                Some(Principal {
                    token: token.to_string(),
                    customer_id: *customer_id,
                })
            })
            .ok_or(CredentialError::UnknownToken)
    }
}
