/// Identity attached to a request that presented a known API token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub token: String,
    /// Customer profile linked to the token, if any.
    pub customer_id: Option<i64>,
}

/// The caller of a request: `None` for anonymous requests.
#[derive(Debug, Clone, Default)]
pub struct Caller(pub Option<Principal>);

impl Caller {
    pub fn customer_id(&self) -> Option<i64> {
        self.0.as_ref().and_then(|p| p.customer_id)
    }
}
