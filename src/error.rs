use thiserror::Error;

/// Terminal error kinds for a CLI invocation. Each kind maps to its own
/// process exit code so callers can distinguish failure classes.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("unknown token: {symbol} (supported tokens: {supported})")]
    UnknownToken { symbol: String, supported: String },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid amount \"{amount}\": {reason}")]
    InvalidAmount { amount: String, reason: String },

    #[error("batch contains no transfers")]
    EmptyBatch,

    #[error("submission failed: {0}")]
    Submission(String),

    #[error("query failed for {what}: {reason}")]
    Query { what: String, reason: String },

    #[error("request timed out after {0}s")]
    Timeout(u64),
}

/// Transport-level failure from an RPC or bundler request. Call sites wrap
/// it into the `Error` kind that matches their context (submission vs query).
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("{0}")]
    Transport(String),
}

impl Error {
    pub fn submission(e: RpcError) -> Self {
        match e {
            RpcError::Timeout(secs) => Error::Timeout(secs),
            RpcError::Transport(msg) => Error::Submission(msg),
        }
    }

    pub fn query(what: impl Into<String>, e: RpcError) -> Self {
        match e {
            RpcError::Timeout(secs) => Error::Timeout(secs),
            RpcError::Transport(msg) => Error::Query { what: what.into(), reason: msg },
        }
    }

    /// Exit code for this failure class. 2 matches clap's own usage-error
    /// convention; 0 and 1 are left to success and unclassified panics.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 2,
            Error::Configuration(_) => 3,
            Error::UnknownToken { .. } => 4,
            Error::InvalidAddress(_) => 5,
            Error::InvalidAmount { .. } => 6,
            Error::EmptyBatch => 7,
            Error::Submission(_) => 8,
            Error::Query { .. } => 9,
            Error::Timeout(_) => 10,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_failure_class() {
        let errors = [
            Error::Usage("u".into()),
            Error::Configuration("c".into()),
            Error::UnknownToken { symbol: "DOGE".into(), supported: "USDC".into() },
            Error::InvalidAddress("0x1".into()),
            Error::InvalidAmount { amount: "x".into(), reason: "r".into() },
            Error::EmptyBatch,
            Error::Submission("s".into()),
            Error::Query { what: "ETH balance".into(), reason: "r".into() },
            Error::Timeout(30),
        ];
        let mut codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains(&0));
    }

    #[test]
    fn timeouts_keep_their_kind_in_both_contexts() {
        assert!(matches!(Error::submission(RpcError::Timeout(30)), Error::Timeout(30)));
        assert!(matches!(Error::query("ETH balance", RpcError::Timeout(30)), Error::Timeout(30)));
        assert!(matches!(
            Error::submission(RpcError::Transport("refused".into())),
            Error::Submission(_)
        ));
    }
}
