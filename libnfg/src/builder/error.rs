use nfg_lite::NfgError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuilderError {
    #[error(transparent)]
    Game(#[from] NfgError),

    #[error("payoffs of contingency {contingency} have {found} entries, expected {expected}")]
    PayoffLengthMismatch {
        contingency: String,
        expected: usize,
        found: usize,
    },
}
