use thiserror::Error;

/// Why a demo request did not reach the relay. Only logged; the page shows
/// the same message for every variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form relay rejected the request with status {status}")]
    Rejected { status: u16 },
    #[error("form relay request failed: {0}")]
    Transport(String),
}

impl From<gloo_net::Error> for SubmitError {
    fn from(err: gloo_net::Error) -> Self {
        SubmitError::Transport(err.to_string())
    }
}
