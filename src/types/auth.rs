use serde::{Deserialize, Serialize};

/// State of the simulated login gate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthState {
    pub logged_in: bool,
    pub email: Option<String>,
}
