pub mod auth_gate;

pub use auth_gate::{AuthError, AuthGate, SESSION_KEY};
