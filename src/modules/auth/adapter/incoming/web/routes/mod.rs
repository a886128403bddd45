pub mod login;
pub mod logout;
pub mod session;
pub mod update_credentials;

pub use login::{login_handler, LoginRequestDto};
pub use logout::logout_handler;
pub use session::session_handler;
pub use update_credentials::{update_credentials_handler, UpdateCredentialsRequest};
