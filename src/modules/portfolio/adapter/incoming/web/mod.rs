pub mod error_mapping;
pub mod routes;

pub use error_mapping::data_access_error_response;
