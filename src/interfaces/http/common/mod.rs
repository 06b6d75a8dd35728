pub mod error;
pub mod nullable;
pub mod response;
pub mod validated_json;

pub use error::ApiError;
pub use nullable::nullable;
pub use response::MessageResponse;
pub use validated_json::ValidatedJson;
