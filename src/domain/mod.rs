//! Domain layer: record identifiers, the resource description and the
//! store port the HTTP layer talks to.

pub mod object_id;
pub mod ports;
pub mod resource;

pub use object_id::{ObjectId, ParseObjectIdError};
pub use ports::ResourceRepository;
pub use resource::Resource;
