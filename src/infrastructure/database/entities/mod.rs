//! Database entities module

pub mod comment;
pub mod documents;
pub mod embedded_movie;
pub mod movie;
pub mod theater;
pub mod user;

pub use comment::Entity as Comment;
pub use embedded_movie::Entity as EmbeddedMovie;
pub use movie::Entity as Movie;
pub use theater::Entity as Theater;
pub use user::Entity as User;
