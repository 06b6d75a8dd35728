//! Per-resource HTTP modules

pub mod comments;
pub mod embedded_movies;
pub mod health;
pub mod movies;
pub mod theaters;
pub mod users;

pub use comments::Comments;
pub use embedded_movies::EmbeddedMovies;
pub use movies::Movies;
pub use theaters::Theaters;
pub use users::Users;
