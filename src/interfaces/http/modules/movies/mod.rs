//! Movies module — `/api/movies`

pub mod dto;

pub use dto::{CreateMovieRequest, UpdateMovieRequest};

use dto::{apply_movie_patch, new_movie_record};

use crate::domain::{ObjectId, Resource};
use crate::infrastructure::database::entities::movie;

pub struct Movies;

impl Resource for Movies {
    type Entity = movie::Entity;
    type Model = movie::Model;
    type ActiveModel = movie::ActiveModel;
    type Create = CreateMovieRequest;
    type Update = UpdateMovieRequest;

    const NAME: &'static str = "Movie";
    const PATH: &'static str = "/api/movies";
    const COLLECTION_KEY: &'static str = "movies";
    const TOTAL_KEY: &'static str = "totalMovies";
    const TAG: &'static str = "Movies";

    fn id_column() -> movie::Column {
        movie::Column::Id
    }

    fn new_record(id: ObjectId, payload: CreateMovieRequest) -> movie::ActiveModel {
        new_movie_record!(movie, id, payload)
    }

    fn apply_patch(record: &mut movie::ActiveModel, patch: UpdateMovieRequest) {
        apply_movie_patch!(record, patch)
    }
}
