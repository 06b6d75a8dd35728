//! Embedded movies module — `/api/embedded-movies`

pub mod dto;

pub use dto::*;

use sea_orm::Set;

use crate::domain::{ObjectId, Resource};
use crate::infrastructure::database::entities::documents::Embedding;
use crate::infrastructure::database::entities::embedded_movie;
use crate::interfaces::http::modules::movies::dto::{apply_movie_patch, new_movie_record};

pub struct EmbeddedMovies;

impl Resource for EmbeddedMovies {
    type Entity = embedded_movie::Entity;
    type Model = embedded_movie::Model;
    type ActiveModel = embedded_movie::ActiveModel;
    type Create = CreateEmbeddedMovieRequest;
    type Update = UpdateEmbeddedMovieRequest;

    const NAME: &'static str = "EmbeddedMovie";
    const PATH: &'static str = "/api/embedded-movies";
    const COLLECTION_KEY: &'static str = "embeddedMovies";
    const TOTAL_KEY: &'static str = "totalEmbeddedMovies";
    const TAG: &'static str = "Embedded Movies";

    fn id_column() -> embedded_movie::Column {
        embedded_movie::Column::Id
    }

    fn new_record(id: ObjectId, payload: CreateEmbeddedMovieRequest) -> embedded_movie::ActiveModel {
        new_movie_record!(
            embedded_movie,
            id,
            payload.movie,
            plot_embedding: Set(payload.plot_embedding.map(Embedding)),
        )
    }

    fn apply_patch(record: &mut embedded_movie::ActiveModel, patch: UpdateEmbeddedMovieRequest) {
        apply_movie_patch!(&mut *record, patch.movie);
        if let Some(embedding) = patch.plot_embedding {
            record.plot_embedding = Set(embedding.map(Embedding));
        }
    }
}
