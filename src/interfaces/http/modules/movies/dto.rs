//! Movie request bodies, shared with embedded movies

use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::infrastructure::database::entities::documents::{Awards, Imdb};
use crate::interfaces::http::common::nullable;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMovieRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub plot: Option<String>,
    pub fullplot: Option<String>,
    pub genres: Option<Vec<String>>,
    /// Running time in minutes
    #[validate(range(min = 0, message = "must not be negative"))]
    pub runtime: Option<i32>,
    pub cast: Option<Vec<String>>,
    pub poster: Option<String>,
    pub languages: Option<Vec<String>>,
    pub released: Option<DateTime<Utc>>,
    pub directors: Option<Vec<String>>,
    pub writers: Option<Vec<String>>,
    pub rated: Option<String>,
    #[validate(nested)]
    pub awards: Option<Awards>,
    #[validate(range(min = 1870, max = 2100, message = "must be a plausible release year"))]
    pub year: Option<i32>,
    #[validate(nested)]
    pub imdb: Option<Imdb>,
    pub countries: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub num_mflix_comments: Option<i32>,
}

/// Update movie request; only supplied fields change.
///
/// Optional fields take `null` to clear the stored value. `title` is
/// required on the record, so a `null` title is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMovieRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub plot: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub fullplot: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<Vec<String>>)]
    pub genres: Option<Option<Vec<String>>>,
    #[validate(range(min = 0, message = "must not be negative"))]
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>)]
    pub runtime: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<Vec<String>>)]
    pub cast: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub poster: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<Vec<String>>)]
    pub languages: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub released: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<Vec<String>>)]
    pub directors: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<Vec<String>>)]
    pub writers: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub rated: Option<Option<String>>,
    #[validate(nested)]
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<Awards>)]
    pub awards: Option<Option<Awards>>,
    #[validate(range(min = 1870, max = 2100, message = "must be a plausible release year"))]
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>)]
    pub year: Option<Option<i32>>,
    #[validate(nested)]
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<Imdb>)]
    pub imdb: Option<Option<Imdb>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<Vec<String>>)]
    pub countries: Option<Option<Vec<String>>>,
    #[serde(rename = "type")]
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub kind: Option<Option<String>>,
    #[validate(range(min = 0, message = "must not be negative"))]
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>)]
    pub num_mflix_comments: Option<Option<i32>>,
}

/// Builds a movie-shaped active model (`movie` or `embedded_movie`) from a
/// [`CreateMovieRequest`]; extra columns follow the payload.
macro_rules! new_movie_record {
    ($entity:ident, $id:expr, $movie:expr $(, $column:ident: $value:expr)* $(,)?) => {{
        use $crate::infrastructure::database::entities::documents::StringList;
        let movie: $crate::interfaces::http::modules::movies::CreateMovieRequest = $movie;
        $entity::ActiveModel {
            id: sea_orm::Set($id.into()),
            title: sea_orm::Set(movie.title),
            plot: sea_orm::Set(movie.plot),
            fullplot: sea_orm::Set(movie.fullplot),
            genres: sea_orm::Set(movie.genres.map(StringList)),
            runtime: sea_orm::Set(movie.runtime),
            cast: sea_orm::Set(movie.cast.map(StringList)),
            poster: sea_orm::Set(movie.poster),
            languages: sea_orm::Set(movie.languages.map(StringList)),
            released: sea_orm::Set(movie.released),
            directors: sea_orm::Set(movie.directors.map(StringList)),
            writers: sea_orm::Set(movie.writers.map(StringList)),
            rated: sea_orm::Set(movie.rated),
            awards: sea_orm::Set(movie.awards),
            year: sea_orm::Set(movie.year),
            imdb: sea_orm::Set(movie.imdb),
            countries: sea_orm::Set(movie.countries.map(StringList)),
            kind: sea_orm::Set(movie.kind),
            num_mflix_comments: sea_orm::Set(movie.num_mflix_comments),
            $($column: $value,)*
        }
    }};
}

/// Copies the supplied fields of an [`UpdateMovieRequest`] onto a
/// movie-shaped active model.
macro_rules! apply_movie_patch {
    ($record:expr, $patch:expr) => {{
        use $crate::infrastructure::database::entities::documents::StringList;
        use sea_orm::Set;
        let record = $record;
        let patch: $crate::interfaces::http::modules::movies::UpdateMovieRequest = $patch;
        if let Some(title) = patch.title {
            record.title = Set(title);
        }
        if let Some(plot) = patch.plot {
            record.plot = Set(plot);
        }
        if let Some(fullplot) = patch.fullplot {
            record.fullplot = Set(fullplot);
        }
        if let Some(genres) = patch.genres {
            record.genres = Set(genres.map(StringList));
        }
        if let Some(runtime) = patch.runtime {
            record.runtime = Set(runtime);
        }
        if let Some(cast) = patch.cast {
            record.cast = Set(cast.map(StringList));
        }
        if let Some(poster) = patch.poster {
            record.poster = Set(poster);
        }
        if let Some(languages) = patch.languages {
            record.languages = Set(languages.map(StringList));
        }
        if let Some(released) = patch.released {
            record.released = Set(released);
        }
        if let Some(directors) = patch.directors {
            record.directors = Set(directors.map(StringList));
        }
        if let Some(writers) = patch.writers {
            record.writers = Set(writers.map(StringList));
        }
        if let Some(rated) = patch.rated {
            record.rated = Set(rated);
        }
        if let Some(awards) = patch.awards {
            record.awards = Set(awards);
        }
        if let Some(year) = patch.year {
            record.year = Set(year);
        }
        if let Some(imdb) = patch.imdb {
            record.imdb = Set(imdb);
        }
        if let Some(countries) = patch.countries {
            record.countries = Set(countries.map(StringList));
        }
        if let Some(kind) = patch.kind {
            record.kind = Set(kind);
        }
        if let Some(num_mflix_comments) = patch.num_mflix_comments {
            record.num_mflix_comments = Set(num_mflix_comments);
        }
    }};
}

pub(crate) use apply_movie_patch;
pub(crate) use new_movie_record;
