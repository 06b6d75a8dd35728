//! OpenAPI document
//!
//! Health and the shared schemas come from the derive; the CRUD paths are
//! generated per resource since their handlers are generic.

use utoipa::openapi::path::{
    HttpMethod, Operation, OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder,
    PathsBuilder,
};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::{
    ContentBuilder, ObjectBuilder, OpenApiBuilder, Ref, Required, Response, ResponseBuilder, Type,
};
use utoipa::{OpenApi, ToSchema};

use crate::domain::Resource;
use crate::interfaces::http::common::MessageResponse;
use crate::interfaces::http::modules::{
    comments, embedded_movies, health, movies, theaters, users, Comments, EmbeddedMovies, Movies,
    Theaters, Users,
};

#[derive(OpenApi)]
#[openapi(
    paths(health::health_check),
    components(
        schemas(
            MessageResponse,
            health::HealthResponse,
            health::ComponentHealth,
            users::CreateUserRequest,
            users::UpdateUserRequest,
            movies::CreateMovieRequest,
            movies::UpdateMovieRequest,
            theaters::CreateTheaterRequest,
            theaters::UpdateTheaterRequest,
            comments::CreateCommentRequest,
            comments::UpdateCommentRequest,
            embedded_movies::CreateEmbeddedMovieRequest,
            embedded_movies::UpdateEmbeddedMovieRequest,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and database reachability"),
        (name = "Users", description = "User accounts"),
        (name = "Movies", description = "Movie catalogue"),
        (name = "Theaters", description = "Theater locations"),
        (name = "Comments", description = "User comments on movies"),
        (name = "Embedded Movies", description = "Movies with plot embedding vectors"),
    ),
    info(
        title = "Mflix API",
        version = "1.0.0",
        description = "CRUD REST API over the mflix sample collections",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Full document: derived part plus the generated resource paths.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let paths = PathsBuilder::new();
    let paths = resource_paths::<Users>(paths);
    let paths = resource_paths::<Movies>(paths);
    let paths = resource_paths::<Theaters>(paths);
    let paths = resource_paths::<Comments>(paths);
    let paths = resource_paths::<EmbeddedMovies>(paths);

    let mut doc = ApiDoc::openapi();
    doc.merge(OpenApiBuilder::new().paths(paths.build()).build());
    doc
}

fn resource_paths<R: Resource>(paths: PathsBuilder) -> PathsBuilder {
    let collection = PathItemBuilder::new()
        .operation(HttpMethod::Get, list_operation::<R>())
        .operation(
            HttpMethod::Post,
            operation::<R>("create", format!("Create a {}", R::NAME))
                .request_body(Some(json_body(<R::Create as ToSchema>::name())))
                .response("201", record_response("Created record"))
                .response("400", message_response("Invalid body or store rejection"))
                .build(),
        )
        .build();

    let item = PathItemBuilder::new()
        .operation(
            HttpMethod::Get,
            operation::<R>("get", format!("Get a {} by id", R::NAME))
                .parameter(id_parameter())
                .response("200", record_response("Record"))
                .response("404", message_response(R::not_found_message()))
                .response("500", message_response("Malformed id or store failure"))
                .build(),
        )
        .operation(
            HttpMethod::Put,
            operation::<R>("update", format!("Update a {}", R::NAME))
                .parameter(id_parameter())
                .request_body(Some(json_body(<R::Update as ToSchema>::name())))
                .response("200", record_response("Record after the update"))
                .response("400", message_response("Invalid body, malformed id or store rejection"))
                .response("404", message_response(R::not_found_message()))
                .build(),
        )
        .operation(
            HttpMethod::Delete,
            operation::<R>("delete", format!("Delete a {}", R::NAME))
                .parameter(id_parameter())
                .response("200", message_response(R::deleted_message()))
                .response("404", message_response(R::not_found_message()))
                .response("500", message_response("Malformed id or store failure"))
                .build(),
        )
        .build();

    paths
        .path(R::PATH, collection)
        .path(format!("{}/{{id}}", R::PATH), item)
}

fn list_operation<R: Resource>() -> Operation {
    operation::<R>("list", format!("List {} page by page", R::COLLECTION_KEY))
        .parameter(query_parameter("page", "1-based page number, default 1"))
        .parameter(query_parameter("limit", "Page size, default 10"))
        .response(
            "200",
            ResponseBuilder::new().description(format!(
                "Page object with `{}`, `currentPage`, `totalPages` and `{}`",
                R::COLLECTION_KEY,
                R::TOTAL_KEY
            ))
            .build(),
        )
        .response("500", message_response("Store failure"))
        .build()
}

fn operation<R: Resource>(verb: &str, summary: String) -> OperationBuilder {
    OperationBuilder::new()
        .tag(R::TAG)
        .operation_id(Some(format!("{}_{}", verb, R::COLLECTION_KEY)))
        .summary(Some(summary))
}

fn id_parameter() -> ParameterBuilder {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some("24-character hexadecimal record id"))
        .schema(Some(ObjectBuilder::new().schema_type(Type::String).build()))
}

fn query_parameter(name: &str, description: &str) -> ParameterBuilder {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(ParameterIn::Query)
        .required(Required::False)
        .description(Some(description))
        .schema(Some(ObjectBuilder::new().schema_type(Type::String).build()))
}

fn json_body(schema: impl Into<String>) -> utoipa::openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .content(
            "application/json",
            ContentBuilder::new()
                .schema(Some(Ref::from_schema_name(schema)))
                .build(),
        )
        .required(Some(Required::True))
        .build()
}

fn record_response(description: &str) -> Response {
    ResponseBuilder::new().description(description).build()
}

fn message_response(description: impl Into<String>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(
            "application/json",
            ContentBuilder::new()
                .schema(Some(Ref::from_schema_name("MessageResponse")))
                .build(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resource_has_collection_and_item_paths() {
        let doc = api_doc();

        for path in [
            "/health",
            "/api/users",
            "/api/users/{id}",
            "/api/movies/{id}",
            "/api/theaters",
            "/api/comments/{id}",
            "/api/embedded-movies",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }

        let item = &doc.paths.paths["/api/users/{id}"];
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
        assert!(item.post.is_none());
    }

    #[test]
    fn request_schemas_are_registered() {
        let doc = api_doc();
        let schemas = &doc.components.as_ref().unwrap().schemas;

        assert!(schemas.contains_key("CreateUserRequest"));
        assert!(schemas.contains_key("UpdateEmbeddedMovieRequest"));
        assert!(schemas.contains_key("MessageResponse"));
    }
}
