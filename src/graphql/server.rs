use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::error::Result;

use super::schema::ShelfSchema;

/// Serve the schema over HTTP: GraphiQL on GET /, the executor on POST /.
/// The executor owns the response envelope; nothing is added here.
pub async fn run_server(schema: ShelfSchema, port: u16) -> Result<()> {
    let app = Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .layer(Extension(schema));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "GraphQL server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql_handler(
    Extension(schema): Extension<ShelfSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}
