use axum::{
    Extension, Router,
    response::Redirect,
    routing::{delete, get, post},
};
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http as unregister_http;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

pub const FRONT_END_ENTRY: &str = "/static/index.html";

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let schema = graphql::build_schema(state.clone());

    Router::new()
        .route("/", get(redirect_to_front_end))
        .route("/activities", get(list_http::handle))
        .route("/activities/{activity_name}/signup", post(sign_up_http::handle))
        .route(
            "/activities/{activity_name}/participant",
            delete(unregister_http::handle),
        )
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_to_front_end() -> Redirect {
    Redirect::temporary(FRONT_END_ENTRY)
}
