use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use lexigem_core::types::{DefinitionResult, LookupRequest};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::page::IndexView;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index).post(lookup))
        .route("/healthz", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Submitted fields. A repeated field keeps its first value.
#[derive(Debug, Default)]
pub struct LookupForm {
    word: Option<String>,
    language: Option<String>,
}

impl LookupForm {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "word" => &mut form.word,
                "language" => &mut form.language,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        form
    }
}

#[derive(Serialize)]
struct Health {
    ok: bool,
    service: &'static str,
    model_configured: bool,
}

async fn index(State(state): State<Arc<AppState>>) -> Response {
    render(&state, &LookupRequest::default(), None)
}

async fn lookup(
    State(state): State<Arc<AppState>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(pairs)) => LookupForm::from_pairs(pairs),
        Err(rejection) => {
            tracing::warn!("unreadable lookup form: {rejection}");
            LookupForm::default()
        }
    };

    let request = LookupRequest::from_form(form.word.as_deref(), form.language.as_deref());

    let result = if request.is_empty() {
        None
    } else {
        Some(
            state
                .service
                .get_definition(&request.word, request.language)
                .await,
        )
    };

    render(&state, &request, result.as_ref())
}

async fn health(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        ok: true,
        service: "lexigem",
        model_configured: state.service.is_configured(),
    })
}

fn render(state: &AppState, request: &LookupRequest, result: Option<&DefinitionResult>) -> Response {
    match state.pages.render_index(&IndexView::new(request, result)) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("failed to render index page: {e:?}");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}
