use super::{error::AppError, params::Params, router, state::AppState, templates};
use axum::{
    Form, Json,
    body::Body,
    extract::{
        Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
    response::Html,
};
use cpfgen::{Cpf, FORM_CONTENT_TYPE, GetCheck, post_as_get, scan};
use serde::{Deserialize, Serialize};
use tower::ServiceExt;
use tracing::{debug, info, warn};

type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;
type FormPairs = Result<Form<Vec<(String, String)>>, FormRejection>;

#[derive(Debug, Serialize)]
pub struct IdsResponse {
    pub ids: Vec<Cpf>,
}

#[derive(Debug, Serialize)]
pub struct ScanHit {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub matches: Vec<ScanHit>,
}

#[derive(Debug, Deserialize)]
pub struct GetCheckRequest {
    pub path: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct GetCheckResponse {
    pub post_url: String,
    pub get_url: String,
    pub post_status: u16,
    pub get_status: u16,
    pub flagged: bool,
}

pub async fn index() -> Html<String> {
    templates::index()
}

pub async fn display_query(
    State(state): State<AppState>,
    query: QueryPairs,
) -> Result<Html<String>, AppError> {
    let params = Params::from_query(query)?;
    let cpf = state.next_cpf();
    info!(%cpf, "display via query");
    Ok(templates::display(
        params.first("user"),
        params.first("view"),
        &cpf,
    ))
}

pub async fn display_form(
    State(state): State<AppState>,
    form: FormPairs,
) -> Result<Html<String>, AppError> {
    let params = Params::from_form(form)?;
    let user = params.require("user")?;
    let view = params.require("view")?;

    let cpf = state.next_cpf();
    info!(%cpf, "display via form");
    Ok(templates::display(Some(user), Some(view), &cpf))
}

pub async fn genius(form: FormPairs) -> Result<Html<String>, AppError> {
    let params = Params::from_form(form)?;
    let action = params.require("action")?;
    debug!(%action, "genius");
    Ok(templates::genius())
}

pub async fn notforget_query(query: QueryPairs) -> Result<Html<String>, AppError> {
    let params = Params::from_query(query)?;
    debug!(action = ?params.first("action"), "notforget via query");
    Ok(templates::notforget())
}

pub async fn notforget_form(form: FormPairs) -> Result<Html<String>, AppError> {
    let params = Params::from_form(form)?;
    let action = params.require("action")?;
    debug!(%action, "notforget via form");
    Ok(templates::notforget())
}

pub async fn api_cpf(
    State(state): State<AppState>,
    query: QueryPairs,
) -> Result<Json<IdsResponse>, AppError> {
    let params = Params::from_query(query)?;
    let max = state.config.max_api_ids;
    let count = match params.first("count") {
        Some(raw) => raw.parse::<usize>().map_err(|e| AppError::InvalidParameter {
            name: "count",
            reason: format!("`{raw}`: {e}"),
        })?,
        None => 1,
    };
    if count == 0 || count > max {
        return Err(AppError::InvalidParameter {
            name: "count",
            reason: format!("must be between 1 and {max}"),
        });
    }

    let ids = (0..count).map(|_| state.next_cpf()).collect();
    Ok(Json(IdsResponse { ids }))
}

pub async fn api_scan(body: String) -> Json<ScanResponse> {
    let matches: Vec<ScanHit> = scan(&body)
        .map(|m| ScanHit {
            start: m.start,
            end: m.end,
            text: m.text.to_string(),
            valid: m.valid,
        })
        .collect();
    debug!(found = matches.len(), "scanned body");
    Json(ScanResponse { matches })
}

/// Replays a form post against this application as a `GET` with the body in
/// the query string, and reports both statuses.
pub async fn api_getcheck(
    State(state): State<AppState>,
    Json(request): Json<GetCheckRequest>,
) -> Result<Json<GetCheckResponse>, AppError> {
    let path = request.path;
    if !path.starts_with('/') {
        return Err(AppError::InvalidParameter {
            name: "path",
            reason: "must start with `/`".into(),
        });
    }
    if path.starts_with("/api/getcheck") {
        return Err(AppError::InvalidParameter {
            name: "path",
            reason: "cannot replay against itself".into(),
        });
    }

    let get_url = post_as_get(&path, &request.body);
    let post = Request::builder()
        .method(Method::POST)
        .uri(&path)
        .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
        .body(Body::from(request.body));
    let get = Request::builder()
        .method(Method::GET)
        .uri(&get_url)
        .body(Body::empty());
    let (post, get) = match (post, get) {
        (Ok(post), Ok(get)) => (post, get),
        (Err(e), _) | (_, Err(e)) => {
            return Err(AppError::InvalidParameter {
                name: "path",
                reason: e.to_string(),
            });
        }
    };

    let post_status = replay(&state, post).await;
    let get_status = replay(&state, get).await;
    let check = GetCheck::new(post_status.as_u16(), get_status.as_u16());
    if check.flagged() {
        warn!(
            %path, %get_url, post = %post_status, get = %get_status,
            "form endpoint also accepts GET"
        );
    }

    Ok(Json(GetCheckResponse {
        post_url: path,
        get_url,
        post_status: check.post_status,
        get_status: check.get_status,
        flagged: check.flagged(),
    }))
}

async fn replay(state: &AppState, request: Request<Body>) -> StatusCode {
    router(state.clone())
        .oneshot(request)
        .await
        .unwrap_or_else(|never| match never {})
        .status()
}
