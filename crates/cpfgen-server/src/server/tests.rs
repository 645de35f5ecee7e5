use super::config::ServerConfig;
use super::router;
use super::state::AppState;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use cpfgen::{Cpf, CpfGenerator, SeededRandom, scan};
use serde_json::Value;
use tower::ServiceExt;

const FORM: &str = "application/x-www-form-urlencoded";

fn app(seed: Option<u64>) -> Router {
    router(AppState::new(ServerConfig {
        server_addr: "127.0.0.1:0".parse().unwrap(),
        debug: false,
        max_api_ids: 10,
        seed,
    }))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, FORM)
        .body(Body::from(body))
        .unwrap()
}

fn post_json(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Pulls the single identifier out of a rendered `/display` page.
fn rendered_cpf(body: &str) -> Cpf {
    let hits: Vec<_> = scan(body).collect();
    assert_eq!(hits.len(), 1, "{body}");
    assert!(hits[0].valid, "{}", hits[0].text);
    hits[0].cpf().unwrap()
}

#[tokio::test]
async fn index_renders() {
    let (status, body) = send(app(None), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Burp Challenge"));
}

#[tokio::test]
async fn display_get_echoes_query() {
    let (status, body) = send(app(None), get("/display?user=alice&view=profile")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<dd id=\"user\">alice</dd>"));
    assert!(body.contains("<dd id=\"view\">profile</dd>"));
    rendered_cpf(&body);
}

#[tokio::test]
async fn display_get_tolerates_missing_query() {
    let (status, body) = send(app(None), get("/display")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<dd id=\"user\"></dd>"));
    rendered_cpf(&body);
}

#[tokio::test]
async fn display_get_escapes_input() {
    let (status, body) = send(
        app(None),
        get("/display?user=%3Cscript%3Ealert(1)%3C%2Fscript%3E&view=x"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn display_post_echoes_form() {
    let (status, body) = send(app(None), post_form("/display", "user=bob&view=admin")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<dd id=\"user\">bob</dd>"));
    assert!(body.contains("<dd id=\"view\">admin</dd>"));
    rendered_cpf(&body);
}

#[tokio::test]
async fn display_post_requires_every_field() {
    let (status, body) = send(app(None), post_form("/display", "user=bob")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Missing parameter: view");

    let (status, body) = send(app(None), post_form("/display", "")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Missing parameter: user");
}

#[tokio::test]
async fn display_post_without_form_body_is_missing_parameter() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/display")
        .body(Body::from("user=bob&view=admin"))
        .unwrap();
    let (status, body) = send(app(None), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Missing parameter: user");
}

#[tokio::test]
async fn display_get_takes_first_repeated_key() {
    let (status, body) = send(app(None), get("/display?user=a&user=b&view=c&view=d")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<dd id=\"user\">a</dd>"));
    assert!(body.contains("<dd id=\"view\">c</dd>"));
}

#[tokio::test]
async fn display_post_takes_first_repeated_key() {
    let (status, body) = send(app(None), post_form("/display", "user=a&view=c&user=b")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<dd id=\"user\">a</dd>"));
    assert!(body.contains("<dd id=\"view\">c</dd>"));
}

#[tokio::test]
async fn display_post_keeps_undecodable_escapes() {
    let (status, body) = send(app(None), post_form("/display", "user=%zz&view=%E0%A4")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<dd id=\"user\">%zz</dd>"));
}

#[tokio::test]
async fn display_post_oversized_body_is_invalid_not_missing() {
    let body = format!("user={}&view=b", "a".repeat(3 * 1024 * 1024));
    let request = Request::builder()
        .method(Method::POST)
        .uri("/display")
        .header(CONTENT_TYPE, FORM)
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(app(None), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("Invalid parameter body"), "{body}");
}

#[tokio::test]
async fn display_uses_seeded_digits() {
    let expected = CpfGenerator::new(SeededRandom::from_seed(42)).next_cpf();
    let (_, body) = send(app(Some(42)), get("/display?user=a&view=b")).await;
    assert_eq!(rendered_cpf(&body), expected);
}

#[tokio::test]
async fn seeded_state_advances_between_requests() {
    let mut generator = CpfGenerator::new(SeededRandom::from_seed(7));
    let app = app(Some(7));
    for _ in 0..3 {
        let (_, body) = send(app.clone(), get("/display")).await;
        assert_eq!(rendered_cpf(&body), generator.next_cpf());
    }
}

#[tokio::test]
async fn genius_ignores_action() {
    let (status, body) = send(app(None), post_form("/genius", "action=anything")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Genius"));
}

#[tokio::test]
async fn genius_requires_action() {
    let (status, body) = send(app(None), post_form("/genius", "other=1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Missing parameter: action");
}

#[tokio::test]
async fn genius_takes_first_repeated_key() {
    let (status, body) = send(app(None), post_form("/genius", "action=x&action=y")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Genius"));
}

#[tokio::test]
async fn genius_rejects_get() {
    let (status, _) = send(app(None), get("/genius")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn notforget_accepts_both_methods() {
    let (status, _) = send(app(None), get("/notforget")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(app(None), get("/notforget?action=two")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(app(None), post_form("/notforget", "action=two")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(app(None), post_form("/notforget", "")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Missing parameter: action");
}

#[tokio::test]
async fn notforget_takes_first_repeated_key() {
    let (status, _) = send(app(None), get("/notforget?action=x&action=y")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(app(None), post_form("/notforget", "action=x&action=y")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn api_cpf_takes_first_repeated_count() {
    let (status, body) = send(app(None), get("/api/cpf?count=2&count=many")).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["ids"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn api_cpf_defaults_to_one() {
    let (status, body) = send(app(None), get("/api/cpf")).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    let ids = json["ids"].as_array().unwrap();
    assert_eq!(ids.len(), 1);
    assert!(ids[0].as_str().unwrap().parse::<Cpf>().is_ok());
}

#[tokio::test]
async fn api_cpf_returns_requested_count() {
    let (status, body) = send(app(Some(3)), get("/api/cpf?count=4")).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    let expected: Vec<String> = CpfGenerator::new(SeededRandom::from_seed(3))
        .take(4)
        .map(|cpf| cpf.to_string())
        .collect();
    let ids: Vec<&str> = json["ids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn api_cpf_rejects_out_of_range_count() {
    let (status, body) = send(app(None), get("/api/cpf?count=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("count"));

    let (status, _) = send(app(None), get("/api/cpf?count=11")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(app(None), get("/api/cpf?count=many")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("Invalid parameter count"));
}

#[tokio::test]
async fn api_scan_reports_matches() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/scan")
        .body(Body::from("ok 111.444.777-35, bad 111.444.777-36"))
        .unwrap();
    let (status, body) = send(app(None), request).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    let matches = json["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["text"], "111.444.777-35");
    assert_eq!(matches[0]["start"], 3);
    assert_eq!(matches[0]["valid"], true);
    assert_eq!(matches[1]["valid"], false);
}

#[tokio::test]
async fn getcheck_post_only_endpoint_is_not_flagged() {
    let (status, body) = send(
        app(None),
        post_json("/api/getcheck", r#"{"path":"/genius","body":"action=one"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["post_url"], "/genius");
    assert_eq!(json["get_url"], "/genius?action=one");
    assert_eq!(json["post_status"], 200);
    assert_eq!(json["get_status"], 405);
    assert_eq!(json["flagged"], false);
}

#[tokio::test]
async fn getcheck_flags_endpoint_that_accepts_get() {
    let (status, body) = send(
        app(None),
        post_json("/api/getcheck", r#"{"path":"/display","body":"user=a&view=b"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["get_url"], "/display?user=a&view=b");
    assert_eq!(json["post_status"], 200);
    assert_eq!(json["get_status"], 200);
    assert_eq!(json["flagged"], true);
}

#[tokio::test]
async fn getcheck_rejects_bad_paths() {
    let (status, body) = send(
        app(None),
        post_json("/api/getcheck", r#"{"path":"display","body":""}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("Invalid parameter path"));

    let (status, _) = send(
        app(None),
        post_json("/api/getcheck", r#"{"path":"/api/getcheck"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = send(app(None), get("/admin")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
