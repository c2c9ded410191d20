//! CORS allowlist behaviour for the directory frontends.

use actix_web::http::{header, Method, StatusCode};
use actix_web::{test as actix_test, web, App, HttpResponse};
use masjid_directory::config::SecurityConfig;
use masjid_directory::security::cors_middleware;

fn config() -> SecurityConfig {
    SecurityConfig {
        cors_allowed_origins: vec![
            "http://localhost:5173".to_string(),
            "https://jummah.muzammil.xyz".to_string(),
        ],
        metrics_allow_private_only: true,
        metrics_admin_token: None,
    }
}

#[actix_rt::test]
async fn test_cors_allows_listed_origin() {
    let app = actix_test::init_service(
        App::new()
            .wrap(cors_middleware(&config()))
            .route("/", web::get().to(HttpResponse::Ok)),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/")
        .insert_header((header::ORIGIN, "https://jummah.muzammil.xyz"))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("https://jummah.muzammil.xyz")
    );
}

#[actix_rt::test]
async fn test_cors_preflight_allows_put_and_delete() {
    let app = actix_test::init_service(
        App::new()
            .wrap(cors_middleware(&config()))
            .route("/", web::put().to(HttpResponse::Ok)),
    )
    .await;

    for method in ["PUT", "DELETE"] {
        let req = actix_test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/")
            .insert_header((header::ORIGIN, "http://localhost:5173"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, method))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK, "{method}");
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    }
}

#[actix_rt::test]
async fn test_cors_omits_headers_for_unlisted_origin() {
    let app = actix_test::init_service(
        App::new()
            .wrap(cors_middleware(&config()))
            .route("/", web::get().to(HttpResponse::Ok)),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/")
        .insert_header((header::ORIGIN, "https://evil.example"))
        .to_request();
    let resp = actix_test::try_call_service(&app, req).await;

    match resp {
        Ok(resp) => assert!(resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()),
        Err(err) => assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::BAD_REQUEST
        ),
    }
}
