//! Default response headers added to every reply.

use actix_web::{test as actix_test, web, App, HttpResponse};
use masjid_directory::security::security_headers;

#[actix_rt::test]
async fn test_security_headers_are_added() {
    let app = actix_test::init_service(
        App::new()
            .wrap(security_headers())
            .route("/", web::get().to(HttpResponse::Ok)),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/").to_request();
    let resp = actix_test::call_service(&app, req).await;
    let header = |name: &str| {
        resp.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    assert_eq!(header("X-Content-Type-Options").as_deref(), Some("nosniff"));
    assert_eq!(header("X-Frame-Options").as_deref(), Some("DENY"));
    assert_eq!(
        header("Referrer-Policy").as_deref(),
        Some("strict-origin-when-cross-origin")
    );
    assert_eq!(
        header("Content-Security-Policy").as_deref(),
        Some("default-src 'none'; frame-ancestors 'none'")
    );
}

#[actix_rt::test]
async fn test_security_headers_keep_handler_values() {
    let app = actix_test::init_service(
        App::new().wrap(security_headers()).route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok()
                    .insert_header(("X-Frame-Options", "SAMEORIGIN"))
                    .finish()
            }),
        ),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/").to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(
        resp.headers()
            .get("X-Frame-Options")
            .and_then(|v| v.to_str().ok()),
        Some("SAMEORIGIN")
    );
}
