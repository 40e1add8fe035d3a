//! Liveness probe handler

use actix_web::{get, HttpResponse, Responder};

/// GET /health - liveness probe
///
/// No storage access; returns a fixed body so load balancers and process
/// managers can poll it cheaply.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn health_returns_ok_body() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"OK");
    }
}
