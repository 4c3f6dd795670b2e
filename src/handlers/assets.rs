//! Browser form, embedded in the binary.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

const FORM_HTML: &str = include_str!("../../static/registro.html");
const FORM_SCRIPT: &str = include_str!("../../static/registro.js");

#[get("/")]
pub async fn registration_form() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(FORM_HTML)
}

#[get("/registro.js")]
pub async fn registration_script() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(FORM_SCRIPT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};

    #[actix_web::test]
    async fn test_form_and_script_are_served() {
        let app = test::init_service(
            App::new()
                .service(registration_form)
                .service(registration_script),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = test::read_body(resp).await;
        assert!(std::str::from_utf8(&html).unwrap().contains("registro.js"));

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/registro.js").to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let script = test::read_body(resp).await;
        assert!(std::str::from_utf8(&script).unwrap().contains("/api/registro/reglas"));
    }
}
