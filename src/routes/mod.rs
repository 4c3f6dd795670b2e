use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::services::users::registration_service::RegistrationService;

/// Wires every route. Expects `web::Data<RegistrationService>` in app data.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_registration_routes(cfg);
    configure_asset_routes(cfg);
}

fn configure_registration_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/registro")
            .app_data(handlers::registration::json_config())
            .service(handlers::registration::registration_rules)
            .service(handlers::registration::register_user),
    );
}

fn configure_asset_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::assets::registration_form)
        .service(handlers::assets::registration_script);
}

#[actix_web::get("/health")]
async fn health_check(service: web::Data<RegistrationService>) -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "registro_usuarios",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": service.storage_backend(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};

    use crate::repositories::users::MemoryUserStore;

    #[actix_web::test]
    async fn test_health_check_reports_storage() {
        let service = RegistrationService::new(Arc::new(MemoryUserStore::new()), 4);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure_all_routes),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["storage"], "memory");
    }
}
