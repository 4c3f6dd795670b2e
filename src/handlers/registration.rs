//! Registration endpoints, mounted under `/api/registro`.

use actix_web::{HttpRequest, HttpResponse, get, post, web};

use crate::domain::dto::users::request::RegistrationRequest;
use crate::errors::AppError;
use crate::services::users::registration_service::RegistrationService;
use crate::validation::REGISTRATION_RULES;

/// JSON extractor settings for the registration scope.
///
/// Undecodable bodies get the same `{ "error": ... }` shape as every other
/// failure instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req: &HttpRequest| {
            log::debug!("rejected registration body: {}", err);
            AppError::MalformedBody(err.to_string()).into()
        })
}

/// `POST /api/registro`
#[post("")]
pub async fn register_user(
    service: web::Data<RegistrationService>,
    payload: web::Json<RegistrationRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// `GET /api/registro/reglas`: the rule table the browser form interprets.
#[get("/reglas")]
pub async fn registration_rules() -> HttpResponse {
    HttpResponse::Ok().json(REGISTRATION_RULES)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use crate::domain::entities::users::UserRecord;
    use crate::errors::{AppError, AppResult, UniqueField};
    use crate::repositories::users::{MemoryUserStore, UserStore};
    use crate::routes::configure_all_routes;
    use crate::services::users::registration_service::RegistrationService;

    fn valid_body() -> Value {
        json!({
            "nombre": "Lucía Gómez",
            "email": "Lucia@Example.com",
            "contrasena": "Abcdefg1",
            "confirmarContrasena": "Abcdefg1",
            "edad": 27,
            "telefono": "5512345678",
            "biografia": "",
            "genero": "Femenino",
            "pais": "Colombia"
        })
    }

    /// Finds nothing, then loses the insert to a concurrent registration.
    struct RacingStore {
        conflict: UniqueField,
    }

    #[async_trait]
    impl UserStore for RacingStore {
        async fn find_by_email(&self, _email: &str) -> AppResult<Option<UserRecord>> {
            Ok(None)
        }

        async fn find_by_phone(&self, _phone: &str) -> AppResult<Option<UserRecord>> {
            Ok(None)
        }

        async fn insert(&self, _user: UserRecord) -> AppResult<UserRecord> {
            Err(AppError::DuplicateField(self.conflict))
        }

        async fn ensure_indexes(&self) -> AppResult<()> {
            Ok(())
        }

        fn backend_name(&self) -> &'static str {
            "racing"
        }
    }

    fn app_data(store: Arc<MemoryUserStore>) -> actix_web::web::Data<RegistrationService> {
        actix_web::web::Data::new(RegistrationService::new(store, 4))
    }

    #[actix_web::test]
    async fn test_register_success() {
        let store = Arc::new(MemoryUserStore::new());
        let app = test::init_service(
            App::new()
                .app_data(app_data(store.clone()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/registro")
            .set_json(valid_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["mensaje"], "Usuario registrado exitosamente");
        assert_eq!(body["usuario"]["email"], "lucia@example.com");
        assert_eq!(body["usuario"]["nombre"], "Lucía Gómez");
        assert_eq!(body["usuario"]["pais"], "Colombia");
        assert!(body["usuario"]["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(body["usuario"]["fechaRegistro"].is_string());
        assert!(body["usuario"].get("contrasena").is_none());
        assert!(body["usuario"].get("confirmarContrasena").is_none());
        assert!(body["usuario"].get("contrasenaHash").is_none());

        let stored = store.find_by_email("lucia@example.com").await.unwrap().unwrap();
        assert!(stored.password_hash.starts_with("$2"));
    }

    #[actix_web::test]
    async fn test_missing_country_is_reported() {
        let store = Arc::new(MemoryUserStore::new());
        let app = test::init_service(
            App::new()
                .app_data(app_data(store.clone()))
                .configure(configure_all_routes),
        )
        .await;

        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("pais");
        let req = test::TestRequest::post()
            .uri("/api/registro")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Datos inválidos");
        let errores = body["errores"].as_array().unwrap();
        assert_eq!(errores.len(), 1);
        assert_eq!(errores[0]["field"], "pais");
        assert_eq!(errores[0]["message"], "Debe seleccionar un país");
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_mismatched_confirmation_is_reported() {
        let store = Arc::new(MemoryUserStore::new());
        let app = test::init_service(
            App::new()
                .app_data(app_data(store.clone()))
                .configure(configure_all_routes),
        )
        .await;

        let mut body = valid_body();
        body["confirmarContrasena"] = json!("Abcdefg2");
        let req = test::TestRequest::post()
            .uri("/api/registro")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errores"][0]["field"], "confirmarContrasena");
        assert_eq!(body["errores"][0]["message"], "Las contraseñas no coinciden");
    }

    #[actix_web::test]
    async fn test_duplicate_email_with_different_case() {
        let store = Arc::new(MemoryUserStore::new());
        let app = test::init_service(
            App::new()
                .app_data(app_data(store.clone()))
                .configure(configure_all_routes),
        )
        .await;

        let first = test::TestRequest::post()
            .uri("/api/registro")
            .set_json(valid_body())
            .to_request();
        assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);

        let mut body = valid_body();
        body["email"] = json!("LUCIA@EXAMPLE.COM");
        body["telefono"] = json!("5599999999");
        let second = test::TestRequest::post()
            .uri("/api/registro")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, second).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "El correo electrónico ya está registrado");
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_duplicate_phone() {
        let store = Arc::new(MemoryUserStore::new());
        let app = test::init_service(
            App::new()
                .app_data(app_data(store.clone()))
                .configure(configure_all_routes),
        )
        .await;

        let first = test::TestRequest::post()
            .uri("/api/registro")
            .set_json(valid_body())
            .to_request();
        assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);

        let mut body = valid_body();
        body["email"] = json!("otra@example.com");
        let second = test::TestRequest::post()
            .uri("/api/registro")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, second).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "El número de teléfono ya está registrado");
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_conflict_at_insert_matches_lookup_conflict() {
        for (conflict, message) in [
            (UniqueField::Email, "El correo electrónico ya está registrado"),
            (UniqueField::Phone, "El número de teléfono ya está registrado"),
        ] {
            let service = RegistrationService::new(Arc::new(RacingStore { conflict }), 4);
            let app = test::init_service(
                App::new()
                    .app_data(actix_web::web::Data::new(service))
                    .configure(configure_all_routes),
            )
            .await;

            let req = test::TestRequest::post()
                .uri("/api/registro")
                .set_json(valid_body())
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], message);
            assert!(body.get("errores").is_none());
        }
    }

    #[actix_web::test]
    async fn test_malformed_json_is_json_error() {
        let store = Arc::new(MemoryUserStore::new());
        let app = test::init_service(
            App::new()
                .app_data(app_data(store))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/registro")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"nombre\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_rules_endpoint_serves_table() {
        let app = test::init_service(
            App::new()
                .app_data(app_data(Arc::new(MemoryUserStore::new())))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/registro/reglas").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let fields: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|rules| rules["field"].as_str())
            .collect();
        assert_eq!(fields.first(), Some(&"nombre"));
        assert!(fields.contains(&"confirmarContrasena"));
        assert_eq!(body[0]["constraints"][0]["kind"], "required");
    }
}
