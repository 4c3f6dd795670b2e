//! User registration use case.
//!
//! ```text
//! RegistrationRequest
//!   │ rule set            → InvalidFields
//!   │ email lookup        → DuplicateField(Email)
//!   │ phone lookup        → DuplicateField(Phone)
//!   │ bcrypt hash
//!   │ store.insert        → DuplicateField (lost a race) / DatabaseError
//!   ▼
//! RegistrationResponse
//! ```
//!
//! The pre-insert lookups produce the friendly conflict message in the common
//! case; the store's own uniqueness enforcement covers concurrent requests.

use std::sync::Arc;
use std::time::Instant;

use bcrypt::hash;
use log::{debug, info, warn};

use crate::domain::dto::users::request::RegistrationRequest;
use crate::domain::dto::users::response::RegistrationResponse;
use crate::domain::entities::users::UserRecord;
use crate::errors::{AppError, AppResult, ErrorContext, UniqueField};
use crate::repositories::users::UserStore;

pub struct RegistrationService {
    store: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    pub fn storage_backend(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Validates, checks uniqueness, hashes and stores a new user.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidFields` - one or more rules failed
    /// * `AppError::DuplicateField` - email or phone already registered
    /// * `AppError::DatabaseError` / `AppError::InternalError` - anything else
    pub async fn register(&self, request: RegistrationRequest) -> AppResult<RegistrationResponse> {
        let start_time = Instant::now();

        let registration = request.validate().inspect_err(|e| {
            if let AppError::InvalidFields(errors) = e {
                let fields: Vec<&str> = errors.iter().map(|err| err.field.as_str()).collect();
                debug!("registration rejected, invalid fields: {:?}", fields);
            }
        })?;
        info!("registration attempt for {}", registration.email);

        if self.store.find_by_email(&registration.email).await?.is_some() {
            warn!("registration rejected: email already registered");
            return Err(AppError::DuplicateField(UniqueField::Email));
        }

        if self.store.find_by_phone(&registration.phone).await?.is_some() {
            warn!("registration rejected: phone already registered");
            return Err(AppError::DuplicateField(UniqueField::Phone));
        }

        let hash_start = Instant::now();
        let password_hash =
            hash(&registration.password, self.bcrypt_cost).context("password hashing failed")?;
        info!("Password hashing took: {:?}", hash_start.elapsed());

        let record = UserRecord::from_registration(registration, password_hash);

        let stored = self.store.insert(record).await.inspect_err(|e| {
            if let AppError::DuplicateField(field) = e {
                warn!("registration lost uniqueness race on {}", field.field_name());
            }
        })?;

        info!(
            "user registered: id={} in {:?}",
            stored.id_string().unwrap_or_default(),
            start_time.elapsed()
        );

        Ok(RegistrationResponse::new(&stored))
    }
}
