//! MongoDB-backed user store.
//!
//! Uniqueness of `email` and `telefono` is enforced by unique indexes, so the
//! insert itself is the final arbiter; duplicate-key error 11000 is mapped
//! back to the offending field through the index name.

use async_trait::async_trait;
use log::{debug, info};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel, bson::doc};

use crate::db::Database;
use crate::domain::entities::users::UserRecord;
use crate::errors::{AppError, AppResult, UniqueField};
use crate::repositories::users::user_store::UserStore;

const DUPLICATE_KEY_CODE: i32 = 11000;

pub const EMAIL_INDEX: &str = "email_unique";
pub const PHONE_INDEX: &str = "telefono_unique";
pub const REGISTERED_AT_INDEX: &str = "fecha_registro_desc";

pub struct MongoUserRepository {
    collection: Collection<UserRecord>,
}

impl MongoUserRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.get_database().collection::<UserRecord>(collection_name),
        }
    }

    fn map_insert_error(error: mongodb::error::Error) -> AppError {
        match *error.kind {
            ErrorKind::Write(WriteFailure::WriteError(ref write_error))
                if write_error.code == DUPLICATE_KEY_CODE =>
            {
                AppError::DuplicateField(duplicate_field_from_message(&write_error.message))
            }
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

/// Which unique index a duplicate-key message refers to.
///
/// Server messages look like
/// `E11000 duplicate key error collection: db.usuarios index: telefono_unique dup key: {...}`.
pub fn duplicate_field_from_message(message: &str) -> UniqueField {
    if message.contains(PHONE_INDEX) || message.contains("telefono") {
        UniqueField::Phone
    } else {
        UniqueField::Email
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_phone(&self, phone: &str) -> AppResult<Option<UserRecord>> {
        self.collection
            .find_one(doc! { "telefono": phone })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut user: UserRecord) -> AppResult<UserRecord> {
        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(Self::map_insert_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(format!("unexpected inserted id: {}", result.inserted_id))
        })?;
        user.id = Some(id);

        debug!("inserted user {}", id.to_hex());
        Ok(user)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(EMAIL_INDEX.to_string())
                    .build(),
            )
            .build();

        let phone_index = IndexModel::builder()
            .keys(doc! { "telefono": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(PHONE_INDEX.to_string())
                    .build(),
            )
            .build();

        let registered_at_index = IndexModel::builder()
            .keys(doc! { "fechaRegistro": -1 })
            .options(
                IndexOptions::builder()
                    .name(REGISTERED_AT_INDEX.to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([email_index, phone_index, registered_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("user indexes ready on {}", self.collection.name());
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mongodb"
    }
}
