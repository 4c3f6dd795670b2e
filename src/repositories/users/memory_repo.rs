//! In-process user store.
//!
//! Used by the test suite and by `STORAGE_BACKEND=memory`. The uniqueness
//! check and the push happen under one write lock, so concurrent inserts of
//! the same email or phone cannot both succeed.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::users::UserRecord;
use crate::errors::{AppError, AppResult, UniqueField};
use crate::repositories::users::user_store::UserStore;

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<UserRecord>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find_by<F>(&self, predicate: F) -> AppResult<Option<UserRecord>>
    where
        F: Fn(&UserRecord) -> bool,
    {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::DatabaseError("user store lock poisoned".to_string()))?;

        Ok(users.iter().find(|user| predicate(user)).cloned())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        self.find_by(|user| user.email == email)
    }

    async fn find_by_phone(&self, phone: &str) -> AppResult<Option<UserRecord>> {
        self.find_by(|user| user.phone == phone)
    }

    async fn insert(&self, mut user: UserRecord) -> AppResult<UserRecord> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::DatabaseError("user store lock poisoned".to_string()))?;

        if users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::DuplicateField(UniqueField::Email));
        }
        if users.iter().any(|existing| existing.phone == user.phone) {
            return Err(AppError::DuplicateField(UniqueField::Phone));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::ValidatedRegistration;
    use crate::domain::entities::users::Gender;

    fn record(email: &str, phone: &str) -> UserRecord {
        let registration = ValidatedRegistration {
            name: "Ana Pérez".to_string(),
            email: email.to_string(),
            password: "Abcdefg1".to_string(),
            age: 30,
            phone: phone.to_string(),
            bio: String::new(),
            gender: Gender::Other,
            country: "México".to_string(),
        };
        UserRecord::from_registration(registration, "hash".to_string())
    }

    #[actix_web::test]
    async fn test_insert_assigns_id_and_is_findable() {
        let store = MemoryUserStore::new();

        let stored = store.insert(record("ana@example.com", "5512345678")).await.unwrap();

        assert!(stored.id.is_some());
        assert_eq!(store.len(), 1);
        let by_email = store.find_by_email("ana@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, stored.id);
        assert!(store.find_by_phone("5512345678").await.unwrap().is_some());
        assert!(store.find_by_phone("0000000000").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_insert_enforces_uniqueness() {
        let store = MemoryUserStore::new();
        store.insert(record("ana@example.com", "5512345678")).await.unwrap();

        match store.insert(record("ana@example.com", "5599999999")).await {
            Err(AppError::DuplicateField(UniqueField::Email)) => {}
            other => panic!("Expected duplicate email, got {:?}", other),
        }
        match store.insert(record("otra@example.com", "5512345678")).await {
            Err(AppError::DuplicateField(UniqueField::Phone)) => {}
            other => panic!("Expected duplicate phone, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }
}
