pub mod memory_repo;
pub mod user_repo;
pub mod user_store;

pub use memory_repo::MemoryUserStore;
pub use user_repo::MongoUserRepository;
pub use user_store::UserStore;
