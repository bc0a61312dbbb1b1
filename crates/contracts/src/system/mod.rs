pub mod user_repository;
pub mod users;

pub use user_repository::{InMemoryUserRepository, RepositoryError, UserRepository};
pub use users::{CreateUserDto, UpdateUserDto, User, UserRole};
