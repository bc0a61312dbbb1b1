//! Storage interface for CRM users.
//!
//! Pages receive a `UserRepository` instead of touching a storage backend
//! directly; the browser build backs it with `localStorage`, tests use
//! [`InMemoryUserRepository`].

use indexmap::IndexMap;
use thiserror::Error;

use super::users::{UpdateUserDto, User};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("user {0} already exists")]
    Duplicate(String),

    #[error("user {0} not found")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(String),
}

pub trait UserRepository {
    /// All users in insertion order
    fn list(&self) -> Vec<User>;

    fn get(&self, id: &str) -> Option<User>;

    fn add(&mut self, user: User) -> Result<(), RepositoryError>;

    fn update(&mut self, dto: &UpdateUserDto) -> Result<User, RepositoryError>;

    fn remove(&mut self, id: &str) -> Result<User, RepositoryError>;

    /// Case-insensitive lookup by full name, as leads reference employees by name
    fn find_by_name(&self, name: &str) -> Option<User> {
        let name = name.trim().to_lowercase();
        self.list()
            .into_iter()
            .find(|u| u.full_name.trim().to_lowercase() == name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: IndexMap<String, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_users(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id.clone(), u)).collect(),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    fn list(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    fn get(&self, id: &str) -> Option<User> {
        self.users.get(id).cloned()
    }

    fn add(&mut self, user: User) -> Result<(), RepositoryError> {
        if self.users.contains_key(&user.id) {
            return Err(RepositoryError::Duplicate(user.id));
        }
        self.users.insert(user.id.clone(), user);
        Ok(())
    }

    fn update(&mut self, dto: &UpdateUserDto) -> Result<User, RepositoryError> {
        let user = self
            .users
            .get_mut(&dto.id)
            .ok_or_else(|| RepositoryError::NotFound(dto.id.clone()))?;
        user.apply(dto);
        Ok(user.clone())
    }

    fn remove(&mut self, id: &str) -> Result<User, RepositoryError> {
        self.users
            .shift_remove(id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::users::{CreateUserDto, UserRole};

    fn user(name: &str) -> User {
        User::create(CreateUserDto {
            full_name: name.into(),
            email: None,
            phone: None,
            role: UserRole::Employee,
        })
    }

    #[test]
    fn test_add_get_list() {
        let mut repo = InMemoryUserRepository::new();
        let a = user("Rahul Sharma");
        let b = user("Priya Singh");
        repo.add(a.clone()).unwrap();
        repo.add(b.clone()).unwrap();

        assert_eq!(repo.get(&a.id), Some(a.clone()));
        let names: Vec<String> = repo.list().into_iter().map(|u| u.full_name).collect();
        assert_eq!(names, vec!["Rahul Sharma", "Priya Singh"]);
    }

    #[test]
    fn test_duplicate_add_fails() {
        let mut repo = InMemoryUserRepository::new();
        let a = user("Rahul Sharma");
        repo.add(a.clone()).unwrap();
        assert_eq!(repo.add(a.clone()), Err(RepositoryError::Duplicate(a.id)));
    }

    #[test]
    fn test_update_and_remove_missing() {
        let mut repo = InMemoryUserRepository::new();
        let dto = UpdateUserDto {
            id: "missing".into(),
            full_name: "X".into(),
            email: None,
            phone: None,
            role: UserRole::Employee,
            is_active: true,
        };
        assert_eq!(
            repo.update(&dto).unwrap_err(),
            RepositoryError::NotFound("missing".into())
        );
        assert_eq!(
            repo.remove("missing").unwrap_err().to_string(),
            "user missing not found"
        );
    }

    #[test]
    fn test_update_and_remove_existing() {
        let a = user("Rahul Sharma");
        let mut repo = InMemoryUserRepository::from_users(vec![a.clone()]);

        let updated = repo
            .update(&UpdateUserDto {
                id: a.id.clone(),
                full_name: "Rahul K. Sharma".into(),
                email: None,
                phone: None,
                role: UserRole::Manager,
                is_active: true,
            })
            .unwrap();
        assert_eq!(updated.role, UserRole::Manager);
        assert_eq!(repo.get(&a.id).unwrap().full_name, "Rahul K. Sharma");

        repo.remove(&a.id).unwrap();
        assert!(repo.list().is_empty());
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let a = user("Rahul Sharma");
        let repo = InMemoryUserRepository::from_users(vec![a.clone()]);
        assert_eq!(repo.find_by_name(" rahul sharma"), Some(a));
        assert_eq!(repo.find_by_name("Nobody"), None);
    }
}
