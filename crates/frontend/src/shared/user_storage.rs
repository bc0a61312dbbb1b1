//! `UserRepository` persisted in the browser's localStorage.
//!
//! The user list lives under one key as a JSON array. It is read once when
//! the repository is opened and written back after every mutation.

use contracts::system::{InMemoryUserRepository, RepositoryError, UpdateUserDto, User, UserRepository};
use web_sys::{window, Storage};

pub struct LocalStorageUserRepository {
    key: String,
    cache: InMemoryUserRepository,
}

impl LocalStorageUserRepository {
    pub fn open(key: &str) -> Result<Self, RepositoryError> {
        let users = match local_storage()?.get_item(key) {
            Ok(Some(json)) => decode_users(&json)?,
            Ok(None) => Vec::new(),
            Err(e) => return Err(RepositoryError::Storage(format!("{:?}", e))),
        };
        log::debug!("loaded {} users from localStorage key {}", users.len(), key);

        Ok(Self {
            key: key.to_string(),
            cache: InMemoryUserRepository::from_users(users),
        })
    }

    fn persist(&self) -> Result<(), RepositoryError> {
        let json = encode_users(&self.cache.list())?;
        local_storage()?
            .set_item(&self.key, &json)
            .map_err(|e| RepositoryError::Storage(format!("{:?}", e)))
    }
}

impl UserRepository for LocalStorageUserRepository {
    fn list(&self) -> Vec<User> {
        self.cache.list()
    }

    fn get(&self, id: &str) -> Option<User> {
        self.cache.get(id)
    }

    fn add(&mut self, user: User) -> Result<(), RepositoryError> {
        self.cache.add(user)?;
        self.persist()
    }

    fn update(&mut self, dto: &UpdateUserDto) -> Result<User, RepositoryError> {
        let user = self.cache.update(dto)?;
        self.persist()?;
        Ok(user)
    }

    fn remove(&mut self, id: &str) -> Result<User, RepositoryError> {
        let user = self.cache.remove(id)?;
        self.persist()?;
        Ok(user)
    }
}

fn local_storage() -> Result<Storage, RepositoryError> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| RepositoryError::Storage("localStorage is not available".to_string()))
}

fn decode_users(json: &str) -> Result<Vec<User>, RepositoryError> {
    serde_json::from_str(json).map_err(|e| RepositoryError::Storage(format!("corrupt user list: {}", e)))
}

fn encode_users(users: &[User]) -> Result<String, RepositoryError> {
    serde_json::to_string(users).map_err(|e| RepositoryError::Storage(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::{CreateUserDto, UserRole};

    #[test]
    fn test_encode_decode() {
        let users = vec![User::create(CreateUserDto {
            full_name: "Rahul Sharma".into(),
            email: Some("rahul@example.com".into()),
            phone: None,
            role: UserRole::Admin,
        })];

        let json = encode_users(&users).unwrap();
        assert!(json.contains("\"fullName\":\"Rahul Sharma\""));
        assert_eq!(decode_users(&json).unwrap(), users);
    }

    #[test]
    fn test_corrupt_storage_is_reported() {
        let err = decode_users("{not json").unwrap_err();
        assert!(matches!(err, RepositoryError::Storage(msg) if msg.starts_with("corrupt user list")));
    }
}
