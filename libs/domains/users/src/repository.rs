use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_addresses::{Address, NewAddress};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UniqueField, UserError, UserResult};
use crate::models::{User, UserFilter};

/// Repository trait for User persistence.
///
/// `create` is the atomic two-row write: the user and their initial
/// address either both exist afterwards or neither does.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn exists_by_cpf(&self, cpf: &str) -> UserResult<bool>;

    async fn exists_by_email(&self, email: &str) -> UserResult<bool>;

    async fn exists_by_whatsapp(&self, whatsapp: &str) -> UserResult<bool>;

    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    async fn find_by_cpf(&self, cpf: &str) -> UserResult<Option<User>>;

    /// Page of users ordered by creation time then id.
    async fn list(&self, filter: UserFilter) -> UserResult<Vec<User>>;

    /// Insert the user and their address atomically.
    async fn create(&self, user: User, address: NewAddress) -> UserResult<User>;

    async fn update_last_login(&self, id: Uuid, timestamp: DateTime<Utc>) -> UserResult<()>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    users: HashMap<Uuid, User>,
    addresses: Vec<Address>,
    next_address_id: i32,
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Addresses created so far (test inspection).
    pub async fn addresses(&self) -> Vec<Address> {
        self.state.read().await.addresses.clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_cpf(&self, cpf: &str) -> UserResult<bool> {
        let state = self.state.read().await;
        Ok(state.users.values().any(|u| u.cpf == cpf))
    }

    async fn exists_by_email(&self, email: &str) -> UserResult<bool> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(email)))
    }

    async fn exists_by_whatsapp(&self, whatsapp: &str) -> UserResult<bool> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .any(|u| u.whatsapp.as_deref() == Some(whatsapp)))
    }

    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_cpf(&self, cpf: &str) -> UserResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.cpf == cpf).cloned())
    }

    async fn list(&self, filter: UserFilter) -> UserResult<Vec<User>> {
        let state = self.state.read().await;

        let mut result: Vec<User> = state
            .users
            .values()
            .filter(|u| u.active == filter.active)
            .cloned()
            .collect();

        // Stable page order: creation time, then id
        result.sort_by(|a, b| {
            a.date_created
                .cmp(&b.date_created)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(result
            .into_iter()
            .skip(filter.skip as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn create(&self, user: User, address: NewAddress) -> UserResult<User> {
        // Single write lock covers both inserts, mirroring the
        // transactional behavior of the Postgres implementation.
        let mut state = self.state.write().await;

        if state.users.values().any(|u| u.cpf == user.cpf) {
            return Err(UserError::AlreadyExists(UniqueField::Cpf));
        }
        if state
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(UserError::AlreadyExists(UniqueField::Email));
        }
        if let Some(ref whatsapp) = user.whatsapp {
            if state
                .users
                .values()
                .any(|u| u.whatsapp.as_deref() == Some(whatsapp.as_str()))
            {
                return Err(UserError::AlreadyExists(UniqueField::Whatsapp));
            }
        }

        state.next_address_id += 1;
        let address_id = state.next_address_id;
        state.addresses.push(Address {
            user_id: user.id,
            id: address_id,
            cep: address.cep,
            state: address.state,
            city: address.city,
            neighborhood: address.neighborhood,
            road: address.road,
            number: address.number,
            public: address.public,
        });
        state.users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, "Created user with address");
        Ok(user)
    }

    async fn update_last_login(&self, id: Uuid, timestamp: DateTime<Utc>) -> UserResult<()> {
        let mut state = self.state.write().await;

        match state.users.get_mut(&id) {
            Some(user) => {
                user.date_login = Some(timestamp);
                Ok(())
            }
            None => Err(UserError::Transaction(format!(
                "user {} vanished during login stamp",
                id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_user(cpf: &str, email: &str, whatsapp: Option<&str>) -> User {
        User::new(
            cpf.to_string(),
            "Fulano de Tal".to_string(),
            email.to_string(),
            whatsapp.map(str::to_string),
            "$argon2id$fake-hash".to_string(),
            "M".to_string(),
            NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            true,
            true,
        )
    }

    fn sample_address() -> NewAddress {
        NewAddress {
            cep: 1001000,
            state: "SP".to_string(),
            city: "São Paulo".to_string(),
            neighborhood: "Sé".to_string(),
            road: Some("Praça da Sé".to_string()),
            number: Some("42".to_string()),
            public: true,
        }
    }

    #[tokio::test]
    async fn test_create_persists_user_and_address() {
        let repo = InMemoryUserRepository::new();
        let user = sample_user("12345678911", "a@x.com", None);

        let created = repo.create(user.clone(), sample_address()).await.unwrap();
        assert_eq!(created.id, user.id);

        let fetched = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(fetched.email, "a@x.com");

        let addresses = repo.addresses().await;
        assert_eq!(addresses.len(), 1);
        assert_eq!(addresses[0].user_id, user.id);
    }

    #[tokio::test]
    async fn test_duplicate_cpf_rejected_without_partial_rows() {
        let repo = InMemoryUserRepository::new();
        repo.create(sample_user("12345678911", "a@x.com", None), sample_address())
            .await
            .unwrap();

        let result = repo
            .create(sample_user("12345678911", "b@x.com", None), sample_address())
            .await;

        assert!(matches!(
            result,
            Err(UserError::AlreadyExists(UniqueField::Cpf))
        ));
        assert_eq!(repo.addresses().await.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_whatsapp_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(
            sample_user("12345678911", "a@x.com", Some("5511999998888")),
            sample_address(),
        )
        .await
        .unwrap();

        let result = repo
            .create(
                sample_user("12345678912", "b@x.com", Some("5511999998888")),
                sample_address(),
            )
            .await;

        assert!(matches!(
            result,
            Err(UserError::AlreadyExists(UniqueField::Whatsapp))
        ));
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_insensitive() {
        let repo = InMemoryUserRepository::new();
        repo.create(sample_user("12345678911", "a@x.com", None), sample_address())
            .await
            .unwrap();

        assert!(repo.find_by_email("A@X.COM").await.unwrap().is_some());
        assert!(repo.exists_by_email("A@X.COM").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_paginates_and_filters_active() {
        let repo = InMemoryUserRepository::new();

        for i in 0..3 {
            let user = sample_user(
                &format!("1234567891{}", i),
                &format!("user{}@x.com", i),
                None,
            );
            repo.create(user, sample_address()).await.unwrap();
        }

        let mut inactive = sample_user("99999999999", "inactive@x.com", None);
        inactive.active = false;
        repo.create(inactive, sample_address()).await.unwrap();

        let page = repo
            .list(UserFilter {
                skip: 0,
                limit: 2,
                active: true,
            })
            .await
            .unwrap();
        assert_eq!(page.len(), 2);

        let rest = repo
            .list(UserFilter {
                skip: 2,
                limit: 2,
                active: true,
            })
            .await
            .unwrap();
        assert_eq!(rest.len(), 1);

        let inactive_page = repo
            .list(UserFilter {
                skip: 0,
                limit: 10,
                active: false,
            })
            .await
            .unwrap();
        assert_eq!(inactive_page.len(), 1);
        assert_eq!(inactive_page[0].email, "inactive@x.com");
    }

    #[tokio::test]
    async fn test_update_last_login() {
        let repo = InMemoryUserRepository::new();
        let user = sample_user("12345678911", "a@x.com", None);
        repo.create(user.clone(), sample_address()).await.unwrap();

        let now = Utc::now();
        repo.update_last_login(user.id, now).await.unwrap();

        let fetched = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(fetched.date_login, Some(now));
        // everything else untouched
        assert_eq!(fetched.cpf, user.cpf);
        assert_eq!(fetched.date_created, user.date_created);
    }

    #[tokio::test]
    async fn test_update_last_login_missing_user() {
        let repo = InMemoryUserRepository::new();
        let result = repo.update_last_login(Uuid::new_v4(), Utc::now()).await;
        assert!(matches!(result, Err(UserError::Transaction(_))));
    }
}
