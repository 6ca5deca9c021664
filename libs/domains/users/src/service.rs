use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use domain_addresses::{CepResolver, NewAddress};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{UniqueField, UserError, UserResult};
use crate::models::{RegisterUser, User, UserFilter, UserPublic};
use crate::repository::UserRepository;

/// Service layer for user registration, lookups and authentication.
#[derive(Clone)]
pub struct UserService<R: UserRepository, C: CepResolver> {
    repository: Arc<R>,
    cep: Arc<C>,
}

impl<R: UserRepository, C: CepResolver> UserService<R, C> {
    pub fn new(repository: R, cep: C) -> Self {
        Self {
            repository: Arc::new(repository),
            cep: Arc::new(cep),
        }
    }

    /// Register a new user with their address.
    ///
    /// Uniqueness is checked sequentially (cpf, email, whatsapp) and
    /// short-circuits on the first collision. The CEP is resolved
    /// before anything is written, so a lookup failure leaves no rows
    /// behind. The user and address inserts then commit atomically in
    /// the repository.
    pub async fn register(&self, input: RegisterUser) -> UserResult<UserPublic> {
        if self.repository.exists_by_cpf(&input.cpf).await? {
            return Err(UserError::AlreadyExists(UniqueField::Cpf));
        }
        if self.repository.exists_by_email(&input.email).await? {
            return Err(UserError::AlreadyExists(UniqueField::Email));
        }
        if let Some(ref whatsapp) = input.whatsapp {
            if self.repository.exists_by_whatsapp(whatsapp).await? {
                return Err(UserError::AlreadyExists(UniqueField::Whatsapp));
            }
        }

        let password_hash = self.hash_password(&input.password)?;

        // Lookup fields always win over anything the caller supplied.
        let resolved = self.cep.resolve(&input.cep).await?;
        let address = NewAddress::from_lookup(resolved, input.number, input.public);

        let user = User::new(
            input.cpf,
            input.name,
            input.email,
            input.whatsapp,
            password_hash,
            input.sex,
            input.date_birth,
            input.notification_email,
            input.notification_whats,
        );

        let created = self.repository.create(user, address).await?;
        Ok(created.into())
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: Uuid) -> UserResult<UserPublic> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        Ok(user.into())
    }

    /// Get a user by email
    pub async fn get_user_by_email(&self, email: &str) -> UserResult<UserPublic> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFound(email.to_string()))?;

        Ok(user.into())
    }

    /// Get a user by CPF
    pub async fn get_user_by_cpf(&self, cpf: &str) -> UserResult<UserPublic> {
        let user = self
            .repository
            .find_by_cpf(cpf)
            .await?
            .ok_or_else(|| UserError::NotFound(cpf.to_string()))?;

        Ok(user.into())
    }

    /// List users with pagination. An empty page is reported as
    /// not-found rather than an empty list.
    pub async fn list_users(&self, filter: UserFilter) -> UserResult<Vec<UserPublic>> {
        let users = self.repository.list(filter).await?;

        if users.is_empty() {
            return Err(UserError::NoneFound);
        }

        Ok(users.into_iter().map(Into::into).collect())
    }

    /// Verify credentials and stamp the last login.
    ///
    /// A missing email and a wrong password are indistinguishable to
    /// the caller. A failed login stamp denies authentication.
    pub async fn authenticate(&self, email: &str, password: &str) -> UserResult<Uuid> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.verify_password(password, &user.password)? {
            return Err(UserError::InvalidCredentials);
        }

        self.repository
            .update_last_login(user.id, Utc::now())
            .await?;

        Ok(user.id)
    }

    // Password helpers

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> UserResult<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
