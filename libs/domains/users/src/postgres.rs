use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_addresses::NewAddress;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use crate::entity;
use crate::error::{UniqueField, UserError, UserResult};
use crate::models::{User, UserFilter};
use crate::repository::UserRepository;

/// PostgreSQL implementation of UserRepository using SeaORM
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Translate a store-level unique violation into the same field-specific
/// conflict the pre-checks produce. The unique indexes carry the column
/// name, so the loser of a registration race still learns which field
/// collided.
fn map_insert_err(e: DbErr) -> UserError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            if message.contains("whatsapp") {
                UserError::AlreadyExists(UniqueField::Whatsapp)
            } else if message.contains("email") {
                UserError::AlreadyExists(UniqueField::Email)
            } else if message.contains("cpf") {
                UserError::AlreadyExists(UniqueField::Cpf)
            } else {
                UserError::Transaction(message)
            }
        }
        _ => UserError::Transaction(e.to_string()),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn exists_by_cpf(&self, cpf: &str) -> UserResult<bool> {
        let count = entity::Entity::find()
            .filter(entity::Column::Cpf.eq(cpf))
            .count(&self.db)
            .await
            .map_err(|e| UserError::Transaction(e.to_string()))?;
        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> UserResult<bool> {
        let count = entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(|e| UserError::Transaction(e.to_string()))?;
        Ok(count > 0)
    }

    async fn exists_by_whatsapp(&self, whatsapp: &str) -> UserResult<bool> {
        let count = entity::Entity::find()
            .filter(entity::Column::Whatsapp.eq(whatsapp))
            .count(&self.db)
            .await
            .map_err(|e| UserError::Transaction(e.to_string()))?;
        Ok(count > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UserError::Transaction(e.to_string()))?;
        Ok(model.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| UserError::Transaction(e.to_string()))?;
        Ok(model.map(Into::into))
    }

    async fn find_by_cpf(&self, cpf: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Cpf.eq(cpf))
            .one(&self.db)
            .await
            .map_err(|e| UserError::Transaction(e.to_string()))?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, filter: UserFilter) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Active.eq(filter.active))
            .order_by_asc(entity::Column::DateCreated)
            .order_by_asc(entity::Column::Id)
            .offset(filter.skip)
            .limit(filter.limit)
            .all(&self.db)
            .await
            .map_err(|e| UserError::Transaction(e.to_string()))?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn create(&self, user: User, address: NewAddress) -> UserResult<User> {
        // One transaction is the unit of work: user insert, address
        // insert, then a single commit. Rollback on drop covers every
        // failure path.
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| UserError::Transaction(e.to_string()))?;

        let active: entity::ActiveModel = user.into();
        let model = active.insert(&txn).await.map_err(map_insert_err)?;

        domain_addresses::repository::insert_address(&txn, model.id, address)
            .await
            .map_err(|e| match e {
                domain_addresses::AddressError::Database(e) => {
                    UserError::Transaction(e.to_string())
                }
                other => UserError::Transaction(other.to_string()),
            })?;

        txn.commit()
            .await
            .map_err(|e| UserError::Transaction(e.to_string()))?;

        tracing::info!(user_id = %model.id, "Created user with address");
        Ok(model.into())
    }

    async fn update_last_login(&self, id: Uuid, timestamp: DateTime<Utc>) -> UserResult<()> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::DateLogin, Expr::value(timestamp))
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| UserError::Transaction(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserError::Transaction(format!(
                "user {} vanished during login stamp",
                id
            )));
        }

        Ok(())
    }
}
