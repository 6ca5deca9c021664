//! Persistence helpers for addresses.
//!
//! Inserts run against any `ConnectionTrait` so the caller can stage
//! them inside the same transaction that creates the owning user.

use sea_orm::{ConnectionTrait, DbBackend, FromQueryResult, Statement};
use uuid::Uuid;

use crate::error::AddressResult;
use crate::models::{Address, NewAddress};

#[derive(Debug, FromQueryResult)]
struct AddressRow {
    user_id: Uuid,
    id: i32,
    cep: i32,
    state: String,
    city: String,
    neighborhood: String,
    road: Option<String>,
    number: Option<String>,
    public: bool,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Address {
            user_id: row.user_id,
            id: row.id,
            cep: row.cep,
            state: row.state,
            city: row.city,
            neighborhood: row.neighborhood,
            road: row.road,
            number: row.number,
            public: row.public,
        }
    }
}

/// Insert an address for the given user. The row id comes from the
/// database sequence.
pub async fn insert_address<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    address: NewAddress,
) -> AddressResult<Address> {
    let sql = r#"
        INSERT INTO addresses (user_id, cep, state, city, neighborhood, road, number, "public")
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING user_id, id, cep, state, city, neighborhood, road, number, "public"
    "#;

    let stmt = Statement::from_sql_and_values(
        DbBackend::Postgres,
        sql,
        [
            user_id.into(),
            address.cep.into(),
            address.state.into(),
            address.city.into(),
            address.neighborhood.into(),
            address.road.into(),
            address.number.into(),
            address.public.into(),
        ],
    );

    let row = AddressRow::find_by_statement(stmt)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotInserted)?;

    Ok(row.into())
}

/// Fetch the address attached to a user, if any.
pub async fn find_by_user_id<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
) -> AddressResult<Option<Address>> {
    let sql = r#"
        SELECT user_id, id, cep, state, city, neighborhood, road, number, "public"
        FROM addresses WHERE user_id = $1
    "#;

    let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [user_id.into()]);

    let row = AddressRow::find_by_statement(stmt).one(conn).await?;
    Ok(row.map(Into::into))
}
