use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Addresses are keyed per user: (user_id, id) with id drawn
        // from a sequence.
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Addresses::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Addresses::Id)
                            .integer()
                            .not_null()
                            .auto_increment(),
                    )
                    .col(integer(Addresses::Cep))
                    .col(string_len(Addresses::State, 2))
                    .col(string_len(Addresses::City, 50))
                    .col(string_len(Addresses::Neighborhood, 50))
                    .col(ColumnDef::new(Addresses::Road).string_len(100).null())
                    .col(ColumnDef::new(Addresses::Number).string_len(10).null())
                    .col(boolean(Addresses::Public).default(true))
                    .primary_key(
                        Index::create()
                            .col(Addresses::UserId)
                            .col(Addresses::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_user_id")
                            .from(Addresses::Table, Addresses::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    UserId,
    Id,
    Cep,
    State,
    City,
    Neighborhood,
    Road,
    Number,
    Public,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
