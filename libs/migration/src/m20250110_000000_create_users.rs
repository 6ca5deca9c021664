use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_uuid(Users::Id))
                    .col(ColumnDef::new(Users::Cpf).string_len(11).not_null())
                    .col(string_len(Users::Name, 100))
                    .col(ColumnDef::new(Users::Email).string_len(45).not_null())
                    .col(ColumnDef::new(Users::Whatsapp).string_len(14).null())
                    .col(string(Users::Password))
                    .col(string_len(Users::Sex, 1))
                    .col(date(Users::DateBirth))
                    .col(boolean(Users::Active).default(true))
                    .col(boolean(Users::NotificationEmail).default(true))
                    .col(boolean(Users::NotificationWhats).default(true))
                    .col(
                        timestamp_with_time_zone(Users::DateCreated)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::DateLogin)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique indexes named after their column, so a constraint
        // violation message identifies the colliding field.
        manager
            .create_index(
                Index::create()
                    .name("idx_users_cpf")
                    .table(Users::Table)
                    .col(Users::Cpf)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_whatsapp")
                    .table(Users::Table)
                    .col(Users::Whatsapp)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_date_created")
                    .table(Users::Table)
                    .col(Users::DateCreated)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Cpf,
    Name,
    Email,
    Whatsapp,
    Password,
    Sex,
    DateBirth,
    Active,
    NotificationEmail,
    NotificationWhats,
    DateCreated,
    DateLogin,
}
