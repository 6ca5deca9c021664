use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the users table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub cpf: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub whatsapp: Option<String>,
    pub password: String,
    pub sex: String,
    pub date_birth: Date,
    pub active: bool,
    pub notification_email: bool,
    pub notification_whats: bool,
    pub date_created: DateTimeWithTimeZone,
    pub date_login: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain User
impl From<Model> for crate::models::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            cpf: model.cpf,
            name: model.name,
            email: model.email,
            whatsapp: model.whatsapp,
            password: model.password,
            sex: model.sex,
            date_birth: model.date_birth,
            active: model.active,
            notification_email: model.notification_email,
            notification_whats: model.notification_whats,
            date_created: model.date_created.into(),
            date_login: model.date_login.map(Into::into),
        }
    }
}

// Conversion from domain User to Sea-ORM ActiveModel
impl From<crate::models::User> for ActiveModel {
    fn from(user: crate::models::User) -> Self {
        ActiveModel {
            id: Set(user.id),
            cpf: Set(user.cpf),
            name: Set(user.name),
            email: Set(user.email),
            whatsapp: Set(user.whatsapp),
            password: Set(user.password),
            sex: Set(user.sex),
            date_birth: Set(user.date_birth),
            active: Set(user.active),
            notification_email: Set(user.notification_email),
            notification_whats: Set(user.notification_whats),
            date_created: Set(user.date_created.into()),
            date_login: Set(user.date_login.map(Into::into)),
        }
    }
}
