//! User entity: a login-capable identity principal.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub email_confirmed: bool,
    pub password_hash: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_claim::Entity")]
    UserClaim,
}

impl Related<super::user_claim::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserClaim.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
