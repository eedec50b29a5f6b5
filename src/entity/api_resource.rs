//! API resource entity: a protected backend identified for token
//! audience purposes.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "api_resources")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub display_name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::api_resource_scope::Entity")]
    ApiResourceScope,
}

impl Related<super::api_resource_scope::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApiResourceScope.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
