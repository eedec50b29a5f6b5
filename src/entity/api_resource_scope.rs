//! Join rows tying an API resource to the scopes that grant access to it.
//!
//! `scope_name` carries a foreign key to `api_scopes.name`, so resources
//! can only ever reference scopes that already exist.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "api_resource_scopes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub api_resource_id: Uuid,
    pub scope_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::api_resource::Entity",
        from = "Column::ApiResourceId",
        to = "super::api_resource::Column::Id"
    )]
    ApiResource,
}

impl Related<super::api_resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApiResource.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
