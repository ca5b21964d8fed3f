//! Application database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::App;

/// Applications are provisioned out of band; this entity is read-only.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "apps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub secret: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for App {
    fn from(model: Model) -> Self {
        App {
            id: model.id,
            name: model.name,
            secret: model.secret,
        }
    }
}
