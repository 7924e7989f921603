//! `SeaORM` Entity for Lead
//!
//! The cross-form ledger. Every submission mirrors one row here with the
//! extracted contact fields plus the full payload as an opaque JSON blob.
//! `submission_id` points back at the row in the form's dedicated table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lead")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub form_id: String,

    /// Autoincrement id of the matching row in `form_<form_id>_submissions`.
    pub submission_id: i64,

    #[sea_orm(nullable)]
    pub name: Option<String>,

    #[sea_orm(nullable)]
    pub email: Option<String>,

    #[sea_orm(nullable)]
    pub phone: Option<String>,

    /// Full submission payload, serialized at write time.
    #[sea_orm(column_type = "Json")]
    pub payload: Json,

    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::form_definition::Entity",
        from = "Column::FormId",
        to = "super::form_definition::Column::Id"
    )]
    Form,
}

impl Related<super::form_definition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Form.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
