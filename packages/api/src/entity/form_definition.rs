//! `SeaORM` Entity for FormDefinition
//!
//! One row per configured intake form. The raw form-builder schema is kept
//! verbatim as JSON; the dedicated submission table named
//! `form_<id>_submissions` is provisioned alongside this row and holds the
//! actual submission data.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "form_definition")]
pub struct Model {
    /// Caller-supplied identifier, doubles as the submission table suffix.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub page_name: String,

    /// Form-builder component tree, stored exactly as received.
    #[sea_orm(column_type = "Json")]
    pub schema: Json,

    pub region_id: i32,

    pub brand_id: i32,

    #[sea_orm(nullable)]
    pub website_id: Option<i32>,

    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::brand::Entity",
        from = "Column::BrandId",
        to = "super::brand::Column::Id"
    )]
    Brand,
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::RegionId",
        to = "super::region::Column::Id"
    )]
    Region,
    #[sea_orm(
        belongs_to = "super::website::Entity",
        from = "Column::WebsiteId",
        to = "super::website::Column::Id"
    )]
    Website,
    #[sea_orm(has_many = "super::lead::Entity")]
    Lead,
}

impl Related<super::brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl Related<super::website::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Website.def()
    }
}

impl Related<super::lead::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lead.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
