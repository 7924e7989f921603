//! Leads Reader
//!
//! Reporting view over the lead ledger: every lead joined with its form's
//! metadata. The form join is inner — leads whose definition row was
//! deleted drop out of this view (retention of the raw rows is handled by
//! the registry's delete/purge split). Brand, region and website joins are
//! left joins so missing reference data never hides a lead.

use sea_orm::{
    DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryOrder, QuerySelect,
    RelationTrait,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{brand, form_definition, lead, region, website};
use crate::error::ApiError;

#[derive(Clone, Debug, Serialize, Deserialize, FromQueryResult, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadRow {
    pub id: i64,
    pub form_id: String,
    pub submission_id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,
    pub created_at: chrono::NaiveDateTime,
    pub page_name: String,
    pub brand_name: Option<String>,
    pub region_name: Option<String>,
    pub website_name: Option<String>,
}

pub async fn get_leads(db: &DatabaseConnection) -> Result<Vec<LeadRow>, ApiError> {
    let rows = lead::Entity::find()
        .select_only()
        .column(lead::Column::Id)
        .column(lead::Column::FormId)
        .column(lead::Column::SubmissionId)
        .column(lead::Column::Name)
        .column(lead::Column::Email)
        .column(lead::Column::Phone)
        .column(lead::Column::Payload)
        .column(lead::Column::CreatedAt)
        .column_as(form_definition::Column::PageName, "page_name")
        .column_as(brand::Column::Name, "brand_name")
        .column_as(region::Column::Name, "region_name")
        .column_as(website::Column::Name, "website_name")
        .join(JoinType::InnerJoin, lead::Relation::Form.def())
        .join(JoinType::LeftJoin, form_definition::Relation::Brand.def())
        .join(JoinType::LeftJoin, form_definition::Relation::Region.def())
        .join(JoinType::LeftJoin, form_definition::Relation::Website.def())
        .order_by_desc(lead::Column::CreatedAt)
        .into_model::<LeadRow>()
        .all(db)
        .await?;
    Ok(rows)
}
