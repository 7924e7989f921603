//! Form Registry
//!
//! Authoritative owner of FormDefinition persistence and of each form's
//! dedicated submission table. Creating a form provisions the table from
//! the flattened schema; editing a form migrates the table append-only
//! (columns are added for new fields, never dropped); deleting a form
//! removes only the definition row — submission data is retained until the
//! explicit purge operation.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseBackend,
    DatabaseConnection, EntityTrait, FromQueryResult, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Statement, TransactionTrait, sea_query::Expr,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{brand, form_definition, lead, region};
use crate::error::ApiError;
use crate::schema::{ColumnType, FormSchema, SchemaError, ddl, flatten, map_field_type};

pub struct NewForm {
    pub id: String,
    pub page_name: String,
    pub schema: serde_json::Value,
    pub region_id: i32,
    pub brand_id: i32,
    pub website_id: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, FromQueryResult, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormSummary {
    pub id: String,
    pub page_name: String,
    pub created_at: chrono::NaiveDateTime,
    pub brand_name: Option<String>,
    pub region_name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, FromQueryResult, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormDetail {
    pub id: String,
    pub page_name: String,
    #[schema(value_type = Object)]
    pub schema: serde_json::Value,
    pub region_id: i32,
    pub brand_id: i32,
    pub website_id: Option<i32>,
    pub brand_name: Option<String>,
    pub region_name: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormPage {
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
    pub rows: Vec<FormSummary>,
}

/// Flattens a raw schema blob and maps every leaf field to its column
/// type, validating each key against the identifier allowlist so no
/// caller-controlled name can reach the DDL unchecked.
fn columns_for(raw: &serde_json::Value) -> Result<Vec<(String, ColumnType)>, SchemaError> {
    let parsed = FormSchema::parse(raw)?;
    let fields = flatten(&parsed.components);
    let mut columns = Vec::with_capacity(fields.len());
    for field in fields {
        ddl::ensure_safe_identifier(&field.key)?;
        columns.push((field.key, map_field_type(&field.kind)));
    }
    Ok(columns)
}

/// Persists a new FormDefinition and provisions its dedicated submission
/// table. MySQL DDL commits implicitly, so the two steps cannot share a
/// transaction; instead the definition row is compensated away if the
/// CREATE TABLE is rejected.
pub async fn create_form(db: &DatabaseConnection, input: NewForm) -> Result<String, ApiError> {
    ddl::ensure_safe_form_id(&input.id)?;
    let columns = columns_for(&input.schema)?;
    let table = ddl::submission_table_name(&input.id);

    let definition = form_definition::ActiveModel {
        id: Set(input.id.clone()),
        page_name: Set(input.page_name),
        schema: Set(input.schema),
        region_id: Set(input.region_id),
        brand_id: Set(input.brand_id),
        website_id: Set(input.website_id),
        created_at: Set(chrono::Utc::now().naive_utc()),
    };
    definition.insert(db).await?;

    let create = ddl::create_table_sql(&table, &columns);
    tracing::debug!(form_id = %input.id, sql = %create, "provisioning submission table");
    if let Err(err) = db
        .execute(Statement::from_string(DatabaseBackend::MySql, create))
        .await
    {
        if let Err(cleanup_err) = form_definition::Entity::delete_by_id(input.id.clone())
            .exec(db)
            .await
        {
            tracing::error!(
                form_id = %input.id,
                error = %cleanup_err,
                "failed to remove definition row after rejected CREATE TABLE; \
                 orphan definition left behind"
            );
        }
        return Err(ApiError::ddl(err.to_string()));
    }

    Ok(input.id)
}

/// Page and limit as used by the query: both floored at 1.
fn page_window(page: u64, limit: u64) -> (u64, u64) {
    (page.max(1), limit.max(1))
}

impl FormPage {
    fn assemble(total: u64, page: u64, limit: u64, rows: Vec<FormSummary>) -> Self {
        Self {
            total,
            page,
            total_pages: total.div_ceil(limit),
            rows,
        }
    }
}

pub async fn find_all(db: &DatabaseConnection, page: u64, limit: u64) -> Result<FormPage, ApiError> {
    let (page, limit) = page_window(page, limit);

    let total = form_definition::Entity::find().count(db).await?;

    let rows = form_definition::Entity::find()
        .select_only()
        .column(form_definition::Column::Id)
        .column(form_definition::Column::PageName)
        .column(form_definition::Column::CreatedAt)
        .column_as(brand::Column::Name, "brand_name")
        .column_as(region::Column::Name, "region_name")
        .join(JoinType::LeftJoin, form_definition::Relation::Brand.def())
        .join(JoinType::LeftJoin, form_definition::Relation::Region.def())
        .order_by_desc(form_definition::Column::CreatedAt)
        .offset((page - 1) * limit)
        .limit(limit)
        .into_model::<FormSummary>()
        .all(db)
        .await?;

    Ok(FormPage::assemble(total, page, limit, rows))
}

pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<FormDetail>, ApiError> {
    let detail = form_definition::Entity::find_by_id(id)
        .select_only()
        .column(form_definition::Column::Id)
        .column(form_definition::Column::PageName)
        .column(form_definition::Column::Schema)
        .column(form_definition::Column::RegionId)
        .column(form_definition::Column::BrandId)
        .column(form_definition::Column::WebsiteId)
        .column(form_definition::Column::CreatedAt)
        .column_as(brand::Column::Name, "brand_name")
        .column_as(region::Column::Name, "region_name")
        .join(JoinType::LeftJoin, form_definition::Relation::Brand.def())
        .join(JoinType::LeftJoin, form_definition::Relation::Region.def())
        .into_model::<FormDetail>()
        .one(db)
        .await?;
    Ok(detail)
}

/// Updates the definition row and reconciles the dedicated table with the
/// new schema. Migration is append-only: fields missing a column get one
/// added, columns with no matching field are left in place. Re-running an
/// identical edit is a no-op on the table.
pub async fn edit_by_id(
    db: &DatabaseConnection,
    id: &str,
    new_schema: serde_json::Value,
    page_name: String,
) -> Result<u64, ApiError> {
    ddl::ensure_safe_form_id(id)?;
    let columns = columns_for(&new_schema)?;

    // update_many instead of ActiveModel::update: re-submitting an
    // identical schema must stay a no-op, not a RecordNotUpdated error.
    let updated = form_definition::Entity::update_many()
        .col_expr(form_definition::Column::Schema, Expr::value(new_schema))
        .col_expr(form_definition::Column::PageName, Expr::value(page_name))
        .filter(form_definition::Column::Id.eq(id))
        .exec(db)
        .await?
        .rows_affected;

    // MySQL reports zero affected rows both for a missing row and for a
    // values-unchanged update; only the lookup tells them apart. Checking
    // after the update keeps a concurrently deleted form from reaching the
    // table migration below.
    if updated == 0
        && form_definition::Entity::find_by_id(id).one(db).await?.is_none()
    {
        return Err(ApiError::not_found(format!("Form `{id}` does not exist")));
    }

    let table = ddl::submission_table_name(id);
    let present = existing_columns(db, &table).await?;
    for (key, ty) in columns {
        if present.contains(&key) {
            continue;
        }
        let alter = ddl::add_column_sql(&table, &key, ty);
        tracing::debug!(form_id = %id, sql = %alter, "adding submission column");
        db.execute(Statement::from_string(DatabaseBackend::MySql, alter))
            .await
            .map_err(|err| ApiError::ddl(err.to_string()))?;
    }

    Ok(updated.max(1))
}

/// Removes the definition row only. The dedicated submission table and the
/// ledger rows referencing it are deliberately retained; see
/// [`purge_submissions`] for explicit disposal.
pub async fn delete_by_id(db: &DatabaseConnection, id: &str) -> Result<bool, ApiError> {
    let result = form_definition::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Drops a form's dedicated submission table and deletes its ledger rows.
/// The lead deletion is transactional; the DROP TABLE follows separately
/// because MySQL DDL cannot participate in the transaction.
pub async fn purge_submissions(db: &DatabaseConnection, id: &str) -> Result<(), ApiError> {
    ddl::ensure_safe_form_id(id)?;
    let table = ddl::submission_table_name(id);

    let txn = db.begin().await?;
    lead::Entity::delete_many()
        .filter(lead::Column::FormId.eq(id))
        .exec(&txn)
        .await?;
    txn.commit().await?;

    db.execute(Statement::from_string(
        DatabaseBackend::MySql,
        ddl::drop_table_sql(&table),
    ))
    .await?;

    tracing::info!(form_id = %id, "purged submission table and leads");
    Ok(())
}

/// Current column set of a dedicated table, from INFORMATION_SCHEMA.
async fn existing_columns(db: &DatabaseConnection, table: &str) -> Result<HashSet<String>, ApiError> {
    let rows = db
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::MySql,
            "SELECT COLUMN_NAME AS column_name FROM INFORMATION_SCHEMA.COLUMNS \
             WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ?",
            [table.into()],
        ))
        .await?;

    let mut columns = HashSet::with_capacity(rows.len());
    for row in rows {
        columns.insert(row.try_get::<String>("", "column_name")?);
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn columns_follow_schema_order_and_types() {
        let raw = json!({
            "components": [
                { "type": "textfield", "key": "name" },
                { "type": "number", "key": "age" },
                { "type": "button", "key": "submit" },
                { "type": "email", "key": "email" }
            ]
        });

        let columns = columns_for(&raw).unwrap();
        assert_eq!(
            columns,
            vec![
                ("name".to_string(), ColumnType::Text),
                ("age".to_string(), ColumnType::Integer),
                ("email".to_string(), ColumnType::Email),
            ]
        );
    }

    #[test]
    fn unknown_field_types_become_text_columns() {
        let raw = json!({
            "components": [{ "type": "signature", "key": "sig" }]
        });

        let columns = columns_for(&raw).unwrap();
        assert_eq!(columns, vec![("sig".to_string(), ColumnType::Text)]);
    }

    #[test]
    fn unsafe_field_keys_are_rejected_before_ddl() {
        let raw = json!({
            "components": [{ "type": "textfield", "key": "name`; DROP TABLE lead; --" }]
        });

        assert!(columns_for(&raw).is_err());
    }

    #[test]
    fn field_keys_colliding_with_table_columns_are_rejected() {
        let raw = json!({
            "components": [{ "type": "textfield", "key": "created_at" }]
        });

        assert!(matches!(
            columns_for(&raw),
            Err(SchemaError::ReservedIdentifier(_))
        ));
    }

    #[test]
    fn malformed_schema_blob_is_a_schema_error() {
        let raw = json!({ "components": [{ "key": "missing type tag" }] });
        assert!(matches!(columns_for(&raw), Err(SchemaError::Malformed(_))));
    }

    #[test]
    fn page_window_floors_page_and_limit_at_one() {
        assert_eq!(page_window(0, 0), (1, 1));
        assert_eq!(page_window(0, 10), (1, 10));
        assert_eq!(page_window(3, 0), (3, 1));
        assert_eq!(page_window(2, 250), (2, 250));
    }

    #[test]
    fn total_pages_rounds_up_and_is_zero_when_empty() {
        assert_eq!(FormPage::assemble(0, 1, 10, vec![]).total_pages, 0);
        assert_eq!(FormPage::assemble(1, 1, 10, vec![]).total_pages, 1);
        assert_eq!(FormPage::assemble(20, 2, 10, vec![]).total_pages, 2);
        assert_eq!(FormPage::assemble(21, 3, 10, vec![]).total_pages, 3);
    }

    #[test]
    fn nested_layout_contributes_columns_in_visual_order() {
        let raw = json!({
            "components": [{
                "type": "panel",
                "components": [
                    { "type": "textfield", "key": "fieldA" },
                    {
                        "type": "columns",
                        "columns": [
                            { "components": [{ "type": "textfield", "key": "fieldB" }] },
                            { "components": [{ "type": "textfield", "key": "fieldC" }] }
                        ]
                    }
                ]
            }]
        });

        let keys: Vec<String> = columns_for(&raw).unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["fieldA", "fieldB", "fieldC"]);
    }
}
