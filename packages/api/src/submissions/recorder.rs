//! Submission Recorder
//!
//! Writes one submission into the form's dedicated table and mirrors it
//! into the shared lead ledger, both inside a single transaction so a
//! submission is never durable in one table but missing from the other.

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseBackend, DatabaseConnection,
    FromQueryResult, JsonValue, Statement, TransactionTrait,
};
use serde_json::{Map, Value};

use crate::entity::lead;
use crate::error::ApiError;
use crate::schema::ddl;

/// Control key sent by the form builder's submit button; never a column.
const SUBMIT_KEY: &str = "submit";

/// Contact fields extracted from a submission payload for the lead ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactFields {
    /// Name precedence: `firstName` + `lastName` when both are present,
    /// else a generic `name` field. Phone falls back from `phone` to
    /// `phoneNumber`.
    pub fn derive(payload: &Map<String, Value>) -> Self {
        let name = match (text_field(payload, "firstName"), text_field(payload, "lastName")) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            _ => text_field(payload, "name"),
        };
        Self {
            name,
            email: text_field(payload, "email"),
            phone: text_field(payload, "phone").or_else(|| text_field(payload, "phoneNumber")),
        }
    }
}

fn text_field(payload: &Map<String, Value>, key: &str) -> Option<String> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn data_entries(payload: &Map<String, Value>) -> Vec<(&String, &Value)> {
    payload.iter().filter(|(key, _)| key.as_str() != SUBMIT_KEY).collect()
}

/// Scalars bind as-is; compound values are serialized to their JSON text
/// because the dedicated table stores them in text columns.
fn bind_value(value: &Value) -> sea_orm::Value {
    match value {
        Value::Null => sea_orm::Value::String(None),
        Value::Bool(b) => (*b).into(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.into()
            } else if let Some(u) = n.as_u64() {
                u.into()
            } else {
                n.as_f64().unwrap_or_default().into()
            }
        }
        Value::String(s) => s.clone().into(),
        compound @ (Value::Array(_) | Value::Object(_)) => compound.to_string().into(),
    }
}

fn insert_statement(table: &str, entries: &[(&String, &Value)]) -> (String, Vec<sea_orm::Value>) {
    let columns: Vec<String> = entries.iter().map(|(key, _)| format!("`{key}`")).collect();
    let placeholders: Vec<&str> = entries.iter().map(|_| "?").collect();
    let sql = format!(
        "INSERT INTO `{table}` ({}) VALUES ({})",
        columns.join(", "),
        placeholders.join(", ")
    );
    let values = entries.iter().map(|(_, value)| bind_value(value)).collect();
    (sql, values)
}

/// Records one submission: inserts the payload into the form's dedicated
/// table (column names taken from the payload keys) and mirrors the
/// extracted contact fields plus the full payload into the lead ledger,
/// linked by the dedicated table's generated id.
pub async fn submit(
    db: &DatabaseConnection,
    form_id: &str,
    payload: Map<String, Value>,
) -> Result<i64, ApiError> {
    ddl::ensure_safe_form_id(form_id)?;
    let table = ddl::submission_table_name(form_id);

    let entries = data_entries(&payload);
    for (key, _) in &entries {
        ddl::ensure_safe_identifier(key)?;
    }
    let (sql, values) = insert_statement(&table, &entries);
    let contact = ContactFields::derive(&payload);

    let txn = db.begin().await?;

    let result = txn
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::MySql,
            sql,
            values,
        ))
        .await?;
    let submission_id = result.last_insert_id() as i64;

    lead::ActiveModel {
        form_id: Set(form_id.to_string()),
        submission_id: Set(submission_id),
        name: Set(contact.name),
        email: Set(contact.email),
        phone: Set(contact.phone),
        payload: Set(Value::Object(payload)),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(submission_id)
}

/// Full scan of a form's dedicated table. The row shape is whatever the
/// table currently looks like, so rows come back as JSON objects.
pub async fn get_all_submissions(
    db: &DatabaseConnection,
    form_id: &str,
) -> Result<Vec<JsonValue>, ApiError> {
    ddl::ensure_safe_form_id(form_id)?;
    let table = ddl::submission_table_name(form_id);

    let rows = JsonValue::find_by_statement(Statement::from_string(
        DatabaseBackend::MySql,
        format!("SELECT * FROM `{table}`"),
    ))
    .all(db)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn first_and_last_name_take_precedence_over_generic_name() {
        let contact = ContactFields::derive(&payload(json!({
            "firstName": "A", "lastName": "B", "name": "C"
        })));
        assert_eq!(contact.name.as_deref(), Some("A B"));
    }

    #[test]
    fn generic_name_is_the_fallback() {
        let contact = ContactFields::derive(&payload(json!({
            "firstName": "A", "name": "C"
        })));
        assert_eq!(contact.name.as_deref(), Some("C"));

        let contact = ContactFields::derive(&payload(json!({})));
        assert_eq!(contact.name, None);
    }

    #[test]
    fn phone_falls_back_to_phone_number_field() {
        let contact = ContactFields::derive(&payload(json!({ "phoneNumber": "+49123" })));
        assert_eq!(contact.phone.as_deref(), Some("+49123"));

        let contact = ContactFields::derive(&payload(json!({
            "phone": "555", "phoneNumber": "+49123"
        })));
        assert_eq!(contact.phone.as_deref(), Some("555"));
    }

    #[test]
    fn blank_contact_values_count_as_absent() {
        let contact = ContactFields::derive(&payload(json!({ "email": "  " })));
        assert_eq!(contact.email, None);
    }

    #[test]
    fn submit_control_key_is_stripped() {
        let payload = payload(json!({ "name": "Alice", "submit": true }));
        let entries = data_entries(&payload);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "name");
    }

    #[test]
    fn insert_statement_binds_values_in_column_order() {
        let payload = payload(json!({ "age": 30, "name": "Alice" }));
        let entries = data_entries(&payload);
        let (sql, values) = insert_statement("form_f1_submissions", &entries);

        assert_eq!(
            sql,
            "INSERT INTO `form_f1_submissions` (`age`, `name`) VALUES (?, ?)"
        );
        assert_eq!(values[0], sea_orm::Value::from(30i64));
        assert_eq!(values[1], sea_orm::Value::from("Alice".to_string()));
    }

    #[test]
    fn compound_values_serialize_to_json_text() {
        // serde_json maps iterate in key order, so the serialized text is
        // deterministic.
        let bound = bind_value(&json!({ "street": "Main", "no": 1 }));
        assert_eq!(
            bound,
            sea_orm::Value::from(r#"{"no":1,"street":"Main"}"#.to_string())
        );

        let bound = bind_value(&json!(["a", "b"]));
        assert_eq!(bound, sea_orm::Value::from(r#"["a","b"]"#.to_string()));
    }

    #[test]
    fn null_binds_as_sql_null() {
        assert_eq!(bind_value(&Value::Null), sea_orm::Value::String(None));
    }

    #[test]
    fn bool_and_float_bindings() {
        assert_eq!(bind_value(&json!(true)), sea_orm::Value::from(true));
        assert_eq!(bind_value(&json!(1.5)), sea_orm::Value::from(1.5f64));
    }
}
