//! DDL synthesis for the per-form submission tables.
//!
//! Field keys and form identifiers flow into table and column names, so
//! every identifier is validated against a strict allowlist before any
//! statement is built. Validation failures surface as [`SchemaError`] long
//! before the store sees the statement.

use super::{ColumnType, SchemaError};

/// Column names owned by the table itself; field keys may not collide.
const RESERVED_COLUMNS: &[&str] = &["id", "created_at"];

/// MySQL identifier length limit.
const MAX_IDENTIFIER_LEN: usize = 64;

/// Validates a value that will be used as a table-name suffix or column
/// name: ASCII alphanumeric or underscore, no leading digit, bounded
/// length, not reserved.
pub fn ensure_safe_identifier(name: &str) -> Result<(), SchemaError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
                && name.len() <= MAX_IDENTIFIER_LEN
        }
        None => false,
    };
    if !valid {
        return Err(SchemaError::InvalidIdentifier(name.to_string()));
    }
    if RESERVED_COLUMNS.contains(&name) {
        return Err(SchemaError::ReservedIdentifier(name.to_string()));
    }
    Ok(())
}

/// Characters `submission_table_name` adds around the form id.
const TABLE_NAME_OVERHEAD: usize = "form__submissions".len();

/// Validates a form id: the allowlist rules plus a tighter length bound,
/// because the id is wrapped into the dedicated table's name and that name
/// must itself fit the identifier limit.
pub fn ensure_safe_form_id(id: &str) -> Result<(), SchemaError> {
    ensure_safe_identifier(id)?;
    if id.len() > MAX_IDENTIFIER_LEN - TABLE_NAME_OVERHEAD {
        return Err(SchemaError::FormIdTooLong(id.to_string()));
    }
    Ok(())
}

/// Deterministic name of a form's dedicated submission table.
pub fn submission_table_name(form_id: &str) -> String {
    format!("form_{form_id}_submissions")
}

/// CREATE TABLE statement for a new dedicated submission table: an
/// autoincrement primary key, one column per flattened field in schema
/// order, and a store-assigned creation timestamp.
pub fn create_table_sql(table: &str, fields: &[(String, ColumnType)]) -> String {
    let mut columns = Vec::with_capacity(fields.len() + 2);
    columns.push("id INT AUTO_INCREMENT PRIMARY KEY".to_string());
    for (key, ty) in fields {
        columns.push(format!("`{key}` {}", ty.sql()));
    }
    columns.push("created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP".to_string());
    format!("CREATE TABLE `{table}` ({})", columns.join(", "))
}

/// ALTER TABLE statement used by the append-only migration: columns are
/// only ever added, never dropped or retyped.
pub fn add_column_sql(table: &str, key: &str, ty: ColumnType) -> String {
    format!("ALTER TABLE `{table}` ADD COLUMN `{key}` {}", ty.sql())
}

/// DROP TABLE statement used by the explicit purge operation.
pub fn drop_table_sql(table: &str) -> String {
    format!("DROP TABLE IF EXISTS `{table}`")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        assert!(ensure_safe_identifier("firstName").is_ok());
        assert!(ensure_safe_identifier("field_2").is_ok());
        assert!(ensure_safe_identifier("_hidden").is_ok());
    }

    #[test]
    fn rejects_unsafe_identifiers() {
        assert!(ensure_safe_identifier("").is_err());
        assert!(ensure_safe_identifier("1field").is_err());
        assert!(ensure_safe_identifier("drop table").is_err());
        assert!(ensure_safe_identifier("name`; --").is_err());
        assert!(ensure_safe_identifier("naïve").is_err());
        assert!(ensure_safe_identifier(&"x".repeat(65)).is_err());
    }

    #[test]
    fn rejects_reserved_column_names() {
        assert!(matches!(
            ensure_safe_identifier("id"),
            Err(SchemaError::ReservedIdentifier(_))
        ));
        assert!(matches!(
            ensure_safe_identifier("created_at"),
            Err(SchemaError::ReservedIdentifier(_))
        ));
    }

    #[test]
    fn table_name_is_derived_from_form_id() {
        assert_eq!(submission_table_name("f1"), "form_f1_submissions");
    }

    #[test]
    fn form_id_length_is_bounded_by_the_derived_table_name() {
        let id = "f".repeat(47);
        assert!(ensure_safe_form_id(&id).is_ok());
        assert_eq!(submission_table_name(&id).len(), MAX_IDENTIFIER_LEN);

        let id = "f".repeat(48);
        assert!(matches!(
            ensure_safe_form_id(&id),
            Err(SchemaError::FormIdTooLong(_))
        ));
    }

    #[test]
    fn form_id_validation_still_applies_the_allowlist() {
        assert!(ensure_safe_form_id("landing_page_2024").is_ok());
        assert!(ensure_safe_form_id("1form").is_err());
        assert!(ensure_safe_form_id("f; DROP").is_err());
    }

    #[test]
    fn create_table_lists_fields_in_order() {
        let fields = vec![
            ("name".to_string(), ColumnType::Text),
            ("age".to_string(), ColumnType::Integer),
        ];
        assert_eq!(
            create_table_sql("form_f1_submissions", &fields),
            "CREATE TABLE `form_f1_submissions` (\
             id INT AUTO_INCREMENT PRIMARY KEY, \
             `name` TEXT, \
             `age` INT, \
             created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP)"
        );
    }

    #[test]
    fn create_table_with_no_fields_is_still_valid() {
        assert_eq!(
            create_table_sql("form_f1_submissions", &[]),
            "CREATE TABLE `form_f1_submissions` (\
             id INT AUTO_INCREMENT PRIMARY KEY, \
             created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP)"
        );
    }

    #[test]
    fn add_column_statement() {
        assert_eq!(
            add_column_sql("form_f1_submissions", "email", ColumnType::Email),
            "ALTER TABLE `form_f1_submissions` ADD COLUMN `email` VARCHAR(255)"
        );
    }
}
