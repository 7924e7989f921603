//! Mapping from form-builder field types to MySQL column types.

/// Relational column type for one form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Boolean,
    Date,
    DateTime,
    Email,
    Phone,
    Text,
}

impl ColumnType {
    /// MySQL rendering used in generated DDL.
    pub fn sql(self) -> &'static str {
        match self {
            ColumnType::Integer => "INT",
            ColumnType::Boolean => "TINYINT(1)",
            ColumnType::Date => "DATE",
            ColumnType::DateTime => "DATETIME",
            ColumnType::Email => "VARCHAR(255)",
            ColumnType::Phone => "VARCHAR(20)",
            ColumnType::Text => "TEXT",
        }
    }
}

/// Total mapping from a field type tag to a column type. Unknown tags
/// degrade to text storage instead of failing.
pub fn map_field_type(kind: &str) -> ColumnType {
    match kind {
        "number" => ColumnType::Integer,
        "checkbox" => ColumnType::Boolean,
        "date" => ColumnType::Date,
        "datetime" => ColumnType::DateTime,
        "email" => ColumnType::Email,
        "phoneNumber" => ColumnType::Phone,
        "textfield" | "textarea" | "select" => ColumnType::Text,
        _ => ColumnType::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_map_to_expected_types() {
        assert_eq!(map_field_type("number"), ColumnType::Integer);
        assert_eq!(map_field_type("checkbox"), ColumnType::Boolean);
        assert_eq!(map_field_type("date"), ColumnType::Date);
        assert_eq!(map_field_type("datetime"), ColumnType::DateTime);
        assert_eq!(map_field_type("email"), ColumnType::Email);
        assert_eq!(map_field_type("phoneNumber"), ColumnType::Phone);
        assert_eq!(map_field_type("textfield"), ColumnType::Text);
        assert_eq!(map_field_type("textarea"), ColumnType::Text);
        assert_eq!(map_field_type("select"), ColumnType::Text);
    }

    #[test]
    fn unknown_tags_fall_back_to_text() {
        assert_eq!(map_field_type("signature"), ColumnType::Text);
        assert_eq!(map_field_type(""), ColumnType::Text);
    }

    #[test]
    fn sql_renderings() {
        assert_eq!(ColumnType::Integer.sql(), "INT");
        assert_eq!(ColumnType::Boolean.sql(), "TINYINT(1)");
        assert_eq!(ColumnType::Email.sql(), "VARCHAR(255)");
        assert_eq!(ColumnType::Phone.sql(), "VARCHAR(20)");
    }
}
