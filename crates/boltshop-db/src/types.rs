//! Document types stored in the JSON file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form JSON object fields.
pub type Fields = Map<String, Value>;

/// The whole store document.
///
/// ```json
/// { "users": [...], "products": [...] }
/// ```
///
/// Records are kept as raw JSON objects, so any object loads whatever its
/// fields hold. Unknown top-level keys are kept and written back untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Database {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    #[serde(flatten)]
    pub extra: Fields,
}

impl Database {
    /// Next product id: one past the largest numeric id, or 1 when there is
    /// none. Records whose id is not a whole number are skipped.
    pub fn next_product_id(&self) -> Option<i64> {
        match self.products.iter().filter_map(ProductRecord::id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    pub fn product_mut(&mut self, id: i64) -> Option<&mut ProductRecord> {
        self.products.iter_mut().find(|p| p.id() == Some(id))
    }

    /// Find the user whose username and password both match exactly.
    pub fn find_user(&self, username: &str, password: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.matches(username, password))
    }
}

/// A stored user. Passwords are plain text in this mock store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct UserRecord {
    pub fields: Fields,
}

impl UserRecord {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::default()
            .with_field("username", username.into())
            .with_field("password", password.into())
    }

    /// Attach a field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn username(&self) -> Option<&str> {
        self.fields.get("username").and_then(Value::as_str)
    }

    pub fn password(&self) -> Option<&str> {
        self.fields.get("password").and_then(Value::as_str)
    }

    /// Strict equality on both fields. A record lacking either never matches.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username() == Some(username) && self.password() == Some(password)
    }

    /// The record as JSON without the password.
    pub fn public(&self) -> Value {
        let mut out = self.fields.clone();
        out.remove("password");
        Value::Object(out)
    }
}

/// An admin-managed product: arbitrary fields, normally with a numeric `id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ProductRecord {
    pub fields: Fields,
}

impl ProductRecord {
    /// Build a record with `id` set, replacing any `id` in `fields`.
    pub fn new(id: i64, fields: Fields) -> Self {
        let mut fields = fields;
        fields.insert("id".to_string(), Value::from(id));
        Self { fields }
    }

    /// Numeric id. Whole floats such as `2.0` count; strings do not.
    pub fn id(&self) -> Option<i64> {
        self.fields.get("id").and_then(whole_number)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    /// Shallow merge: each key in `updates` replaces the stored value.
    /// An `id` key is ignored.
    pub fn merge(&mut self, updates: Fields) {
        for (key, value) in updates {
            if key == "id" {
                continue;
            }
            self.fields.insert(key, value);
        }
    }
}

fn whole_number(value: &Value) -> Option<i64> {
    let n = value.as_number()?;
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// JavaScript truthiness for a JSON value. A missing value is falsy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_database_missing_collections() {
        let db: Database = serde_json::from_str("{}").unwrap();
        assert!(db.users.is_empty());
        assert!(db.products.is_empty());
        assert_eq!(db.next_product_id(), Some(1));
    }

    #[test]
    fn test_database_keeps_unknown_keys() {
        let db: Database =
            serde_json::from_value(json!({"users": [], "products": [], "orders": [1]})).unwrap();
        let back = serde_json::to_value(&db).unwrap();
        assert_eq!(back["orders"], json!([1]));
    }

    #[test]
    fn test_database_loads_irregular_records() {
        let doc = json!({
            "users": [{"role": "viewer"}, {"username": "admin", "password": "admin123"}],
            "products": [{"id": "p1", "name": "Kìm"}, {"id": 2.5}, {"name": "no id"}]
        });
        let db: Database = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(db.users.len(), 2);
        assert_eq!(db.products.len(), 3);
        assert_eq!(db.next_product_id(), Some(1));
        assert_eq!(serde_json::to_value(&db).unwrap(), doc);
    }

    #[test]
    fn test_next_product_id() {
        let db = Database {
            products: vec![
                ProductRecord::new(3, Fields::new()),
                ProductRecord::new(7, Fields::new()),
                ProductRecord::new(5, Fields::new()),
                ProductRecord { fields: fields(json!({"id": "x9"})) },
            ],
            ..Default::default()
        };
        assert_eq!(db.next_product_id(), Some(8));
    }

    #[test]
    fn test_product_id_forms() {
        let id_of = |v: Value| ProductRecord { fields: fields(json!({"id": v})) }.id();
        assert_eq!(id_of(json!(4)), Some(4));
        assert_eq!(id_of(json!(4.0)), Some(4));
        assert_eq!(id_of(json!(4.5)), None);
        assert_eq!(id_of(json!("4")), None);
        assert_eq!(ProductRecord::default().id(), None);
    }

    #[test]
    fn test_user_public_strips_password() {
        let user = UserRecord::new("admin", "secret").with_field("role", "admin");
        let public = user.public();
        assert_eq!(public, json!({"username": "admin", "role": "admin"}));
    }

    #[test]
    fn test_user_without_password_never_matches() {
        let guest: UserRecord =
            serde_json::from_value(json!({"username": "guest", "role": "viewer"})).unwrap();
        assert!(!guest.matches("guest", ""));

        let numeric: UserRecord =
            serde_json::from_value(json!({"username": "bot", "password": 123})).unwrap();
        assert!(!numeric.matches("bot", "123"));

        assert!(UserRecord::new("a", "").matches("a", ""));
    }

    #[test]
    fn test_product_record_fields() {
        let record: ProductRecord =
            serde_json::from_value(json!({"id": 2, "name": "Hammer", "price": 120000})).unwrap();
        assert_eq!(record.id(), Some(2));
        assert_eq!(record.name(), Some("Hammer"));
        assert_eq!(record.get("price"), Some(&json!(120000)));
    }

    #[test]
    fn test_product_new_overrides_id() {
        let record = ProductRecord::new(5, fields(json!({"id": "old", "name": "A"})));
        assert_eq!(record.get("id"), Some(&json!(5)));
    }

    #[test]
    fn test_product_merge_ignores_id() {
        let mut record = ProductRecord::new(1, fields(json!({"name": "A", "stock": 1})));
        record.merge(fields(json!({"id": 99, "stock": 5, "color": "red"})));
        assert_eq!(record.id(), Some(1));
        assert_eq!(record.get("stock"), Some(&json!(5)));
        assert_eq!(record.get("color"), Some(&json!("red")));
        assert_eq!(record.name(), Some("A"));
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&json!(null))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(0.0))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(is_truthy(Some(&json!("0"))));
        assert!(is_truthy(Some(&json!(12))));
        assert!(is_truthy(Some(&json!([]))));
        assert!(is_truthy(Some(&json!({}))));
    }
}
