//! # Domain models for the dashboard collections
//!
//! Defines the records the dashboard manages and the traits the rest of the
//! crate uses to treat them generically. These types are
//! `Serialize + Deserialize` so they travel unchanged between the REST
//! backend and the UI.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Product`] | A catalogue entry: opaque `id`, `title`, and a non-negative `price`. |
//! | [`User`] | An account: opaque `id` plus name, contact and login fields. Wire names are camelCase (`firstName`, `lastName`). |
//!
//! ## Traits
//!
//! - [`Record`]: the collection name used in REST paths, the identifier,
//!   and an empty draft template.
//! - [`Filterable`]: the display title searched by [`crate::filter`].
//!
//! A draft carries an empty identifier. Empty identifiers are omitted when
//! serialising, so a create request carries a record without identifier and
//! the backend assigns one.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record stored in one of the backend's collections.
pub trait Record: Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Collection name as it appears in REST paths: "products".
    const COLLECTION: &'static str;

    /// Singular noun for messages: "product".
    const LABEL: &'static str;

    /// Server-assigned identifier, empty for drafts.
    fn id(&self) -> &str;

    /// Empty template bound to the "Add" form.
    fn draft() -> Self;

    /// Whether this record has not been created on the backend yet.
    fn is_draft(&self) -> bool {
        self.id().is_empty()
    }
}

/// Records searchable by the filter engine.
pub trait Filterable {
    fn display_title(&self) -> &str;
}

/// A product as exposed by `/products`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    pub price: f64,
}

impl Product {
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            price,
        }
    }

    /// Price formatted for the table: "$9.99".
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }

    /// Apply raw text from the price input.
    ///
    /// Unparsable or negative input leaves the price untouched.
    pub fn set_price_input(&mut self, input: &str) -> Result<(), String> {
        let trimmed = input.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| format!("'{trimmed}' is not a number"))?;
        if !value.is_finite() || value < 0.0 {
            return Err("Price must be zero or more".to_string());
        }
        self.price = value;
        Ok(())
    }
}

impl Record for Product {
    const COLLECTION: &'static str = "products";
    const LABEL: &'static str = "product";

    fn id(&self) -> &str {
        &self.id
    }

    fn draft() -> Self {
        Self::default()
    }
}

impl Filterable for Product {
    fn display_title(&self) -> &str {
        &self.title
    }
}

/// A user as exposed by `/users`.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone: String,
}

impl User {
    /// "First Last", or the username when both names are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

// Keeps the password out of logs.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("phone", &self.phone)
            .finish()
    }
}

impl Record for User {
    const COLLECTION: &'static str = "users";
    const LABEL: &'static str = "user";

    fn id(&self) -> &str {
        &self.id
    }

    fn draft() -> Self {
        Self::default()
    }
}

/// Format an amount with two decimals: `5.0` → `"$5.00"`.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_omits_id_on_the_wire() {
        let draft = Product::new("New", 5.0);
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "New", "price": 5.0 }));
        assert!(draft.is_draft());
    }

    #[test]
    fn test_user_uses_camel_case() {
        let user: User = serde_json::from_str(
            r#"{"id":"7","firstName":"Ada","lastName":"Lovelace","email":"ada@example.com",
                "username":"ada","password":"pw","phone":"555"}"#,
        )
        .unwrap();
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");
        assert!(!user.is_draft());

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["id"], "7");
    }

    #[test]
    fn test_user_missing_fields_default_to_empty() {
        let user: User = serde_json::from_str(r#"{"id":"1","firstName":"Bo"}"#).unwrap();
        assert_eq!(user.email, "");
        assert_eq!(user.display_name(), "Bo");
    }

    #[test]
    fn test_user_debug_redacts_password() {
        let user = User {
            password: "hunter2".to_string(),
            ..User::default()
        };
        let out = format!("{user:?}");
        assert!(!out.contains("hunter2"));
        assert!(out.contains("<redacted>"));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(9.99), "$9.99");
        assert_eq!(format_price(5.0), "$5.00");
        assert_eq!(Product::new("x", 19.5).display_price(), "$19.50");
    }

    #[test]
    fn test_set_price_input() {
        let mut p = Product::new("Widget", 1.0);
        p.set_price_input(" 12.5 ").unwrap();
        assert_eq!(p.price, 12.5);

        assert!(p.set_price_input("abc").is_err());
        assert!(p.set_price_input("-3").is_err());
        assert_eq!(p.price, 12.5);
    }
}
