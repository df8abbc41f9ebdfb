//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: seed customers must have
//! non-empty fields and unique ids.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::Customer;

/// Desk configuration.
///
/// # Example
///
/// ```toml
/// seed = true
/// json = false
///
/// [[customers]]
/// id = "C001"
/// name = "Ava Martin"
/// email = "ava@example.com"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DeskConfig {
    /// Seed customers before the menu starts
    pub seed: Option<bool>,

    /// Render list views as JSON
    pub json: Option<bool>,

    /// Replacement seed list
    pub customers: Option<Vec<SeedCustomer>>,
}

impl DeskConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(customers) = &self.customers else {
            return Ok(());
        };

        let mut seen = HashSet::new();
        for seed in customers {
            let customer = seed.to_customer()?;
            if !seen.insert(customer.id.clone()) {
                return Err(ConfigError::InvalidValue(format!(
                    "duplicate seed customer id '{}'",
                    customer.id
                )));
            }
        }
        Ok(())
    }
}

/// A customer registered at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SeedCustomer {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl SeedCustomer {
    pub fn new(id: &str, name: &str, email: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    /// Validate into a customer record.
    pub fn to_customer(&self) -> Result<Customer, ConfigError> {
        Customer::new(&self.id, &self.name, &self.email).map_err(|e| {
            ConfigError::InvalidValue(format!("seed customer '{}': {}", self.id, e))
        })
    }
}

/// The customers seeded when the config does not list its own.
pub fn default_seed_customers() -> Vec<SeedCustomer> {
    vec![
        SeedCustomer::new("C001", "Ava Martin", "ava@example.com"),
        SeedCustomer::new("C002", "Ben Parker", "ben@example.com"),
        SeedCustomer::new("C003", "Chloe Diaz", "chloe@example.com"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DeskConfig::default();
        assert!(config.seed.is_none());
        assert!(config.json.is_none());
        assert!(config.customers.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_seed_is_valid() {
        let config = DeskConfig {
            customers: Some(default_seed_customers()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_seed_field_rejected() {
        let config = DeskConfig {
            customers: Some(vec![SeedCustomer::new("C010", "", "x@example.com")]),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Customer name cannot be empty"));
    }

    #[test]
    fn duplicate_seed_ids_rejected() {
        let config = DeskConfig {
            customers: Some(vec![
                SeedCustomer::new("C010", "A", "a@example.com"),
                SeedCustomer::new(" C010 ", "B", "b@example.com"),
            ]),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn roundtrip() {
        let config = DeskConfig {
            seed: Some(true),
            json: Some(false),
            customers: Some(vec![SeedCustomer::new("X1", "Xavier", "x@example.com")]),
        };

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: DeskConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn reject_unknown_fields() {
        let toml = r#"
            seed = true
            unknown_field = true
        "#;

        let result: Result<DeskConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
