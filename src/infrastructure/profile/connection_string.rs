//! Connection String Parsing
//!
//! Extracts the four attributes a database binding needs from a
//! `key=value;key=value` connection string. Keys are case-insensitive and
//! the common synonyms are accepted; when a key repeats, the last value
//! wins.

use crate::domain::entities::DatabaseBinding;

/// Parse a connection string into a database binding
///
/// Unknown attributes are ignored. An empty or attribute-free string yields
/// an empty binding rather than an error.
pub fn parse_connection_string(raw: &str) -> DatabaseBinding {
    let mut binding = DatabaseBinding::default();

    for pair in raw.split(';') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim();

        match key.as_str() {
            "data source" | "server" | "address" | "addr" => {
                binding.data_source = value.to_string();
            }
            "initial catalog" | "database" => {
                binding.initial_catalog = value.to_string();
            }
            "user id" | "uid" | "user" => {
                binding.user_id = value.to_string();
            }
            "password" | "pwd" => {
                binding.password = value.to_string();
            }
            _ => {}
        }
    }

    binding
}
