//! Publish-settings profile adapters

pub mod connection_string;
pub mod xml;

pub use connection_string::parse_connection_string;
pub use xml::XmlProfileReader;
