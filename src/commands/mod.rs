//! Command wiring

pub mod publish;
