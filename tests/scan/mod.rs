//! Integration tests for link and network scoring.

mod determinism;
mod link_rules;
mod network_rules;
