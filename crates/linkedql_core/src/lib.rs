//! Polymorphic item registry and JSON-LD decoding for LinkedQL-style documents.

/// Shape registration, value parsing, and registry-driven item decoding.
pub mod registry;
