//! Unit tests for the identifier module.
