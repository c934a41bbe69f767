//! Unit tests for the session facade
