//! Unit tests for the token services
