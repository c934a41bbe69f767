//! Unit tests for the password reset flow
