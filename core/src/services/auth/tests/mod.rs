//! Tests for the authentication guard and session service

mod service_tests;
