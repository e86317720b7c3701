//! Test doubles shared by the relay integration tests.

#![allow(dead_code)]

pub mod fixtures;
pub mod mock_transport;
pub mod spy_store;
