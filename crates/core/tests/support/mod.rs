//! Shared test helpers for `merchplan-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so that
//! planning tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod storage;
