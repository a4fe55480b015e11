//! Error types shared by the integration tests.

#![allow(dead_code)]

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("disk full")]
pub struct DiskFull;

#[derive(Debug, Error, PartialEq)]
#[error("network timeout after {0}ms")]
pub struct NetworkTimeout(pub u64);

#[derive(Debug, Error, PartialEq)]
#[error("out of memory")]
pub struct OutOfMemory;

#[derive(Debug, Error, PartialEq)]
#[error("invalid input: {0}")]
pub struct InvalidInput(pub String);

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("disk unavailable")]
    Disk(#[source] DiskFull),
    #[error("corrupt block {0}")]
    Corrupt(u32),
}
