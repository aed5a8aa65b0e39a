// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repos;
pub mod security;
pub mod time;
pub mod uploader;
pub mod util;

pub use repos::{InMemoryCategories, InMemoryRepo, StoredRecord};
pub use security::{DummyTokenManager, EXPIRED_TOKEN, OTHER_TOKEN, TEST_TOKEN};
pub use time::fixed_now;
pub use uploader::{ScriptedUploader, UPLOADED_URL};
pub use util::DummyClock;
