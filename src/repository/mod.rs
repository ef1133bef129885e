//! 数据访问层

pub mod credential_store;

pub use credential_store::CredentialStore;
