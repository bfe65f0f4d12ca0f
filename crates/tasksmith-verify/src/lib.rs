pub mod schema;

pub use schema::{Issue, SchemaVerifier, Severity, VerifyResult, VerifyStatus};
