//! Data models exchanged with the GraphQL backend.

pub mod access_request;
pub mod patient;
pub mod profile;
pub mod record;
mod user;

pub use access_request::{AccessRequest, AccessRequestAck, AccessResponse, AccessStatus, NewAccessRequest};
pub use patient::{Party, Patient, Person};
pub use profile::ProfileForm;
pub use record::{MedicalRecord, NewRecord};
pub use user::{Role, UserInfo};
