//! # API crate: client for the Global Health Chain backend
//!
//! The portal talks to a GraphQL backend that owns every entity (users,
//! patients, medical records, access requests). This crate holds the client
//! side of that contract: the transport, the operation documents, the models
//! and the typed operations the UI calls.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: credential-bearing GraphQL transport and the logout call |
//! | [`config`] | [`ClientConfig`]: endpoints read from the environment |
//! | [`contract`] | Call data for the health-access smart contract |
//! | [`dates`] | Timestamp parsing and display helpers |
//! | [`error`] | [`ApiError`] |
//! | [`models`] | Users, patients, records, access requests, onboarding payloads |
//! | [`queries`] | GraphQL operation documents |
//!
//! ## Operations
//!
//! Every public `async fn` on [`ApiClient`] below wraps exactly one GraphQL
//! operation and returns the unwrapped result field.
//!
//! - **Identity**: `me`, `set_user_role`
//! - **Patients**: `patients`, `my_patients`
//! - **Records**: `my_records`, `patient_records`, `can_create_record`, `create_record`
//! - **Access requests**: `access_requests`, `pending_requests`, `create_access_request`,
//!   `respond_to_access_request`

use serde_json::{json, Value};

pub mod client;
pub mod config;
pub mod contract;
pub mod dates;
pub mod error;
pub mod models;
pub mod queries;

pub use client::ApiClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use models::{
    AccessRequest, AccessRequestAck, AccessResponse, AccessStatus, MedicalRecord, NewAccessRequest,
    NewRecord, Patient, ProfileForm, Role, UserInfo,
};

impl ApiClient {
    /// The signed-in user, or `None` when the session is anonymous.
    pub async fn me(&self) -> Result<Option<UserInfo>, ApiError> {
        self.execute(&queries::GET_ME, json!({}), "me").await
    }

    /// Assign a role to the signed-in user together with their profile data.
    pub async fn set_user_role(&self, role: Role, profile_data: Value) -> Result<(), ApiError> {
        let _: Value = self
            .execute(
                &queries::SET_USER_ROLE,
                json!({ "role": role, "data": profile_data }),
                "setUserRole",
            )
            .await?;
        Ok(())
    }

    /// Every patient in the system (doctor view).
    pub async fn patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.execute(&queries::GET_PATIENTS, json!({}), "patients").await
    }

    /// Patients who granted the signed-in doctor access.
    pub async fn my_patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.execute(&queries::GET_MY_PATIENTS, json!({}), "myPatients").await
    }

    /// Requests the signed-in doctor has made.
    pub async fn access_requests(&self) -> Result<Vec<AccessRequest>, ApiError> {
        self.execute(&queries::GET_ACCESS_REQUESTS, json!({}), "accessRequests")
            .await
    }

    /// Requests awaiting the signed-in patient's decision.
    pub async fn pending_requests(&self) -> Result<Vec<AccessRequest>, ApiError> {
        self.execute(&queries::GET_PENDING_REQUESTS, json!({}), "pendingRequests")
            .await
    }

    /// The signed-in patient's own records.
    pub async fn my_records(&self) -> Result<Vec<MedicalRecord>, ApiError> {
        self.execute(&queries::GET_MY_RECORDS, json!({}), "myRecords").await
    }

    pub async fn patient_records(&self, patient_id: &str) -> Result<Vec<MedicalRecord>, ApiError> {
        self.execute(
            &queries::GET_PATIENT_RECORDS,
            json!({ "patientId": patient_id }),
            "patientRecords",
        )
        .await
    }

    /// Whether the signed-in doctor may add records for this patient.
    pub async fn can_create_record(&self, patient_id: &str) -> Result<bool, ApiError> {
        let allowed: Option<bool> = self
            .execute(
                &queries::CHECK_ACCESS,
                json!({ "patientId": patient_id }),
                "canCreateRecord",
            )
            .await?;
        Ok(allowed.unwrap_or(false))
    }

    pub async fn create_record(&self, input: &NewRecord) -> Result<MedicalRecord, ApiError> {
        self.execute(
            &queries::CREATE_MEDICAL_RECORD,
            json!({ "input": input }),
            "createRecord",
        )
        .await
    }

    pub async fn create_access_request(
        &self,
        input: &NewAccessRequest,
    ) -> Result<AccessRequestAck, ApiError> {
        self.execute(
            &queries::CREATE_ACCESS_REQUEST,
            json!({ "input": input }),
            "createAccessRequest",
        )
        .await
    }

    pub async fn respond_to_access_request(
        &self,
        response: &AccessResponse,
    ) -> Result<AccessRequestAck, ApiError> {
        self.execute(
            &queries::RESPOND_TO_ACCESS_REQUEST,
            json!({ "input": response }),
            "updateAccessRequest",
        )
        .await
    }
}
