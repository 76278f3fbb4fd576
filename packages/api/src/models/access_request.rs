//! Access requests: a doctor asking a patient for access to their records.
//!
//! The backend owns the lifecycle. The portal only lists requests and asks for
//! `PENDING → APPROVED` or `PENDING → DENIED` transitions.

use serde::{Deserialize, Serialize};

use super::patient::Party;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessStatus {
    Pending,
    Approved,
    Denied,
    #[serde(other)]
    Unknown,
}

impl AccessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessStatus::Pending => "PENDING",
            AccessStatus::Approved => "APPROVED",
            AccessStatus::Denied => "DENIED",
            AccessStatus::Unknown => "UNKNOWN",
        }
    }

    /// Badge classes for the status pill.
    pub fn badge_class(&self) -> &'static str {
        match self {
            AccessStatus::Pending => "bg-orange-100 text-orange-800",
            AccessStatus::Approved => "bg-green-100 text-green-800",
            AccessStatus::Denied => "bg-red-100 text-red-800",
            AccessStatus::Unknown => "bg-gray-100 text-gray-800",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequest {
    pub id: String,
    #[serde(default)]
    pub patient_id: Option<String>,
    #[serde(default)]
    pub doctor_id: Option<String>,
    #[serde(default)]
    pub patient: Option<Party>,
    #[serde(default)]
    pub doctor: Option<Party>,
    pub status: AccessStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AccessRequest {
    pub fn is_pending(&self) -> bool {
        self.status == AccessStatus::Pending
    }

    pub fn patient_name(&self) -> Option<&str> {
        self.patient.as_ref()?.name()
    }

    pub fn patient_email(&self) -> Option<&str> {
        self.patient.as_ref()?.email()
    }

    pub fn doctor_name(&self) -> Option<&str> {
        self.doctor.as_ref()?.name()
    }

    fn has_patient_account(&self) -> bool {
        self.patient.as_ref().is_some_and(|p| p.user.is_some())
    }
}

/// Count of requests still awaiting a decision.
pub fn pending_count(requests: &[AccessRequest]) -> usize {
    requests.iter().filter(|r| r.is_pending()).count()
}

/// Split a doctor's requests into `(pending, history)`.
///
/// Requests whose patient account is missing are dropped from both lists.
pub fn split_by_status(requests: &[AccessRequest]) -> (Vec<&AccessRequest>, Vec<&AccessRequest>) {
    requests
        .iter()
        .filter(|r| r.has_patient_account())
        .partition(|r| r.is_pending())
}

/// Input for `createAccessRequest`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAccessRequest {
    pub patient_id: String,
    pub reason: String,
    pub message: String,
}

impl NewAccessRequest {
    /// Build a request from a free-text purpose. Blank purposes are rejected.
    pub fn from_purpose(patient_id: &str, purpose: &str) -> Option<Self> {
        let purpose = purpose.trim();
        if patient_id.is_empty() || purpose.is_empty() {
            return None;
        }
        Some(Self {
            patient_id: patient_id.to_string(),
            reason: purpose.to_string(),
            message: purpose.to_string(),
        })
    }
}

/// Input for `updateAccessRequest`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccessResponse {
    pub id: String,
    pub status: AccessStatus,
}

impl AccessResponse {
    pub fn new(id: &str, approved: bool) -> Self {
        Self {
            id: id.to_string(),
            status: if approved {
                AccessStatus::Approved
            } else {
                AccessStatus::Denied
            },
        }
    }
}

/// Acknowledgement returned by both access-request mutations.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AccessRequestAck {
    pub id: String,
    pub status: AccessStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCTOR_VIEW: &str = r#"[
        {"id":"r1","patientId":"p1","patient":{"user":{"name":"Alice","email":"a@x.org"}},"status":"PENDING","createdAt":"2024-03-01T10:00:00Z","reason":"Follow-up","message":"Follow-up"},
        {"id":"r2","patientId":"p2","patient":{"user":{"name":"Bob","email":"b@x.org"}},"status":"APPROVED","createdAt":"2024-02-01T10:00:00Z","reason":"Consult","message":null},
        {"id":"r3","patientId":"p3","patient":null,"status":"PENDING","createdAt":null,"reason":null,"message":null},
        {"id":"r4","patientId":"p4","patient":{"user":{"name":"Dan","email":"d@x.org"}},"status":"DENIED","createdAt":"bad","reason":"x","message":"x"}
    ]"#;

    #[test]
    fn test_split_by_status_drops_orphans() {
        let requests: Vec<AccessRequest> = serde_json::from_str(DOCTOR_VIEW).unwrap();
        assert_eq!(pending_count(&requests), 2);

        let (pending, history) = split_by_status(&requests);
        assert_eq!(pending.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["r1"]);
        assert_eq!(
            history.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["r2", "r4"]
        );
        assert_eq!(pending[0].patient_name(), Some("Alice"));
    }

    #[test]
    fn test_from_purpose() {
        let req = NewAccessRequest::from_purpose("p1", "  Second opinion  ").unwrap();
        assert_eq!(req.reason, "Second opinion");
        assert_eq!(req.message, "Second opinion");
        assert!(NewAccessRequest::from_purpose("p1", "   ").is_none());

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["patientId"], "p1");
    }

    #[test]
    fn test_access_response_status() {
        let approve = serde_json::to_value(AccessResponse::new("r1", true)).unwrap();
        assert_eq!(approve["status"], "APPROVED");
        let deny = serde_json::to_value(AccessResponse::new("r1", false)).unwrap();
        assert_eq!(deny["status"], "DENIED");
    }

    #[test]
    fn test_unknown_status() {
        let req: AccessRequest =
            serde_json::from_str(r#"{"id":"r9","status":"EXPIRED"}"#).unwrap();
        assert_eq!(req.status, AccessStatus::Unknown);
        assert!(!req.is_pending());
    }
}
