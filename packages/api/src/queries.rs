//! GraphQL operation documents sent by the portal.

/// A named GraphQL document. The name is what gets logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
}

pub const GET_ME: Operation = Operation {
    name: "GetMe",
    document: r#"
query GetMe {
  me {
    id
    email
    name
    avatar
    role
  }
}"#,
};

pub const CHECK_ACCESS: Operation = Operation {
    name: "CanCreateRecord",
    document: r#"
query CanCreateRecord($patientId: ID!) {
  canCreateRecord(patientId: $patientId)
}"#,
};

pub const GET_PATIENTS: Operation = Operation {
    name: "GetPatients",
    document: r#"
query GetPatients {
  patients {
    id
    user {
      name
      email
    }
    dateOfBirth
    phoneNumber
  }
}"#,
};

pub const GET_MY_PATIENTS: Operation = Operation {
    name: "GetMyPatients",
    document: r#"
query GetMyPatients {
  myPatients {
    id
    user {
      name
      email
    }
    dateOfBirth
    phoneNumber
  }
}"#,
};

pub const GET_ACCESS_REQUESTS: Operation = Operation {
    name: "GetAccessRequests",
    document: r#"
query GetAccessRequests {
  accessRequests {
    id
    patientId
    patient {
      user {
        name
        email
      }
    }
    status
    createdAt
    reason
    message
  }
}"#,
};

pub const GET_PENDING_REQUESTS: Operation = Operation {
    name: "GetPendingRequests",
    document: r#"
query GetPendingRequests {
  pendingRequests {
    id
    doctorId
    doctor {
      user {
        name
        email
      }
    }
    status
    createdAt
    reason
  }
}"#,
};

pub const GET_PATIENT_RECORDS: Operation = Operation {
    name: "GetPatientRecords",
    document: r#"
query GetPatientRecords($patientId: ID!) {
  patientRecords(patientId: $patientId) {
    id
    title
    content
    diagnosis
    treatment
    createdAt
    doctor {
      user {
        name
      }
    }
  }
}"#,
};

pub const GET_MY_RECORDS: Operation = Operation {
    name: "GetMyRecords",
    document: r#"
query GetMyRecords {
  myRecords {
    id
    title
    content
    diagnosis
    treatment
    createdAt
    doctor {
      user {
        name
      }
    }
  }
}"#,
};

pub const CREATE_ACCESS_REQUEST: Operation = Operation {
    name: "CreateAccessRequest",
    document: r#"
mutation CreateAccessRequest($input: CreateAccessRequestInput!) {
  createAccessRequest(input: $input) {
    id
    status
  }
}"#,
};

pub const CREATE_MEDICAL_RECORD: Operation = Operation {
    name: "CreateMedicalRecord",
    document: r#"
mutation CreateMedicalRecord($input: CreateRecordInput!) {
  createRecord(input: $input) {
    id
    title
    content
    diagnosis
    treatment
    patientId
  }
}"#,
};

pub const RESPOND_TO_ACCESS_REQUEST: Operation = Operation {
    name: "UpdateAccessRequest",
    document: r#"
mutation UpdateAccessRequest($input: UpdateAccessRequestInput!) {
  updateAccessRequest(input: $input) {
    id
    status
  }
}"#,
};

pub const SET_USER_ROLE: Operation = Operation {
    name: "SetUserRole",
    document: r#"
mutation SetUserRole($role: Role!, $data: JSON) {
  setUserRole(role: $role, data: $data)
}"#,
};
