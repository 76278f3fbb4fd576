//! Onboarding profile form and the `data` payload sent with `setUserRole`.

use serde_json::{json, Value};

use super::user::Role;
use crate::dates::date_input_to_iso;

pub const BLOOD_TYPES: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// Raw form values exactly as typed. Every field starts empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub phone: String,
    pub date_of_birth: String,
    pub address: String,
    pub emergency_contact: String,
    pub blood_type: String,
    pub allergies: String,
    pub specialization: String,
    pub license_number: String,
    pub hospital: String,
}

fn opt(value: &str) -> Value {
    let value = value.trim();
    if value.is_empty() {
        Value::Null
    } else {
        Value::String(value.to_string())
    }
}

impl ProfileForm {
    /// Build the role-specific profile payload. Empty fields become `null`.
    pub fn profile_data(&self, role: Role) -> Value {
        match role {
            Role::Patient => json!({
                "name": opt(&self.name),
                "dateOfBirth": date_input_to_iso(&self.date_of_birth),
                "phoneNumber": opt(&self.phone),
                "address": opt(&self.address),
                "emergencyContact": opt(&self.emergency_contact),
                "bloodType": opt(&self.blood_type),
                "allergies": opt(&self.allergies),
            }),
            Role::Doctor => json!({
                "name": opt(&self.name),
                "phoneNumber": opt(&self.phone),
                "specialization": opt(&self.specialization),
                "licenseNumber": opt(&self.license_number),
                "hospital": opt(&self.hospital),
            }),
            Role::Unassigned | Role::Unknown => json!({}),
        }
    }

    /// First required field left blank for `role`, as a user-facing message.
    ///
    /// Patients must give their name. Doctors must give a specialization and
    /// a license number.
    pub fn missing_required(&self, role: Role) -> Option<&'static str> {
        let blank = |value: &str| value.trim().is_empty();
        match role {
            Role::Patient if blank(&self.name) => Some("Full name is required"),
            Role::Doctor if blank(&self.specialization) => Some("Specialization is required"),
            Role::Doctor if blank(&self.license_number) => Some("License number is required"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_payload() {
        let form = ProfileForm {
            name: "Alice".into(),
            date_of_birth: "1990-04-02".into(),
            blood_type: "O+".into(),
            phone: "  ".into(),
            ..Default::default()
        };
        let data = form.profile_data(Role::Patient);

        assert_eq!(data["dateOfBirth"], "1990-04-02T00:00:00.000Z");
        assert_eq!(data["bloodType"], "O+");
        assert_eq!(data["phoneNumber"], Value::Null);
        assert_eq!(data["allergies"], Value::Null);
        assert!(data.get("hospital").is_none());
    }

    #[test]
    fn test_doctor_payload() {
        let form = ProfileForm {
            specialization: "Cardiology".into(),
            hospital: "St. Mary".into(),
            date_of_birth: "1970-01-01".into(),
            ..Default::default()
        };
        let data = form.profile_data(Role::Doctor);

        assert_eq!(data["specialization"], "Cardiology");
        assert_eq!(data["licenseNumber"], Value::Null);
        assert!(data.get("dateOfBirth").is_none());
    }

    #[test]
    fn test_patient_requires_name() {
        let form = ProfileForm::default();
        assert_eq!(form.missing_required(Role::Patient), Some("Full name is required"));

        let named = ProfileForm { name: "Alice".into(), ..Default::default() };
        assert_eq!(named.missing_required(Role::Patient), None);
    }

    #[test]
    fn test_doctor_requires_specialization_and_license() {
        let form = ProfileForm { hospital: "St. Mary".into(), ..Default::default() };
        assert_eq!(form.missing_required(Role::Doctor), Some("Specialization is required"));

        let form = ProfileForm { specialization: "Cardiology".into(), license_number: "  ".into(), ..form };
        assert_eq!(form.missing_required(Role::Doctor), Some("License number is required"));

        let form = ProfileForm { license_number: "MD-1234".into(), ..form };
        assert_eq!(form.missing_required(Role::Doctor), None);
    }

    #[test]
    fn test_doctor_name_is_optional() {
        let form = ProfileForm {
            specialization: "Cardiology".into(),
            license_number: "MD-1234".into(),
            ..Default::default()
        };
        assert!(form.name.is_empty());
        assert_eq!(form.missing_required(Role::Doctor), None);
    }
}
