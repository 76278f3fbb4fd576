use serde::{Deserialize, Serialize};

/// Name and email of the account behind a patient or doctor profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Person {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A patient or doctor profile as nested in query results (`patient { user { .. } }`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Party {
    #[serde(default)]
    pub user: Option<Person>,
}

impl Party {
    pub fn name(&self) -> Option<&str> {
        self.user.as_ref()?.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref()?.email.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    #[serde(default)]
    pub user: Option<Person>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl Patient {
    pub fn name(&self) -> Option<&str> {
        self.user.as_ref()?.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref()?.email.as_deref()
    }

    /// First letter of the name for the avatar bubble.
    pub fn initial(&self) -> String {
        self.name()
            .and_then(|n| n.chars().next())
            .map(|c| c.to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    /// Case-insensitive substring match on name or email.
    ///
    /// Patients without an attached account never match, even for an empty term.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        let hit = |field: Option<&str>| field.is_some_and(|v| v.to_lowercase().contains(&term));
        hit(self.name()) || hit(self.email())
    }
}

/// Filter a patient list by search term, keeping order.
pub fn search_patients<'a>(patients: &'a [Patient], term: &str) -> Vec<&'a Patient> {
    patients.iter().filter(|p| p.matches_search(term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(id: &str, name: Option<&str>, email: Option<&str>) -> Patient {
        Patient {
            id: id.to_string(),
            user: Some(Person {
                name: name.map(str::to_string),
                email: email.map(str::to_string),
            }),
            date_of_birth: None,
            phone_number: None,
        }
    }

    #[test]
    fn test_search_matches_name_or_email() {
        let patients = vec![
            patient("1", Some("Alice Smith"), Some("alice@example.org")),
            patient("2", Some("Bob Jones"), Some("bjones@clinic.net")),
        ];

        let hits = search_patients(&patients, "SMITH");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        let hits = search_patients(&patients, "clinic");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");

        assert_eq!(search_patients(&patients, "").len(), 2);
        assert!(search_patients(&patients, "zzz").is_empty());
    }

    #[test]
    fn test_patient_without_account_never_matches() {
        let orphan = Patient {
            id: "3".to_string(),
            user: None,
            date_of_birth: None,
            phone_number: None,
        };
        assert!(!orphan.matches_search(""));
        assert_eq!(orphan.initial(), "?");
    }

    #[test]
    fn test_deserialize_patient() {
        let p: Patient = serde_json::from_str(
            r#"{"id":"p1","user":{"name":"Carol","email":"c@example.org"},"dateOfBirth":"1990-04-02","phoneNumber":null}"#,
        )
        .unwrap();
        assert_eq!(p.name(), Some("Carol"));
        assert_eq!(p.initial(), "C");
        assert_eq!(p.date_of_birth.as_deref(), Some("1990-04-02"));
        assert!(p.phone_number.is_none());
    }
}
