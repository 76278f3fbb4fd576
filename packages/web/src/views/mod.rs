mod login;
pub use login::Login;

mod onboarding;
pub use onboarding::{ProfileSetup, SelectRole};

mod unauthorized;
pub use unauthorized::Unauthorized;

mod dashboard;
pub use dashboard::Dashboard;

mod doctor;
pub use doctor::{AccessRequests, MyPatients, PatientRecords, Patients};

mod patient;
pub use patient::{AccessControl, MyRecords};
