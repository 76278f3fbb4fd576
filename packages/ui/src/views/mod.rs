pub mod common;

mod loading;
pub use loading::{ConfigErrorView, LoadingScreen};

mod login;
pub use login::LoginView;

mod role_selection;
pub use role_selection::RoleSelectionView;

mod profile_setup;
pub use profile_setup::ProfileSetupView;

mod unauthorized;
pub use unauthorized::UnauthorizedView;

mod dashboard;
pub use dashboard::{DashboardHeader, DashboardView};

mod patients;
pub use patients::{PatientCard, PatientsView};

mod my_patients;
pub use my_patients::MyPatientsView;

mod access_requests;
pub use access_requests::AccessRequestsView;

mod patient_records;
pub use patient_records::{PatientRecordsView, RecordCard};

mod my_records;
pub use my_records::MyRecordsView;

mod access_control;
pub use access_control::AccessControlView;
