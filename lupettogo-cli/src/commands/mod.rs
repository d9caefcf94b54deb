//! CLI command implementations

pub mod doctor;
pub mod generate;
pub mod init;
pub mod version;

pub use doctor::DoctorCommand;
pub use generate::GenerateCommand;
pub use init::InitCommand;
