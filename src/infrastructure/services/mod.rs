//! Provisioning services orchestrating the external subsystems

pub mod provisioner;
pub mod role_ensurer;

pub use provisioner::{ProvisionOutcome, ProvisionRequest, Provisioner};
pub use role_ensurer::RoleEnsurer;
