//! Identity subsystem adapters

pub mod aws;

pub use aws::AwsIdentityClient;
