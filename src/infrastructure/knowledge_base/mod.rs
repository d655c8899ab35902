//! Knowledge base control plane adapters

pub mod aws;

pub use aws::AwsKnowledgeBaseControlPlane;
