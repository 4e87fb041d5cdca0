//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod verify;

pub(crate) use build::BuildArgs;
pub(crate) use verify::VerifyArgs;
