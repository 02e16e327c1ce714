//! Response hardening for the shared gateway surface

pub mod headers;
