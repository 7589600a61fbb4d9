//! gRPC clients for the Sei chain modules.
//!
//! Each module gets a query client and a msg client, both generic over the
//! [`Rpc`] transport trait so they can run against a live [`GrpcTransport`]
//! or an in-memory mock in tests.

pub mod dex;
pub mod error;
pub mod oracle;
pub mod tokenfactory;
pub mod transport;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::{ClientError, ClientResult};
pub use transport::{GrpcTransport, GrpcTransportConfig, Rpc};
