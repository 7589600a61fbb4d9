//! Generic unary transport over tonic.
//!
//! Every module client is generic over [`Rpc`], a single `request` method
//! taking the fully qualified service name, the method name and an encoded
//! protobuf payload. [`GrpcTransport`] is the production implementation;
//! tests substitute an in-memory mock.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::{Buf, BufMut, Bytes};
use http::uri::PathAndQuery;
use tonic::codec::{Codec, DecodeBuf, Decoder, EncodeBuf, Encoder};
use tonic::transport::{Channel, Endpoint};

use crate::error::{ClientError, ClientResult};

/// A unary request dispatcher addressed by service and method name.
#[async_trait]
pub trait Rpc: Send + Sync {
    /// Send `payload` to `/{service}/{method}` and return the raw response body.
    async fn request(&self, service: &str, method: &str, payload: Bytes) -> ClientResult<Bytes>;
}

#[async_trait]
impl<T: Rpc + ?Sized> Rpc for Arc<T> {
    async fn request(&self, service: &str, method: &str, payload: Bytes) -> ClientResult<Bytes> {
        (**self).request(service, method, payload).await
    }
}

/// Configuration for the gRPC transport.
#[derive(Debug, Clone)]
pub struct GrpcTransportConfig {
    /// Endpoint URI, e.g. `http://127.0.0.1:9090`.
    pub endpoint: String,
    /// Timeout for establishing the connection.
    pub connect_timeout: Duration,
    /// Timeout applied to each unary call.
    pub request_timeout: Duration,
    /// Maximum size of an encoded request or response message.
    pub max_message_size: usize,
}

impl Default for GrpcTransportConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:9090".to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(15),
            max_message_size: 4 * 1024 * 1024, // 4MB
        }
    }
}

/// Tonic-backed [`Rpc`] implementation over a shared channel.
///
/// Channels are cheap to clone; one transport can back any number of module
/// clients concurrently.
#[derive(Clone)]
pub struct GrpcTransport {
    channel: Channel,
    max_message_size: usize,
}

impl GrpcTransport {
    /// Connect to the configured endpoint.
    pub async fn connect(config: GrpcTransportConfig) -> ClientResult<Self> {
        let endpoint = Endpoint::from_shared(config.endpoint.clone())
            .map_err(|e| ClientError::InvalidEndpoint(e.to_string()))?
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout);
        let channel = endpoint.connect().await?;
        tracing::info!(endpoint = %config.endpoint, "connected to grpc endpoint");
        Ok(Self {
            channel,
            max_message_size: config.max_message_size,
        })
    }

    /// Wrap an already established channel, using default message size limits.
    pub fn with_channel(channel: Channel) -> Self {
        Self {
            channel,
            max_message_size: GrpcTransportConfig::default().max_message_size,
        }
    }
}

#[async_trait]
impl Rpc for GrpcTransport {
    async fn request(&self, service: &str, method: &str, payload: Bytes) -> ClientResult<Bytes> {
        let path = PathAndQuery::from_maybe_shared(format!("/{service}/{method}"))
            .map_err(|e| ClientError::InvalidEndpoint(e.to_string()))?;

        let mut grpc = tonic::client::Grpc::new(self.channel.clone())
            .max_decoding_message_size(self.max_message_size)
            .max_encoding_message_size(self.max_message_size);
        grpc.ready().await.map_err(ClientError::Transport)?;

        tracing::debug!(service, method, len = payload.len(), "unary call");
        let response = grpc
            .unary(tonic::Request::new(payload), path, RawCodec)
            .await?;
        Ok(response.into_inner())
    }
}

/// Encode a request and dispatch it through `rpc`, decoding the typed response.
pub(crate) async fn unary<R, Req, Resp>(
    rpc: &R,
    service: &str,
    method: &str,
    request: &Req,
) -> ClientResult<Resp>
where
    R: Rpc + ?Sized,
    Req: prost::Message,
    Resp: prost::Message + Default,
{
    let payload = Bytes::from(request.encode_to_vec());
    let body = rpc.request(service, method, payload).await?;
    Ok(Resp::decode(body)?)
}

/// Pass-through codec: the payload is already encoded protobuf.
#[derive(Debug, Clone, Default)]
struct RawCodec;

impl Codec for RawCodec {
    type Encode = Bytes;
    type Decode = Bytes;
    type Encoder = RawEncoder;
    type Decoder = RawDecoder;

    fn encoder(&mut self) -> Self::Encoder {
        RawEncoder
    }

    fn decoder(&mut self) -> Self::Decoder {
        RawDecoder
    }
}

#[derive(Debug)]
struct RawEncoder;

impl Encoder for RawEncoder {
    type Item = Bytes;
    type Error = tonic::Status;

    fn encode(&mut self, item: Bytes, dst: &mut EncodeBuf<'_>) -> Result<(), Self::Error> {
        dst.put(item);
        Ok(())
    }
}

#[derive(Debug)]
struct RawDecoder;

impl Decoder for RawDecoder {
    type Item = Bytes;
    type Error = tonic::Status;

    fn decode(&mut self, src: &mut DecodeBuf<'_>) -> Result<Option<Self::Item>, Self::Error> {
        Ok(Some(src.copy_to_bytes(src.remaining())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_are_sane() {
        let config = GrpcTransportConfig::default();
        assert_eq!(config.endpoint, "http://127.0.0.1:9090");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.max_message_size, 4 * 1024 * 1024);
    }
}
