//! Response format trait and implementations.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Strategy for turning a successful response body into a value.
///
/// ## Examples
///
/// ```rust,ignore
/// use scheduler0_api::response::{Envelope, JsonFormat, NoContent};
///
/// let job = client.execute::<JsonFormat<Envelope<Job>>>(request).await?;
/// client.execute::<NoContent>(delete_request).await?;
/// ```
pub trait ResponseFormat {
    /// The decoded value.
    type Output;

    /// Returns `false` when the body should not be read at all.
    fn reads_body() -> bool {
        true
    }

    /// Decodes a response body.
    fn parse(body: bytes::Bytes) -> Result<Self::Output, ClientError>;
}

/// JSON response decoded into `T`.
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat<T>(PhantomData<T>);

impl<T: DeserializeOwned> ResponseFormat for JsonFormat<T> {
    type Output = T;

    fn parse(body: bytes::Bytes) -> Result<Self::Output, ClientError> {
        serde_json::from_slice(&body).map_err(ClientError::Decode)
    }
}

/// Side-effect call; any body (including none) is accepted and discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContent;

impl ResponseFormat for NoContent {
    type Output = ();

    fn reads_body() -> bool {
        false
    }

    fn parse(_body: bytes::Bytes) -> Result<Self::Output, ClientError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Item {
        id: u64,
    }

    #[test]
    fn test_json_format_parse() {
        let body = bytes::Bytes::from_static(br#"{"id": 3}"#);
        let item = JsonFormat::<Item>::parse(body).unwrap();
        assert_eq!(item, Item { id: 3 });
    }

    #[test]
    fn test_json_format_invalid_is_decode_error() {
        let body = bytes::Bytes::from_static(b"{not valid json");
        let err = JsonFormat::<Item>::parse(body).unwrap_err();
        assert!(err.is_decode_error());
    }

    #[test]
    fn test_json_format_empty_body_is_decode_error() {
        let err = JsonFormat::<Item>::parse(bytes::Bytes::new()).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_no_content_skips_body() {
        assert!(!NoContent::reads_body());
        assert!(JsonFormat::<Item>::reads_body());
        NoContent::parse(bytes::Bytes::from_static(b"anything")).unwrap();
    }
}
