//! Route segments carrying serialized state.
//!
//! The value is written as CBOR and then URL-safe base64, so any serde type
//! can travel in a path segment.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize, de::DeserializeOwned};


#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

#[derive(Debug)]
pub enum UrlParamError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl Display for UrlParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "route segment is not base64: {}", err),
            Self::Cbor(err) => write!(f, "route segment does not decode: {}", err),
        }
    }
}

fn encode_segment<T: Serialize>(value: &T) -> Option<String> {
    let mut bytes = Vec::new();
    ciborium::into_writer(value, &mut bytes).ok()?;
    Some(URL_SAFE.encode(bytes))
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, UrlParamError> {
    let bytes = URL_SAFE.decode(segment.as_bytes()).map_err(UrlParamError::Base64)?;
    ciborium::from_reader(bytes.as_slice()).map_err(UrlParamError::Cbor)
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match encode_segment(&self.0) {
            Some(segment) => f.write_str(&segment),
            None => Ok(()),
        }
    }
}

impl<T: DeserializeOwned> FromStr for UrlParam<T> {
    type Err = UrlParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_segment(s).map(UrlParam)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_definitions::document_request::DocumentRequest;

    #[test]
    fn segment_is_path_safe() {
        let param = UrlParam(DocumentRequest { file_name: "discharge summary/2024?.pdf".to_string() });
        let segment = param.to_string();
        assert!(!segment.contains('/') && !segment.contains('?') && !segment.contains(' '));
        let back: UrlParam<DocumentRequest> = segment.parse().unwrap();
        assert_eq!(back, param);
    }

    #[test]
    fn garbage_segment_is_rejected() {
        assert!(matches!("%%%".parse::<UrlParam<DocumentRequest>>(), Err(UrlParamError::Base64(_))));
    }
}
