//! Access token requests. The server mails a code to the address; the code is
//! then used as the bearer token or to revoke it.

use serde::{Deserialize, Serialize};

use crate::envelope::{ResourceType, WriteAttributes};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenAttributes {
    pub email_address: String,
}

impl AccessTokenAttributes {
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
        }
    }
}

impl WriteAttributes for AccessTokenAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::AccessTokens;
}

/// Revocation payload. Sent under `source`, or enveloped for the POST form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenDeleteAttributes {
    pub code: String,
    pub email_address: String,
}

impl AccessTokenDeleteAttributes {
    pub fn new(code: impl Into<String>, email_address: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            email_address: email_address.into(),
        }
    }
}

impl WriteAttributes for AccessTokenDeleteAttributes {
    const RESOURCE_TYPE: ResourceType = ResourceType::AccessTokens;
}
