/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic error types shared by the service transform crates.

use std::fmt;

/// Error metadata decoded from a service error response.
///
/// Services model most of their faults, but an error response may carry
/// a code no fault unmarshaller claims. In that case the transform
/// layer hands this metadata back so the caller still sees the `code`,
/// `message`, and `request_id` the service returned.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Metadata {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

impl Metadata {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Metadata {}

/// Builder for [`Metadata`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: Metadata,
}

impl Builder {
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn set_code(mut self, code: Option<String>) -> Self {
        self.inner.code = code;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn set_message(mut self, message: Option<String>) -> Self {
        self.inner.message = message;
        self
    }

    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    pub fn set_request_id(mut self, request_id: Option<String>) -> Self {
        self.inner.request_id = request_id;
        self
    }

    pub fn build(self) -> Metadata {
        self.inner
    }
}

/// A request could not be turned into a valid HTTP request.
///
/// Raised before any wire output is produced, e.g. when a member that
/// is bound to the URI is unset or empty.
#[derive(Debug)]
#[non_exhaustive]
pub enum BuildError {
    MissingField {
        field: &'static str,
        details: &'static str,
    },
    InvalidField {
        field: &'static str,
        details: String,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingField { field, details } => {
                write!(f, "`{}` was missing: {}", field, details)
            }
            BuildError::InvalidField { field, details } => {
                write!(f, "`{}` was invalid: {}", field, details)
            }
        }
    }
}

impl std::error::Error for BuildError {}

#[cfg(test)]
mod test {
    use super::Metadata;

    #[test]
    fn display_includes_populated_fields_only() {
        let err = Metadata::builder()
            .code("ThrottledClientException")
            .message("slow down")
            .build();
        let rendered = format!("{}", err);
        assert!(rendered.contains("ThrottledClientException"));
        assert!(rendered.contains("slow down"));
        assert!(!rendered.contains("request_id"));
    }
}
