/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Modeled service faults and the error type returned by response
//! unmarshalling.

use crate::model::ErrorCode;
use std::fmt;

macro_rules! modeled_exception {
    ($(#[$docs:meta])* $name:ident) => {
        $(#[$docs])*
        #[non_exhaustive]
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub code: Option<ErrorCode>,
            pub message: Option<String>,
        }

        impl $name {
            pub fn builder() -> ExceptionBuilder<$name> {
                ExceptionBuilder::default()
            }

            pub fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))?;
                if let Some(message) = &self.message {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
        }

        impl std::error::Error for $name {}

        impl From<ExceptionBuilder<$name>> for $name {
            fn from(builder: ExceptionBuilder<$name>) -> Self {
                $name {
                    code: builder.code,
                    message: builder.message,
                }
            }
        }
    };
}

/// Shared builder for the modeled faults, which all carry the same
/// `code` + `message` shape.
#[derive(Debug)]
pub struct ExceptionBuilder<T> {
    code: Option<ErrorCode>,
    message: Option<String>,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for ExceptionBuilder<T> {
    fn default() -> Self {
        ExceptionBuilder {
            code: None,
            message: None,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T: From<ExceptionBuilder<T>>> ExceptionBuilder<T> {
    pub fn code(mut self, inp: ErrorCode) -> Self {
        self.code = Some(inp);
        self
    }
    pub fn set_code(mut self, inp: Option<ErrorCode>) -> Self {
        self.code = inp;
        self
    }
    pub fn message(mut self, inp: impl Into<String>) -> Self {
        self.message = Some(inp.into());
        self
    }
    pub fn set_message(mut self, inp: Option<String>) -> Self {
        self.message = inp;
        self
    }
    pub fn build(self) -> T {
        T::from(self)
    }
}

modeled_exception!(
    /// The input parameters don't match the service's restrictions.
    BadRequestException
);
modeled_exception!(
    /// The request could not be processed because of conflict in the current state of the resource.
    ConflictException
);
modeled_exception!(
    /// The client is permanently forbidden from making the request.
    ForbiddenException
);
modeled_exception!(
    /// One or more of the resources in the request does not exist in the system.
    NotFoundException
);
modeled_exception!(
    /// The request exceeds the resource limit.
    ResourceLimitExceededException
);
modeled_exception!(
    /// The service encountered an unexpected error.
    ServiceFailureException
);
modeled_exception!(
    /// The service is currently unavailable.
    ServiceUnavailableException
);
modeled_exception!(
    /// The client exceeded its request rate limit.
    ThrottledClientException
);
modeled_exception!(
    /// The client is not currently authorized to make the request.
    UnauthorizedClientException
);

/// All errors that response unmarshalling can produce.
///
/// Fault responses are matched against one candidate unmarshaller per
/// modeled exception; a response that no candidate claims surfaces as
/// [`Error::Unhandled`] with whatever metadata the service returned.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    BadRequestException(BadRequestException),
    ConflictException(ConflictException),
    ForbiddenException(ForbiddenException),
    NotFoundException(NotFoundException),
    ResourceLimitExceededException(ResourceLimitExceededException),
    ServiceFailureException(ServiceFailureException),
    ServiceUnavailableException(ServiceUnavailableException),
    ThrottledClientException(ThrottledClientException),
    UnauthorizedClientException(UnauthorizedClientException),
    /// An error response whose code matched no modeled fault.
    Unhandled(wire_types::error::Metadata),
    /// The response body could not be decoded at all.
    Unmarshalling(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    pub(crate) fn unmarshalling(
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::Unmarshalling(Box::new(err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadRequestException(inner) => inner.fmt(f),
            Error::ConflictException(inner) => inner.fmt(f),
            Error::ForbiddenException(inner) => inner.fmt(f),
            Error::NotFoundException(inner) => inner.fmt(f),
            Error::ResourceLimitExceededException(inner) => inner.fmt(f),
            Error::ServiceFailureException(inner) => inner.fmt(f),
            Error::ServiceUnavailableException(inner) => inner.fmt(f),
            Error::ThrottledClientException(inner) => inner.fmt(f),
            Error::UnauthorizedClientException(inner) => inner.fmt(f),
            Error::Unhandled(metadata) => metadata.fmt(f),
            Error::Unmarshalling(err) => write!(f, "failed to unmarshal response: {}", err),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::{BadRequestException, Error};
    use crate::model::ErrorCode;

    #[test]
    fn display_carries_the_message() {
        let err = BadRequestException::builder()
            .code(ErrorCode::BadRequest)
            .message("1 validation error detected")
            .build();
        assert_eq!(
            "BadRequestException: 1 validation error detected",
            format!("{}", err)
        );
        assert!(format!("{}", Error::BadRequestException(err)).contains("validation"));
    }
}
