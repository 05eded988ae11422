/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Modeled service faults and the error type returned by response
//! unmarshalling.
//!
//! Several SES faults carry an extra service-specific member (the name
//! of the rule or rule set, the offending bucket or topic) alongside
//! the error message; the fault unmarshallers extract those by path
//! from the decoded `Error` element.

use std::fmt;

macro_rules! ses_exception {
    ($(#[$docs:meta])* $name:ident { $($field:ident),* }) => {
        $(#[$docs])*
        #[non_exhaustive]
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name {
            $(pub $field: Option<String>,)*
            pub message: Option<String>,
        }

        impl $name {
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
    };
}

ses_exception!(
    /// A resource with the given name already exists.
    AlreadyExistsException { name }
);
ses_exception!(
    /// The delete operation could not be completed.
    CannotDeleteException { name }
);
ses_exception!(
    /// The configuration set does not exist.
    ConfigurationSetDoesNotExistException { configuration_set_name }
);
ses_exception!(
    /// The S3 bucket in a receipt rule is invalid or unwritable by SES.
    InvalidS3ConfigurationException { bucket }
);
ses_exception!(
    /// The SNS topic in a receipt rule is invalid or unpublishable by SES.
    InvalidSnsTopicException { topic }
);
ses_exception!(
    /// A per-account resource or sending limit was exceeded.
    LimitExceededException {}
);
ses_exception!(
    /// The sender address or sending attempt was rejected.
    MessageRejectedException {}
);
ses_exception!(
    /// The MAIL FROM domain is not verified for the sending identity.
    MailFromDomainNotVerifiedException {}
);
ses_exception!(
    /// The named receipt rule does not exist.
    RuleDoesNotExistException { name }
);
ses_exception!(
    /// The named receipt rule set does not exist.
    RuleSetDoesNotExistException { name }
);

/// All errors that response unmarshalling can produce.
///
/// Fault responses are matched against one candidate unmarshaller per
/// modeled exception; a response that no candidate claims surfaces as
/// [`Error::Unhandled`] with whatever metadata the service returned.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    AlreadyExistsException(AlreadyExistsException),
    CannotDeleteException(CannotDeleteException),
    ConfigurationSetDoesNotExistException(ConfigurationSetDoesNotExistException),
    InvalidS3ConfigurationException(InvalidS3ConfigurationException),
    InvalidSnsTopicException(InvalidSnsTopicException),
    LimitExceededException(LimitExceededException),
    MessageRejectedException(MessageRejectedException),
    MailFromDomainNotVerifiedException(MailFromDomainNotVerifiedException),
    RuleDoesNotExistException(RuleDoesNotExistException),
    RuleSetDoesNotExistException(RuleSetDoesNotExistException),
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
            Error::AlreadyExistsException(inner) => inner.fmt(f),
            Error::CannotDeleteException(inner) => inner.fmt(f),
            Error::ConfigurationSetDoesNotExistException(inner) => inner.fmt(f),
            Error::InvalidS3ConfigurationException(inner) => inner.fmt(f),
            Error::InvalidSnsTopicException(inner) => inner.fmt(f),
            Error::LimitExceededException(inner) => inner.fmt(f),
            Error::MessageRejectedException(inner) => inner.fmt(f),
            Error::MailFromDomainNotVerifiedException(inner) => inner.fmt(f),
            Error::RuleDoesNotExistException(inner) => inner.fmt(f),
            Error::RuleSetDoesNotExistException(inner) => inner.fmt(f),
            Error::Unhandled(metadata) => metadata.fmt(f),
            Error::Unmarshalling(err) => write!(f, "failed to unmarshal response: {}", err),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::RuleSetDoesNotExistException;

    #[test]
    fn display_carries_the_message() {
        let err = RuleSetDoesNotExistException {
            name: Some("my-rules".to_string()),
            message: Some("Rule set does not exist: my-rules".to_string()),
        };
        assert_eq!(
            "RuleSetDoesNotExistException: Rule set does not exist: my-rules",
            format!("{}", err)
        );
    }
}
