//! Shared AWS SDK error classification

use aws_sdk_iam::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

use crate::domain::error::ProvisionError;

/// Map an SDK error onto the provisioning error taxonomy.
///
/// Transport-level failures (dispatch, timeout) are transient; service errors
/// are classified by their error metadata code so only the specific
/// recoverable conditions take the recoverable kinds.
pub(crate) fn classify_sdk_error<E, R>(operation: &str, err: SdkError<E, R>) -> ProvisionError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug + 'static,
{
    let code = err.code().map(str::to_owned);
    let transport_failure = matches!(err, SdkError::TimeoutError(_) | SdkError::DispatchFailure(_));
    let message = format!("{operation}: {}", DisplayErrorContext(err));

    if transport_failure {
        return ProvisionError::transient(message);
    }

    classify_code(code.as_deref(), message)
}

fn classify_code(code: Option<&str>, message: String) -> ProvisionError {
    match code {
        Some("EntityAlreadyExists") | Some("ConflictException") => {
            ProvisionError::already_exists(message)
        }
        Some("NoSuchEntity") | Some("ResourceNotFoundException") => {
            ProvisionError::not_found(message)
        }
        Some("AccessDenied")
        | Some("AccessDeniedException")
        | Some("InvalidClientTokenId")
        | Some("ExpiredToken") => ProvisionError::authorization(message),
        Some("ValidationError") | Some("ValidationException") | Some("MalformedPolicyDocument") => {
            ProvisionError::validation(message)
        }
        Some("Throttling")
        | Some("ThrottlingException")
        | Some("RequestTimeout")
        | Some("ServiceUnavailable")
        | Some("ServiceUnavailableException") => ProvisionError::transient(message),
        _ => ProvisionError::service(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_codes() {
        let err = classify_code(Some("EntityAlreadyExists"), "create_role: taken".into());
        assert!(err.is_already_exists());

        let err = classify_code(Some("ConflictException"), "conflict".into());
        assert!(err.is_already_exists());
    }

    #[test]
    fn test_terminal_codes() {
        assert!(matches!(
            classify_code(Some("NoSuchEntity"), "gone".into()),
            ProvisionError::NotFound { .. }
        ));
        assert!(matches!(
            classify_code(Some("AccessDeniedException"), "denied".into()),
            ProvisionError::Authorization { .. }
        ));
        assert!(matches!(
            classify_code(Some("MalformedPolicyDocument"), "bad json".into()),
            ProvisionError::Validation { .. }
        ));
    }

    #[test]
    fn test_retryable_codes() {
        assert!(classify_code(Some("ThrottlingException"), "slow down".into()).is_retryable());
        assert!(classify_code(Some("InternalFailure"), "oops".into()).is_retryable());
        assert!(classify_code(None, "no code".into()).is_retryable());
    }
}
