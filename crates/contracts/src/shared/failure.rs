use crate::shared::validation::FieldErrors;
use thiserror::Error;

/// Uniform failure shape returned by every collection call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Failure {
    /// No response was received (offline, CORS, DNS, aborted request).
    #[error("Сервер недоступен: {0}")]
    NetworkUnavailable(String),

    #[error("Нет доступа")]
    Unauthorized,

    #[error("Ошибка проверки данных: {0}")]
    Validation(FieldErrors),

    #[error("Запись не найдена")]
    NotFound,

    #[error("Ошибка сервера: {0}")]
    ServerError(String),
}

/// Where a failure originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureOrigin {
    /// No response at all
    Transport,
    /// A response arrived but reported `success: false` or an error status
    Application,
    /// Rejected on the client before dispatch
    Validation,
}

impl Failure {
    /// Maps an HTTP (or in-band envelope) status code to a failure.
    ///
    /// `field_errors` are only used for 400/422; when absent the message is
    /// recorded as a form-level error.
    pub fn from_status(status: u16, message: Option<String>, field_errors: Option<FieldErrors>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP {}", status));
        match status {
            401 | 403 => Failure::Unauthorized,
            404 => Failure::NotFound,
            400 | 422 => match field_errors {
                Some(errors) if !errors.is_empty() => Failure::Validation(errors),
                _ => Failure::Validation(FieldErrors::form(message)),
            },
            _ => Failure::ServerError(message),
        }
    }

    pub fn network(err: impl std::fmt::Display) -> Self {
        Failure::NetworkUnavailable(err.to_string())
    }

    pub fn origin(&self) -> FailureOrigin {
        match self {
            Failure::NetworkUnavailable(_) => FailureOrigin::Transport,
            Failure::Unauthorized | Failure::NotFound | Failure::ServerError(_) => {
                FailureOrigin::Application
            }
            Failure::Validation(_) => FailureOrigin::Validation,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Failure::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for Failure {
    fn from(errors: FieldErrors) -> Self {
        Failure::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::FORM_LEVEL;

    #[test]
    fn test_status_mapping() {
        assert_eq!(Failure::from_status(401, None, None), Failure::Unauthorized);
        assert_eq!(Failure::from_status(403, None, None), Failure::Unauthorized);
        assert_eq!(Failure::from_status(404, Some("gone".into()), None), Failure::NotFound);
        assert_eq!(
            Failure::from_status(500, Some("boom".into()), None),
            Failure::ServerError("boom".into())
        );
        assert_eq!(
            Failure::from_status(502, Some("  ".into()), None),
            Failure::ServerError("HTTP 502".into())
        );
    }

    #[test]
    fn test_validation_status_keeps_field_errors() {
        let mut errors = FieldErrors::new();
        errors.add("name", "required");
        let failure = Failure::from_status(422, Some("invalid".into()), Some(errors.clone()));
        assert_eq!(failure, Failure::Validation(errors));

        let failure = Failure::from_status(400, Some("bad input".into()), None);
        let errors = failure.field_errors().expect("validation failure");
        assert_eq!(errors.get(FORM_LEVEL), Some("bad input"));
    }

    #[test]
    fn test_origin() {
        assert_eq!(Failure::network("offline").origin(), FailureOrigin::Transport);
        assert_eq!(Failure::NotFound.origin(), FailureOrigin::Application);
        assert_eq!(
            Failure::Validation(FieldErrors::form("x")).origin(),
            FailureOrigin::Validation
        );
    }
}
