use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    InvalidState {
        message: String,
        reason_code: Option<String>,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::InvalidState { message, reason_code } => {
                CommandError::InvalidState { message, reason_code }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::DuplicateKey { message: "test".to_string() };
        let _ = CommandError::NotFound { message: "test".to_string() };
        let _ = CommandError::InvalidState { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Runtime { message: "test".to_string(), reason_code: None };
    }

    #[tokio::test]
    async fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::duplicate_key("test")), CommandError::DuplicateKey { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_found("test")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::invalid_state("test", None)), CommandError::InvalidState { .. }));
        assert!(matches!(CommandError::from(LibraryError::runtime("test", None)), CommandError::Runtime { .. }));
    }
}
