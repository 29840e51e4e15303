use std::sync::Arc;
use crate::books::factory::create_book_repository;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory::create_checkout_service;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

// AppState wires the services of one console session over a single shared shelf
#[derive(Clone)]
pub struct AppState {
    pub(crate) config: Configuration,
    pub(crate) catalog_service: Arc<dyn CatalogService>,
    pub(crate) checkout_service: Arc<dyn CheckoutService>,
}

impl AppState {
    pub fn new(config: &Configuration) -> AppState {
        let book_repository = create_book_repository();
        AppState {
            config: config.clone(),
            catalog_service: create_catalog_service(book_repository.clone()),
            checkout_service: create_checkout_service(book_repository),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum Outcome {
    // the request was understood but the catalog refused it
    Rejected,
    Failed,
}

pub(crate) type ConsoleError = (Outcome, String);

impl From<CommandError> for ConsoleError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::DuplicateKey { message } => {
                (Outcome::Rejected, message)
            }
            CommandError::NotFound { message } => {
                (Outcome::Rejected, message)
            }
            CommandError::InvalidState { message, .. } => {
                (Outcome::Rejected, message)
            }
            CommandError::Runtime { message, .. } => {
                (Outcome::Failed, format!("Something went wrong: {}", message))
            }
        }
    }
}
