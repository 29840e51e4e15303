use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;

pub(crate) fn create_checkout_service(book_repository: Arc<dyn BookRepository>) -> Arc<dyn CheckoutService> {
    Arc::new(CheckoutServiceImpl::new(book_repository))
}
