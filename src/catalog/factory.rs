use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;

pub(crate) fn create_catalog_service(book_repository: Arc<dyn BookRepository>) -> Arc<dyn CatalogService> {
    Arc::new(CatalogServiceImpl::new(book_repository))
}
