use async_trait::async_trait;
use std::collections::HashMap;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, rejecting duplicate ids
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity if its version matches the stored one
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // find entities matching every predicate entry, in insertion order
    async fn query(&self, predicate: &HashMap::<String, String>) -> LibraryResult<Vec<Entity>>;

    // number of stored entities
    async fn count(&self) -> LibraryResult<usize>;
}
