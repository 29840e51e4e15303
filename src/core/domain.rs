// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

pub const DEFAULT_LIBRARY_NAME: &str = "Community Library";

// Configuration abstracts config options for the library console
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub library_name: String,
}

impl Configuration {
    pub fn new(library_name: &str) -> Self {
        Configuration {
            library_name: library_name.to_string(),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_LIBRARY_NAME)
    }
}
