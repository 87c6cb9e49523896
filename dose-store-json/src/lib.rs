mod document;
mod factory;
mod repository;

pub use factory::JsonRepositoryFactory;
pub use repository::JsonRepository;
