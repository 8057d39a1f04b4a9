//! Repository seam with Postgres and in-memory implementations, plus payload validation.

mod crud;
mod memory;
mod repository;
mod validation;
pub use crud::CrudService;
pub use memory::MemoryRepository;
pub use repository::Repository;
pub use validation::RequestValidator;
