pub mod books;
pub mod query;
