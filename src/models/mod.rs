pub mod book;
pub mod provider;
pub mod responses;
