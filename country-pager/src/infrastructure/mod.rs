//! Infrastructure layer - utilities built on the domain services.

mod pages;

pub use pages::Pages;
