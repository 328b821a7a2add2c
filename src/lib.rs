pub mod date;
pub mod error;
pub mod export;
pub mod runner;
pub mod scraper;
pub mod tracing;

pub mod config {
    pub mod env_loader;
    pub mod model;
}

pub mod venues {
    pub mod kukoon;
    pub mod lagerhaus;
    pub mod model;
}
