pub mod loaders;
pub mod page_job;

pub use loaders::load_page_jobs;
pub use page_job::{PageJob, PageJobList};
