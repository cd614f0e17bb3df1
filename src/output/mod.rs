pub mod pdf_store;

pub use pdf_store::PdfStore;
