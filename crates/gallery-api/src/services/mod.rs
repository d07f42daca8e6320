pub mod listing;
pub mod upload;

pub use listing::ImageListingService;
pub use upload::ImageUploadService;
