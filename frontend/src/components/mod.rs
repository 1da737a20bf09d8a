pub mod dashboard;
pub mod landing;
pub mod submitted;
pub mod wizard;
