pub mod search;
pub mod palette;
pub mod chat;
pub mod landing;
