mod home;
mod status;

pub use home::{GalleryUnavailable, Home};
pub use status::{error_page, LoadingView, NotFound};
