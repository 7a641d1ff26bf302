//! Route targets of the demo.

mod feed;
mod gallery;
mod home;
mod not_found;

pub(crate) use feed::FeedPage;
pub(crate) use gallery::GalleryPage;
pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;
