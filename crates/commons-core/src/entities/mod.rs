//! Entity structs for the commons content domain.
//!
//! The `Story` envelope mirrors what the CMS content-delivery API returns;
//! everything else is a normalized, presentation-ready record derived from a
//! story at request time. Nothing here is persisted locally.

mod announcement;
mod event;
mod forms;
mod gallery;
mod news;
mod story;
mod team;

pub use announcement::Announcement;
pub use event::Event;
pub use forms::{ContactSubmission, MembershipApplication};
pub use gallery::GalleryImage;
pub use news::NewsItem;
pub use story::Story;
pub use team::TeamMember;
