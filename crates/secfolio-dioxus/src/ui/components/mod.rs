pub mod blog_list;
pub mod code_block;
pub mod content_unit;
pub mod heading;
pub mod home;
pub mod nav;
pub mod paragraph;
pub mod post_body;
pub mod post_card;
pub mod post_detail;
pub mod search_box;
pub mod showcase;
pub mod tag_filter;

pub use blog_list::BlogList;
pub use home::Home;
pub use nav::Nav;
pub use post_detail::PostDetail;
