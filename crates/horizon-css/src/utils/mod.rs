//! Value helpers: colors, numbers, rectangles and URLs.

pub mod color_helper;
pub mod data_url;
pub mod number_helper;
pub mod rect_helper;
pub mod url_helper;
