//! XML tree navigation and flattening utilities.

mod utils;

pub use utils::{
    attr_text, child_text, direct_text, element_children, find_by_path, find_child,
    find_children, has_tag, mixed_text, tag_name,
};
