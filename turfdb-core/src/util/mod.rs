pub mod map_url;
pub mod validate;
