pub mod indexmap;
pub mod path_ext;
