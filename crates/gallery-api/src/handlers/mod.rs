pub mod image_list;
pub mod image_upload;
pub mod info;
