pub mod file_handler;

pub use file_handler::{
    __path_delete_file, __path_download_file, __path_get_file, __path_list_files,
    __path_replace_file, __path_update_file_metadata, __path_upload_file, delete_file,
    download_file, get_file, list_files, replace_file, update_file_metadata, upload_file,
};
