mod file_dto;

pub use file_dto::{
    FileListResponseDto, FileResponseDto, ListFilesQuery, ReplaceFileDto, UpdateFileDto,
    UploadFileDto,
};
