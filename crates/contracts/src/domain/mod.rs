pub mod a001_media_upload;
