pub mod image_io;
pub mod raw;
pub mod samples;
