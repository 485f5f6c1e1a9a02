pub mod color;
pub mod consts;
pub mod drift;
pub mod error;
pub mod frame;
pub mod io;
pub mod pipeline;
pub mod preview;
pub mod quality;
pub mod region;
pub mod selection;
