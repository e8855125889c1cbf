//! 유스케이스 모음.

pub mod generate;
pub mod inspect_config;
pub mod share_copy;
