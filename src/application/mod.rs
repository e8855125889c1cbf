//! Application layer
//! 유스케이스를 정의하고 포트(추상 인터페이스)를 통해 인프라를 사용한다.

pub mod artifact;
pub mod ports;
pub mod usecases;
pub mod workspace;
