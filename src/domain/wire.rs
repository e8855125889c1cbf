//! 모델 응답 역직렬화 보조 함수.

use serde::{Deserialize, Deserializer};

/// 키 누락과 명시적 `null`을 모두 기본값으로 읽는다. `#[serde(default)]`와 함께 쓴다.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
