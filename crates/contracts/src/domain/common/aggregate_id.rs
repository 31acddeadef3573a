use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Идентификатор агрегата со строковым представлением для API и хранилища
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    /// Разобрать ID из строки (путь запроса, ответ хранилища)
    fn from_string(s: &str) -> Result<Self, String>;
}
