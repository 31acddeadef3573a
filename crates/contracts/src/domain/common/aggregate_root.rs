use super::AggregateId;

/// Корень агрегата: запись с собственным идентификатором,
/// хранящаяся в отдельной таблице.
pub trait AggregateRoot {
    type Id: AggregateId;

    fn id(&self) -> Self::Id;

    /// Имя таблицы в хранилище (например, "suppliers")
    fn collection_name() -> &'static str;
}
