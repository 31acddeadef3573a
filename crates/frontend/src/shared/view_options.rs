//! Состояние "View Options" для табличных страниц.
//!
//! `ViewOptions` хранит флаг показа архивных записей и набор видимых колонок.
//! Создаётся со значениями по умолчанию при монтировании страницы, меняется
//! только явными переключениями и не сохраняется между перезагрузками.
//!
//! `FetchGuard` решает, можно ли применить пришедший ответ: применяется
//! только ответ на последний выданный запрос и только пока страница смонтирована.

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewOptions<C: Copy + Eq + Hash> {
    pub show_archived: bool,
    pub visible_columns: HashSet<C>,
}

impl<C: Copy + Eq + Hash> ViewOptions<C> {
    /// Архивные скрыты, видимы все переданные колонки.
    pub fn new(columns: &[C]) -> Self {
        Self {
            show_archived: false,
            visible_columns: columns.iter().copied().collect(),
        }
    }

    /// Переключить флаг и вернуть новое значение.
    ///
    /// Перезапрос данных делает владелец состояния.
    pub fn toggle_show_archived(&mut self) -> bool {
        self.show_archived = !self.show_archived;
        self.show_archived
    }

    pub fn set_column_visible(&mut self, column: C, visible: bool) {
        if visible {
            self.visible_columns.insert(column);
        } else {
            self.visible_columns.remove(&column);
        }
    }

    pub fn is_visible(&self, column: C) -> bool {
        self.visible_columns.contains(&column)
    }

    /// Видимые колонки в объявленном порядке.
    pub fn visible_in_order(&self, declared: &[C]) -> Vec<C> {
        declared
            .iter()
            .copied()
            .filter(|c| self.visible_columns.contains(c))
            .collect()
    }
}

/// Квитанция на запрос, выданная `FetchGuard::begin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug)]
pub struct FetchGuard {
    generation: u64,
    mounted: bool,
}

impl Default for FetchGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchGuard {
    pub fn new() -> Self {
        Self {
            generation: 0,
            mounted: true,
        }
    }

    /// Новый запрос делает все предыдущие квитанции устаревшими.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket(self.generation)
    }

    pub fn accepts(&self, ticket: &FetchTicket) -> bool {
        self.mounted && ticket.0 == self.generation
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Col {
        Name,
        Email,
        Phone,
    }

    const ALL: [Col; 3] = [Col::Name, Col::Email, Col::Phone];

    #[test]
    fn test_defaults() {
        let options = ViewOptions::new(&ALL);
        assert!(!options.show_archived);
        assert!(ALL.iter().all(|c| options.is_visible(*c)));
    }

    #[test]
    fn test_double_toggle_restores_flag() {
        let mut options = ViewOptions::new(&ALL);
        let before = options.clone();
        assert!(options.toggle_show_archived());
        assert!(!options.toggle_show_archived());
        assert_eq!(options, before);
    }

    #[test]
    fn test_hide_then_show_column_is_isolated() {
        let mut options = ViewOptions::new(&ALL);
        options.toggle_show_archived();
        let before = options.clone();

        options.set_column_visible(Col::Email, false);
        assert!(!options.is_visible(Col::Email));
        assert!(options.is_visible(Col::Name));
        assert!(options.is_visible(Col::Phone));
        assert!(options.show_archived);

        options.set_column_visible(Col::Email, true);
        assert_eq!(options, before);
    }

    #[test]
    fn test_visible_in_declared_order() {
        let mut options = ViewOptions::new(&[Col::Phone, Col::Name]);
        assert_eq!(options.visible_in_order(&ALL), vec![Col::Name, Col::Phone]);
        options.set_column_visible(Col::Email, true);
        options.set_column_visible(Col::Name, false);
        assert_eq!(options.visible_in_order(&ALL), vec![Col::Email, Col::Phone]);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        // Переключили "показать архив" дважды подряд: запрос 1 (с архивом)
        // отвечает позже запроса 2 (без архива).
        let mut guard = FetchGuard::new();
        let first = guard.begin();
        let second = guard.begin();

        assert!(guard.accepts(&second));
        assert!(!guard.accepts(&first));
    }

    #[test]
    fn test_unmount_discards_in_flight() {
        let mut guard = FetchGuard::new();
        let ticket = guard.begin();
        guard.unmount();
        assert!(!guard.is_mounted());
        assert!(!guard.accepts(&ticket));
    }

    #[test]
    fn test_ticket_issued_after_unmount_is_rejected() {
        let mut guard = FetchGuard::new();
        guard.unmount();
        let ticket = guard.begin();
        assert!(!guard.accepts(&ticket));
    }
}
