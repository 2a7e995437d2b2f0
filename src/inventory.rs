//! inventory.rs
//!
//! Ядро сервиса: зал кинотеатра и машина состояний мест.
//!
//! Ключевые компоненты:
//! 1.  **TheaterInventory**: единственный разделяемый объект состояния.
//!     Держит фиксированную сетку мест, разбиение на AVAILABLE/SOLD и
//!     таблицу проданных билетов по токену.
//! 2.  **Операции**: просмотр свободных мест, покупка, возврат и статистика
//!     продаж. Вся валидация и мутация состояния живет здесь, HTTP-слой
//!     только транслирует запросы.
//! 3.  **Дисциплина блокировки**: все три коллекции меняются как одно целое
//!     под одной блокировкой. Место никогда не наблюдается одновременно
//!     свободным и проданным.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::{Seat, Ticket};

/// Ошибки операций над залом. Все они ожидаемые и восстановимые:
/// клиент получает структурированный ответ, процесс никогда не падает
/// из-за неверного входа.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Ряд или место вне фиксированной сетки зала.
    #[error("The number of a row or a column is out of bounds!")]
    OutOfBounds,
    /// Координаты валидны, но место уже в разделе SOLD.
    /// Отдельной ошибки "место не найдено" нет: после проверки границ
    /// отсутствие места среди свободных означает ровно "уже продано".
    #[error("The ticket has been already purchased!")]
    AlreadySold,
    /// Токен не числится в таблице проданных билетов.
    #[error("Wrong token!")]
    InvalidToken,
}

/// Снимок зала на момент вызова: размеры и свободные места
/// в порядке обхода по рядам.
#[derive(Debug, Clone, Serialize)]
pub struct SeatMap {
    pub rows: i32,
    pub columns: i32,
    pub available: Vec<Seat>,
}

/// Сводка продаж. Считается по запросу, нигде не кешируется.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stats {
    pub current_income: i64,
    pub number_of_available_seats: usize,
    pub number_of_purchased_tickets: usize,
}

/// Статус одного места. Других состояний у места нет:
/// AVAILABLE -> SOLD только через покупку, SOLD -> AVAILABLE только через возврат.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeatStatus {
    Available,
    Sold,
}

/// Мутабельная часть состояния. Живет целиком под одной блокировкой,
/// наружу не выдается ни в каком виде.
struct HallState {
    /// Статус каждого места, индекс (row-1)*columns + (column-1).
    seats: Vec<SeatStatus>,
    /// token -> проданный билет. Каждый билет ссылается на место в SOLD,
    /// каждое место в SOLD имеет ровно один билет.
    tickets: HashMap<String, Ticket>,
}

/// Зал кинотеатра. Создается один раз на процесс и живет до его конца;
/// места после инициализации не создаются и не удаляются, только
/// переходят между AVAILABLE и SOLD.
pub struct TheaterInventory {
    rows: i32,
    columns: i32,
    state: RwLock<HallState>,
}

impl TheaterInventory {
    /// Инициализирует зал: все места свободны, цена по тарифу ряда.
    pub fn new(rows: i32, columns: i32) -> Self {
        let total = (rows * columns).max(0) as usize;
        Self {
            rows,
            columns,
            state: RwLock::new(HallState {
                seats: vec![SeatStatus::Available; total],
                tickets: HashMap::new(),
            }),
        }
    }

    /// Проверенный индекс места в сетке. None — координаты вне зала.
    fn seat_index(&self, row: i32, column: i32) -> Option<usize> {
        if row < 1 || row > self.rows || column < 1 || column > self.columns {
            return None;
        }
        Some(((row - 1) * self.columns + (column - 1)) as usize)
    }

    /// Обратное преобразование: место по индексу в сетке.
    fn seat_at(&self, index: usize) -> Seat {
        let row = index as i32 / self.columns + 1;
        let column = index as i32 % self.columns + 1;
        Seat::new(row, column)
    }

    /// Снимок свободных мест. Только чтение, конкурентные покупки и
    /// возвраты читателей не ждут.
    pub fn list_seats(&self) -> SeatMap {
        let state = self.state.read().unwrap();
        let available = state
            .seats
            .iter()
            .enumerate()
            .filter(|(_, status)| **status == SeatStatus::Available)
            .map(|(index, _)| self.seat_at(index))
            .collect();
        SeatMap {
            rows: self.rows,
            columns: self.columns,
            available,
        }
    }

    /// Продажа места. Сначала проверка границ, затем доступности —
    /// порядок важен для сообщений об ошибках. Перенос места в SOLD и
    /// запись билета происходят под одной блокировкой записи, поэтому
    /// две конкурентные покупки одного места никогда не проходят обе.
    pub fn purchase(&self, row: i32, column: i32) -> Result<Ticket, InventoryError> {
        let index = self
            .seat_index(row, column)
            .ok_or(InventoryError::OutOfBounds)?;

        let mut state = self.state.write().unwrap();
        if state.seats[index] == SeatStatus::Sold {
            return Err(InventoryError::AlreadySold);
        }

        let ticket = Ticket::issue(self.seat_at(index));
        state.seats[index] = SeatStatus::Sold;
        state.tickets.insert(ticket.token.clone(), ticket.clone());

        debug!("seat ({}, {}) sold, token {}", row, column, ticket.token);
        Ok(ticket)
    }

    /// Возврат по токену. Неизвестный токен — единственная ошибка этого
    /// пути; "битый" и "чужой" токены намеренно не различаются.
    pub fn return_ticket(&self, token: &str) -> Result<Seat, InventoryError> {
        let mut state = self.state.write().unwrap();
        let Some(ticket) = state.tickets.remove(token) else {
            return Err(InventoryError::InvalidToken);
        };

        // Координаты взяты из нашего же билета, индекс всегда в границах.
        let index = ((ticket.seat.row - 1) * self.columns + (ticket.seat.column - 1)) as usize;
        state.seats[index] = SeatStatus::Available;

        debug!(
            "seat ({}, {}) returned, token {} released",
            ticket.seat.row, ticket.seat.column, token
        );
        Ok(ticket.seat)
    }

    /// Сводка продаж: доход по проданным билетам и размеры разделов.
    pub fn stats(&self) -> Stats {
        let state = self.state.read().unwrap();
        let current_income = state
            .tickets
            .values()
            .map(|ticket| i64::from(ticket.seat.price))
            .sum();
        let number_of_available_seats = state
            .seats
            .iter()
            .filter(|status| **status == SeatStatus::Available)
            .count();
        Stats {
            current_income,
            number_of_available_seats,
            number_of_purchased_tickets: state.tickets.len(),
        }
    }
}
