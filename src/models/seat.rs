use serde::{Deserialize, Serialize};

/// Количество "передних" рядов с повышенной ценой.
pub const FRONT_ROWS: i32 = 4;
/// Цена билета в передних рядах (ряд <= FRONT_ROWS).
pub const FRONT_ROW_PRICE: i32 = 10;
/// Цена билета в задних рядах.
pub const BACK_ROW_PRICE: i32 = 8;

/// Ценовой тариф зависит только от ряда и не меняется после инициализации зала.
pub fn price_for_row(row: i32) -> i32 {
    if row <= FRONT_ROWS {
        FRONT_ROW_PRICE
    } else {
        BACK_ROW_PRICE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub row: i32,
    pub column: i32,
    pub price: i32,
}

impl Seat {
    /// Место по координатам, цена по тарифу ряда.
    pub fn new(row: i32, column: i32) -> Self {
        Self {
            row,
            column,
            price: price_for_row(row),
        }
    }
}
