use serde::Serialize;
use uuid::Uuid;

use crate::models::Seat;

/// Проданный билет: непрозрачный токен + место, которое он покрывает.
/// Токен — единственный ключ для возврата.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub token: String,
    #[serde(rename = "ticket")]
    pub seat: Seat,
}

impl Ticket {
    /// Выпускает билет на место со свежим уникальным токеном.
    pub fn issue(seat: Seat) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            seat,
        }
    }
}
