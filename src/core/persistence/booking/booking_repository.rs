use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::booking_entity::{BookingEntity, NewBooking};
use super::booking_repository_trait::BookingRepository;

const SEARCH_COLUMNS: [&str; 4] = ["c.name", "r.room_type", "b.check_in", "b.check_out"];

pub struct SqliteBookingRepository {
    pool: SqlitePool,
}

impl SqliteBookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// `%term%` with LIKE wildcards in the term escaped by `\`.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl BookingRepository for SqliteBookingRepository {
    async fn search(&self, terms: &[String]) -> Result<Vec<BookingEntity>> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT b.* FROM bookings b \
             LEFT JOIN customers c ON c.id = b.customer_id \
             LEFT JOIN rooms r ON r.id = b.room_id",
        );

        for (i, term) in terms.iter().enumerate() {
            qb.push(if i == 0 { " WHERE (" } else { " AND (" });
            let pattern = contains_pattern(term);
            for (j, column) in SEARCH_COLUMNS.iter().enumerate() {
                if j > 0 {
                    qb.push(" OR ");
                }
                qb.push(*column)
                    .push(" LIKE ")
                    .push_bind(pattern.clone())
                    .push(" ESCAPE '\\'");
            }
            qb.push(")");
        }
        qb.push(" ORDER BY b.id");

        qb.build_query_as::<BookingEntity>()
            .fetch_all(&self.pool)
            .await
            .context("Failed to search bookings")
    }

    async fn get(&self, id: i64) -> Result<Option<BookingEntity>> {
        sqlx::query_as::<_, BookingEntity>("SELECT * FROM bookings WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to load booking {id}"))
    }

    async fn insert(&self, booking: &NewBooking) -> Result<BookingEntity> {
        sqlx::query_as::<_, BookingEntity>(
            r#"
            INSERT INTO bookings (customer_id, customer_name, customer_email, room_id,
                                  check_in, check_out, guests, rooms, total_price, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(booking.customer)
        .bind(&booking.customer_name)
        .bind(&booking.customer_email)
        .bind(booking.room)
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.guests)
        .bind(booking.rooms)
        .bind(booking.total_price)
        .bind(booking.created_at)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert booking")
    }

    async fn update(&self, booking: &BookingEntity) -> Result<Option<BookingEntity>> {
        sqlx::query_as::<_, BookingEntity>(
            r#"
            UPDATE bookings
            SET customer_id = ?, customer_name = ?, customer_email = ?, room_id = ?,
                check_in = ?, check_out = ?, guests = ?, rooms = ?, total_price = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(booking.customer)
        .bind(&booking.customer_name)
        .bind(&booking.customer_email)
        .bind(booking.room)
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.guests)
        .bind(booking.rooms)
        .bind(booking.total_price)
        .bind(booking.id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Failed to update booking {}", booking.id))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to delete booking {id}"))?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_escapes_like_wildcards() {
        assert_eq!(contains_pattern("Suite"), "%Suite%");
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
