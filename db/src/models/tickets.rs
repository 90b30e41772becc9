use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::DeriveActiveEnum;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    pub description: Option<String>,

    pub status: TicketStatus,
    pub priority: TicketPriority,

    pub created_at: DateTime<Utc>,
}

/// Lifecycle state of a ticket. New tickets always start `open`; the
/// remaining states exist for future transition endpoints and are never
/// client-settable at creation time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "ticket_status")]
#[strum(serialize_all = "snake_case")]
pub enum TicketStatus {
    #[sea_orm(string_value = "open")]
    Open,

    #[sea_orm(string_value = "in_progress")]
    InProgress,

    #[sea_orm(string_value = "resolved")]
    Resolved,

    #[sea_orm(string_value = "closed")]
    Closed,
}

/// Urgency of a ticket. Client-settable at creation; parsing is
/// case-sensitive so `HIGH` or `High` are rejected at the boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "ticket_priority")]
#[strum(serialize_all = "lowercase")]
pub enum TicketPriority {
    #[sea_orm(string_value = "low")]
    Low,

    #[sea_orm(string_value = "medium")]
    Medium,

    #[sea_orm(string_value = "high")]
    High,

    #[sea_orm(string_value = "urgent")]
    Urgent,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new ticket as a single atomic statement.
    ///
    /// The id is assigned by the database; `status` is always `open` and
    /// `created_at` is the current UTC instant.
    pub async fn create(
        db: &DbConn,
        title: &str,
        description: Option<&str>,
        priority: TicketPriority,
    ) -> Result<Model, DbErr> {
        let active_model = ActiveModel {
            title: Set(title.to_owned()),
            description: Set(description.map(str::to_owned)),
            status: Set(TicketStatus::Open),
            priority: Set(priority),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        active_model.insert(db).await
    }

    /// Returns at most `limit` tickets after skipping `offset`, newest first.
    ///
    /// Ordered by `created_at` descending with `id` descending as the
    /// tie-break, so same-instant inserts paginate deterministically.
    pub async fn list(db: &DbConn, limit: u64, offset: u64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .offset(offset)
            .limit(limit)
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    #[test]
    fn priority_parsing_is_case_sensitive() {
        assert_eq!("urgent".parse::<TicketPriority>(), Ok(TicketPriority::Urgent));
        assert!("Urgent".parse::<TicketPriority>().is_err());
        assert!("URGENT".parse::<TicketPriority>().is_err());
        assert!("critical".parse::<TicketPriority>().is_err());
    }

    #[test]
    fn status_wire_form_is_snake_case() {
        assert_eq!(TicketStatus::InProgress.to_string(), "in_progress");
        assert_eq!(TicketStatus::Open.to_string(), "open");
    }

    #[tokio::test]
    async fn create_assigns_id_and_defaults() {
        let db = setup_test_db().await;

        let ticket = Model::create(&db, "Server down", None, TicketPriority::Medium)
            .await
            .expect("Failed to create ticket");

        assert!(ticket.id > 0);
        assert_eq!(ticket.status, TicketStatus::Open);
        assert_eq!(ticket.priority, TicketPriority::Medium);
        assert_eq!(ticket.description, None);
    }

    #[tokio::test]
    async fn list_orders_newest_first_with_id_tiebreak() {
        let db = setup_test_db().await;

        for i in 0..5 {
            Model::create(&db, &format!("Ticket {i}"), None, TicketPriority::Low)
                .await
                .expect("Failed to create ticket");
        }

        let all = Model::list(&db, 10, 0).await.expect("Failed to list");
        assert_eq!(all.len(), 5);
        for pair in all.windows(2) {
            assert!(
                pair[0].created_at > pair[1].created_at
                    || (pair[0].created_at == pair[1].created_at && pair[0].id > pair[1].id)
            );
        }

        let page1 = Model::list(&db, 2, 0).await.expect("Failed to list");
        let page2 = Model::list(&db, 2, 2).await.expect("Failed to list");
        assert_eq!(page1.len(), 2);
        assert_eq!(page2.len(), 2);
        assert_eq!(page1[0].id, all[0].id);
        assert_eq!(page1[1].id, all[1].id);
        assert_eq!(page2[0].id, all[2].id);
        assert_eq!(page2[1].id, all[3].id);
    }

    #[tokio::test]
    async fn list_past_the_end_is_empty_not_an_error() {
        let db = setup_test_db().await;

        Model::create(&db, "Only ticket", Some("details"), TicketPriority::High)
            .await
            .expect("Failed to create ticket");

        let rows = Model::list(&db, 20, 50).await.expect("Failed to list");
        assert!(rows.is_empty());
    }
}
