//! Formula entity for SeaORM.

use chrono::Utc;
use sea_orm::sea_query::StringLen;
use sea_orm::{ActiveValue, Set};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "formulas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// Server-side stamping: inserts get an id and both timestamps, and any
/// update that changes a column restamps `updated_at`. The restamp never
/// moves `updated_at` backwards, even if the clock has.
#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now: DateTimeWithTimeZone = Utc::now().into();

        if insert {
            if self.id.is_not_set() {
                self.id = Set(Uuid::new_v4());
            }
            self.created_at = Set(now);
            self.updated_at = Set(now);
        } else if self.is_changed() {
            let stamp = match &self.updated_at {
                ActiveValue::Set(prev) | ActiveValue::Unchanged(prev) => now.max(*prev),
                ActiveValue::NotSet => now,
            };
            self.updated_at = Set(stamp);
        }

        Ok(self)
    }
}

/// Conversion from SeaORM Model to Domain Formula.
impl From<Model> for formula_core::domain::Formula {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            content: model.content,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
