use entity::person::Title;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, UpdateResult,
};

use crate::server::data::BATCH_SIZE;

pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    /// Creates a new instance of [`PersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        account_id: Option<i32>,
        name: String,
        title: Title,
    ) -> Result<entity::person::Model, DbErr> {
        let person = entity::person::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            name: ActiveValue::Set(name),
            title: ActiveValue::Set(title),
            ..Default::default()
        };

        person.insert(self.db).await
    }

    pub async fn get_by_id(&self, person_id: i32) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await
    }

    /// Gets all people ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::person::Model>, DbErr> {
        entity::prelude::Person::find()
            .order_by_asc(entity::person::Column::Name)
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_many_by_ids(
        &self,
        person_ids: &[i32],
    ) -> Result<Vec<entity::person::Model>, DbErr> {
        let mut people = Vec::with_capacity(person_ids.len());

        for batch in person_ids.chunks(BATCH_SIZE) {
            let found = entity::prelude::Person::find()
                .filter(entity::person::Column::Id.is_in(batch.iter().copied()))
                .all(self.db)
                .await?;
            people.extend(found);
        }

        Ok(people)
    }

    /// Gets the people linked to an account, the ones that can be assigned to slots
    pub async fn get_with_account(&self) -> Result<Vec<entity::person::Model>, DbErr> {
        entity::prelude::Person::find()
            .filter(entity::person::Column::AccountId.is_not_null())
            .order_by_asc(entity::person::Column::Name)
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_account_id(
        &self,
        account_id: i32,
    ) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find()
            .filter(entity::person::Column::AccountId.eq(account_id))
            .one(self.db)
            .await
    }

    /// Updates a person
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: the updated person
    /// - `Ok(None)`: no person with the provided ID exists
    pub async fn update(
        &self,
        person_id: i32,
        account_id: Option<i32>,
        name: String,
        title: Title,
    ) -> Result<Option<entity::person::Model>, DbErr> {
        let Some(person) = entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut person_am = person.into_active_model();
        person_am.account_id = ActiveValue::Set(account_id);
        person_am.name = ActiveValue::Set(name);
        person_am.title = ActiveValue::Set(title);

        let person = person_am.update(self.db).await?;

        Ok(Some(person))
    }

    /// Clears the account reference of the person linked to `account_id`
    pub async fn unlink_account(&self, account_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::Person::update_many()
            .col_expr(entity::person::Column::AccountId, Expr::value(None::<i32>))
            .filter(entity::person::Column::AccountId.eq(account_id))
            .exec(self.db)
            .await
    }
}
