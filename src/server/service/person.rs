use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        permission::Permission,
        person::{CreatePersonDto, PersonDto, UpdatePersonDto},
    },
    server::{
        data::{account::account::AccountRepository, person::PersonRepository},
        error::{validation::ValidationError, Error},
        model::caller::Caller,
        service::account::{check_new_account, create_account_with_groups},
        util::validate::{check_name, MAX_NAME_LEN},
    },
};

pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a person together with the account they log in with
    pub async fn create_person(
        &self,
        caller: &Caller,
        person: CreatePersonDto,
    ) -> Result<PersonDto, Error> {
        caller.require(Permission::AddPerson)?;

        let mut group_ids = person.group_ids;
        group_ids.sort_unstable();
        group_ids.dedup();

        let mut errors = ValidationError::new();
        let username =
            check_new_account(self.db, &mut errors, &person.username, &person.password, &group_ids)
                .await?;
        let name = check_name(&mut errors, "name", &person.name, MAX_NAME_LEN);
        errors.into_result()?;

        let txn = self.db.begin().await?;
        let account = create_account_with_groups(&txn, username, &person.password, &group_ids).await?;
        let created = PersonRepository::new(&txn)
            .create(Some(account.id), name, person.title)
            .await?;
        txn.commit().await?;

        tracing::info!(
            person_id = created.id,
            account_id = account.id,
            created_by = caller.account_id,
            "Created person"
        );

        Ok(created.into())
    }

    pub async fn list_people(&self, caller: &Caller) -> Result<Vec<PersonDto>, Error> {
        caller.require(Permission::AddPerson)?;

        let people = PersonRepository::new(self.db).get_all().await?;

        Ok(people.into_iter().map(PersonDto::from).collect())
    }

    pub async fn get_person(&self, caller: &Caller, person_id: i32) -> Result<PersonDto, Error> {
        caller.require(Permission::ChangePerson)?;

        PersonRepository::new(self.db)
            .get_by_id(person_id)
            .await?
            .map(PersonDto::from)
            .ok_or(Error::not_found("Person", person_id))
    }

    /// Updates a person's name, title, and linked account
    ///
    /// The account must exist and not be linked to another person.
    pub async fn update_person(
        &self,
        caller: &Caller,
        person_id: i32,
        person: UpdatePersonDto,
    ) -> Result<PersonDto, Error> {
        caller.require(Permission::ChangePerson)?;

        let person_repo = PersonRepository::new(self.db);

        let mut errors = ValidationError::new();
        let name = check_name(&mut errors, "name", &person.name, MAX_NAME_LEN);
        if let Some(account_id) = person.account_id {
            if AccountRepository::new(self.db)
                .get_by_id(account_id)
                .await?
                .is_none()
            {
                errors.push("account_id", format!("account {} does not exist", account_id));
            } else if person_repo
                .get_by_account_id(account_id)
                .await?
                .is_some_and(|linked| linked.id != person_id)
            {
                errors.push(
                    "account_id",
                    format!("account {} is linked to another person", account_id),
                );
            }
        }
        errors.into_result()?;

        let updated = person_repo
            .update(person_id, person.account_id, name, person.title)
            .await?
            .ok_or(Error::not_found("Person", person_id))?;

        tracing::info!(
            person_id = updated.id,
            account_id = caller.account_id,
            "Updated person"
        );

        Ok(updated.into())
    }
}
