use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        account::{AccountDto, CreateAccountDto},
        permission::Permission,
    },
    server::{
        data::{
            account::{account::AccountRepository, group::GroupRepository},
            person::PersonRepository,
        },
        error::{validation::ValidationError, Error},
        model::{caller::Caller, db::AccountModel},
        util::{
            password::hash_password,
            validate::{check_name, check_password, MAX_USERNAME_LEN},
        },
    },
};

/// Validates username, password, and group references of a new account
///
/// Pushes field errors into `errors` and returns the trimmed username.
pub(crate) async fn check_new_account<C: ConnectionTrait>(
    db: &C,
    errors: &mut ValidationError,
    username: &str,
    password: &str,
    group_ids: &[i32],
) -> Result<String, Error> {
    let username = check_name(errors, "username", username, MAX_USERNAME_LEN);
    check_password(errors, "password", password);

    if !username.is_empty()
        && AccountRepository::new(db)
            .get_by_username(&username)
            .await?
            .is_some()
    {
        errors.push("username", "is already taken");
    }

    let found = GroupRepository::new(db).get_many_by_ids(group_ids).await?;
    for group_id in group_ids {
        if !found.iter().any(|group| group.id == *group_id) {
            errors.push("group_ids", format!("group {} does not exist", group_id));
        }
    }

    Ok(username)
}

/// Creates an account and its group memberships, the caller owns the transaction
pub(crate) async fn create_account_with_groups<C: ConnectionTrait>(
    db: &C,
    username: String,
    password: &str,
    group_ids: &[i32],
) -> Result<AccountModel, Error> {
    let account_repo = AccountRepository::new(db);

    let account = account_repo
        .create(username, hash_password(password)?, false)
        .await?;
    account_repo.add_to_groups(account.id, group_ids).await?;

    Ok(account)
}

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_account(
        &self,
        caller: &Caller,
        account: CreateAccountDto,
    ) -> Result<AccountDto, Error> {
        caller.require(Permission::AddUser)?;

        let mut group_ids = account.group_ids;
        group_ids.sort_unstable();
        group_ids.dedup();

        let mut errors = ValidationError::new();
        let username =
            check_new_account(self.db, &mut errors, &account.username, &account.password, &group_ids)
                .await?;
        errors.into_result()?;

        let txn = self.db.begin().await?;
        let created = create_account_with_groups(&txn, username, &account.password, &group_ids).await?;
        txn.commit().await?;

        tracing::info!(
            account_id = created.id,
            created_by = caller.account_id,
            "Created account {:?}",
            created.username
        );

        Ok(AccountDto {
            id: created.id,
            username: created.username,
            is_superuser: created.is_superuser,
            group_ids,
        })
    }

    /// Deletes an account, the linked person is kept and unlinked
    ///
    /// # Returns
    /// - `Ok(())`: the account was deleted
    /// - `Err(Error::ValidationError)`: the caller tried to delete their own account
    /// - `Err(Error::NotFound)`: no account with the provided ID
    pub async fn delete_account(&self, caller: &Caller, account_id: i32) -> Result<(), Error> {
        caller.require(Permission::DeleteUser)?;

        if account_id == caller.account_id {
            return Err(ValidationError::field("id", "cannot delete the logged in account").into());
        }

        let txn = self.db.begin().await?;

        let account_repo = AccountRepository::new(&txn);
        if account_repo.get_by_id(account_id).await?.is_none() {
            return Err(Error::not_found("Account", account_id));
        }

        PersonRepository::new(&txn).unlink_account(account_id).await?;
        account_repo.delete(account_id).await?;

        txn.commit().await?;

        tracing::info!(
            account_id = account_id,
            deleted_by = caller.account_id,
            "Deleted account"
        );

        Ok(())
    }

    /// Builds the [`Caller`] for an account with its effective permissions
    ///
    /// Returns `Ok(None)` if the account does not exist. Unknown permission codenames stored
    /// for the account's groups are skipped.
    pub async fn get_caller(&self, account_id: i32) -> Result<Option<Caller>, Error> {
        let account_repo = AccountRepository::new(self.db);

        let Some(account) = account_repo.get_by_id(account_id).await? else {
            return Ok(None);
        };

        if account.is_superuser {
            return Ok(Some(Caller::superuser(account.id, account.username)));
        }

        let permissions = account_repo
            .get_permission_codenames(account.id)
            .await?
            .into_iter()
            .filter_map(|codename| match codename.parse::<Permission>() {
                Ok(permission) => Some(permission),
                Err(e) => {
                    tracing::warn!(account_id = account.id, "Skipping stored permission: {}", e);
                    None
                }
            });

        Ok(Some(Caller::new(
            account.id,
            account.username,
            false,
            permissions,
        )))
    }

    /// Creates a superuser account unless the username already exists
    ///
    /// Returns `true` if the account was created.
    pub async fn ensure_superuser(&self, username: &str, password: &str) -> Result<bool, Error> {
        let account_repo = AccountRepository::new(self.db);

        if account_repo.get_by_username(username).await?.is_some() {
            tracing::debug!("Superuser {:?} already exists", username);

            return Ok(false);
        }

        let account = account_repo
            .create(username.to_string(), hash_password(password)?, true)
            .await?;

        tracing::info!(account_id = account.id, "Created superuser {:?}", username);

        Ok(true)
    }
}
