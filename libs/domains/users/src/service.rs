use chrono::NaiveDate;
use object_cache::ObjectCache;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserDto, UserForm};

/// Service layer for User business logic
///
/// Holds the business rules the store knows nothing about: email uniqueness,
/// existence checks and pagination validation. Forms reaching this service
/// have already passed field validation at the HTTP boundary.
///
/// The uniqueness and existence checks are read-then-write sequences over
/// two store calls with no lock spanning them: two concurrent creates with
/// the same email can both pass the check before either writes. This matches
/// the single-process in-memory design and is a known limitation.
#[derive(Clone)]
pub struct UserService<C: ObjectCache<Uuid, User>> {
    cache: Arc<C>,
}

impl<C: ObjectCache<Uuid, User>> UserService<C> {
    pub fn new(cache: C) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Create a new user with a generated identifier.
    pub async fn create_user(&self, form: UserForm) -> UserResult<UserDto> {
        let users = self.cache.get_all().await;
        if users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&form.email))
        {
            tracing::warn!(email = %form.email, "Email is already registered");
            return Err(UserError::EmailAlreadyRegistered(form.email));
        }

        let date_of_birth = self.birth_date(&form)?;
        let user = User::new(form.email, form.first_name, form.last_name, date_of_birth);
        self.cache.add(user.id, user.clone()).await;

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user.into())
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: Uuid) -> UserResult<UserDto> {
        let user = self.cache.get(&id).await.ok_or(UserError::NotFound(id))?;
        Ok(user.into())
    }

    /// List users one page at a time.
    ///
    /// Users are ordered by id (v7, so creation order); a page past the end
    /// of the data yields an empty list, not an error.
    pub async fn get_users(&self, page_number: i64, page_size: i64) -> UserResult<Vec<UserDto>> {
        if page_number <= 0 || page_size <= 0 {
            tracing::warn!(page_number, page_size, "Invalid pagination parameters");
            return Err(UserError::InvalidPagination {
                page_number,
                page_size,
            });
        }

        let mut users = self.cache.get_all().await;
        users.sort_by_key(|u| u.id);

        let skip = (page_number - 1).saturating_mul(page_size);
        let page = users
            .into_iter()
            .skip(skip as usize)
            .take(page_size as usize)
            .map(UserDto::from)
            .collect();

        Ok(page)
    }

    /// Replace every field of an existing user except the identifier.
    pub async fn update_user(&self, id: Uuid, form: UserForm) -> UserResult<UserDto> {
        let mut user = self.cache.get(&id).await.ok_or(UserError::NotFound(id))?;

        // Re-check uniqueness only when the email actually changes; the
        // user's own record can never collide then.
        if !user.email.eq_ignore_ascii_case(&form.email) {
            let users = self.cache.get_all().await;
            if users
                .iter()
                .any(|u| u.email.eq_ignore_ascii_case(&form.email))
            {
                tracing::warn!(email = %form.email, "Email is already registered");
                return Err(UserError::EmailAlreadyRegistered(form.email));
            }
        }

        let date_of_birth = self.birth_date(&form)?;
        user.apply_form(form, date_of_birth);
        self.cache.update(user.id, user.clone()).await;

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user.into())
    }

    /// Delete a user by ID
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        if self.cache.get(&id).await.is_none() {
            return Err(UserError::NotFound(id));
        }

        self.cache.delete(&id).await;
        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }

    // Forms only reach the service through the validating extractor, so a
    // date that fails to parse here signals a construction bug upstream.
    fn birth_date(&self, form: &UserForm) -> UserResult<NaiveDate> {
        form.birth_date().ok_or_else(|| {
            UserError::Internal(format!(
                "date of birth '{}' was not validated before the service call",
                form.date_of_birth
            ))
        })
    }
}
