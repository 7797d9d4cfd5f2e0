use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Minimum age at creation or update time.
const ADULT_AGE: i32 = 18;

/// Textual date forms accepted for `dateOfBirth`.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// User entity - the store-resident representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier (generated at creation, never changed)
    pub id: Uuid,
    /// User email (unique across users, case-insensitive)
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name (optional)
    pub last_name: Option<String>,
    /// Date of birth; age must be >= 18 at creation/update time
    pub date_of_birth: NaiveDate,
}

impl User {
    /// Create a new user with a fresh identifier.
    ///
    /// Ids are UUID v7, so sorting by id yields creation order.
    pub fn new(
        email: String,
        first_name: String,
        last_name: Option<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            email,
            first_name,
            last_name,
            date_of_birth,
        }
    }

    /// Overwrite every field except the identifier.
    pub fn apply_form(&mut self, form: UserForm, date_of_birth: NaiveDate) {
        self.email = form.email;
        self.first_name = form.first_name;
        self.last_name = form.last_name;
        self.date_of_birth = date_of_birth;
    }
}

/// User response DTO
///
/// `id` serializes as a string and `dateOfBirth` as `yyyy-MM-dd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub date_of_birth: NaiveDate,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            date_of_birth: user.date_of_birth,
        }
    }
}

/// DTO for creating or replacing a user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    #[validate(email, length(min = 1, max = 128))]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub first_name: String,
    #[validate(length(max = 128))]
    pub last_name: Option<String>,
    #[validate(custom(function = "validate_birth_date"))]
    pub date_of_birth: String,
}

impl UserForm {
    /// The parsed date of birth, if the field holds an accepted date form.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        parse_birth_date(&self.date_of_birth)
    }
}

/// Pagination query parameters for listing users
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number
    #[serde(default = "default_page_number")]
    pub page_number: i64,
    /// Number of users per page
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page_number() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
        }
    }
}

fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Age in whole years at `today`, adjusted down by one when the birthday
/// has not yet occurred this year.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

fn validate_birth_date(value: &str) -> Result<(), ValidationError> {
    let Some(date_of_birth) = parse_birth_date(value) else {
        let mut error = ValidationError::new("invalid_date");
        error.message = Some("Date of birth must be a valid calendar date".into());
        return Err(error);
    };

    let today = chrono::Local::now().date_naive();
    if age_on(date_of_birth, today) < ADULT_AGE {
        let mut error = ValidationError::new("underage");
        error.message = Some("User must be at least 18 years old".into());
        return Err(error);
    }

    Ok(())
}
