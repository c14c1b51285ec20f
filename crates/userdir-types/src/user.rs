//! User record and search criteria.

use serde::{Deserialize, Serialize};

/// A directory record.
///
/// Records are immutable once placed in a directory; every query hands
/// out clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique, stable identity used for lookup
    pub id: i32,

    pub name: String,

    pub city: String,

    /// Numeric phone identifier (format is not validated)
    pub phone: i64,

    pub height: f32,

    pub married: bool,
}

impl User {
    /// Create a new user record.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        city: impl Into<String>,
        phone: i64,
        height: f32,
        married: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            city: city.into(),
            phone,
            height,
            married,
        }
    }
}

/// Filter for directory search.
///
/// Each field is independently present or absent. Absent fields impose
/// no constraint; present fields are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub city: Option<String>,
    pub phone: Option<i64>,
    pub married: Option<bool>,
}

impl SearchCriteria {
    /// Criteria with every field absent (matches all records).
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain on city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Constrain on phone.
    pub fn with_phone(mut self, phone: i64) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Constrain on marital status.
    pub fn with_married(mut self, married: bool) -> Self {
        self.married = Some(married);
        self
    }

    /// True when no field is present.
    pub fn is_unconstrained(&self) -> bool {
        self.city.is_none() && self.phone.is_none() && self.married.is_none()
    }

    /// Check whether a record satisfies every present field.
    pub fn matches(&self, user: &User) -> bool {
        if let Some(city) = &self.city {
            if user.city != *city {
                return false;
            }
        }
        if let Some(phone) = self.phone {
            if user.phone != phone {
                return false;
            }
        }
        if let Some(married) = self.married {
            if user.married != married {
                return false;
            }
        }
        true
    }
}
