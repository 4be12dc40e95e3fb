use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Response envelope returned by the profile API
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileResponse {
    /// Generated profiles, one per requested result. Kept undecoded so that
    /// only the first one has to be a valid record.
    pub results: Vec<Value>,
}

impl ProfileResponse {
    /// Decodes the first result, ignoring the rest
    pub fn into_first(self) -> Result<ProfileRecord, AppError> {
        let first = self.results.into_iter().next().ok_or(AppError::EmptyResults)?;
        Ok(serde_json::from_value(first)?)
    }
}

/// Represents a generated user profile as returned by the API
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub name: Name,
    pub location: Location,
    /// Nationality code (e.g. "GB")
    pub nat: String,
    pub picture: Picture,
    pub login: Login,
    pub email: String,
    pub phone: String,
    pub cell: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub first: String,
    pub last: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub city: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    /// URL of the large portrait
    pub large: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Login {
    pub username: String,
}

impl ProfileRecord {
    /// "<first> <last>"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    /// "<city>, <nationality code>"
    pub fn origin(&self) -> String {
        format!("{}, {}", self.location.city, self.nat)
    }

    /// Two-sentence introduction shown in the description target.
    ///
    /// The username follows "is" with no separating space, and the closing
    /// "!" is preceded by one. Existing consumers compare this text exactly.
    pub fn description(&self) -> String {
        format!(
            "Hello, I am {} from {}. To learn more about me, my username is{}. Feel free to email me at {} !",
            self.full_name(),
            self.origin(),
            self.login.username,
            self.email,
        )
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn ada() -> ProfileRecord {
        ProfileRecord {
            name: Name {
                first: "Ada".to_string(),
                last: "Lovelace".to_string(),
            },
            location: Location {
                city: "London".to_string(),
            },
            nat: "GB".to_string(),
            picture: Picture {
                large: "https://randomuser.me/api/portraits/women/12.jpg".to_string(),
            },
            login: Login {
                username: "ada123".to_string(),
            },
            email: "ada@example.com".to_string(),
            phone: "(020) 7946 0018".to_string(),
            cell: "07700 900461".to_string(),
        }
    }

    /// Body shaped like a real API reply, extra fields included
    pub fn ada_response_json() -> serde_json::Value {
        serde_json::json!({
            "results": [{
                "gender": "female",
                "name": { "title": "Ms", "first": "Ada", "last": "Lovelace" },
                "location": {
                    "street": { "number": 12, "name": "St James's Square" },
                    "city": "London",
                    "state": "Greater London",
                    "country": "United Kingdom",
                    "postcode": "SW1Y 4JH"
                },
                "email": "ada@example.com",
                "login": { "uuid": "0b8a0c1e", "username": "ada123", "password": "analytical" },
                "phone": "(020) 7946 0018",
                "cell": "07700 900461",
                "picture": {
                    "large": "https://randomuser.me/api/portraits/women/12.jpg",
                    "medium": "https://randomuser.me/api/portraits/med/women/12.jpg",
                    "thumbnail": "https://randomuser.me/api/portraits/thumb/women/12.jpg"
                },
                "nat": "GB"
            }],
            "info": { "seed": "abc", "results": 1, "page": 1, "version": "1.4" }
        })
    }
}
