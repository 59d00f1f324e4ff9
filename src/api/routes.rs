//! Drinks API route catalogue
//!
//! Paths are relative to `api_server_url`; see
//! [`EnvironmentConfig::route_url`](crate::config::EnvironmentConfig::route_url).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Permission scope carried in an access token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "get:drinks-detail")]
    GetDrinksDetail,
    #[serde(rename = "post:drinks")]
    PostDrinks,
    #[serde(rename = "patch:drinks")]
    PatchDrinks,
    #[serde(rename = "delete:drinks")]
    DeleteDrinks,
}

impl Permission {
    pub const ALL: [Permission; 4] = [
        Permission::GetDrinksDetail,
        Permission::PostDrinks,
        Permission::PatchDrinks,
        Permission::DeleteDrinks,
    ];

    /// Scope string
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::GetDrinksDetail => "get:drinks-detail",
            Permission::PostDrinks => "post:drinks",
            Permission::PatchDrinks => "patch:drinks",
            Permission::DeleteDrinks => "delete:drinks",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown permission scope
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown permission '{0}'")]
pub struct UnknownPermission(pub String);

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

/// A drinks API endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoute {
    /// Public short listing
    ListDrinks,
    /// Long listing including recipes
    DrinkDetails,
    CreateDrink,
    UpdateDrink(u64),
    DeleteDrink(u64),
}

impl ApiRoute {
    /// HTTP method
    pub fn method(&self) -> &'static str {
        match self {
            ApiRoute::ListDrinks | ApiRoute::DrinkDetails => "GET",
            ApiRoute::CreateDrink => "POST",
            ApiRoute::UpdateDrink(_) => "PATCH",
            ApiRoute::DeleteDrink(_) => "DELETE",
        }
    }

    /// Path relative to the API base url
    pub fn path(&self) -> String {
        match self {
            ApiRoute::ListDrinks | ApiRoute::CreateDrink => "/drinks".to_string(),
            ApiRoute::DrinkDetails => "/drinks-detail".to_string(),
            ApiRoute::UpdateDrink(id) | ApiRoute::DeleteDrink(id) => format!("/drinks/{}", id),
        }
    }

    /// Permission the bearer token must carry, `None` for public routes
    pub fn required_permission(&self) -> Option<Permission> {
        match self {
            ApiRoute::ListDrinks => None,
            ApiRoute::DrinkDetails => Some(Permission::GetDrinksDetail),
            ApiRoute::CreateDrink => Some(Permission::PostDrinks),
            ApiRoute::UpdateDrink(_) => Some(Permission::PatchDrinks),
            ApiRoute::DeleteDrink(_) => Some(Permission::DeleteDrinks),
        }
    }
}
