//! # Domain models for the user directory
//!
//! Defines the user record exactly as the remote directory API ships it.
//! Records are deserialized once at load time and never created locally;
//! editing only rewrites fields on existing records. All types are
//! `Serialize + Deserialize` so they can be fixtured as plain JSON.

use serde::{Deserialize, Serialize};

/// One user record from the remote directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique id assigned by the data source.
    pub id: u64,
    /// Display name: "Leanne Graham"
    pub name: String,
    /// Login handle; also the seed for the avatar image.
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

/// Postal address of a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Coordinates, kept as the strings the API sends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Employer attached to a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}
