//! In-memory user collection with a parallel set of liked ids.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::form::UserPatch;
use crate::models::User;
use crate::query;

/// The authoritative client-side user collection.
///
/// Holds the records in the order the data source returned them, plus the
/// set of ids the viewer has marked liked. Every liked id refers to a
/// present record: [`remove`](Directory::remove) drops the record and its
/// liked entry in the same call, so readers never observe a dangling like.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Directory {
    users: Vec<User>,
    liked: HashSet<u64>,
}

impl Directory {
    /// Build a directory from freshly fetched records. Likes start empty.
    pub fn from_users(users: Vec<User>) -> Self {
        Self {
            users,
            liked: HashSet::new(),
        }
    }

    /// All records, in source order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Whether a record with this id is present.
    pub fn contains(&self, id: u64) -> bool {
        self.users.iter().any(|u| u.id == id)
    }

    /// Whether this id is currently liked.
    pub fn is_liked(&self, id: u64) -> bool {
        self.liked.contains(&id)
    }

    /// Remove the record with this id, along with its liked entry.
    /// Unknown ids are a no-op.
    pub fn remove(&mut self, id: u64) {
        self.users.retain(|u| u.id != id);
        self.liked.remove(&id);
    }

    /// Flip the liked state for an id. Toggling twice restores the
    /// original set. The id does not have to match a present record;
    /// `remove` already cascades, so a stray toggle is harmless.
    pub fn toggle_like(&mut self, id: u64) {
        if !self.liked.remove(&id) {
            self.liked.insert(id);
        }
    }

    /// Overwrite the editable fields of the record with this id.
    ///
    /// The record is rebuilt as a structural copy with the patch applied;
    /// everything the patch does not name (id, username, the rest of the
    /// address and company) carries over unchanged. Unknown ids are
    /// silently ignored.
    pub fn update(&mut self, id: u64, patch: &UserPatch) {
        self.users = self
            .users
            .iter()
            .map(|u| if u.id == id { patch.apply(u) } else { u.clone() })
            .collect();
    }

    /// Records whose name or email contains `query`, in source order.
    pub fn filter(&self, query: &str) -> Vec<User> {
        query::filter_users(&self.users, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, Company, Geo};

    fn sample_user(id: u64, name: &str, email: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: format!("user{id}"),
            email: email.to_string(),
            address: Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: "Gwenborough".to_string(),
                zipcode: "92998-3874".to_string(),
                geo: Geo {
                    lat: "-37.3159".to_string(),
                    lng: "81.1496".to_string(),
                },
            },
            phone: "1-770-736-8031 x56442".to_string(),
            website: "hildegard.org".to_string(),
            company: Company {
                name: "Romaguera-Crona".to_string(),
                catch_phrase: "Multi-layered client-server neural-net".to_string(),
                bs: "harness real-time e-markets".to_string(),
            },
        }
    }

    #[test]
    fn remove_drops_record_and_liked_entry_together() {
        let mut dir = Directory::from_users(vec![
            sample_user(1, "Leanne Graham", "Sincere@april.biz"),
            sample_user(2, "Ervin Howell", "Shanna@melissa.tv"),
        ]);
        dir.toggle_like(1);
        assert!(dir.is_liked(1));

        dir.remove(1);
        assert!(!dir.contains(1));
        assert!(!dir.is_liked(1));
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn remove_works_without_a_prior_like() {
        let mut dir = Directory::from_users(vec![sample_user(1, "Leanne Graham", "a@b.c")]);
        dir.remove(1);
        assert!(dir.is_empty());
        assert!(!dir.is_liked(1));
    }

    #[test]
    fn remove_of_unknown_id_is_a_noop() {
        let mut dir = Directory::from_users(vec![sample_user(1, "Leanne Graham", "a@b.c")]);
        dir.remove(42);
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn toggle_like_is_self_inverse() {
        let mut dir = Directory::from_users(vec![sample_user(1, "Leanne Graham", "a@b.c")]);
        let before = dir.clone();

        dir.toggle_like(1);
        assert!(dir.is_liked(1));
        dir.toggle_like(1);
        assert_eq!(dir, before);
    }

    #[test]
    fn toggling_an_absent_id_does_not_touch_records() {
        let mut dir = Directory::from_users(vec![sample_user(1, "Leanne Graham", "a@b.c")]);
        dir.toggle_like(99);
        assert!(dir.is_liked(99));
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn update_overwrites_only_the_patched_fields() {
        let mut dir = Directory::from_users(vec![sample_user(1, "Leanne Graham", "a@b.c")]);
        let patch = UserPatch {
            name: "Leanne G.".to_string(),
            email: "leanne@april.biz".to_string(),
            phone: "555-0100".to_string(),
            website: "leanne.dev".to_string(),
            street: "Kulas Light".to_string(),
            city: "Yonkers".to_string(),
            company_name: "Graham Ltd".to_string(),
        };

        dir.update(1, &patch);

        let user = &dir.users()[0];
        assert_eq!(user.name, "Leanne G.");
        assert_eq!(user.address.city, "Yonkers");
        // untouched by the patch
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "user1");
        assert_eq!(user.address.street, "Kulas Light");
        assert_eq!(user.address.suite, "Apt. 556");
        assert_eq!(user.address.zipcode, "92998-3874");
        assert_eq!(user.address.geo.lat, "-37.3159");
        assert_eq!(
            user.company.catch_phrase,
            "Multi-layered client-server neural-net"
        );
        assert_eq!(user.company.bs, "harness real-time e-markets");
    }

    #[test]
    fn update_of_unknown_id_is_a_noop() {
        let mut dir = Directory::from_users(vec![sample_user(1, "Leanne Graham", "a@b.c")]);
        let before = dir.clone();
        dir.update(42, &UserPatch::default());
        assert_eq!(dir, before);
    }

    #[test]
    fn delete_then_like_scenario() {
        let mut dir = Directory::from_users(vec![sample_user(
            1,
            "Leanne Graham",
            "Sincere@april.biz",
        )]);
        dir.remove(1);
        assert!(dir.is_empty());
        assert!(!dir.is_liked(1));

        let mut dir = Directory::from_users(vec![sample_user(
            1,
            "Leanne Graham",
            "Sincere@april.biz",
        )]);
        dir.toggle_like(1);
        assert!(dir.is_liked(1));
        dir.toggle_like(1);
        assert!(!dir.is_liked(1));
    }

    #[test]
    fn filter_preserves_source_order() {
        let dir = Directory::from_users(vec![
            sample_user(1, "Clementine Bauch", "Nathan@yesenia.net"),
            sample_user(2, "Ervin Howell", "Shanna@melissa.tv"),
            sample_user(3, "Chelsey Dietrich", "Lucio_Hettinger@annie.ca"),
        ]);
        let hits = dir.filter("ch");
        let names: Vec<&str> = hits.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Clementine Bauch", "Chelsey Dietrich"]);
    }
}
