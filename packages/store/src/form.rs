//! Flat form values and the modal edit session.
//!
//! The edit dialog works on a single-level field set; these types flatten
//! a record's nested address/company on the way in and rebuild the nested
//! shape on the way out. [`EditSession`] tracks which record, if any, the
//! dialog is open on.

use serde::{Deserialize, Serialize};

use crate::directory::Directory;
use crate::models::{Address, Company, User};

/// Flat field set shown in the edit form, produced by flattening a
/// record's nested sub-objects.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub street: String,
    pub city: String,
    pub company: String,
}

impl UserForm {
    /// Initial form values for a record.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            website: user.website.clone(),
            street: user.address.street.clone(),
            city: user.address.city.clone(),
            company: user.company.name.clone(),
        }
    }

    /// Rebuild the nested shape for [`Directory::update`].
    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            name: self.name,
            email: self.email,
            phone: self.phone,
            website: self.website,
            street: self.street,
            city: self.city,
            company_name: self.company,
        }
    }
}

/// The editable subset of a record, applied as a structural copy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserPatch {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub street: String,
    pub city: String,
    pub company_name: String,
}

impl UserPatch {
    /// A copy of `user` with the patch fields overwritten. Everything the
    /// patch does not name carries over from the original record.
    pub(crate) fn apply(&self, user: &User) -> User {
        User {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            website: self.website.clone(),
            address: Address {
                street: self.street.clone(),
                city: self.city.clone(),
                ..user.address.clone()
            },
            company: Company {
                name: self.company_name.clone(),
                ..user.company.clone()
            },
            ..user.clone()
        }
    }
}

/// Modal edit session: closed, or open on one record's form values.
///
/// `begin` replaces whatever was open (last call wins); `commit` and
/// `cancel` both close. The session closes on commit whether or not the
/// target id still exists in the directory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditSession {
    selected: Option<UserForm>,
}

impl EditSession {
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Form values for the currently selected record, if any.
    pub fn form(&self) -> Option<&UserForm> {
        self.selected.as_ref()
    }

    /// Open the session on a record, flattening it into form values.
    pub fn begin(&mut self, user: &User) {
        self.selected = Some(UserForm::from_user(user));
    }

    /// Close without applying.
    pub fn cancel(&mut self) {
        self.selected = None;
    }

    /// Apply validated form values to the directory and close.
    pub fn commit(&mut self, form: UserForm, directory: &mut Directory) {
        let id = form.id;
        directory.update(id, &form.into_patch());
        self.selected = None;
    }
}
