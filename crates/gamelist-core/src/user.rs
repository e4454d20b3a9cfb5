//! The logged-in user, as far as the list cares.

use serde::{Deserialize, Serialize};

use crate::record::PlayerId;

/// Read access to whoever is logged in.
pub trait CurrentUser {
    /// The viewer's player id, or `None` for anonymous visitors.
    fn current_user(&self) -> Option<PlayerId>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: PlayerId,
    pub username: String,
}

impl CurrentUser for Viewer {
    fn current_user(&self) -> Option<PlayerId> {
        Some(self.id)
    }
}

impl<T: CurrentUser> CurrentUser for Option<T> {
    fn current_user(&self) -> Option<PlayerId> {
        self.as_ref().and_then(CurrentUser::current_user)
    }
}

impl CurrentUser for PlayerId {
    fn current_user(&self) -> Option<PlayerId> {
        Some(*self)
    }
}
