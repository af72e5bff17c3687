//! Member directory lookup contract.
//!
//! The member registry is owned by the surrounding application; the engine
//! only needs to resolve a membership code to the member's registered
//! identity when deriving loan records.

use std::collections::HashMap;

use artha_shared::types::MemberId;

/// A member's registered identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// National identity number (NIK).
    pub national_id: String,
    /// Registered name.
    pub name: String,
}

/// Lookup into the application's member registry.
pub trait MemberDirectory: Send + Sync {
    /// Resolves a membership code, if registered.
    fn get_member(&self, id: &MemberId) -> Option<Member>;
}

/// A fixed in-memory directory, useful for tests and imports.
#[derive(Debug, Default)]
pub struct StaticMemberDirectory {
    members: HashMap<MemberId, Member>,
}

impl StaticMemberDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a member under the given code.
    pub fn insert(&mut self, id: MemberId, member: Member) {
        self.members.insert(id, member);
    }
}

impl MemberDirectory for StaticMemberDirectory {
    fn get_member(&self, id: &MemberId) -> Option<Member> {
        self.members.get(id).cloned()
    }
}
