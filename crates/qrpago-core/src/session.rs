//! Caller authorization and allow-list bookkeeping.
//!
//! The decoding core never sees any of this: authorization decides whether
//! to invoke it at all. State lives behind the [`SessionStore`] key-value
//! trait so the caller injects persistence instead of relying on process-wide
//! globals.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SessionError;

/// Numeric identity of a caller or chat on the messaging platform.
pub type CallerId = i64;

/// Where a request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerContext {
    /// The individual user issuing the request.
    pub user_id: CallerId,
    /// The chat the request arrived in.
    pub chat_id: CallerId,
    /// Whether the chat is a group rather than a direct conversation.
    pub is_group: bool,
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessVerdict {
    /// The caller may invoke the decoder.
    Allowed,
    /// The group chat is not on the allow-list.
    GroupDenied,
    /// The individual user is not on the allow-list and the system is off.
    UserDenied,
}

impl AccessVerdict {
    /// Whether the verdict permits the request.
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessVerdict::Allowed)
    }
}

/// Injected key-value persistence for allow-lists and the global switch.
pub trait SessionStore {
    /// Users allowed in direct conversations.
    fn allowed_users(&self) -> Result<HashSet<CallerId>, SessionError>;

    /// Group chats allowed to use the decoder.
    fn allowed_groups(&self) -> Result<HashSet<CallerId>, SessionError>;

    /// Whether the system is globally switched on for everyone.
    fn is_on(&self) -> Result<bool, SessionError>;

    /// Add a user to the allow-list.
    fn allow_user(&mut self, user: CallerId) -> Result<(), SessionError>;

    /// Add a group to the allow-list.
    fn allow_group(&mut self, group: CallerId) -> Result<(), SessionError>;

    /// Flip the global switch.
    fn set_on(&mut self, on: bool) -> Result<(), SessionError>;
}

/// Authorization policy: fixed owners plus store-backed allow-lists.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    owners: HashSet<CallerId>,
}

impl AccessPolicy {
    /// Create a policy with the given owner IDs, who are always allowed.
    pub fn new(owners: impl IntoIterator<Item = CallerId>) -> Self {
        Self {
            owners: owners.into_iter().collect(),
        }
    }

    /// Whether `user` is an owner.
    pub fn is_owner(&self, user: CallerId) -> bool {
        self.owners.contains(&user)
    }

    /// Decide whether `ctx` may invoke the decoder.
    ///
    /// Owners and a globally-on system always pass. Otherwise group chats
    /// check the group allow-list and direct chats the user allow-list.
    pub fn check(
        &self,
        ctx: &CallerContext,
        store: &dyn SessionStore,
    ) -> Result<AccessVerdict, SessionError> {
        if self.is_owner(ctx.user_id) || store.is_on()? {
            return Ok(AccessVerdict::Allowed);
        }

        let verdict = if ctx.is_group {
            if store.allowed_groups()?.contains(&ctx.chat_id) {
                AccessVerdict::Allowed
            } else {
                AccessVerdict::GroupDenied
            }
        } else if store.allowed_users()?.contains(&ctx.user_id) {
            AccessVerdict::Allowed
        } else {
            AccessVerdict::UserDenied
        };

        debug!(user = ctx.user_id, chat = ctx.chat_id, ?verdict, "access check");
        Ok(verdict)
    }
}

/// In-memory session store, useful for tests and single-process deployments.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: HashSet<CallerId>,
    groups: HashSet<CallerId>,
    on: bool,
}

impl MemoryStore {
    /// Create an empty store with the system switched off.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn allowed_users(&self) -> Result<HashSet<CallerId>, SessionError> {
        Ok(self.users.clone())
    }

    fn allowed_groups(&self) -> Result<HashSet<CallerId>, SessionError> {
        Ok(self.groups.clone())
    }

    fn is_on(&self) -> Result<bool, SessionError> {
        Ok(self.on)
    }

    fn allow_user(&mut self, user: CallerId) -> Result<(), SessionError> {
        self.users.insert(user);
        Ok(())
    }

    fn allow_group(&mut self, group: CallerId) -> Result<(), SessionError> {
        self.groups.insert(group);
        Ok(())
    }

    fn set_on(&mut self, on: bool) -> Result<(), SessionError> {
        self.on = on;
        Ok(())
    }
}
