//! Message groups and their ordered member lists.

use std::fmt;

use super::client::ClientId;
use crate::types::Notify;

/// Handle identifying a message group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(usize);

impl GroupId {
    /// Wrap a raw index.
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// The raw index of this group.
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group({})", self.0)
    }
}

pub(crate) struct Member<P> {
    pub(crate) client: ClientId,
    pub(crate) notify: Notify<P>,
}

// Derive would demand `P: Clone`; only the `Rc` is cloned.
impl<P> Clone for Member<P> {
    fn clone(&self) -> Self {
        Self {
            client: self.client,
            notify: self.notify.clone(),
        }
    }
}

pub(crate) struct Group<P> {
    pub(crate) name: String,
    pub(crate) members: Vec<Member<P>>,
    pub(crate) sending: bool,
}

impl<P> Group<P> {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            members: Vec::new(),
            sending: false,
        }
    }

    /// Remove the first member belonging to `client`.
    pub(crate) fn remove_first(&mut self, client: ClientId) -> bool {
        match self.members.iter().position(|m| m.client == client) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every member belonging to `client`, returning how many went.
    pub(crate) fn remove_all(&mut self, client: ClientId) -> usize {
        let before = self.members.len();
        self.members.retain(|m| m.client != client);
        before - self.members.len()
    }
}

/// Registry of groups, searched linearly by name.
pub(crate) struct GroupRegistry<P> {
    groups: Vec<Group<P>>,
}

impl<P> Default for GroupRegistry<P> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<P> GroupRegistry<P> {
    pub(crate) fn find(&self, name: &str) -> Option<GroupId> {
        self.groups
            .iter()
            .position(|g| g.name == name)
            .map(GroupId)
    }

    /// Look up `name`, appending a new empty group if it is unknown.
    pub(crate) fn find_or_create(&mut self, name: &str) -> GroupId {
        if let Some(id) = self.find(name) {
            return id;
        }
        self.groups.push(Group::new(name));
        let id = GroupId(self.groups.len() - 1);
        tracing::debug!("Created {} '{}'", id, name);
        id
    }

    pub(crate) fn get(&self, id: GroupId) -> Option<&Group<P>> {
        self.groups.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: GroupId) -> Option<&mut Group<P>> {
        self.groups.get_mut(id.0)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Group<P>> {
        self.groups.iter_mut()
    }

    pub(crate) fn len(&self) -> usize {
        self.groups.len()
    }
}
