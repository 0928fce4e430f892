//! Messenger implementation.
//!
//! Provides the [`Messenger`] registry: client registration, group
//! membership and synchronous, ordered dispatch.

use std::cell::RefCell;

use super::client::{ClientId, ClientRegistry};
use super::group::{GroupId, GroupRegistry, Member};
use crate::types::{MessageType, Notify};

/// Central registry of clients and message groups.
///
/// All methods take `&self` so that notify callbacks may call back into the
/// messenger (join, leave, send to another group) while a send is running.
/// No internal borrow is held across a callback.
pub struct Messenger<P> {
    clients: RefCell<ClientRegistry>,
    groups: RefCell<GroupRegistry<P>>,
}

impl<P> Messenger<P> {
    /// Create an empty messenger
    pub fn new() -> Self {
        Self {
            clients: RefCell::new(ClientRegistry::default()),
            groups: RefCell::new(GroupRegistry::default()),
        }
    }

    /// Register a new client and return its id
    ///
    /// Always hands out the lowest id not currently registered.
    pub fn register(&self) -> ClientId {
        let id = self.clients.borrow_mut().allocate();
        tracing::debug!("{} registered", id);
        id
    }

    /// Unregister a client
    ///
    /// Removes the client from every group, then frees its id for reuse.
    /// Ids outside the allocated range are ignored.
    pub fn unregister(&self, client: ClientId) {
        if !self.clients.borrow().in_range(client) {
            tracing::debug!("Ignoring unregister of unknown {}", client);
            return;
        }
        let removed: usize = self
            .groups
            .borrow_mut()
            .iter_mut()
            .map(|g| g.remove_all(client))
            .sum();
        self.clients.borrow_mut().release(client);
        tracing::debug!("{} unregistered, left {} group(s)", client, removed);
    }

    /// Check whether an id is currently registered
    pub fn is_registered(&self, client: ClientId) -> bool {
        self.clients.borrow().is_live(client)
    }

    /// Look up a group by name without creating it
    pub fn find(&self, name: &str) -> Option<GroupId> {
        self.groups.borrow().find(name)
    }

    /// Join a group, creating it if needed
    ///
    /// A member is appended only when both a client and a callback are
    /// given. Passing `None` for either just materialises the group and
    /// returns its id.
    pub fn join(&self, client: Option<ClientId>, name: &str, notify: Option<Notify<P>>) -> GroupId {
        let mut groups = self.groups.borrow_mut();
        let id = groups.find_or_create(name);
        if let (Some(client), Some(notify)) = (client, notify) {
            if let Some(group) = groups.get_mut(id) {
                group.members.push(Member { client, notify });
                tracing::debug!("{} joined {} '{}'", client, id, name);
            }
        }
        id
    }

    /// Join a group at the front of the delivery order
    ///
    /// The most recent preempter is always notified first. Used by the
    /// component that owns a piece of state so it can validate a message
    /// before passive listeners see it.
    pub fn preempt(&self, client: ClientId, name: &str, notify: Notify<P>) -> GroupId {
        let mut groups = self.groups.borrow_mut();
        let id = groups.find_or_create(name);
        if let Some(group) = groups.get_mut(id) {
            group.members.insert(0, Member { client, notify });
            tracing::debug!("{} preempted {} '{}'", client, id, name);
        }
        id
    }

    /// Leave a group
    ///
    /// Removes the first membership held by `client`. Unknown groups and
    /// non-members are ignored.
    pub fn leave(&self, group: GroupId, client: ClientId) {
        let mut groups = self.groups.borrow_mut();
        if let Some(g) = groups.get_mut(group) {
            if g.remove_first(client) {
                tracing::debug!("{} left {} '{}'", client, group, g.name);
            }
        }
    }

    /// Leave a group identified by name
    pub fn leave_by_name(&self, name: &str, client: ClientId) {
        if let Some(group) = self.find(name) {
            self.leave(group, client);
        }
    }

    /// Deliver a message to every member of a group except the sender
    ///
    /// Members are notified in list order with the same payload, so a
    /// member may rewrite it for those after it. If the group is already
    /// dispatching (a callback sent to its own group) the call returns
    /// without delivering anything.
    pub fn send(
        &self,
        group: GroupId,
        sender: Option<ClientId>,
        msg_type: MessageType,
        payload: &mut P,
    ) {
        {
            let mut groups = self.groups.borrow_mut();
            let Some(g) = groups.get_mut(group) else {
                tracing::trace!("Send to unknown {} ignored", group);
                return;
            };
            if g.sending {
                tracing::trace!(
                    "Dropped reentrant send of type {} to {} '{}'",
                    msg_type,
                    group,
                    g.name
                );
                return;
            }
            g.sending = true;
        }

        // Re-read the list each step: callbacks may join or leave meanwhile.
        let mut index = 0;
        while let Some(member) = self.member_at(group, index) {
            index += 1;
            if Some(member.client) == sender {
                continue;
            }
            tracing::trace!("Notify {} of type {} on {}", member.client, msg_type, group);
            (member.notify)(msg_type, payload);
        }

        if let Some(g) = self.groups.borrow_mut().get_mut(group) {
            g.sending = false;
        }
    }

    /// Deliver a message to every member of a group
    pub fn send_to_all(&self, group: GroupId, msg_type: MessageType, payload: &mut P) {
        self.send(group, None, msg_type, payload);
    }

    /// Number of groups created so far
    pub fn group_count(&self) -> usize {
        self.groups.borrow().len()
    }

    /// Number of members in a group, zero for unknown groups
    pub fn member_count(&self, group: GroupId) -> usize {
        self.groups
            .borrow()
            .get(group)
            .map_or(0, |g| g.members.len())
    }

    /// Members of a group in delivery order
    pub fn members(&self, group: GroupId) -> Vec<ClientId> {
        self.groups
            .borrow()
            .get(group)
            .map(|g| g.members.iter().map(|m| m.client).collect())
            .unwrap_or_default()
    }

    /// Name a group was created with
    pub fn group_name(&self, group: GroupId) -> Option<String> {
        self.groups.borrow().get(group).map(|g| g.name.clone())
    }

    /// Whether a send to this group is currently in progress
    pub fn is_sending(&self, group: GroupId) -> bool {
        self.groups.borrow().get(group).is_some_and(|g| g.sending)
    }

    /// Tear down every group and client
    ///
    /// Drops all members, which releases any state their callbacks
    /// captured (including references back to this messenger).
    pub fn shutdown(&self) {
        let groups = self.groups.borrow().len();
        // Take the members out first so their destructors run without a borrow held.
        let drained = std::mem::take(&mut *self.groups.borrow_mut());
        self.clients.borrow_mut().clear();
        drop(drained);
        tracing::debug!("Messenger shut down, dropped {} group(s)", groups);
    }

    fn member_at(&self, group: GroupId, index: usize) -> Option<Member<P>> {
        self.groups
            .borrow()
            .get(group)
            .and_then(|g| g.members.get(index))
            .cloned()
    }
}

impl<P> Default for Messenger<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> std::fmt::Debug for Messenger<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Messenger")
            .field("groups", &self.group_count())
            .field("client_capacity", &self.clients.borrow().capacity())
            .finish()
    }
}
