//! Tag-indexed wrapper around the messenger.
//!
//! One group is created per [`UiTag`] when the bus is built. Front-ends and
//! subsystems then join, preempt and publish by tag.

use retrobus_core::{notify, ClientId, GroupId, Messenger, Notify};

use crate::state::{StateData, StateMessage};
use crate::tag::UiTag;

/// UI state bus: a [`Messenger`] carrying [`StateMessage`]s, with one group
/// per tag.
///
/// Wrap it in an `Rc` when callbacks need to publish further changes.
pub struct UiBus {
    messenger: Messenger<StateMessage>,
    tag_groups: Box<[GroupId]>,
}

impl UiBus {
    /// Create the bus and materialise a group for every tag
    pub fn new() -> Self {
        let messenger: Messenger<StateMessage> = Messenger::new();
        let tag_groups: Box<[GroupId]> = UiTag::ALL
            .iter()
            .map(|tag| messenger.join(None, &tag.group_name(), None))
            .collect();
        tracing::debug!("UI bus ready with {} tag groups", tag_groups.len());
        Self {
            messenger,
            tag_groups,
        }
    }

    /// The underlying messenger, for name-keyed groups outside the tag space
    pub fn messenger(&self) -> &Messenger<StateMessage> {
        &self.messenger
    }

    /// Register a client
    pub fn register(&self) -> ClientId {
        self.messenger.register()
    }

    /// Unregister a client, leaving every tag it joined
    pub fn unregister(&self, client: ClientId) {
        self.messenger.unregister(client);
    }

    /// Group backing a tag
    pub fn group_of(&self, tag: UiTag) -> GroupId {
        self.tag_groups[tag.index()]
    }

    /// Listen to a tag
    pub fn tag_join<F>(&self, client: ClientId, tag: UiTag, callback: F) -> GroupId
    where
        F: Fn(UiTag, &mut StateMessage) + 'static,
    {
        self.messenger
            .join(Some(client), &tag.group_name(), Some(tag_notify(tag, callback)))
    }

    /// Listen to a tag ahead of every other member
    ///
    /// Intended for the component that owns the state: it sees requests
    /// first and may rewrite the message before listeners get it.
    pub fn tag_preempt<F>(&self, client: ClientId, tag: UiTag, callback: F) -> GroupId
    where
        F: Fn(UiTag, &mut StateMessage) + 'static,
    {
        self.messenger
            .preempt(client, &tag.group_name(), tag_notify(tag, callback))
    }

    /// Stop listening to a tag
    pub fn tag_leave(&self, tag: UiTag, client: ClientId) {
        self.messenger.leave(self.group_of(tag), client);
    }

    /// Publish a state change
    ///
    /// Every member of the tag's group except `client` is notified before
    /// this returns. The message as left by the last member is returned, so
    /// callers can see what an owner resolved their request to.
    pub fn update_state(
        &self,
        client: Option<ClientId>,
        tag: UiTag,
        value: i32,
        data: Option<StateData>,
    ) -> StateMessage {
        let mut msg = StateMessage { value, data };
        tracing::trace!("update_state {} = {} from {:?}", tag, value, client);
        self.messenger
            .send(self.group_of(tag), client, tag.value(), &mut msg);
        msg
    }

    /// Tear the bus down, dropping every member callback
    pub fn shutdown(&self) {
        self.messenger.shutdown();
    }
}

impl Default for UiBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UiBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiBus")
            .field("messenger", &self.messenger)
            .field("tags", &self.tag_groups.len())
            .finish()
    }
}

/// Adapt a tag callback to the messenger's callback shape.
fn tag_notify<F>(tag: UiTag, callback: F) -> Notify<StateMessage>
where
    F: Fn(UiTag, &mut StateMessage) + 'static,
{
    notify(move |msg_type, msg: &mut StateMessage| {
        assert_eq!(
            msg_type,
            tag.value(),
            "message type {msg_type} delivered to {tag} listener"
        );
        callback(tag, msg);
    })
}
