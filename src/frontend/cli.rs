//! Interactive command line front-end
//!
//! Registers one client, listens to every tag and reads commands line by
//! line. Changes published by other clients are echoed after each command.

use std::io::{self, BufRead, Write};
use std::rc::Rc;

use retrobus_core::{shared_map, shared_vec, ClientId, SharedHashMap, SharedVec};
use retrobus_settings::SettingStore;
use retrobus_ui::{UiBus, UiTag};

use super::command::{describe_value, Command, HELP};

/// Command line front-end attached to a [`UiBus`]
pub struct CliFrontend {
    bus: Rc<UiBus>,
    client: ClientId,
    echo: bool,
    pending: SharedVec<(UiTag, i32)>,
    last_seen: SharedHashMap<UiTag, i32>,
}

impl CliFrontend {
    /// Register with the bus and join every tag
    pub fn attach(bus: Rc<UiBus>, echo: bool) -> Self {
        let client = bus.register();
        let pending = shared_vec();
        let last_seen = shared_map();

        for tag in UiTag::ALL {
            let pending = pending.clone();
            let last_seen = last_seen.clone();
            bus.tag_join(client, *tag, move |tag, msg| {
                last_seen.borrow_mut().insert(tag, msg.value);
                pending.borrow_mut().push((tag, msg.value));
            });
        }
        tracing::debug!("CLI front-end attached as {}", client);

        Self {
            bus,
            client,
            echo,
            pending,
            last_seen,
        }
    }

    /// Client id of this front-end
    pub fn client(&self) -> ClientId {
        self.client
    }

    /// Last value observed for a tag, from any publisher
    pub fn last_seen(&self, tag: UiTag) -> Option<i32> {
        self.last_seen.borrow().get(&tag).copied()
    }

    /// Read and execute commands until end of input or `quit`
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        out: &mut W,
        store: &SettingStore,
    ) -> io::Result<()> {
        self.flush_changes(out, store)?;
        for line in input.lines() {
            let line = line?;
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(out, "error: {}", e)?;
                    continue;
                }
            };
            if !self.execute(command, out, store)? {
                break;
            }
            self.flush_changes(out, store)?;
        }
        out.flush()
    }

    /// Execute one command. Returns false when the front-end should stop.
    pub fn execute<W: Write>(
        &self,
        command: Command,
        out: &mut W,
        store: &SettingStore,
    ) -> io::Result<bool> {
        match command {
            Command::Set { tag, value } => {
                // Sent as this client, so its own listener does not record it
                let msg = self.bus.update_state(Some(self.client), tag, value, None);
                let seen = store.value(tag).unwrap_or(msg.value);
                self.last_seen.borrow_mut().insert(tag, seen);
                writeln!(out, "{} = {}", tag, describe_value(msg.value, min_of(store, tag)))?;
            }
            Command::Get(tag) => match store.value(tag).or_else(|| self.last_seen(tag)) {
                Some(value) => {
                    writeln!(out, "{} = {}", tag, describe_value(value, min_of(store, tag)))?
                }
                None => writeln!(out, "{} is unset", tag)?,
            },
            Command::List => {
                for tag in store.tags() {
                    let value = store
                        .value(tag)
                        .map_or_else(|| "-".to_string(), |v| describe_value(v, min_of(store, tag)));
                    match store.spec(tag) {
                        Some(spec) => {
                            writeln!(out, "{:<18} {:>5}  [{}..{}]", tag, value, spec.min, spec.max)?
                        }
                        None => writeln!(out, "{:<18} {:>5}", tag, value)?,
                    }
                }
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Unregister from the bus
    pub fn detach(self) {
        self.bus.unregister(self.client);
        tracing::debug!("CLI front-end {} detached", self.client);
    }

    fn flush_changes<W: Write>(&self, out: &mut W, store: &SettingStore) -> io::Result<()> {
        let changes = std::mem::take(&mut *self.pending.borrow_mut());
        if self.echo {
            for (tag, value) in changes {
                writeln!(out, "* {} -> {}", tag, describe_value(value, min_of(store, tag)))?;
            }
        }
        Ok(())
    }
}

fn min_of(store: &SettingStore, tag: UiTag) -> Option<i32> {
    store.spec(tag).map(|spec| spec.min)
}
