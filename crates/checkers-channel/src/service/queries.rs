//! # Query Surface
//!
//! Read-only lookups: exact-index game retrieval and the audit listing.

use super::ChannelService;
use crate::domain::entities::StoredGame;
use crate::domain::errors::{ChannelError, ChannelResult};
use crate::ports::inbound::ModuleQuery;
use crate::ports::outbound::{BlockClock, EventSink, PacketTransport, RulesEngine};
use crate::ports::store::StateBackend;

impl<B, R, T, C, E> ModuleQuery for ChannelService<B, R, T, C, E>
where
    B: StateBackend,
    R: RulesEngine,
    T: PacketTransport,
    C: BlockClock,
    E: EventSink,
{
    fn get_game(&self, index: &str) -> ChannelResult<Option<StoredGame>> {
        // The store reports a miss as an error; the query surface turns
        // it into an explicit None.
        match self.store.game(index) {
            Ok(game) => Ok(Some(game)),
            Err(ChannelError::GameNotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn list_records(&self) -> ChannelResult<Vec<String>> {
        Ok(self.store.list_records()?)
    }
}
