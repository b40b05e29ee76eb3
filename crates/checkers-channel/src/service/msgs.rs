//! # Module Message Handlers
//!
//! Bodies behind `handle_msg`: game creation and audit-record insertion.

use super::ChannelService;
use crate::domain::entities::{StoredGame, MAX_INDEX_LENGTH};
use crate::domain::errors::{ChannelError, ChannelResult};
use crate::domain::msgs::MsgResponse;
use crate::ports::outbound::{BlockClock, EventSink, PacketTransport, RulesEngine};
use crate::ports::store::StateBackend;
use tracing::info;

impl<B, R, T, C, E> ChannelService<B, R, T, C, E>
where
    B: StateBackend,
    R: RulesEngine,
    T: PacketTransport,
    C: BlockClock,
    E: EventSink,
{
    pub(crate) fn create_game(
        &mut self,
        creator: &str,
        index: String,
        black: String,
        red: String,
    ) -> ChannelResult<MsgResponse> {
        let len = index.len();
        if len < 1 || len > MAX_INDEX_LENGTH {
            return Err(ChannelError::IndexTooLong { index, len });
        }
        if self.store.has_game(&index)? {
            return Err(ChannelError::GameExists { index });
        }

        let position = self.rules.initial_position();
        let game = StoredGame {
            board: position.board,
            turn: position.turn,
            black,
            red,
        };
        self.rules.validate_record(&game)?;
        self.store.set_game(&index, &game)?;

        info!("[checkers] game {index} created by {creator}");
        Ok(MsgResponse::GameCreated { index })
    }

    pub(crate) fn add_record(&mut self, creator: &str, value: String) -> ChannelResult<MsgResponse> {
        self.store.insert_record(&value)?;
        info!("[checkers] record added by {creator}");
        Ok(MsgResponse::RecordAdded { value })
    }
}
