//! # Genesis Snapshot and Block Hooks
//!
//! Deterministic export of the module store into a portable document,
//! validation and import of such documents at bootstrap, and the
//! block-boundary liveness markers.

use super::ChannelService;
use crate::domain::entities::{
    port_capability_name, CapabilityToken, GenesisState, IndexedStoredGame, MAX_INDEX_LENGTH,
    PORT_ID,
};
use crate::domain::errors::{ChannelError, ChannelResult};
use crate::domain::msgs::{ModuleMsg, MsgResponse};
use crate::ports::inbound::ModuleLifecycle;
use crate::ports::outbound::{BlockClock, EventSink, PacketTransport, RulesEngine};
use crate::ports::store::StateBackend;
use std::collections::HashSet;
use tracing::info;

impl<B, R, T, C, E> ModuleLifecycle for ChannelService<B, R, T, C, E>
where
    B: StateBackend,
    R: RulesEngine,
    T: PacketTransport,
    C: BlockClock,
    E: EventSink,
{
    fn default_genesis(&self) -> GenesisState {
        GenesisState::default()
    }

    fn validate_genesis(&self, genesis: &GenesisState) -> ChannelResult<()> {
        genesis.params.validate()?;

        let mut unique: HashSet<&str> = HashSet::new();
        for indexed in &genesis.indexed_stored_game_list {
            let len = indexed.index.len();
            if len < 1 || len > MAX_INDEX_LENGTH {
                return Err(ChannelError::IndexTooLong {
                    index: indexed.index.clone(),
                    len,
                });
            }
            if !unique.insert(indexed.index.as_str()) {
                return Err(ChannelError::DuplicateIndex {
                    index: indexed.index.clone(),
                });
            }
            self.rules.validate_record(&indexed.stored_game)?;
        }
        Ok(())
    }

    fn init_genesis(&mut self, genesis: &GenesisState) -> ChannelResult<()> {
        // Bind the module's port once; a re-import keeps the existing
        // claim.
        let port_name = port_capability_name(PORT_ID);
        if !self.capabilities.contains(&port_name) {
            self.capabilities.claim(&port_name, CapabilityToken::mint())?;
        }

        // set_params re-validates even a pre-validated document.
        self.store.set_params(&genesis.params)?;

        for indexed in &genesis.indexed_stored_game_list {
            self.store.set_game(&indexed.index, &indexed.stored_game)?;
        }

        // Local bootstrap marker; not part of the document, so the
        // export round-trip stays exact.
        let marker = self.audit_marker("genesis state");
        self.store.insert_record(&marker)?;

        info!(
            "[checkers] genesis loaded: {} games",
            genesis.indexed_stored_game_list.len()
        );
        Ok(())
    }

    fn export_genesis(&self) -> ChannelResult<GenesisState> {
        let params = self.store.params()?;

        let mut indexed_stored_game_list = Vec::new();
        self.store.walk_games(None, |index, stored_game| {
            indexed_stored_game_list.push(IndexedStoredGame {
                index: index.to_string(),
                stored_game,
            });
            Ok(false)
        })?;

        Ok(GenesisState {
            params,
            indexed_stored_game_list,
        })
    }

    fn begin_block(&mut self) -> ChannelResult<()> {
        let marker = format!(
            "{} at {}",
            self.audit_marker("BeginBlocker"),
            self.clock.height()
        );
        self.store.insert_record(&marker)?;
        Ok(())
    }

    fn end_block(&mut self) -> ChannelResult<()> {
        let marker = format!(
            "{} at {}",
            self.audit_marker("EndBlocker"),
            self.clock.height()
        );
        self.store.insert_record(&marker)?;
        Ok(())
    }

    fn handle_msg(&mut self, msg: ModuleMsg) -> ChannelResult<MsgResponse> {
        match msg {
            ModuleMsg::CreateGame {
                creator,
                index,
                black,
                red,
            } => self.create_game(&creator, index, black, red),
            ModuleMsg::AddRecord { creator, value } => self.add_record(&creator, value),
        }
    }
}
