//! # Genesis Flow
//!
//! Exporting one chain's module store and bootstrapping a second chain
//! from the snapshot, plus the validation gates that keep bad documents
//! out.

#[cfg(test)]
mod tests {
    use crate::integration::harness::chain;
    use checkers_channel::{
        port_capability_name, ChannelError, GenesisState, IndexedStoredGame, ModuleLifecycle,
        ModuleMsg, ModuleQuery, MsgResponse, StoreError, StoredGame, MAX_INDEX_LENGTH, PORT_ID,
    };

    fn create_game(service: &mut crate::integration::harness::TestService, index: &str) {
        let response = service
            .handle_msg(ModuleMsg::CreateGame {
                creator: "alice".to_string(),
                index: index.to_string(),
                black: "alice".to_string(),
                red: "bob".to_string(),
            })
            .unwrap();
        assert!(matches!(response, MsgResponse::GameCreated { .. }));
    }

    #[test]
    fn test_snapshot_bootstraps_a_fresh_chain() {
        let mut source = chain("ok");
        create_game(&mut source, "game-2");
        create_game(&mut source, "game-1");

        let snapshot = source.export_genesis().unwrap();
        assert_eq!(snapshot.indexed_stored_game_list.len(), 2);
        // Deterministic export order.
        assert_eq!(snapshot.indexed_stored_game_list[0].index, "game-1");

        let mut target = chain("ok");
        target.validate_genesis(&snapshot).unwrap();
        target.init_genesis(&snapshot).unwrap();

        assert_eq!(
            target.get_game("game-1").unwrap(),
            source.get_game("game-1").unwrap()
        );
        assert_eq!(
            target.get_game("game-2").unwrap(),
            source.get_game("game-2").unwrap()
        );

        // Bootstrap binds the port on the new chain.
        assert!(target
            .capabilities()
            .contains(&port_capability_name(PORT_ID)));

        // Bootstrap leaves a local audit marker outside the document.
        let records = target.list_records().unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].ends_with("by genesis state"));

        // Re-exporting the target matches the imported games exactly.
        let round_trip = target.export_genesis().unwrap();
        assert_eq!(
            round_trip.indexed_stored_game_list,
            snapshot.indexed_stored_game_list
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_indexes() {
        let mut source = chain("ok");
        create_game(&mut source, "abc");
        let mut snapshot = source.export_genesis().unwrap();
        let duplicate = snapshot.indexed_stored_game_list[0].clone();
        snapshot.indexed_stored_game_list.push(duplicate);

        let target = chain("ok");
        let err = target.validate_genesis(&snapshot).unwrap_err();
        assert!(matches!(err, ChannelError::DuplicateIndex { index } if index == "abc"));
    }

    #[test]
    fn test_validate_rejects_oversized_index() {
        let target = chain("ok");
        let snapshot = GenesisState {
            indexed_stored_game_list: vec![IndexedStoredGame {
                index: "g".repeat(MAX_INDEX_LENGTH + 1),
                stored_game: StoredGame {
                    board: "*b*b".to_string(),
                    turn: "b".to_string(),
                    black: "alice".to_string(),
                    red: "bob".to_string(),
                },
            }],
            ..GenesisState::default()
        };

        let err = target.validate_genesis(&snapshot).unwrap_err();
        assert!(matches!(err, ChannelError::IndexTooLong { len, .. } if len == 257));
    }

    #[test]
    fn test_validate_consults_rules_engine() {
        let target = chain("ok");
        let snapshot = GenesisState {
            indexed_stored_game_list: vec![IndexedStoredGame {
                index: "broken".to_string(),
                stored_game: StoredGame {
                    board: String::new(),
                    turn: "b".to_string(),
                    black: "alice".to_string(),
                    red: "bob".to_string(),
                },
            }],
            ..GenesisState::default()
        };

        let err = target.validate_genesis(&snapshot).unwrap_err();
        assert!(matches!(err, ChannelError::Engine { .. }));
    }

    #[test]
    fn test_block_hooks_leave_an_audit_trail() {
        let mut service = chain("ok");
        service.begin_block().unwrap();
        service.end_block().unwrap();
        service.clock_mut().set_height(2);
        service.begin_block().unwrap();

        let records = service.list_records().unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().any(|r| r.ends_with("by BeginBlocker at 1")));
        assert!(records.iter().any(|r| r.ends_with("by EndBlocker at 1")));
        assert!(records.iter().any(|r| r.ends_with("by BeginBlocker at 2")));
    }

    #[test]
    fn test_backend_write_failure_surfaces() {
        let mut service = chain("ok");
        service.store_mut().backend_mut().set_fail_writes(true);

        let err = service.begin_block().unwrap_err();
        assert!(matches!(
            err,
            ChannelError::Store(StoreError::Backend { .. })
        ));
    }
}
