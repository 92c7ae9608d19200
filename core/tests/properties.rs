use twenty48_core::*;

fn tiles(game: &Game) -> Vec<Tile> {
    game.state().iter().copied().collect()
}

/// Plays a seeded game until it stops changing, checking the per-move invariants along the way.
fn play_checked(seed: u64) -> Game {
    let mut game = Game::new(seed);
    game.start();

    for step in 0..2_000usize {
        if !game.status().is_playing() {
            break;
        }

        let direction = Direction::ALL[(seed as usize + step * 7) % 4];
        let before = tiles(&game);
        let score_before = game.score();

        let mut expected_grid = game.state().clone();
        let expected = slide_grid(&mut expected_grid, direction);
        let expected_tiles: Vec<Tile> = expected_grid.iter().copied().collect();
        // merging keeps the board total
        assert_eq!(expected_tiles.iter().sum::<Tile>(), before.iter().sum::<Tile>());

        let outcome = game.slide(direction);
        let after = tiles(&game);

        assert!(after.iter().all(|&t| is_valid_tile(t)), "seed {seed}: {after:?}");
        assert_eq!(outcome.has_update(), expected.changed, "seed {seed}");
        assert_eq!(game.score() - score_before, expected.gained, "seed {seed}");

        if outcome.has_update() {
            // every tile sits where the slide put it, apart from one new tile on an emptied cell
            let differing: Vec<usize> = (0..after.len())
                .filter(|&i| after[i] != expected_tiles[i])
                .collect();
            assert_eq!(differing.len(), 1, "seed {seed}: {expected_tiles:?} -> {after:?}");
            let spawned = differing[0];
            assert_eq!(expected_tiles[spawned], 0);
            assert!(after[spawned] == 2 || after[spawned] == 4);
        } else {
            assert_eq!(after, before);
        }
    }

    game
}

#[test]
fn seeded_games_keep_invariants() {
    for seed in 0..32 {
        let game = play_checked(seed);
        if game.status() == GameStatus::Lose {
            assert!(!game.has_moves());
        }
    }
}

#[test]
fn status_always_matches_board() {
    for seed in 100..116 {
        let game = play_checked(seed);
        match game.status() {
            GameStatus::Win => assert!(game.max_tile() >= 2048),
            GameStatus::Lose => assert_eq!(game.empty_count(), 0),
            GameStatus::Playing => assert!(game.has_moves()),
            GameStatus::Idle => panic!("seed {seed} never started"),
        }
    }
}

#[test]
fn restart_always_yields_two_fresh_tiles() {
    let mut game = Game::new(5);
    game.start();
    for direction in Direction::ALL.iter().cycle().take(30) {
        game.slide(*direction);
    }

    for _ in 0..20 {
        game.restart();

        let spawned: Vec<Tile> = tiles(&game).into_iter().filter(|&t| t != 0).collect();
        assert_eq!(spawned.len(), 2);
        assert!(spawned.iter().all(|&t| t == 2 || t == 4));
        assert_eq!(game.score(), 0);
        assert_eq!(game.status(), GameStatus::Playing);
    }
}

#[test]
fn wasted_move_keeps_board_score_and_status() {
    let state = [[2, 4, 8, 16], [4, 8, 16, 32], [0; 4], [0; 4]];
    let mut game = Game::with_state(state, 11).unwrap();
    let before = tiles(&game);

    // both rows already sit against the top edge with no vertical pairs
    assert_eq!(game.move_up(), MoveOutcome::NoChange);
    assert_eq!(game.move_left(), MoveOutcome::NoChange);
    assert_eq!(tiles(&game), before);
    assert_eq!(game.score(), 0);
    assert_eq!(game.status(), GameStatus::Idle);
}

#[test]
fn getters_reflect_parsed_directions() {
    let mut game = Game::with_state([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]], 8).unwrap();

    let direction: Direction = "a".parse().unwrap();
    assert_eq!(game.slide(direction), MoveOutcome::Moved);
    assert_eq!(game.tile_at((0, 0)), 2);
    assert_eq!(game.state()[[0, 0]], 2);
}
