use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mailbox_chess::game_state::chess_types::{Color, CastlingRights, CASTLE_ALL};
use mailbox_chess::game_state::chess_rules::STARTING_LAYOUT;
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::move_generation::perft::perft;
use mailbox_chess::search::board_scoring::MaterialScorer;
use mailbox_chess::search::negamax::{find_best_move, SearchConfig};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    layout: [&'static str; 8],
    castling_rights: CastlingRights,
    expected_nodes: &'static [u64],
}

const KIWIPETE: [&str; 8] = [
    "bR -- -- -- bK -- -- bR",
    "bp -- bp bp bQ bp bB --",
    "bB bN -- -- bp bN bp --",
    "-- -- -- wp wN -- -- --",
    "-- bp -- -- wp -- -- --",
    "-- -- wN -- -- wQ -- bp",
    "wp wp wp wB wB wp wp wp",
    "wR -- -- -- wK -- -- wR",
];

const ROOK_ENDGAME: [&str; 8] = [
    "-- -- -- -- -- -- -- --",
    "-- -- bp -- -- -- -- --",
    "-- -- -- bp -- -- -- --",
    "wK wp -- -- -- -- -- bR",
    "-- wR -- -- -- bp -- bK",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- wp -- wp --",
    "-- -- -- -- -- -- -- --",
];

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        layout: STARTING_LAYOUT,
        castling_rights: CASTLE_ALL,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        layout: KIWIPETE,
        castling_rights: CASTLE_ALL,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        layout: ROOK_ENDGAME,
        castling_rights: 0,
        expected_nodes: &[14, 191, 2812],
    },
];

// Deeper counts stay free of promotions, which are always to a queen here.
const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        layout: STARTING_LAYOUT,
        castling_rights: CASTLE_ALL,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "position_2",
        layout: KIWIPETE,
        castling_rights: CASTLE_ALL,
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "position_3",
        layout: ROOK_ENDGAME,
        castling_rights: 0,
        expected_nodes: &[14, 191, 2812, 43_238],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("MAILBOX_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let game = GameState::from_layout(&case.layout, Color::Light, case.castling_rights)
            .expect("benchmark layout should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&mut game.clone(), depth);
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            let mut bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&mut bench_game), black_box(depth));
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("negamax_depth_2");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES_QUICK {
        let mut game = GameState::from_layout(&case.layout, Color::Light, case.castling_rights)
            .expect("benchmark layout should parse");
        let config = SearchConfig::default();
        let mut rng = StdRng::seed_from_u64(0);

        group.bench_function(case.name, |b| {
            b.iter(|| {
                let outcome = find_best_move(black_box(&mut game), &MaterialScorer, &config, &mut rng);
                black_box(outcome.nodes)
            });
        });
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft, bench_search);
criterion_main!(perft_benches);
