use criterion::{criterion_group, criterion_main, Criterion};
use puzzle_solver::search::astar::AStar;
use puzzle_solver::search::bfs::Bfs;
use puzzle_solver::search::board::Board;
use puzzle_solver::search::heuristic::{Heuristic, ManhattanDistance, MisplacedTiles};
use puzzle_solver::search::solver::Search;
use std::hint::black_box;
use std::time::Duration;

/// A fixed set of solvable instances of increasing difficulty, produced
/// by seeded random walks so every run benchmarks the same boards.
fn instances() -> Vec<Board> {
    fastrand::seed(42);
    [8, 14, 20, 30]
        .iter()
        .map(|&moves| Board::scrambled(moves))
        .collect()
}

fn bench_heuristics(c: &mut Criterion) {
    let goal = Board::goal();
    let boards = instances();

    let mut group = c.benchmark_group("heuristic_estimate");
    group.bench_function("misplaced_tiles", |b| {
        b.iter(|| {
            for board in &boards {
                black_box(MisplacedTiles.estimate(black_box(board), &goal));
            }
        });
    });
    group.bench_function("manhattan_distance", |b| {
        b.iter(|| {
            for board in &boards {
                black_box(ManhattanDistance.estimate(black_box(board), &goal));
            }
        });
    });
    group.finish();
}

fn bench_neighbors(c: &mut Criterion) {
    let boards = instances();

    c.bench_function("neighbors", |b| {
        b.iter(|| {
            for board in &boards {
                black_box(board.neighbors());
            }
        });
    });
}

fn bench_astar(c: &mut Criterion) {
    let goal = Board::goal();
    let boards = instances();

    let mut group = c.benchmark_group("astar");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("manhattan", |b| {
        b.iter(|| {
            for &board in &boards {
                let solution = AStar::new(board, goal, ManhattanDistance)
                    .search()
                    .expect("seeded scrambles are solvable");
                black_box(solution);
            }
        });
    });
    group.bench_function("misplaced", |b| {
        b.iter(|| {
            for &board in &boards {
                let solution = AStar::new(board, goal, MisplacedTiles)
                    .search()
                    .expect("seeded scrambles are solvable");
                black_box(solution);
            }
        });
    });
    group.finish();
}

fn bench_bfs(c: &mut Criterion) {
    let goal = Board::goal();
    // BFS fans out fast; keep it to shallow instances.
    fastrand::seed(42);
    let boards: Vec<Board> = [6, 10, 14].iter().map(|&m| Board::scrambled(m)).collect();

    let mut group = c.benchmark_group("bfs");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("shallow_scrambles", |b| {
        b.iter(|| {
            for &board in &boards {
                let solution = Bfs::new(board, goal)
                    .search()
                    .expect("seeded scrambles are solvable");
                black_box(solution);
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_heuristics,
    bench_neighbors,
    bench_astar,
    bench_bfs
);
criterion_main!(benches);
