use queens_bench::search::{ROOT_RANK, SearchRunner};
use queens_core::partition::count_all;

#[test]
fn eight_queens_in_parallel() {
    let outcome = SearchRunner::new(Some(8), 4)
        .expect("runner")
        .run()
        .expect("search completes");
    assert_eq!(outcome.total_solutions, 92);
    assert_eq!(outcome.tallies[ROOT_RANK].rank, ROOT_RANK);
    let scanned: u64 = outcome.tallies.iter().map(|t| t.indices_scanned).sum();
    assert_eq!(scanned, 40_320);
}

#[test]
fn worker_count_does_not_change_totals() {
    for board_size in 0..=7 {
        let serial = count_all(board_size);
        for workers in [1, 3, 8] {
            let outcome = SearchRunner::new(Some(board_size), workers)
                .expect("runner")
                .run()
                .expect("search completes");
            assert_eq!(
                outcome.total_solutions, serial,
                "board_size={board_size} workers={workers}"
            );
        }
    }
}
