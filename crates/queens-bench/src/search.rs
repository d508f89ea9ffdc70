use std::sync::Barrier;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use queens_core::factorial::LARGEST_EXACT_BOARD;
use queens_core::partition::{StridePartition, WorkerTally, count_solutions};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Worker that owns the clock and reports the result.
pub const ROOT_RANK: usize = 0;

/// Upper bound on the thread pool size.
pub const MAX_WORKERS: usize = 1024;

/// Runs the stride-partitioned search on a fixed pool of scoped threads.
///
/// Every worker meets the others at a start barrier and an end barrier, even
/// when there is no board to search, and hands its tally to a collector over
/// a channel. The root worker's time between the two barriers is the run's
/// elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct SearchRunner {
    board_size: Option<usize>,
    workers: usize,
}

/// Result gathered after every worker has finished.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub board_size: Option<usize>,
    pub workers: usize,
    pub total_solutions: u64,
    pub elapsed: Duration,
    pub tallies: Vec<WorkerTally>,
}

impl SearchOutcome {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Lines printed by the root worker.
    pub fn render(&self) -> String {
        format!(
            "Program executed in {:8.3} ms\nTotal number of solutions found: {}\n\n",
            self.elapsed_ms(),
            self.total_solutions
        )
    }
}

impl SearchRunner {
    /// `board_size` of `None` runs the workers through both barriers without
    /// searching anything.
    pub fn new(board_size: Option<usize>, workers: usize) -> Result<Self, SearchError> {
        if workers == 0 {
            return Err(SearchError::NoWorkers);
        }

        if workers > MAX_WORKERS {
            return Err(SearchError::TooManyWorkers {
                requested: workers,
                max: MAX_WORKERS,
            });
        }

        if let Some(n) = board_size.filter(|&n| n as u64 > LARGEST_EXACT_BOARD) {
            warn!(
                board_size = n,
                limit = LARGEST_EXACT_BOARD,
                "board size exceeds the exact factorial range; counts will be wrong"
            );
        }

        Ok(Self {
            board_size,
            workers,
        })
    }

    pub fn run(&self) -> Result<SearchOutcome, SearchError> {
        let barrier = Barrier::new(self.workers);
        let (sender, receiver) = mpsc::channel();

        info!(
            board_size = ?self.board_size,
            workers = self.workers,
            "starting search"
        );

        let elapsed = thread::scope(|scope| -> Result<Duration, SearchError> {
            let mut handles = Vec::with_capacity(self.workers);
            let mut start_signals = Vec::with_capacity(self.workers);

            for rank in 0..self.workers {
                let (start_signal, start) = mpsc::channel();
                let sender = sender.clone();
                let barrier = &barrier;
                let board_size = self.board_size;
                let workers = self.workers;
                let spawned = thread::Builder::new()
                    .name(format!("queens-worker-{rank}"))
                    .spawn_scoped(scope, move || {
                        run_worker(rank, workers, board_size, barrier, start, sender)
                    });

                match spawned {
                    Ok(handle) => {
                        handles.push(handle);
                        start_signals.push(start_signal);
                    }
                    Err(source) => {
                        // Dropping the signals releases the spawned workers
                        // before they reach the barrier.
                        drop(start_signals);
                        for handle in handles {
                            let _ = handle.join();
                        }
                        return Err(SearchError::Spawn { rank, source });
                    }
                }
            }

            for start_signal in start_signals {
                let _ = start_signal.send(());
            }

            let mut root_elapsed = Duration::ZERO;
            for (rank, handle) in handles.into_iter().enumerate() {
                let elapsed = handle
                    .join()
                    .map_err(|_| SearchError::WorkerPanicked { rank })?;
                if rank == ROOT_RANK {
                    root_elapsed = elapsed;
                }
            }
            Ok(root_elapsed)
        })?;
        drop(sender);

        let mut tallies: Vec<WorkerTally> = receiver.iter().collect();
        tallies.sort_by_key(|tally| tally.rank);
        let total_solutions = tallies.iter().map(|tally| tally.solutions).sum();

        info!(
            board_size = ?self.board_size,
            workers = self.workers,
            total_solutions,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "search complete"
        );

        Ok(SearchOutcome {
            board_size: self.board_size,
            workers: self.workers,
            total_solutions,
            elapsed,
            tallies,
        })
    }
}

fn run_worker(
    rank: usize,
    workers: usize,
    board_size: Option<usize>,
    barrier: &Barrier,
    start: Receiver<()>,
    sender: Sender<WorkerTally>,
) -> Duration {
    if start.recv().is_err() {
        return Duration::ZERO;
    }

    barrier.wait();
    let started = Instant::now();

    if let Some(n) = board_size {
        let partition = StridePartition::for_board(n, rank, workers);
        let tally = count_solutions(n, &partition);
        debug!(
            target: "queens_bench::worker",
            rank,
            indices_scanned = tally.indices_scanned,
            solutions = tally.solutions,
            "worker finished"
        );
        if sender.send(tally).is_err() {
            warn!(rank, "collector closed before tally was sent");
        }
    }
    drop(sender);

    barrier.wait();
    started.elapsed()
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("at least one worker is required")]
    NoWorkers,
    #[error("worker {rank} panicked during the search")]
    WorkerPanicked { rank: usize },
    #[error("requested {requested} workers exceeds maximum of {max}")]
    TooManyWorkers { requested: usize, max: usize },
    #[error("failed to spawn worker {rank}: {source}")]
    Spawn {
        rank: usize,
        #[source]
        source: std::io::Error,
    },
}
