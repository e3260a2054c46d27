use anyhow::Result;
use crossbeam::channel::{Receiver, Sender, bounded};
use std::sync::Mutex;

/// Fixed-size worker pool fed from a static task list.
///
/// Each task is moved to exactly one worker and its result is moved back over
/// a channel, so workers share no mutable state. Results are returned in task
/// order regardless of completion order.
pub struct PoolExecutor<T, R> {
    max_workers: usize,
    buffer_size: usize,
    _phantom: std::marker::PhantomData<(T, R)>,
}

/// Context for worker threads to avoid too many function parameters
struct WorkerContext<'a, T, R, F> {
    worker_id: usize,
    work_rx: Receiver<(usize, T)>,
    result_tx: Sender<(usize, R)>,
    processor: &'a F,
}

impl<T, R> PoolExecutor<T, R>
where
    T: Send,
    R: Send,
{
    pub fn new(max_workers: usize) -> Self {
        let max_workers = max_workers.max(1);
        Self {
            max_workers,
            buffer_size: max_workers * 2,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Execute work items on the pool using a producer-consumer pattern
    pub fn execute<F>(&self, work_items: Vec<T>, processor: F) -> Result<Vec<R>>
    where
        F: Fn(T, usize) -> R + Sync,
    {
        if work_items.is_empty() {
            return Ok(Vec::new());
        }

        let actual_workers = std::cmp::min(self.max_workers, work_items.len());
        let total_items = work_items.len();
        let (work_tx, work_rx): (Sender<(usize, T)>, Receiver<(usize, T)>) =
            bounded(self.buffer_size);
        let (result_tx, result_rx): (Sender<(usize, R)>, Receiver<(usize, R)>) =
            bounded(self.buffer_size);

        tracing::debug!(
            "Dispatching {} tasks to {} pool workers",
            total_items,
            actual_workers
        );

        let processor = &processor;
        crossbeam::thread::scope(|s| -> Result<Vec<R>> {
            for worker_id in 0..actual_workers {
                let ctx = WorkerContext {
                    worker_id,
                    work_rx: work_rx.clone(),
                    result_tx: result_tx.clone(),
                    processor,
                };

                s.spawn(move |_| Self::worker_thread(ctx));
            }

            // Producer thread: send work to workers
            let work_tx_clone = work_tx.clone();
            s.spawn(move |_| {
                for task in work_items.into_iter().enumerate() {
                    if work_tx_clone.send(task).is_err() {
                        break; // Workers dropped
                    }
                }
            });

            // Drop our channel ends so workers and the collector see disconnects
            drop(work_tx);
            drop(work_rx);
            drop(result_tx);

            Self::collect_results(result_rx, total_items)
        })
        .map_err(|_| anyhow::anyhow!("Thread panic occurred during pool execution"))?
    }

    fn worker_thread<F>(ctx: WorkerContext<'_, T, R, F>)
    where
        F: Fn(T, usize) -> R,
    {
        while let Ok((index, work_item)) = ctx.work_rx.recv() {
            let result = (ctx.processor)(work_item, ctx.worker_id);

            if ctx.result_tx.send((index, result)).is_err() {
                break; // Receiver dropped
            }
        }
        tracing::trace!("Pool worker {} finished", ctx.worker_id);
    }

    /// Gather results into task order
    fn collect_results(result_rx: Receiver<(usize, R)>, total_items: usize) -> Result<Vec<R>> {
        let mut slots: Vec<Option<R>> = std::iter::repeat_with(|| None).take(total_items).collect();
        let mut items_processed = 0;

        while let Ok((index, result)) = result_rx.recv() {
            slots[index] = Some(result);
            items_processed += 1;

            if items_processed >= total_items {
                break;
            }
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| anyhow::anyhow!("Pool task {} produced no result", index))
            })
            .collect()
    }
}

/// One thread per work item, writing into a pre-sized slot vector.
///
/// The slot vector is allocated before any thread starts; each thread owns
/// exactly one index and takes the lock only to store its result.
pub struct ThreadPerItemExecutor;

impl ThreadPerItemExecutor {
    pub fn execute<T, R, F>(work_items: Vec<T>, processor: F) -> Result<Vec<R>>
    where
        T: Send,
        R: Send,
        F: Fn(T, usize) -> R + Sync,
    {
        let total_items = work_items.len();
        let slots: Mutex<Vec<Option<R>>> =
            Mutex::new(std::iter::repeat_with(|| None).take(total_items).collect());

        tracing::debug!("Spawning {} item threads", total_items);

        let processor = &processor;
        let slots_ref = &slots;
        crossbeam::thread::scope(|s| {
            for (index, work_item) in work_items.into_iter().enumerate() {
                s.spawn(move |_| {
                    let result = processor(work_item, index);
                    match slots_ref.lock() {
                        Ok(mut guard) => guard[index] = Some(result),
                        Err(poisoned) => poisoned.into_inner()[index] = Some(result),
                    }
                });
            }
        })
        .map_err(|_| anyhow::anyhow!("Thread panic occurred during threaded execution"))?;

        let slots = slots
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| anyhow::anyhow!("Thread for item {} produced no result", index))
            })
            .collect()
    }
}

/// Sequential execution strategy for comparison
pub struct SequentialExecutor;

impl SequentialExecutor {
    pub fn execute<T, R, F>(work_items: Vec<T>, processor: F) -> Vec<R>
    where
        F: Fn(T, usize) -> R,
    {
        work_items
            .into_iter()
            .enumerate()
            .map(|(index, work_item)| processor(work_item, index))
            .collect()
    }
}

/// Execution strategy enum for choosing how work items are run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    Sequential,
    ThreadPerItem,
    Pool { workers: usize },
}

impl ExecutionStrategy {
    /// Run every work item and return results in the order the items were given.
    ///
    /// The `usize` passed to the processor is the item index for sequential
    /// and thread-per-item execution, and the worker id for the pool.
    pub fn execute<T, R, F>(&self, work_items: Vec<T>, processor: F) -> Result<Vec<R>>
    where
        T: Send,
        R: Send,
        F: Fn(T, usize) -> R + Sync,
    {
        match self {
            ExecutionStrategy::Sequential => {
                Ok(SequentialExecutor::execute(work_items, processor))
            }
            ExecutionStrategy::ThreadPerItem => {
                ThreadPerItemExecutor::execute(work_items, processor)
            }
            ExecutionStrategy::Pool { workers } => {
                PoolExecutor::new(*workers).execute(work_items, processor)
            }
        }
    }
}
