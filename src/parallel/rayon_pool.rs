// rayon global pool setup

/// Size rayon's global pool once; `None` uses one thread per logical CPU.
///
/// Later calls leave the existing pool in place. Returns the thread count
/// of the pool actually in use.
pub fn init_thread_pool(threads: Option<usize>) -> usize {
    let wanted = threads.unwrap_or_else(num_cpus::get).max(1);
    if rayon::ThreadPoolBuilder::new()
        .num_threads(wanted)
        .build_global()
        .is_err()
    {
        log::debug!("rayon pool already initialised, keeping {} threads", rayon::current_num_threads());
    }
    rayon::current_num_threads()
}

/// Threads available to parallel kernels.
pub fn num_threads() -> usize {
    rayon::current_num_threads()
}
