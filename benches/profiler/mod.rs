// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

/// `BRANCHGRID_BENCH_*` override, clamped to `range`.
fn tuned<T>(suffix: &str, default: T, range: (T, T)) -> T
where
    T: FromStr + Ord + Copy,
{
    std::env::var(format!("BRANCHGRID_BENCH_{suffix}"))
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
        .clamp(range.0, range.1)
}

/// Criterion with a flamegraph profiler attached (`cargo bench -- --profile-time <secs>`).
pub fn criterion() -> Criterion {
    let frequency = tuned::<i32>("PROFILE_FREQ", 100, (1, 1000));
    let samples = tuned::<usize>("SAMPLES", 50, (10, 200));
    let warmup = tuned::<u64>("WARMUP_SECS", 2, (1, 60));
    let measurement = tuned::<u64>("MEASUREMENT_SECS", 5, (1, 120));

    Criterion::default()
        .sample_size(samples)
        .warm_up_time(Duration::from_secs(warmup))
        .measurement_time(Duration::from_secs(measurement))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
