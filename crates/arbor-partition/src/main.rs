// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Command-line driver for the partition solver.
//!
//! Usage: `arbor-partition PROBLEM_FILE [OPTIONS]`
//!
//! Options: `-timeout=N` (iteration cap), `-timeoutMillis=N` (wall-clock cap
//! in milliseconds), `-countlogger`, `-histlogger`, `-strengthen`, `-evts=N`,
//! `-stackdepth=N`, `-maxstackdepth=N`. Unrecognized arguments are silently
//! ignored.

use arbor_partition::instance::PartitionInstance;
use arbor_partition::node::PartitionNodeGenerator;
use arbor_partition::solver::{PartitionSolution, PartitionSolver};
use arbor_search::logger::{
    options, CountLogger, HistLogger, NoLogger, SearchLogger, TimeoutError, TraceOptions,
};
use std::process::ExitCode;
use std::time::Instant;

type IntegerType = i64;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(path) = args.first() else {
        return usage();
    };

    let instance = match PartitionInstance::<IntegerType>::from_path(path) {
        Ok(instance) => instance,
        Err(_) => return usage(),
    };

    println!("arbor-partition {}", path);
    let solver = PartitionSolver::new(&instance);
    println!("Shortcircuit objective: {}", solver.best_case_target());

    let trace = TraceOptions::from_args(&args);
    let iter_timeout = options::parse_iter_timeout(&args);
    let wall_timeout = options::parse_wall_timeout(&args);

    let started = Instant::now();
    let outcome = if options::parse_hist_logger(&args) {
        run(&solver, HistLogger::with_trace(trace), iter_timeout, wall_timeout)
    } else if options::parse_count_logger(&args) {
        run(&solver, CountLogger::with_trace(trace), iter_timeout, wall_timeout)
    } else {
        run(&solver, NoLogger::new(), iter_timeout, wall_timeout)
    };
    let elapsed_millis = started.elapsed().as_millis();

    match outcome {
        Ok(solution) => {
            report(&instance, &solution);
            println!("Time: {}ms", elapsed_millis);
            ExitCode::SUCCESS
        }
        Err(TimeoutError { .. }) => {
            println!("Timeout: {}ms", elapsed_millis);
            ExitCode::SUCCESS
        }
    }
}

fn run<'a, L>(
    solver: &PartitionSolver<'a, IntegerType>,
    mut logger: L,
    iter_timeout: i64,
    wall_timeout: i64,
) -> Result<PartitionSolution<IntegerType>, TimeoutError>
where
    L: SearchLogger<PartitionNodeGenerator<'a, IntegerType>>,
{
    logger.set_iter_timeout(iter_timeout);
    logger.set_wall_timeout(wall_timeout);
    solver.solve(&mut logger)
}

fn report(instance: &PartitionInstance<IntegerType>, solution: &PartitionSolution<IntegerType>) {
    println!("Partition: {:?}", solution.assignment);
    println!("Sums: {:?}", solution.sums);
    match instance.known_best() {
        Some(best) if best == solution.max_sum => println!("MaxSum: {} OK", solution.max_sum),
        Some(_) => println!("MaxSum: {} WRONG", solution.max_sum),
        None => println!("MaxSum: {}", solution.max_sum),
    }
}

fn usage() -> ExitCode {
    println!("Usage: arbor-partition PROBLEM_FILE [OPTIONS]");
    ExitCode::FAILURE
}
