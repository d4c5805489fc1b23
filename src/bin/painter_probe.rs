use std::env;
use std::io::{self, Write};
use std::time::Instant;

use partition_dp::{PartitionSolver, PartitionValue, Strategy};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// `(expected, painters, boards)`
const SAMPLES: &[(PartitionValue, usize, &[i64])] = &[
    (20, 3, &[10, 10, 10, 10]),
    (20, 2, &[10, 10, 10, 10]),
    (60, 2, &[10, 20, 30, 40]),
    (90, 3, &[10, 20, 60, 50, 30, 40]),
    (5, 7, &[5]),
    (31, 1, &[3, 1, 4, 1, 5, 9, 2, 6]),
];

const SCALING_SIZES: &[usize] = &[8, 12, 16, 64, 256, 1024];
const SCALING_PAINTERS: usize = 4;

const USAGE: &str = "\
Usage: cargo run --bin painter_probe [-- <options>]

Options:
  --format <csv|json>        Output format (default: csv)
  --recursive-limit <N>      Largest board count given to the recursive strategy (default: 12)
  -h, --help                 Print this help message
";

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(Some(opts)) => opts,
        Ok(None) => {
            print!("{USAGE}");
            return;
        }
        Err(err) => {
            eprintln!("painter_probe: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let mut probe = Probe {
        options,
        sys: System::new(),
        runs: Vec::new(),
    };

    eprintln!("painter's partition: every strategy, samples then scaling (k = {SCALING_PAINTERS})");
    for &(expected, k, boards) in SAMPLES {
        probe.run_all(&format!("k={k} boards={boards:?}"), boards, k, expected);
    }
    for &len in SCALING_SIZES {
        let boards = deterministic_boards(len);
        // the memoized solver is the reference for generated boards
        match partition_dp::memoized_partition(&boards, len, SCALING_PAINTERS) {
            Ok(expected) => {
                probe.run_all(&format!("n={len} k={SCALING_PAINTERS}"), &boards, SCALING_PAINTERS, expected)
            }
            Err(err) => eprintln!("  reference failed for n={len}: {err}"),
        }
    }

    let failed = probe.summarize();
    let stdout = io::stdout();
    if let Err(err) = probe.options.format.write(&mut stdout.lock(), &probe.runs) {
        eprintln!("painter_probe output error: {err}");
        std::process::exit(1);
    }
    if failed > 0 {
        std::process::exit(1);
    }
}

#[derive(Debug, PartialEq)]
struct Options {
    format: OutputFormat,
    recursive_limit: usize,
}

impl Options {
    /// `Ok(None)` means help was requested.
    fn parse<I, T>(args: I) -> Result<Option<Self>, String>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut options = Options {
            format: OutputFormat::Csv,
            recursive_limit: 12,
        };
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            if arg == "-h" || arg == "--help" {
                return Ok(None);
            }
            let (key, inline) = match arg.split_once('=') {
                Some((key, value)) => (key.to_string(), Some(value.to_string())),
                None => (arg, None),
            };
            let mut value = || {
                inline
                    .clone()
                    .or_else(|| args.next())
                    .ok_or_else(|| format!("missing value after {key}"))
            };
            match key.as_str() {
                "--format" => options.format = value()?.parse()?,
                "--recursive-limit" => {
                    options.recursive_limit = value()?
                        .parse()
                        .map_err(|_| "recursive limit must be a non-negative integer".to_string())?
                }
                _ => return Err(format!("unrecognized argument '{key}'")),
            }
        }
        Ok(Some(options))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum OutputFormat {
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }
}

impl OutputFormat {
    fn write(self, out: &mut impl Write, runs: &[Run]) -> io::Result<()> {
        match self {
            OutputFormat::Csv => {
                writeln!(out, "strategy,case,answer,wall_s,rss_delta_kib,outcome")?;
                for run in runs {
                    writeln!(
                        out,
                        "{},\"{}\",{},{:.6},{},\"{}\"",
                        run.strategy,
                        run.case,
                        run.answer.map(|v| v.to_string()).unwrap_or_default(),
                        run.wall_s,
                        run.rss_delta_kib,
                        run.outcome
                    )?;
                }
            }
            OutputFormat::Json => {
                let rows: Vec<String> = runs
                    .iter()
                    .map(|run| {
                        format!(
                            "  {{\"strategy\":\"{}\",\"case\":\"{}\",\"answer\":{},\"wall_s\":{:.6},\"rss_delta_kib\":{},\"outcome\":\"{}\"}}",
                            run.strategy,
                            run.case,
                            run.answer.map_or("null".to_string(), |v| v.to_string()),
                            run.wall_s,
                            run.rss_delta_kib,
                            run.outcome
                        )
                    })
                    .collect();
                writeln!(out, "[\n{}\n]", rows.join(",\n"))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Correct,
    Wrong { expected: PartitionValue },
    Rejected(String),
    Skipped,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Correct => f.write_str("correct"),
            Outcome::Wrong { expected } => write!(f, "wrong (expected {expected})"),
            Outcome::Rejected(err) => write!(f, "rejected: {}", err.replace('"', "'")),
            Outcome::Skipped => f.write_str("skipped"),
        }
    }
}

struct Run {
    strategy: Strategy,
    case: String,
    answer: Option<PartitionValue>,
    wall_s: f64,
    rss_delta_kib: u64,
    outcome: Outcome,
}

struct Probe {
    options: Options,
    sys: System,
    runs: Vec<Run>,
}

impl Probe {
    fn run_all(&mut self, case: &str, boards: &[i64], k: usize, expected: PartitionValue) {
        for strategy in Strategy::ALL {
            let run = self.run_one(strategy, case, boards, k, expected);
            eprintln!(
                "  {:<9} {:>11.5e}s  {:<28} {}",
                run.strategy,
                run.wall_s,
                run.outcome.to_string(),
                run.case
            );
            self.runs.push(run);
        }
    }

    fn run_one(
        &mut self,
        strategy: Strategy,
        case: &str,
        boards: &[i64],
        k: usize,
        expected: PartitionValue,
    ) -> Run {
        let n = boards.len();
        let mut run = Run {
            strategy,
            case: case.to_string(),
            answer: None,
            wall_s: 0.0,
            rss_delta_kib: 0,
            outcome: Outcome::Skipped,
        };
        if strategy == Strategy::Recursive && n > self.options.recursive_limit {
            return run;
        }

        let solver = PartitionSolver::builder().with_strategy(strategy).build();
        let before = rss_kib(&mut self.sys);
        let start = Instant::now();
        let result = solver.solve(boards, n, k);
        run.wall_s = start.elapsed().as_secs_f64();
        run.rss_delta_kib = rss_kib(&mut self.sys).saturating_sub(before);

        run.outcome = match result {
            Ok(v) => {
                run.answer = Some(v);
                if v == expected {
                    Outcome::Correct
                } else {
                    Outcome::Wrong { expected }
                }
            }
            Err(err) => Outcome::Rejected(err.to_string()),
        };
        run
    }

    /// Print per-strategy totals to stderr and return the failure count.
    fn summarize(&self) -> usize {
        eprintln!();
        let mut failed = 0;
        for strategy in Strategy::ALL {
            let mine = self.runs.iter().filter(|r| r.strategy == strategy);
            let (mut ok, mut bad, mut skipped, mut seconds) = (0, 0, 0, 0.0);
            for run in mine {
                seconds += run.wall_s;
                match run.outcome {
                    Outcome::Correct => ok += 1,
                    Outcome::Skipped => skipped += 1,
                    _ => bad += 1,
                }
            }
            failed += bad;
            eprintln!("  {strategy:<9} correct={ok} failed={bad} skipped={skipped} total={seconds:.5e}s");
        }
        failed
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(process) => process.memory() / 1024,
        None => 0,
    }
}

/// Pseudo-random but reproducible board lengths in `1..=97`.
fn deterministic_boards(len: usize) -> Vec<i64> {
    (0..len).map(|i| ((i * 37 + 11) % 97 + 1) as i64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_value_forms() {
        let opts = Options::parse(["--format=json", "--recursive-limit", "9"])
            .unwrap()
            .unwrap();
        assert_eq!(
            opts,
            Options {
                format: OutputFormat::Json,
                recursive_limit: 9,
            }
        );
    }

    #[test]
    fn help_and_errors() {
        assert_eq!(Options::parse(["-h"]), Ok(None));
        assert_eq!(
            Options::parse(["--format"]),
            Err("missing value after --format".to_string())
        );
        assert_eq!(
            Options::parse(["--format", "xml"]),
            Err("unknown format 'xml'".to_string())
        );
        assert!(Options::parse(["--bogus"]).is_err());
    }

    #[test]
    fn generated_boards_are_positive() {
        assert!(deterministic_boards(500).iter().all(|&b| (1..=97).contains(&b)));
    }
}
