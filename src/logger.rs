//! Provides [`ScoreLogger`] that prints and stores
//! the score of each boosting round.
use colored::Colorize;
use serde::{Deserialize, Serialize};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;

use crate::{
    AnchorObjective,
    BoostingAdapter,
    Score,
};


const DEFAULT_ROUND: usize = 100;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Round,Objective,Value,Time\n";


/// A single record of [`ScoreLogger`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Boosting round.
    pub round: usize,
    /// The score reported by the objective.
    pub score: Score,
    /// Elapsed time since the logger was created, in milliseconds.
    pub millis: u128,
}


/// Struct `ScoreLogger` records the score of each boosting round.
/// It prints the current status every `print_every` rounds
/// and writes the whole history to a CSV file.
///
/// # Example
/// ```no_run
/// use anchorboosts::prelude::*;
///
/// # let sample = AnchorSample::from_rows(vec![0.0, 1.0], &[[1.0], [2.0]]);
/// let adapter = BoostingAdapter::new(AnchorRegression::new(3.0));
/// let mut logger = ScoreLogger::new().print_every(10);
/// logger.print_stats(&adapter);
///
/// let mut f = adapter.init_score(&sample);
/// for round in 1..=100 {
///     let (grad, hess) = adapter.objective(&f, &sample);
///     // Your boosting engine fits the next round here.
///     # f.iter_mut().zip(&grad).zip(&hess)
///     #     .for_each(|((fi, g), h)| { *fi -= 0.1 * g / h; });
///     logger.record(round, adapter.score(&f, &sample));
/// }
/// logger.finish();
/// logger.write_csv("scores.csv").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ScoreLogger {
    history: Vec<LogEntry>,
    round: usize,
    start: Instant,
}


impl Default for ScoreLogger {
    fn default() -> Self {
        Self::new()
    }
}


impl ScoreLogger {
    /// Create a new instance of `ScoreLogger`.
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            round: DEFAULT_ROUND,
            start: Instant::now(),
        }
    }


    /// Set the interval to print the current status.
    /// By default, the logger prints its status every `100` rounds.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round;
        self
    }


    /// Returns the recorded entries.
    #[inline(always)]
    pub fn history(&self) -> &[LogEntry] {
        &self.history[..]
    }


    /// Returns the entry with the smallest score value.
    pub fn best(&self) -> Option<&LogEntry> {
        self.history.iter()
            .min_by(|a, b| a.score.value.total_cmp(&b.score.value))
    }


    /// Print the objective and its parameters,
    /// followed by the column header.
    pub fn print_stats<O>(&self, adapter: &BoostingAdapter<O>)
        where O: AnchorObjective,
    {
        if self.round == usize::MAX { return; }

        let objective = adapter.inner();
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Objective".bold(),
            objective.name().bold().green(),
        );

        if let Some(info) = objective.info() {
            let line = info.into_iter()
                .map(|(key, val)| {
                    format!(
                        "    + {:<STAT_WIDTH$}\t{:>width$}",
                        key,
                        val.bold().yellow(),
                        width = STAT_WIDTH - 8
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            println!("{line}");
        }
        println!("{:=^FULL_WIDTH$}\n", "".bold());

        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}",
            "ROUND".bold().red(),
            "SCORE".bold().blue(),
            "TIME".bold().cyan(),
        );
    }


    /// Record the score of the given round.
    pub fn record(&mut self, round: usize, score: Score) {
        let millis = self.start.elapsed().as_millis();

        if self.round != usize::MAX && round % self.round == 0 {
            println!(
                "{} {}\t\t{}\t{}",
                "[LOG]".bold().magenta(),
                format!("{:>WIDTH$}", round).red(),
                format!("{:>WIDTH$.PREC_WIDTH$}", score.value).blue(),
                time_format(millis).bold().cyan(),
            );
        }

        self.history.push(LogEntry { round, score, millis });
    }


    /// Print the last recorded entry.
    pub fn finish(&self) {
        if self.round == usize::MAX { return; }
        let Some(last) = self.history.last() else { return; };

        println!(
            "{} {}\t\t{}\t{}\n",
            "[FIN]".bold().bright_green(),
            format!("{:>WIDTH$}", last.round).red(),
            format!("{:>WIDTH$.PREC_WIDTH$}", last.score.value).bold().blue(),
            time_format(last.millis).bold().cyan(),
        );
    }


    /// Write the history to `filename` as a CSV file.
    /// The `Time` column holds the elapsed seconds.
    pub fn write_csv<P: AsRef<Path>>(&self, filename: P)
        -> std::io::Result<()>
    {
        let mut file = File::create(filename)?;
        file.write_all(HEADER.as_bytes())?;

        for entry in &self.history {
            let line = format!(
                "{},{},{},{:.3}\n",
                entry.round,
                entry.score.name,
                entry.score.value,
                seconds(entry.millis),
            );
            file.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}


/// Elapsed time in seconds with millisecond precision.
#[inline(always)]
fn seconds(millis: u128) -> f64 {
    millis as f64 / 1_000f64
}


/// Console form of the elapsed time:
/// seconds below a minute, `m s` below an hour, `h m` otherwise.
fn time_format(millis: u128) -> String {
    let total_secs = millis / 1_000;
    match total_secs {
        0..=59 => format!("{:>7.3}s", seconds(millis)),
        60..=3_599 => format!("{:>3}m {:0>2}s", total_secs / 60, total_secs % 60),
        _ => {
            let total_mins = total_secs / 60;
            format!("{:>3}h {:0>2}m", total_mins / 60, total_mins % 60)
        },
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: f64) -> Score {
        Score {
            name: "anchor regression (2)".to_string(),
            value,
            higher_is_better: false,
        }
    }

    #[test]
    fn test_time_format() {
        assert_eq!(time_format(12), "  0.012s");
        assert_eq!(time_format(59_999), " 59.999s");
        assert_eq!(time_format(61_000), "  1m 01s");
        assert_eq!(time_format(3_599_999), " 59m 59s");
        assert_eq!(time_format(3_600_000), "  1h 00m");
        assert_eq!(time_format(90_061_000), " 25h 01m");
    }

    #[test]
    fn test_best_entry() {
        let mut logger = ScoreLogger::new().print_every(usize::MAX);
        logger.record(1, score(3.0));
        logger.record(2, score(1.0));
        logger.record(3, score(2.0));
        assert_eq!(logger.history().len(), 3);
        assert_eq!(logger.best().map(|e| e.round), Some(2));
    }

    #[test]
    fn test_write_csv() {
        let mut logger = ScoreLogger::new().print_every(1);
        logger.record(1, score(0.5));
        logger.record(2, score(0.25));
        logger.finish();

        let mut path = std::env::temp_dir();
        path.push("anchorboosts_logger_write_csv.csv");
        logger.write_csv(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER.trim_end());
        assert!(lines[1].starts_with("1,anchor regression (2),0.5,"));
        assert!(lines[2].starts_with("2,anchor regression (2),0.25,"));

        let time = lines[2].rsplit(',').next().unwrap();
        let (_, fraction) = time.split_once('.').unwrap();
        assert_eq!(fraction.len(), 3, "time = {time}");

        std::fs::remove_file(path).unwrap();
    }
}
