//! The interactive guess / feedback loop.
//!
//! The session writes a guess, then blocks on the reader for exactly one
//! feedback line before filtering. It never stops on its own; it returns when
//! the reader reaches end of input or something goes wrong.

use std::io::{BufRead, Write};

use itertools::Itertools;
use log::info;

use crate::error::Result;
use crate::feedback::Feedback;
use crate::solver::Solver;

pub struct Session<R, W> {
    solver: Solver,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(solver: Solver, input: R, output: W) -> Self {
        Self {
            solver,
            input,
            output,
        }
    }

    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    /// Play rounds until the input runs out, returning how many were played.
    pub fn run(&mut self) -> Result<usize> {
        let mut line = String::new();
        loop {
            let guess = self.solver.next_guess()?;
            writeln!(self.output, "Next guess:\n{}", guess)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                info!("input closed after {} rounds", self.solver.rounds());
                return Ok(self.solver.rounds());
            }

            let feedback = Feedback::parse(line.trim_end_matches(&['\r', '\n'][..]))?;
            let report = self.solver.apply_feedback(&guess, &feedback);

            writeln!(self.output, "remaining candidates: {}", report.remaining)?;
            if let Some(words) = report.revealed {
                writeln!(self.output, "{}", words.iter().join(" "))?;
            }
        }
    }
}
