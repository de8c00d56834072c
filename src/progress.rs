// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A single-line progress bar. Purely cosmetic; drawing failures are ignored.

use std::io::{self, IsTerminal, Write};

const WIDTH: usize = 40;

pub struct Progress {
    sink: Option<Box<dyn Write>>,
    total: usize,
    done: usize,
    last_percent: Option<usize>,
}

impl Progress {
    /// A progress bar drawn on standard error, if standard error is a terminal.
    pub fn stderr(total: usize) -> Progress {
        if io::stderr().is_terminal() {
            Progress::to_writer(total, io::stderr())
        } else {
            Progress::hidden(total)
        }
    }

    pub fn to_writer<W: Write + 'static>(total: usize, writer: W) -> Progress {
        Progress {
            sink: Some(Box::new(writer)),
            total,
            done: 0,
            last_percent: None,
        }
    }

    /// A progress bar that counts but never draws.
    pub fn hidden(total: usize) -> Progress {
        Progress {
            sink: None,
            total,
            done: 0,
            last_percent: None,
        }
    }

    pub fn position(&self) -> usize {
        self.done
    }

    /// Records that one more item has been processed.
    pub fn tick(&mut self) {
        self.done = (self.done + 1).min(self.total);
        let percent = if self.total == 0 {
            100
        } else {
            self.done * 100 / self.total
        };

        if self.last_percent != Some(percent) || self.done == self.total {
            self.last_percent = Some(percent);
            self.draw();
        }
    }

    /// Erases the bar. Called once iteration is over.
    pub fn finish(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            let _ = write!(sink, "\r{:width$}\r", "", width = WIDTH + 32);
            let _ = sink.flush();
        }
    }

    fn draw(&mut self) {
        let filled = if self.total == 0 {
            WIDTH
        } else {
            self.done * WIDTH / self.total
        };

        let (done, total) = (self.done, self.total);
        if let Some(sink) = self.sink.as_mut() {
            let mut bar = "=".repeat(filled);
            if filled < WIDTH {
                bar.push('>');
            }
            let _ = write!(sink, "\r[{:<width$}] {}/{}", bar, done, total, width = WIDTH);
            let _ = sink.flush();
        }
    }
}
