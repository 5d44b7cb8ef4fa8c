//! Line-oriented test report

use std::io::Write;
use std::path::Path;

use netjudge_common::HarnessResult;
use netjudge_common::console::{Palette, Tone};
use netjudge_common::constants::REPORT_NAME_WIDTH;

use crate::verdict::{BatchSummary, Verdict};

pub struct Report<W: Write> {
    out: W,
    palette: Palette,
}

impl<W: Write> Report<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self { out, palette }
    }

    pub fn header(&mut self, program: &Path) -> HarnessResult<()> {
        writeln!(self.out, "Testing: {}", program.display())?;
        Ok(())
    }

    pub fn blank(&mut self) -> HarnessResult<()> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn section(&mut self, line: &str) -> HarnessResult<()> {
        writeln!(self.out, "{}", self.palette.paint(line, Tone::Section))?;
        Ok(())
    }

    /// Print the instance column before the program runs
    pub fn begin_test(&mut self, instance: &str) -> HarnessResult<()> {
        write!(
            self.out,
            "{:<width$}[ ",
            format!("{} ", instance),
            width = REPORT_NAME_WIDTH
        )?;
        self.out.flush()?;
        Ok(())
    }

    pub fn finish_test(&mut self, verdict: Verdict) -> HarnessResult<()> {
        let tone = match verdict {
            Verdict::Pass => Tone::Pass,
            Verdict::Fail => Tone::Fail,
            Verdict::Error => Tone::Error,
            Verdict::Timeout => Tone::Timeout,
        };
        writeln!(self.out, "{} ]", self.palette.paint(&verdict.label(), tone))?;
        Ok(())
    }

    pub fn summary(&mut self, summary: &BatchSummary) -> HarnessResult<()> {
        writeln!(self.out, "Done. {}", summary)?;
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_line_layout() {
        let mut report = Report::new(Vec::new(), Palette::plain());
        report.begin_test("rand_50_10").unwrap();
        report.finish_test(Verdict::Error).unwrap();

        let text = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(text, format!("{:<35}[ ERR  ]\n", "rand_50_10 "));
    }

    #[test]
    fn test_long_names_are_not_cut() {
        let name = "a".repeat(40);
        let mut report = Report::new(Vec::new(), Palette::plain());
        report.begin_test(&name).unwrap();
        report.finish_test(Verdict::Pass).unwrap();

        let text = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(text, format!("{} [ PASS ]\n", name));
    }
}
