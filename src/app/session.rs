use crate::core::evaluator::IntensityEvaluator;
use crate::core::parser::check_characters;
use crate::core::Renderer;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const QUIT_COMMANDS: [&str; 2] = ["quit", "exit"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub evaluated: usize,
    pub succeeded: usize,
    pub advisories: usize,
}

/// Line-oriented host: each submitted line is evaluated and rendered.
pub struct Session<R: Renderer> {
    evaluator: IntensityEvaluator,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    pub fn new(evaluator: IntensityEvaluator, renderer: R) -> Self {
        Self {
            evaluator,
            renderer,
        }
    }

    /// Lines that are not valid UTF-8 are evaluated lossily instead of ending the session.
    pub fn run<I: BufRead, O: Write>(&self, mut input: I, mut output: O) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let decoded = String::from_utf8_lossy(&buf);
            let line = decoded.trim_end_matches(['\n', '\r']);
            if QUIT_COMMANDS.contains(&line.trim()) {
                tracing::debug!("Session ended by '{}'", line.trim());
                break;
            }

            if let Some(advisory) = check_characters(line).advisory() {
                summary.advisories += 1;
                writeln!(output, "{}", self.renderer.render_advisory(advisory)?)?;
            }

            let evaluation = self.evaluator.evaluate(line);
            summary.evaluated += 1;
            if evaluation.decibels.is_some() {
                summary.succeeded += 1;
            }
            writeln!(output, "{}", self.renderer.render(&evaluation)?)?;
            output.flush()?;
        }

        tracing::info!(
            "Session finished: {} evaluated, {} succeeded",
            summary.evaluated,
            summary.succeeded
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::TextRenderer;
    use std::io::Cursor;

    fn run(input: &str) -> (SessionSummary, String) {
        let session = Session::new(IntensityEvaluator::default(), TextRenderer);
        let mut output = Vec::new();
        let summary = session.run(Cursor::new(input), &mut output).unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_each_line_is_rendered_in_order() {
        let (summary, output) = run("1e-6\n\n2\n");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Your NIS is: 60 dB",
                "Error: Enter the intensity level (I).",
                "Error: The value cannot be greater than 1.",
            ]
        );
        assert_eq!(summary.evaluated, 3);
        assert_eq!(summary.succeeded, 1);
    }

    #[test]
    fn test_advisory_does_not_block_evaluation() {
        let (summary, output) = run("1e-6x\n");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Warning: Invalid characters"));
        assert!(lines[1].starts_with("Error: Invalid input"));
        assert_eq!(summary.advisories, 1);
        assert_eq!(summary.evaluated, 1);
    }

    #[test]
    fn test_non_utf8_line_is_invalid_and_session_continues() {
        let session = Session::new(IntensityEvaluator::default(), TextRenderer);
        let mut output = Vec::new();
        let summary = session
            .run(Cursor::new(&b"1e-6\n\xff\xfe\n1\n"[..]), &mut output)
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Your NIS is: 60 dB");
        assert!(lines[1].starts_with("Warning: Invalid characters"));
        assert!(lines[2].starts_with("Error: Invalid input"));
        assert_eq!(lines[3], "Your NIS is: 120 dB");
        assert_eq!(summary.evaluated, 3);
        assert_eq!(summary.succeeded, 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let (summary, output) = run("1e-6\r\n1\r\n");
        assert_eq!(output, "Your NIS is: 60 dB\nYour NIS is: 120 dB\n");
        assert_eq!(summary.advisories, 0);
    }

    #[test]
    fn test_quit_stops_the_session() {
        let (summary, output) = run("1\nquit\n1e-6\n");
        assert_eq!(output.lines().count(), 1);
        assert_eq!(summary.evaluated, 1);
    }
}
