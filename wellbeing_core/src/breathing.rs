//! Guided 4-7-8 breathing exercise.
//!
//! The exercise is a fixed script of eight steps run strictly in order:
//! introduction, a short pause, three counted phases (inhale 4, hold 7,
//! exhale 8), closing guidance, a longer pause and a completion message.
//!
//! Waiting is delegated to a [`Delay`] so callers decide what a time-unit
//! is. The CLI sleeps for real; tests use a recording delay and run
//! instantly.

use crate::Result;
use std::io::Write;
use std::time::Duration;

/// What happened to a requested delay
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DelayOutcome {
    /// The full delay elapsed
    Elapsed,
    /// The delay was cut short by an external signal
    Interrupted,
}

/// Source of best-effort waiting, measured in time-units
pub trait Delay {
    fn wait(&mut self, units: u32) -> DelayOutcome;
}

/// Blocks the current thread for each requested unit
#[derive(Clone, Debug)]
pub struct SleepDelay {
    unit: Duration,
}

impl SleepDelay {
    pub fn new(unit: Duration) -> Self {
        Self { unit }
    }
}

impl Default for SleepDelay {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Delay for SleepDelay {
    fn wait(&mut self, units: u32) -> DelayOutcome {
        if !self.unit.is_zero() {
            std::thread::sleep(self.unit * units);
        }
        DelayOutcome::Elapsed
    }
}

/// One step of the breathing script
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Print the given lines
    Say(&'static [&'static str]),
    /// Wait for this many time-units
    Pause(u32),
    /// Print an instruction, then count down from `from` to 1
    Count { instruction: &'static str, from: u32 },
}

/// The 4-7-8 technique
pub static FOUR_SEVEN_EIGHT: [Step; 8] = [
    Step::Say(&[
        "",
        "=== Guided Breathing Exercise (4-7-8 Technique) ===",
        "This helps calm your mind. Follow along:",
        "1. Sit or lie comfortably. Close your eyes if you like.",
    ]),
    Step::Pause(2),
    Step::Count {
        instruction: "2. Inhale quietly through your nose for 4 seconds...",
        from: 4,
    },
    Step::Count {
        instruction: "3. Hold your breath for 7 seconds...",
        from: 7,
    },
    Step::Count {
        instruction: "4. Exhale completely through your mouth for 8 seconds, making a whoosh sound...",
        from: 8,
    },
    Step::Say(&["Repeat 3-4 times. How do you feel now? Take a moment."]),
    Step::Pause(3),
    Step::Say(&["Exercise complete. Breathe easy!", ""]),
];

/// Count down from `from` to 1 on a single line, waiting one unit after each number
///
/// An interrupted wait just moves on to the next number.
pub fn countdown<W: Write + ?Sized, D: Delay + ?Sized>(
    out: &mut W,
    delay: &mut D,
    from: u32,
) -> Result<()> {
    for n in (1..=from).rev() {
        write!(out, "{} ", n)?;
        out.flush()?;
        if delay.wait(1) == DelayOutcome::Interrupted {
            tracing::debug!("Countdown tick {} cut short", n);
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Runs a breathing script against an output and a delay
pub struct BreathingGuide<'a> {
    steps: &'a [Step],
}

impl Default for BreathingGuide<'static> {
    fn default() -> Self {
        Self::new(&FOUR_SEVEN_EIGHT)
    }
}

impl<'a> BreathingGuide<'a> {
    pub fn new(steps: &'a [Step]) -> Self {
        Self { steps }
    }

    /// Total time-units the script waits for, ignoring interruptions
    pub fn total_units(&self) -> u32 {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Say(_) => 0,
                Step::Pause(units) => *units,
                Step::Count { from, .. } => *from,
            })
            .sum()
    }

    /// Run every step in order
    pub fn run<W: Write + ?Sized, D: Delay + ?Sized>(
        &self,
        out: &mut W,
        delay: &mut D,
    ) -> Result<()> {
        for (index, step) in self.steps.iter().enumerate() {
            tracing::debug!("Breathing step {}: {:?}", index + 1, step);
            match step {
                Step::Say(lines) => {
                    for line in lines.iter() {
                        writeln!(out, "{}", line)?;
                    }
                    out.flush()?;
                }
                Step::Pause(units) => {
                    if delay.wait(*units) == DelayOutcome::Interrupted {
                        tracing::debug!("Pause of {} units cut short", units);
                    }
                }
                Step::Count { instruction, from } => {
                    writeln!(out, "{}", instruction)?;
                    countdown(out, delay, *from)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every wait and optionally reports them all as interrupted
    #[derive(Default)]
    struct RecordingDelay {
        waits: Vec<u32>,
        interrupt: bool,
    }

    impl Delay for RecordingDelay {
        fn wait(&mut self, units: u32) -> DelayOutcome {
            self.waits.push(units);
            if self.interrupt {
                DelayOutcome::Interrupted
            } else {
                DelayOutcome::Elapsed
            }
        }
    }

    #[test]
    fn test_countdown_emits_descending_numbers() {
        for from in [4u32, 7, 8] {
            let mut out = Vec::new();
            let mut delay = RecordingDelay::default();

            countdown(&mut out, &mut delay, from).unwrap();

            let text = String::from_utf8(out).unwrap();
            let numbers: Vec<u32> = text
                .split_whitespace()
                .map(|n| n.parse().unwrap())
                .collect();
            let expected: Vec<u32> = (1..=from).rev().collect();
            assert_eq!(numbers, expected);
            assert!(text.ends_with('\n'));
            assert_eq!(delay.waits, vec![1; from as usize]);
        }
    }

    #[test]
    fn test_countdown_of_zero_only_breaks_line() {
        let mut out = Vec::new();
        let mut delay = RecordingDelay::default();

        countdown(&mut out, &mut delay, 0).unwrap();

        assert_eq!(out, b"\n");
        assert!(delay.waits.is_empty());
    }

    #[test]
    fn test_script_waits_twenty_four_units() {
        let guide = BreathingGuide::default();
        let mut out = Vec::new();
        let mut delay = RecordingDelay::default();

        guide.run(&mut out, &mut delay).unwrap();

        assert_eq!(guide.total_units(), 24);
        assert_eq!(delay.waits.iter().sum::<u32>(), 24);
        assert_eq!(delay.waits.first(), Some(&2));
        assert_eq!(delay.waits.last(), Some(&3));
    }

    #[test]
    fn test_script_output_in_order() {
        let mut out = Vec::new();
        let mut delay = RecordingDelay::default();

        BreathingGuide::default().run(&mut out, &mut delay).unwrap();

        let text = String::from_utf8(out).unwrap();
        let intro = text.find("4-7-8 Technique").unwrap();
        let inhale = text.find("Inhale").unwrap();
        let hold = text.find("Hold your breath").unwrap();
        let exhale = text.find("Exhale").unwrap();
        let done = text.find("Exercise complete").unwrap();
        assert!(intro < inhale && inhale < hold && hold < exhale && exhale < done);
        assert!(text.contains("4 3 2 1 \n"));
        assert!(text.contains("7 6 5 4 3 2 1 \n"));
        assert!(text.contains("8 7 6 5 4 3 2 1 \n"));
    }

    #[test]
    fn test_interrupted_delays_still_finish_script() {
        crate::logging::init_test();
        let mut out = Vec::new();
        let mut delay = RecordingDelay {
            interrupt: true,
            ..Default::default()
        };

        BreathingGuide::default().run(&mut out, &mut delay).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Exercise complete. Breathe easy!"));
        // 2 pauses + 4 + 7 + 8 ticks, none retried
        assert_eq!(delay.waits.len(), 21);
    }

    #[test]
    fn test_zero_unit_sleep_delay_returns_immediately() {
        let mut delay = SleepDelay::new(Duration::ZERO);
        assert_eq!(delay.wait(5), DelayOutcome::Elapsed);
    }
}
