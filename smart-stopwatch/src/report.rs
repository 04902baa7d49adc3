use std::fmt;
use std::time::Duration;

const SEPARATOR: char = ';';
const NANOS_PER_TICK: u32 = 100;
const SECS_PER_DAY: u64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pause,
    Stop,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Pause => "Pause",
            Action::Stop => "Stop",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders a duration as `[d.]hh:mm:ss[.fffffff]`, with the fraction in 100ns ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval(pub Duration);

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs();
        let days = secs / SECS_PER_DAY;
        if days > 0 {
            write!(f, "{days}.")?;
        }
        write!(
            f,
            "{:02}:{:02}:{:02}",
            secs / 3600 % 24,
            secs / 60 % 60,
            secs % 60
        )?;
        let ticks = self.0.subsec_nanos() / NANOS_PER_TICK;
        if ticks > 0 {
            write!(f, ".{ticks:07}")?;
        }
        Ok(())
    }
}

/// One diagnostic line produced by a pause or stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// `label;Pause;segment;total`
    Pause {
        label: String,
        segment: Duration,
        total: Duration,
    },
    /// `label;Stop;total`
    Stop { label: String, total: Duration },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Pause {
                label,
                segment,
                total,
            } => write!(
                f,
                "{label}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
                Action::Pause,
                Interval(*segment),
                Interval(*total)
            ),
            Report::Stop { label, total } => write!(
                f,
                "{label}{SEPARATOR}{}{SEPARATOR}{}",
                Action::Stop,
                Interval(*total)
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn interval_format() {
        let cases = [
            (Duration::ZERO, "00:00:00"),
            (Duration::from_millis(1500), "00:00:01.5000000"),
            (Duration::from_nanos(1_234_567_899), "00:00:01.2345678"),
            (Duration::from_nanos(99), "00:00:00"),
            (Duration::from_secs(3 * 3600 + 25 * 60 + 7), "03:25:07"),
            (
                Duration::new(2 * SECS_PER_DAY + 5 * 3600, 100),
                "2.05:00:00.0000001",
            ),
        ];
        for (d, want) in cases {
            assert_eq!(Interval(d).to_string(), want);
        }
    }

    #[test]
    fn report_lines() {
        let pause = Report::Pause {
            label: "loop".to_string(),
            segment: Duration::from_secs(1),
            total: Duration::from_millis(2250),
        };
        assert_eq!(pause.to_string(), "loop;Pause;00:00:01;00:00:02.2500000");
        assert_eq!(pause.to_string().split(';').count(), 4);

        let stop = Report::Stop {
            label: "7".to_string(),
            total: Duration::from_secs(61),
        };
        assert_eq!(stop.to_string(), "7;Stop;00:01:01");
        assert_eq!(stop.to_string().split(';').count(), 3);
    }
}
