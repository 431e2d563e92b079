//! Append-only telemetry log of per-step motion and force quantities.
//!
//! One tab-separated line per completed step, flushed as it is written, so a
//! crash after step n loses at most the in-flight portion of record n. The
//! sink is opened once before the loop starts and finished exactly once on
//! the way out; reopening for append is not supported.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Fixed header line, written exactly once on open
pub const LOG_HEADER: &str = "#Time\tBody Pos\tBody vel (heave)\tforce (heave)\tSpring Length (m)\tSpring Velocity (m/s)\tSpring Force (N)";

/// Minimum column width of each numeric field
const FIELD_WIDTH: usize = 12;
/// Significant digits per numeric field
const SIG_DIGITS: usize = 10;

/// One logged row: the observables of a single pre-step state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryRecord {
    /// Simulated time (s)
    pub time_s: f64,
    /// Body heave position (m)
    pub position_m: f64,
    /// Body heave velocity (m/s)
    pub velocity_m_per_s: f64,
    /// Net force applied by the last completed step (N)
    pub applied_force_n: f64,
    /// Spring length (m)
    pub spring_length_m: f64,
    /// Spring stretch rate (m/s)
    pub spring_velocity_m_per_s: f64,
    /// Spring-damper force (N)
    pub spring_force_n: f64,
}

/// Streaming telemetry writer
pub struct TelemetrySink {
    writer: BufWriter<File>,
    path: PathBuf,
    records_written: u64,
}

impl TelemetrySink {
    /// Create the log file and write the header.
    ///
    /// Fails when the path's directory is unreachable or the file cannot be
    /// created; this is the loop's only fatal setup condition.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", LOG_HEADER)?;
        writer.flush()?;

        log::info!("Telemetry log opened: {}", path.display());

        Ok(Self {
            writer,
            path,
            records_written: 0,
        })
    }

    /// Append one record and flush it
    pub fn append(&mut self, record: &TelemetryRecord) -> Result<()> {
        let fields = [
            record.time_s,
            record.position_m,
            record.velocity_m_per_s,
            record.applied_force_n,
            record.spring_length_m,
            record.spring_velocity_m_per_s,
            record.spring_force_n,
        ];

        let mut line = String::with_capacity(fields.len() * (FIELD_WIDTH + 1));
        for (i, value) in fields.iter().enumerate() {
            if i > 0 {
                line.push('\t');
            }
            let field = format_general(*value, SIG_DIGITS);
            line.push_str(&format!("{:>width$}", field, width = FIELD_WIDTH));
        }
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        self.records_written += 1;
        Ok(())
    }

    /// Records appended so far
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Log path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and close the log, returning its path
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush()?;
        log::info!(
            "Telemetry log closed: {} ({} records)",
            self.path.display(),
            self.records_written
        );
        Ok(self.path)
    }
}

/// Format with a fixed number of significant digits, C `%g` style: plain
/// decimal for moderate exponents, scientific otherwise, trailing zeros
/// trimmed.
pub(crate) fn format_general(value: f64, sig_digits: usize) -> String {
    debug_assert!(sig_digits > 0);
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let exponent = value.abs().log10().floor() as i32;
    if exponent < -4 || exponent >= sig_digits as i32 {
        let formatted = format!("{:.*e}", sig_digits - 1, value);
        match formatted.split_once('e') {
            Some((mantissa, exp)) => {
                let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
                format!("{}e{}", mantissa, exp)
            }
            None => formatted,
        }
    } else {
        let decimals = (sig_digits as i32 - 1 - exponent).max(0) as usize;
        let formatted = format!("{:.*}", decimals, value);
        if formatted.contains('.') {
            formatted
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            formatted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sphere_decay_{}_{}.txt", name, std::process::id()))
    }

    fn sample_record(time_s: f64) -> TelemetryRecord {
        TelemetryRecord {
            time_s,
            position_m: -1.0,
            velocity_m_per_s: 0.0,
            applied_force_n: 0.0,
            spring_length_m: 8.0,
            spring_velocity_m_per_s: 0.0,
            spring_force_n: -3.0e5,
        }
    }

    #[test]
    fn test_header_written_once_first() {
        let path = temp_path("header");
        let mut sink = TelemetrySink::open(&path).unwrap();
        sink.append(&sample_record(0.0)).unwrap();
        sink.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], LOG_HEADER);
        assert_eq!(lines.iter().filter(|l| l.starts_with('#')).count(), 1);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_n_appends_yield_n_plus_one_lines() {
        let path = temp_path("count");
        let mut sink = TelemetrySink::open(&path).unwrap();
        for i in 0..5 {
            sink.append(&sample_record(i as f64 * 0.015)).unwrap();
        }
        assert_eq!(sink.records_written(), 5);
        sink.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 6);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_record_line_has_seven_tab_separated_fields() {
        let path = temp_path("fields");
        let mut sink = TelemetrySink::open(&path).unwrap();
        sink.append(&sample_record(0.015)).unwrap();
        sink.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let data_line = contents.lines().nth(1).unwrap();
        let fields: Vec<&str> = data_line.split('\t').collect();
        assert_eq!(fields.len(), 7);
        for field in &fields {
            assert!(field.len() >= 12, "field {:?} narrower than 12", field);
            field.trim().parse::<f64>().unwrap();
        }
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_open_fails_on_unreachable_directory() {
        let result = TelemetrySink::open("/no/such/directory/output.txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_format_general_plain_decimal() {
        assert_eq!(format_general(0.0, 10), "0");
        assert_eq!(format_general(-9.81, 10), "-9.81");
        assert_eq!(format_general(123.456, 10), "123.456");
        assert_eq!(format_general(2568258.0, 10), "2568258");
        assert_eq!(format_general(1.0 / 3.0, 10), "0.3333333333");
    }

    #[test]
    fn test_format_general_scientific_switch() {
        // Ten significant digits no longer fit: switch to scientific
        assert_eq!(format_general(12345678901.0, 10), "1.23456789e10");
        assert_eq!(format_general(1.0e-12, 10), "1e-12");
        assert_eq!(format_general(-2.5e-7, 10), "-2.5e-7");
    }
}
