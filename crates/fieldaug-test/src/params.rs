//! Regression test parameters and operations

use fieldaug_core::{Field, Label, Mask, Pixel, Raster};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Record mismatches and report failure (default)
    #[default]
    Compare,
    /// Display mode - print comparisons without failing
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "quartile")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode (compare or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        if !self.display() {
            self.failures.push(msg);
            self.success = false;
        }
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two boolean outcomes
    pub fn compare_bool(&mut self, expected: bool, actual: bool) -> bool {
        self.compare_values(f64::from(u8::from(expected)), f64::from(u8::from(actual)), 0.0)
    }

    fn compare_raster<P: Pixel>(&mut self, kind: &str, r1: &Raster<P>, r2: &Raster<P>) -> bool {
        self.index += 1;

        if !r1.sizes_equal(r2) {
            let msg = format!(
                "Failure in {}_reg: {} comparison for index {} - dimension mismatch {}x{} vs {}x{}",
                self.test_name,
                kind,
                self.index,
                r1.width(),
                r1.height(),
                r2.width(),
                r2.height()
            );
            self.record_failure(msg);
            return false;
        }

        for y in 0..r1.height() {
            for x in 0..r1.width() {
                let p1 = r1.get_pixel_unchecked(x, y);
                let p2 = r2.get_pixel_unchecked(x, y);
                if p1 != p2 {
                    let msg = format!(
                        "Failure in {}_reg: {} comparison for index {} - pixel mismatch at ({}, {}): {:?} vs {:?}",
                        self.test_name, kind, self.index, x, y, p1, p2
                    );
                    self.record_failure(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Compare two fields for exact equality
    pub fn compare_field(&mut self, f1: &Field, f2: &Field) -> bool {
        self.compare_raster("field", f1, f2)
    }

    /// Compare two masks for exact equality
    pub fn compare_mask(&mut self, m1: &Mask, m2: &Mask) -> bool {
        self.compare_raster("mask", m1, m2)
    }

    /// Check that the non-zero labels of a mask are exactly `1..=count`
    pub fn compare_labels(&mut self, mask: &Mask, count: usize) -> bool {
        self.index += 1;

        let labels: Vec<Label> = mask.labels().into_iter().collect();
        let expected: Vec<Label> = (1..=count as Label).collect();
        if labels != expected {
            let msg = format!(
                "Failure in {}_reg: label comparison for index {}\n\
                 expected = {:?}, actual = {:?}",
                self.test_name, self.index, expected, labels
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_env() {
        // We can't safely remove the env var in tests as it may affect other
        // tests; just check that from_env returns a valid mode
        let mode = RegTestMode::from_env();
        assert!(matches!(mode, RegTestMode::Compare | RegTestMode::Display));
    }

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert_eq!(rp.is_success(), rp.display());
    }

    #[test]
    fn test_compare_mask_and_labels() {
        let mut rp = RegParams::new("test");
        let a = Mask::from_labels(2, 1, vec![1, 2]).unwrap();
        let b = Mask::from_labels(2, 1, vec![1, 3]).unwrap();
        assert!(rp.compare_mask(&a, &a));
        assert!(rp.compare_labels(&a, 2));
        assert!(!rp.compare_mask(&a, &b));
        assert!(!rp.compare_labels(&b, 2));
    }

    #[test]
    fn test_compare_field_dimension_mismatch() {
        let mut rp = RegParams::new("test");
        let a = Field::new(2, 2).unwrap();
        let b = Field::new(2, 3).unwrap();
        assert!(!rp.compare_field(&a, &b));
    }
}
