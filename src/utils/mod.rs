//! Utility functions for labyrinth simulations

use crate::Result;
use std::fs::File;
use std::io::{Write, Read};
use std::path::Path;
use serde::{Serialize, Deserialize};

/// Save object to JSON file
pub fn save_json<T: Serialize, P: AsRef<Path>>(obj: &T, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(obj)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Load object from JSON file
pub fn load_json<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> Result<T> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let obj = serde_json::from_str(&contents)?;
    Ok(obj)
}

/// Timing utilities
pub mod timing {
    use std::time::Instant;

    /// Logs the elapsed time of a scope when dropped
    pub struct Timer {
        start: Instant,
        name: String,
    }

    impl Timer {
        /// Start new timer
        pub fn new(name: &str) -> Self {
            Timer {
                start: Instant::now(),
                name: name.to_string(),
            }
        }

        /// Get elapsed time in seconds
        pub fn elapsed(&self) -> f32 {
            self.start.elapsed().as_secs_f32()
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            tracing::info!(elapsed_s = self.elapsed(), "{} finished", self.name);
        }
    }
}

/// Progress tracking
pub mod progress {
    use std::io::{self, Write};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Trial progress bar on stderr, safe to tick from worker threads
    pub struct ProgressBar {
        total: usize,
        current: AtomicUsize,
        width: usize,
    }

    impl ProgressBar {
        /// Create new progress bar
        pub fn new(total: usize) -> Self {
            ProgressBar {
                total,
                current: AtomicUsize::new(0),
                width: 50,
            }
        }

        /// Increment progress
        pub fn inc(&self) {
            let current = self.current.fetch_add(1, Ordering::Relaxed) + 1;
            self.display(current);
        }

        /// Completed count
        pub fn position(&self) -> usize {
            self.current.load(Ordering::Relaxed)
        }

        /// Render the bar line for `current` completed items
        pub fn render(&self, current: usize) -> String {
            let progress = if self.total == 0 {
                1.0
            } else {
                (current.min(self.total)) as f32 / self.total as f32
            };
            let filled = (progress * self.width as f32) as usize;
            let empty = self.width - filled;
            format!(
                "[{}{}] {}/{} ({:.1}%)",
                "=".repeat(filled),
                " ".repeat(empty),
                current,
                self.total,
                progress * 100.0
            )
        }

        fn display(&self, current: usize) {
            let mut err = io::stderr().lock();
            // A closed stderr only loses the bar
            let _ = write!(err, "\r{}", self.render(current));
            if current >= self.total {
                let _ = writeln!(err);
            }
            let _ = err.flush();
        }
    }
}
