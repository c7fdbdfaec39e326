//! Background folder scan
//!
//! Fire-and-poll: the scan runs on a detached thread and sends its complete
//! result once through a channel. The UI thread polls the handle each frame,
//! so it only ever sees the previous list or the finished new one - there is
//! no shared mutable list to tear.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use super::{scan_folder, ScanError};

/// A handle to a folder scan in flight
pub struct PendingScan {
    receiver: Receiver<Result<Vec<String>, ScanError>>,
    pub path: PathBuf,
}

impl PendingScan {
    /// Poll for completion. Returns `Some(result)` exactly once when the
    /// scan finishes; until then returns `None` without blocking.
    pub fn poll(&mut self) -> Option<Result<Vec<String>, ScanError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                // Scan thread died without sending
                Some(Err(ScanError::Io("scan thread terminated".into())))
            }
        }
    }
}

/// Start scanning `path` on a background thread
pub fn scan_async(path: PathBuf) -> PendingScan {
    let (sender, receiver) = channel();
    let scan_path = path.clone();

    thread::spawn(move || {
        let result = scan_folder(&scan_path);
        let _ = sender.send(result);
    });

    PendingScan { receiver, path }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::{Duration, Instant};

    fn poll_to_completion(mut scan: PendingScan) -> Result<Vec<String>, ScanError> {
        // Poll the way the frame loop does, with a deadline so a broken
        // channel cannot hang the test.
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = scan.poll() {
                return result;
            }
            assert!(Instant::now() < deadline, "scan did not complete in time");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_scan_async_delivers_complete_list() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.mp3", "b.txt", "c.wav", "d.ogg"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let scan = scan_async(dir.path().to_path_buf());
        let mut files = poll_to_completion(scan).unwrap();
        files.sort();
        // The handoff is all-or-nothing: the full filtered list arrives at
        // once, never a prefix.
        assert_eq!(files, ["a.mp3", "c.wav", "d.ogg"]);
    }

    #[test]
    fn test_scan_async_reports_errors() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("missing");

        let scan = scan_async(gone);
        let result = poll_to_completion(scan);
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }

    #[test]
    fn test_poll_before_completion_returns_none_or_full_result() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..50 {
            File::create(dir.path().join(format!("track{:02}.mp3", i))).unwrap();
        }

        let mut scan = scan_async(dir.path().to_path_buf());
        // Render-loop shaped polling: every observation is either "not yet"
        // or the complete result.
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            match scan.poll() {
                None => {
                    assert!(Instant::now() < deadline, "scan did not complete in time");
                }
                Some(Ok(files)) => {
                    assert_eq!(files.len(), 50);
                    break;
                }
                Some(Err(e)) => panic!("scan failed: {}", e),
            }
        }
    }
}
