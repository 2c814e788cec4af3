//! Tests for stage tracking and progress display bookkeeping

#[cfg(test)]
mod tests {
    use edgestitch::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use edgestitch::io::progress::{ProgressManager, Stage};
    use std::path::Path;

    // Tests stages are numbered in pipeline order
    // Verified by swapping two ordinals
    #[test]
    fn test_stage_ordinals() {
        for (i, stage) in Stage::ALL.iter().enumerate() {
            assert_eq!(stage.ordinal(), i);
        }
    }

    // Tests stage labels shown next to each bar
    // Verified by changing a label
    #[test]
    fn test_stage_labels() {
        assert_eq!(Stage::Loading.to_string(), "loading");
        assert_eq!(Stage::Checking.to_string(), "checking");
        assert_eq!(Stage::Exporting.to_string(), "exporting");
    }

    // Tests a full lifecycle over more files than individual bars
    // Verified by indexing file states without bounds checks
    #[test]
    fn test_progress_lifecycle() {
        let mut manager = ProgressManager::new();
        let file_count = MAX_INDIVIDUAL_PROGRESS_BARS + 3;
        manager.initialize(file_count);
        assert_eq!(manager.file_count(), file_count);

        for index in 0..file_count {
            manager.start_file(index, Path::new("puzzle.png"));
            for stage in Stage::ALL {
                manager.enter_stage(index, stage);
            }
            manager.complete_file(index, "solved");
        }

        // Updates for unknown files are ignored
        manager.enter_stage(file_count + 10, Stage::Checking);
        manager.finish();
    }

    // Tests output written while suspended returns the closure value
    // Verified by dropping the closure result
    #[test]
    fn test_suspend_runs_closure() {
        let mut manager = ProgressManager::new();
        manager.initialize(2);
        manager.start_file(0, Path::new("puzzle.png"));

        let value = manager.suspend(|| 6 * 7);
        assert_eq!(value, 42);
        manager.finish();
    }
}
