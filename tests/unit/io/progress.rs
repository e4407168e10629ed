//! Tests for headless progress display

#[cfg(test)]
mod tests {
    use lifegrid::io::progress::GenerationProgress;

    #[test]
    fn test_bounded_progress_tracks_generation() {
        let progress = GenerationProgress::new(Some(10));
        progress.update(3, 17);
        assert_eq!(progress.position(), 3);
        progress.update(10, 4);
        assert_eq!(progress.position(), 10);
        progress.finish();
    }

    #[test]
    fn test_unbounded_and_hidden_progress() {
        let spinner = GenerationProgress::new(None);
        spinner.update(250, 0);
        assert_eq!(spinner.position(), 250);
        spinner.finish();

        let hidden = GenerationProgress::hidden();
        hidden.update(1, 1);
        assert_eq!(hidden.position(), 1);
        hidden.finish();
    }
}
