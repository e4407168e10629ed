//! Tests for text rendering and terminal redraw

#[cfg(test)]
mod tests {
    use lifegrid::engine::grid::GridEngine;
    use lifegrid::engine::presets::CoordinatePolicy;
    use lifegrid::io::configuration::{ALIVE_GLYPH, DEAD_GLYPH};
    use lifegrid::io::render::{TerminalRenderer, render_text, status_line};
    use lifegrid::session::control::Session;

    // Tests each row is drawn on its own line with rows first
    // Verified by rendering columns as lines
    #[test]
    fn test_render_text_layout() {
        let mut grid = GridEngine::new(3).unwrap();
        grid.apply_preset(&[[0, 2], [1, 0]], CoordinatePolicy::Strict)
            .unwrap();

        let text = render_text(&grid);
        let lines: Vec<&str> = text.lines().collect();
        let a = ALIVE_GLYPH;
        let d = DEAD_GLYPH;

        assert_eq!(lines.len(), 3);
        assert_eq!(lines.first().copied(), Some(format!("{d}{d}{a}").as_str()));
        assert_eq!(lines.get(1).copied(), Some(format!("{a}{d}{d}").as_str()));
        assert_eq!(lines.get(2).copied(), Some(format!("{d}{d}{d}").as_str()));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_status_line() {
        let mut session = Session::new(25).unwrap();
        session.apply_preset("glider").unwrap();
        session.advance();

        assert_eq!(
            status_line(&session),
            "generation 1 | population 5 | stopped"
        );
        session.start();
        assert!(status_line(&session).ends_with("running"));
    }

    #[test]
    fn test_terminal_renderer_writes_board_and_status() {
        let mut session = Session::new(4).unwrap();
        session.toggle(1, 1).unwrap();

        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.draw(&session).unwrap();
        let output = String::from_utf8(renderer.into_inner()).unwrap();

        assert!(output.contains(&render_text(session.engine())));
        assert!(output.contains("population 1"));
    }
}
