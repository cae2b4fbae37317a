use crate::config::HeaderConfig;
use scrollfolio_anim::{Timeline, Tween};

/// One-shot entrance animation of the section headers.
///
/// Each header slides horizontally; the value is an x-offset in logical pixels
/// added to the header's resting position. Headers whose tween has not started
/// sit at their `from_x` offset (off screen with the default config).
#[derive(Debug, Clone)]
pub struct HeaderIntro {
    timeline: Timeline<usize, f32>,
    texts: Vec<String>,
    elapsed: f32,
}

impl HeaderIntro {
    pub fn from_config(headers: &[HeaderConfig]) -> Self {
        let mut timeline = Timeline::new();
        for (i, header) in headers.iter().enumerate() {
            timeline.add(
                i,
                header.at,
                Tween::new(header.from_x, header.to_x, header.duration, header.ease),
            );
        }
        Self {
            timeline,
            texts: headers.iter().map(|h| h.text.clone()).collect(),
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        let was_complete = self.is_complete();
        self.elapsed += dt.max(0.0);
        if !was_complete && self.is_complete() {
            tracing::debug!(elapsed = self.elapsed, "header intro finished");
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.timeline.duration()
    }

    pub fn is_complete(&self) -> bool {
        self.timeline.is_complete(self.elapsed)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn text(&self, index: usize) -> Option<&str> {
        self.texts.get(index).map(String::as_str)
    }

    /// Current x-offset of header `index`.
    pub fn offset(&self, index: usize) -> Option<f32> {
        self.offset_at(index, self.elapsed)
    }

    /// X-offset of header `index` at an arbitrary time, for scrubbing.
    pub fn offset_at(&self, index: usize, t: f32) -> Option<f32> {
        self.timeline.value(&index, t)
    }

    /// Every header's offset at time `t`.
    pub fn sample(&self, t: f32) -> Vec<(usize, f32)> {
        self.timeline.sample(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;

    fn intro() -> HeaderIntro {
        HeaderIntro::from_config(&DemoConfig::default().headers)
    }

    #[test]
    fn headers_start_off_screen() {
        let intro = intro();
        assert_eq!(intro.len(), 3);
        assert_eq!(intro.offset(0), Some(-1200.0));
        assert_eq!(intro.offset(1), Some(1200.0));
        assert_eq!(intro.offset(2), Some(-1200.0));
        assert_eq!(intro.text(1), Some("My projects"));
        assert_eq!(intro.offset(3), None);
    }

    #[test]
    fn headers_enter_in_sequence() {
        let mut intro = intro();
        intro.advance(3.0);
        assert_eq!(intro.offset(0), Some(-100.0));
        assert_eq!(intro.offset(1), Some(1200.0));
        intro.advance(2.0);
        let h2 = intro.offset(1).unwrap();
        assert!(h2 < 100.0 && h2 > 0.0, "expo.out is mostly done after 1s: {h2}");
        assert_eq!(intro.offset(2), Some(-1200.0));
    }

    #[test]
    fn third_header_moves_in_steps() {
        let intro = intro();
        // steps(12) over 4 s: 12 jumps of 100px, at rest from 8 + 48/13 s.
        let at = |t: f32| intro.offset_at(2, t).unwrap();
        assert_eq!(at(8.2), -1200.0);
        assert!((at(8.4) + 1100.0).abs() < 1e-3);
        assert!((at(11.6) + 100.0).abs() < 1e-3);
        assert_eq!(at(11.8), 0.0);
        assert_eq!(at(11.99), 0.0);
        assert_eq!(at(12.0), 0.0);
    }

    #[test]
    fn completes_after_last_header() {
        let mut intro = intro();
        assert_eq!(intro.duration(), 12.0);
        intro.advance(11.0);
        assert!(!intro.is_complete());
        intro.advance(1.0);
        assert!(intro.is_complete());
        assert_eq!(intro.sample(intro.elapsed()), vec![(0, -100.0), (1, 0.0), (2, 0.0)]);
    }
}
