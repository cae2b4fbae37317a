use crate::tween::{Lerp, Tween};

#[derive(Debug, Clone)]
struct Track<K, T> {
    key: K,
    at: f32,
    tween: Tween<T>,
}

/// A set of tweens placed at absolute start offsets, keyed by target.
///
/// Tracks are "from-to" tweens: before a track starts its target holds the
/// track's `from` value. When several tracks share a key, the latest one that
/// has started wins.
#[derive(Debug, Clone)]
pub struct Timeline<K, T> {
    tracks: Vec<Track<K, T>>,
}

impl<K, T> Default for Timeline<K, T> {
    fn default() -> Self {
        Self { tracks: Vec::new() }
    }
}

impl<K: Clone + PartialEq, T: Lerp> Timeline<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `tween` on `key`, starting `at` seconds into the timeline.
    pub fn add(&mut self, key: K, at: f32, tween: Tween<T>) -> &mut Self {
        self.tracks.push(Track {
            key,
            at: at.max(0.0),
            tween,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// End time of the last track.
    pub fn duration(&self) -> f32 {
        self.tracks
            .iter()
            .map(|t| t.at + t.tween.duration)
            .fold(0.0, f32::max)
    }

    pub fn is_complete(&self, t: f32) -> bool {
        t >= self.duration()
    }

    /// Distinct keys in insertion order.
    pub fn keys(&self) -> Vec<K> {
        let mut keys: Vec<K> = Vec::new();
        for track in &self.tracks {
            if !keys.contains(&track.key) {
                keys.push(track.key.clone());
            }
        }
        keys
    }

    /// Value of `key` at timeline time `t`, or `None` if no track targets it.
    pub fn value(&self, key: &K, t: f32) -> Option<T> {
        let mut earliest: Option<&Track<K, T>> = None;
        let mut active: Option<&Track<K, T>> = None;
        for track in self.tracks.iter().filter(|tr| &tr.key == key) {
            if earliest.is_none_or(|e| track.at < e.at) {
                earliest = Some(track);
            }
            if track.at <= t && active.is_none_or(|a| track.at >= a.at) {
                active = Some(track);
            }
        }
        match (active, earliest) {
            (Some(track), _) => Some(track.tween.sample(t - track.at)),
            (None, Some(track)) => Some(track.tween.from),
            (None, None) => None,
        }
    }

    /// Every key's value at time `t`, in insertion order.
    pub fn sample(&self, t: f32) -> Vec<(K, T)> {
        self.keys()
            .into_iter()
            .filter_map(|k| self.value(&k, t).map(|v| (k, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ease::Ease;

    fn headers() -> Timeline<&'static str, f32> {
        let mut tl = Timeline::new();
        tl.add("h1", 0.0, Tween::new(-1200.0, -100.0, 2.0, Ease::Linear))
            .add("h2", 4.0, Tween::new(1200.0, 0.0, 2.0, Ease::Linear))
            .add("h3", 8.0, Tween::new(-1200.0, 0.0, 4.0, Ease::Linear));
        tl
    }

    #[test]
    fn duration_is_end_of_last_track() {
        let tl = headers();
        assert_eq!(tl.duration(), 12.0);
        assert!(!tl.is_complete(11.9));
        assert!(tl.is_complete(12.0));
        assert_eq!(tl.len(), 3);
    }

    #[test]
    fn unstarted_tracks_hold_from_value() {
        let tl = headers();
        assert_eq!(tl.value(&"h2", 0.0), Some(1200.0));
        assert_eq!(tl.value(&"h3", 7.99), Some(-1200.0));
        assert_eq!(tl.value(&"missing", 1.0), None);
    }

    #[test]
    fn tracks_play_from_their_offset() {
        let tl = headers();
        assert_eq!(tl.value(&"h1", 1.0), Some(-650.0));
        assert_eq!(tl.value(&"h2", 5.0), Some(600.0));
        assert_eq!(tl.value(&"h3", 10.0), Some(-600.0));
        let all = tl.sample(20.0);
        assert_eq!(all, vec![("h1", -100.0), ("h2", 0.0), ("h3", 0.0)]);
    }

    #[test]
    fn later_track_on_same_key_wins_once_started() {
        let mut tl = Timeline::new();
        tl.add("x", 0.0, Tween::new(0.0f32, 10.0, 1.0, Ease::Linear))
            .add("x", 1.0, Tween::new(10.0, 0.0, 1.0, Ease::Linear));
        assert_eq!(tl.value(&"x", 0.5), Some(5.0));
        assert_eq!(tl.value(&"x", 1.5), Some(5.0));
        assert_eq!(tl.value(&"x", 3.0), Some(0.0));
        assert_eq!(tl.keys(), vec!["x"]);
    }
}
