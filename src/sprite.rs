//! Sprite sheets cut into horizontal strips, cycled while a menu entry is hovered.

use std::collections::HashMap;

/// Source rectangle of one frame inside its sheet. Strips always span the full
/// sheet width and start at `x = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strip {
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Cut a `width x height` sheet into `count` equal-height strips, stacked top to
/// bottom. The last strip takes whatever the integer division left over.
pub fn slice_strips(width: u32, height: u32, count: usize) -> Vec<Strip> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as u32;
    let each = height / n;
    (0..n)
        .map(|i| {
            let y = i * each;
            let h = if i == n - 1 { height - y } else { each };
            Strip {
                y,
                width,
                height: h,
            }
        })
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct Sheet {
    strips: Vec<Strip>,
}

impl Sheet {
    pub fn is_sliced(&self) -> bool {
        !self.strips.is_empty()
    }

    pub fn strips(&self) -> &[Strip] {
        &self.strips
    }
}

/// What the animator wants drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteFrame<'a> {
    pub asset: &'a str,
    pub index: usize,
    pub strip: Strip,
}

#[derive(Clone, Debug)]
pub struct SpriteAnimator {
    sheets: HashMap<String, Sheet>,
    frame_count: usize,
    interval_ms: f64,
    current: Option<String>,
    frame: usize,
    last_advance_ms: f64,
}

impl SpriteAnimator {
    pub fn new<'a>(
        assets: impl IntoIterator<Item = &'a str>,
        frame_count: usize,
        interval_ms: f64,
    ) -> Self {
        Self {
            sheets: assets
                .into_iter()
                .map(|a| (a.to_owned(), Sheet::default()))
                .collect(),
            frame_count: frame_count.max(1),
            interval_ms,
            current: None,
            frame: 0,
            last_advance_ms: 0.0,
        }
    }

    /// Record the natural size of a loaded sheet and cut it into frames.
    /// Unknown names are ignored.
    pub fn slice(&mut self, asset: &str, width: u32, height: u32) -> bool {
        match self.sheets.get_mut(asset) {
            Some(sheet) => {
                sheet.strips = slice_strips(width, height, self.frame_count);
                log::debug!("sliced {asset} ({width}x{height}) into {} frames", sheet.strips.len());
                true
            }
            None => false,
        }
    }

    /// Make `asset` current and restart its cycle at frame zero.
    pub fn select(&mut self, asset: &str, now_ms: f64) {
        self.current = Some(asset.to_owned());
        self.frame = 0;
        self.last_advance_ms = now_ms;
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Advance the frame when the interval has elapsed, then report what to draw.
    pub fn tick(&mut self, now_ms: f64) -> Option<SpriteFrame<'_>> {
        if self.current.is_none() {
            return None;
        }
        if now_ms - self.last_advance_ms >= self.interval_ms {
            self.frame = (self.frame + 1) % self.frame_count;
            self.last_advance_ms = now_ms;
        }
        let name = self.current.as_deref()?;
        let strip = *self.sheets.get(name)?.strips.get(self.frame)?;
        Some(SpriteFrame {
            asset: name,
            index: self.frame,
            strip,
        })
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn sheet(&self, asset: &str) -> Option<&Sheet> {
        self.sheets.get(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> SpriteAnimator {
        let mut a = SpriteAnimator::new(["a.png", "b.png"], 12, 166.0);
        a.slice("a.png", 64, 1200);
        a
    }

    #[test]
    fn remainder_goes_to_last_strip() {
        for h in [0u32, 11, 12, 100, 1207] {
            let strips = slice_strips(40, h, 12);
            assert_eq!(strips.len(), 12);
            let each = h / 12;
            for (i, s) in strips.iter().enumerate().take(11) {
                assert_eq!(s.height, each);
                assert_eq!(s.y, i as u32 * each);
            }
            assert_eq!(strips[11].height, h - 11 * each);
            assert_eq!(strips.iter().map(|s| s.height).sum::<u32>(), h);
            assert!(strips.iter().all(|s| s.width == 40));
        }
    }

    #[test]
    fn nothing_drawn_without_selection() {
        let mut a = animator();
        assert!(a.tick(1000.0).is_none());
        assert_eq!(a.frame(), 0);
    }

    #[test]
    fn advances_once_per_interval() {
        let mut a = animator();
        a.select("a.png", 1000.0);
        assert_eq!(a.tick(1100.0).map(|f| f.index), Some(0));
        assert_eq!(a.tick(1166.0).map(|f| f.index), Some(1));
        assert_eq!(a.tick(1200.0).map(|f| f.index), Some(1));
        assert_eq!(a.tick(1332.0).map(|f| f.index), Some(2));
    }

    #[test]
    fn frame_wraps_at_frame_count() {
        let mut a = animator();
        a.select("a.png", 0.0);
        let mut now = 0.0;
        for expected in (1..12).chain([0, 1]) {
            now += 200.0;
            let f = a.tick(now).unwrap();
            assert_eq!(f.index, expected);
            assert!(f.index < 12);
        }
    }

    #[test]
    fn reselect_resets_frame() {
        let mut a = animator();
        a.select("a.png", 0.0);
        a.tick(500.0);
        assert_eq!(a.frame(), 1);
        a.select("a.png", 600.0);
        assert_eq!(a.frame(), 0);
        assert_eq!(a.tick(700.0).unwrap().strip, Strip { y: 0, width: 64, height: 100 });
    }

    #[test]
    fn unsliced_sheet_draws_nothing() {
        let mut a = animator();
        a.select("b.png", 0.0);
        assert!(a.tick(10.0).is_none());
        assert_eq!(a.current(), Some("b.png"));
        a.clear();
        assert_eq!(a.current(), None);
    }

    #[test]
    fn unknown_sheet_is_not_sliced() {
        let mut a = animator();
        assert!(!a.slice("c.png", 10, 10));
        assert!(a.sheet("b.png").is_some_and(|s| !s.is_sliced()));
        assert_eq!(a.sheet("a.png").map(|s| s.strips().len()), Some(12));
    }
}
