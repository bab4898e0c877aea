/// Evenly spaced values from `start` to `end`, both included:
/// `intervals + 1` values, the i-th being start + (end - start) * i / intervals
#[derive(Clone, Debug)]
pub struct Linspace {
    pos: u64,
    intervals: u64,
    start: f64,
    end: f64,
}

impl Linspace {
    pub fn new(start: f64, end: f64, intervals: u64) -> Self {
        Linspace {
            pos: 0,
            intervals,
            start,
            end,
        }
    }
}

impl Iterator for Linspace {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.intervals {
            return None;
        }
        let value = if self.pos == self.intervals {
            // exact end, no rounding drift on the last edge
            self.end
        } else {
            let p = self.pos as f64 / self.intervals as f64;
            (1. - p) * self.start + p * self.end
        };
        self.pos += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.intervals + 1).saturating_sub(self.pos) as usize;
        (left, Some(left))
    }
}
