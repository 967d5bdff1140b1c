//! Bounded page index over a row of uniformly sized items.

use glide_ui::Px;

/// Number of whole items that fit in `container`.
///
/// A trailing item that only partially fits is not counted. The result is
/// at least one so that a collapsed container still pages item by item.
pub fn visible_item_count(container: Px, item_width: Px, gap: Px) -> usize {
    let step = item_width + gap;
    let fitting = ((container + gap).to_f32() / step.to_f32()).floor();
    // NaN (0 / 0) casts to 0 and +inf saturates, matching "everything fits".
    (fitting as usize).max(1)
}

/// Pagination state of one slider instance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaginationState {
    current_index: usize,
    item_width: Px,
    gap: Px,
    item_count: usize,
    max_index: usize,
}

impl PaginationState {
    /// Creates the state for a strip of `item_count` items.
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            ..Self::default()
        }
    }

    /// Index of the left-most fully visible item.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Largest legal value of [`PaginationState::current_index`].
    pub fn max_index(&self) -> usize {
        self.max_index
    }

    /// Measured width of one item.
    pub fn item_width(&self) -> Px {
        self.item_width
    }

    /// Measured spacing between items.
    pub fn gap(&self) -> Px {
        self.gap
    }

    /// Number of items in the strip.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Distance the strip moves per index.
    pub fn step(&self) -> Px {
        self.item_width + self.gap
    }

    /// Whether the strip is showing its first item.
    pub fn is_at_start(&self) -> bool {
        self.current_index == 0
    }

    /// Whether the strip cannot move further right.
    pub fn is_at_end(&self) -> bool {
        self.current_index >= self.max_index
    }

    /// Recomputes metrics from a fresh layout measurement.
    ///
    /// The current index only ever moves down, to stay within the new
    /// maximum. Returns `false` (and changes nothing) for an empty strip.
    pub fn update_metrics(&mut self, container_width: Px, item_width: Px, gap: Px) -> bool {
        if self.item_count == 0 {
            return false;
        }
        self.item_width = item_width.sanitized();
        self.gap = gap.sanitized();
        let visible = visible_item_count(container_width.sanitized(), self.item_width, self.gap);
        self.max_index = self.item_count.saturating_sub(visible);
        self.current_index = self.current_index.min(self.max_index);
        true
    }

    /// Clamps a requested index into `0..=max_index`.
    pub fn clamp_index(&self, target: isize) -> usize {
        usize::try_from(target).map_or(0, |index| index.min(self.max_index))
    }

    /// Moves to `target`, clamped. Returns the index actually applied.
    pub fn set_index(&mut self, target: isize) -> usize {
        self.current_index = self.clamp_index(target);
        self.current_index
    }

    /// Index reached by moving `delta` items from the current one, unclamped.
    pub fn relative_target(&self, delta: isize) -> isize {
        isize::try_from(self.current_index)
            .unwrap_or(isize::MAX)
            .saturating_add(delta)
    }

    /// Horizontal strip offset for the current index.
    pub fn offset(&self) -> Px {
        -self.step().times(self.current_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(container: f32, item: f32, gap: f32, count: usize) -> PaginationState {
        let mut state = PaginationState::new(count);
        state.update_metrics(Px(container), Px(item), Px(gap));
        state
    }

    #[test]
    fn floors_partially_visible_items() {
        assert_eq!(visible_item_count(Px(1000.0), Px(300.0), Px(20.0)), 3);
        assert_eq!(visible_item_count(Px(900.0), Px(300.0), Px(20.0)), 2);
        assert_eq!(visible_item_count(Px(2000.0), Px(300.0), Px(20.0)), 6);
    }

    #[test]
    fn visible_count_is_at_least_one() {
        assert_eq!(visible_item_count(Px::ZERO, Px(300.0), Px(20.0)), 1);
        assert_eq!(visible_item_count(Px(100.0), Px(300.0), Px::ZERO), 1);
        assert_eq!(visible_item_count(Px::ZERO, Px::ZERO, Px::ZERO), 1);
    }

    #[test]
    fn zero_step_shows_everything() {
        let state = measured(500.0, 0.0, 0.0, 4);
        assert_eq!(state.max_index(), 0);
    }

    #[test]
    fn max_index_follows_visible_count() {
        let state = measured(1000.0, 300.0, 20.0, 6);
        assert_eq!(state.max_index(), 3);
        assert_eq!(state.step(), Px(320.0));

        let state = measured(2000.0, 300.0, 20.0, 6);
        assert_eq!(state.max_index(), 0);
    }

    #[test]
    fn every_request_lands_in_range() {
        let mut state = measured(1000.0, 300.0, 20.0, 6);
        for target in -20..20 {
            let applied = state.set_index(target);
            assert!(applied <= state.max_index(), "target {target}");
            assert_eq!(applied, state.current_index());
        }
        assert_eq!(state.clamp_index(isize::MIN), 0);
        assert_eq!(state.clamp_index(isize::MAX), 3);
    }

    #[test]
    fn remeasure_only_lowers_index() {
        let mut state = measured(1000.0, 300.0, 20.0, 6);
        state.set_index(3);

        state.update_metrics(Px(1400.0), Px(300.0), Px(20.0));
        assert_eq!(state.max_index(), 2);
        assert_eq!(state.current_index(), 2);

        state.update_metrics(Px(600.0), Px(300.0), Px(20.0));
        assert_eq!(state.max_index(), 5);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn remeasure_is_idempotent() {
        let mut state = measured(1000.0, 300.0, 20.0, 6);
        state.set_index(2);
        let before = state;
        state.update_metrics(Px(1000.0), Px(300.0), Px(20.0));
        assert_eq!(state, before);
    }

    #[test]
    fn empty_strip_ignores_measurements() {
        let mut state = PaginationState::new(0);
        assert!(!state.update_metrics(Px(1000.0), Px(300.0), Px(20.0)));
        assert_eq!(state, PaginationState::default());
        assert_eq!(state.set_index(5), 0);
    }

    #[test]
    fn offset_moves_left_by_whole_steps() {
        let mut state = measured(1000.0, 300.0, 20.0, 6);
        assert_eq!(state.offset(), Px::ZERO);
        state.set_index(2);
        assert_eq!(state.offset(), Px(-640.0));
        assert_eq!(state.relative_target(-3), -1);
    }
}
