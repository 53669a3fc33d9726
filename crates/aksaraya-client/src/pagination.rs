//! Page control math shared by every paged view.

/// Previous/next availability for a 1-based page within `total` pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    /// Current page, clamped into `1..=total`.
    pub current: u32,
    /// Total pages, at least 1.
    pub total: u32,
}

impl PageControl {
    /// Clamp `current` and `total` into a coherent pair.
    #[must_use]
    pub fn new(current: u32, total: u32) -> Self {
        let total = total.max(1);
        Self {
            current: current.clamp(1, total),
            total,
        }
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn can_prev(&self) -> bool {
        self.current > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn can_next(&self) -> bool {
        self.current < self.total
    }

    /// Page number reached by "previous".
    #[must_use]
    pub const fn prev(&self) -> Option<u32> {
        if self.can_prev() {
            Some(self.current - 1)
        } else {
            None
        }
    }

    /// Page number reached by "next".
    #[must_use]
    pub const fn next(&self) -> Option<u32> {
        if self.can_next() {
            Some(self.current + 1)
        } else {
            None
        }
    }

    /// `"{current} of {total}"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} of {}", self.current, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::PageControl;

    #[test]
    fn first_page_disables_prev() {
        let control = PageControl::new(1, 2);
        assert!(!control.can_prev());
        assert_eq!(control.next(), Some(2));
        assert_eq!(control.label(), "1 of 2");
    }

    #[test]
    fn last_page_disables_next() {
        let control = PageControl::new(5, 5);
        assert_eq!(control.prev(), Some(4));
        assert_eq!(control.next(), None);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(PageControl::new(9, 3).current, 3);
        assert_eq!(PageControl::new(0, 0), PageControl { current: 1, total: 1 });
    }
}
