//! Presence handles for optional button elements.
//!
//! Each optional element of a button (icon, title, subtitle) lives in a
//! [`Slot`]. Whether the element exists is an explicit state that can be
//! matched on and tested, not a null check.

/// An optional element: either absent or present with its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot<T> {
    /// The element is not shown and takes no space.
    Absent,
    /// The element is shown.
    Present(T),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Absent
    }
}

impl<T> Slot<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Slot::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrow the value, if present.
    pub fn get(&self) -> Option<&T> {
        match self {
            Slot::Present(value) => Some(value),
            Slot::Absent => None,
        }
    }

    /// Convert into an `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Slot::Present(value) => Some(value),
            Slot::Absent => None,
        }
    }

    /// Empty the slot, returning the previous value.
    pub fn take(&mut self) -> Option<T> {
        std::mem::take(self).into_option()
    }
}

impl<T: PartialEq> Slot<T> {
    /// Replace the contents. Returns `true` if the slot changed.
    pub fn set(&mut self, value: Option<T>) -> bool {
        let next = Slot::from(value);
        if *self == next {
            false
        } else {
            *self = next;
            true
        }
    }
}

impl<T> From<Option<T>> for Slot<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Slot::Present(value),
            None => Slot::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reports_changes() {
        let mut slot: Slot<String> = Slot::default();
        assert!(slot.is_absent());

        assert!(slot.set(Some("Save".into())));
        assert!(!slot.set(Some("Save".into())));
        assert_eq!(slot.get().map(String::as_str), Some("Save"));

        assert!(slot.set(None));
        assert_eq!(slot, Slot::Absent);
    }

    #[test]
    fn take_leaves_absent() {
        let mut slot = Slot::Present(3);
        assert_eq!(slot.take(), Some(3));
        assert!(slot.is_absent());
        assert_eq!(slot.take(), None);
    }
}
