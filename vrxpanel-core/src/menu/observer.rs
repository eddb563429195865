//! Change notifications for externally actuated fields
//!
//! Recording and bypass drive hardware outside the menu (the DVR and the
//! video switch), so the owner is told synchronously whenever an edit
//! actually changes either value.

/// Receives record/bypass changes
///
/// Both methods default to doing nothing.
pub trait ConfigObserver {
    /// Recording value changed to `value`
    fn record_changed(&mut self, value: u8) {
        let _ = value;
    }

    /// Bypass value changed to `value`
    fn bypass_changed(&mut self, value: u8) {
        let _ = value;
    }
}

/// No observer
impl ConfigObserver for () {}

impl<T: ConfigObserver + ?Sized> ConfigObserver for &mut T {
    fn record_changed(&mut self, value: u8) {
        (**self).record_changed(value);
    }

    fn bypass_changed(&mut self, value: u8) {
        (**self).bypass_changed(value);
    }
}

/// Observer built from two closures
pub struct Callbacks<R, B> {
    on_record: R,
    on_bypass: B,
}

impl<R, B> Callbacks<R, B>
where
    R: FnMut(u8),
    B: FnMut(u8),
{
    pub fn new(on_record: R, on_bypass: B) -> Self {
        Self {
            on_record,
            on_bypass,
        }
    }
}

impl<R, B> ConfigObserver for Callbacks<R, B>
where
    R: FnMut(u8),
    B: FnMut(u8),
{
    fn record_changed(&mut self, value: u8) {
        (self.on_record)(value);
    }

    fn bypass_changed(&mut self, value: u8) {
        (self.on_bypass)(value);
    }
}
