//! Configuration menu screen

use heapless::String;
use vrxpanel_display::{
    centered_origin, fill_round_rect, truncated, Background, DisplayDriver, DisplayError, Font,
    Rgb,
};
use vrxpanel_hal::{Clock, InputPin};

use super::buttons::{Button, ButtonPins, Buttons};
use super::labels::{LabelTable, LabelTables};
use super::observer::ConfigObserver;
use super::state::{ConfigItem, ConfigState};

/// Title used by [`ConfigMenu::tick`] when none is configured
pub const DEFAULT_MENU_TITLE: &str = "CONFIGURATION MODE";

/// Default top of the menu block before the first frame centres it
pub const DEFAULT_ORIGIN_Y: u16 = 64;

/// Default menu block width
pub const DEFAULT_BLOCK_WIDTH: u16 = 440;

/// Maximum title length
pub const MENU_TITLE_LEN: usize = 24;

const TITLE_HEIGHT: u16 = 40;
const ROW_HEIGHT: u16 = 48;
const ROW_GAP: u16 = 10;
/// Space between the title bar and the first row
const TITLE_SPACING: u16 = 12;
/// Title bar, spacing and three rows
const BLOCK_HEIGHT: u16 = TITLE_HEIGHT + TITLE_SPACING + 3 * ROW_HEIGHT + 2 * ROW_GAP;

const CARD_RADIUS: u32 = 6;
const PILL_RADIUS: u32 = 8;
const PILL_WIDTH: u32 = 160;
/// Pill left edge, measured from the block's right edge
const PILL_INSET: i32 = 180;

const PLACEHOLDER: &str = "--";
const NOT_APPLICABLE: &str = "N/A";
const ROW_PLACEHOLDER: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Decrement,
    Increment,
}

/// Next index after a saturating step, `None` when it would not change
///
/// Decrements start from the saturated (displayed) index, so an
/// out-of-range value moves to the entry below the last one.
fn step_index(table: &LabelTable<'_>, value: u8, step: Step) -> Option<u8> {
    let current = table.saturate(value)?;
    let next = match step {
        Step::Decrement => current.checked_sub(1)?,
        Step::Increment if current + 1 < table.count() => current + 1,
        Step::Increment => return None,
    };
    (next != value).then_some(next)
}

/// Menu over the four editable fields
///
/// Owns the button pins and the clock; the display and the configuration
/// record are lent on every call.
pub struct ConfigMenu<'a, P, C, O = ()> {
    buttons: Buttons<P>,
    clock: C,
    labels: LabelTables<'a>,
    observer: O,
    title: String<MENU_TITLE_LEN>,
    screen_width: u16,
    screen_height: u16,
    x: i32,
    y: i32,
    width: u16,
    cursor: ConfigItem,
    needs_full_redraw: bool,
}

impl<'a, P: InputPin, C: Clock> ConfigMenu<'a, P, C, ()> {
    /// Create a menu sized to `display`
    ///
    /// The button pins are configured as pulled-up inputs. The block width
    /// is clamped to the screen width. A full frame is drawn on the first
    /// [`ConfigMenu::tick`].
    pub fn new<D: DisplayDriver + ?Sized>(
        display: &D,
        pins: ButtonPins<P>,
        clock: C,
        labels: LabelTables<'a>,
        origin_y: u16,
        block_width: u16,
    ) -> Self {
        let (screen_width, screen_height) = display.dimensions();
        let width = block_width.min(screen_width);
        Self {
            buttons: Buttons::new(pins),
            clock,
            labels,
            observer: (),
            title: truncated(DEFAULT_MENU_TITLE),
            screen_width,
            screen_height,
            x: centered_origin(screen_width, width),
            y: i32::from(origin_y),
            width,
            cursor: ConfigItem::Band,
            needs_full_redraw: true,
        }
    }
}

impl<'a, P: InputPin, C: Clock, O: ConfigObserver> ConfigMenu<'a, P, C, O> {
    /// Replace the change observer
    pub fn with_observer<O2: ConfigObserver>(self, observer: O2) -> ConfigMenu<'a, P, C, O2> {
        ConfigMenu {
            buttons: self.buttons,
            clock: self.clock,
            labels: self.labels,
            observer,
            title: self.title,
            screen_width: self.screen_width,
            screen_height: self.screen_height,
            x: self.x,
            y: self.y,
            width: self.width,
            cursor: self.cursor,
            needs_full_redraw: self.needs_full_redraw,
        }
    }

    /// Title drawn by [`ConfigMenu::tick`] (truncated to [`MENU_TITLE_LEN`])
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = truncated(title);
        self
    }

    /// Minimum interval between accepted button events
    pub fn with_debounce(mut self, debounce_ms: u16) -> Self {
        self.buttons.set_debounce_ms(debounce_ms);
        self
    }

    /// Field under the cursor
    pub fn cursor(&self) -> ConfigItem {
        self.cursor
    }

    pub fn buttons(&self) -> &Buttons<P> {
        &self.buttons
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Whether the next tick draws the full frame
    pub fn needs_full_redraw(&self) -> bool {
        self.needs_full_redraw
    }

    /// Move the cursor to the first field and redraw the frame on the next tick
    pub fn reset_cursor(&mut self) {
        self.cursor = ConfigItem::Band;
        self.needs_full_redraw = true;
    }

    /// Redraw the frame on the next tick
    pub fn force_redraw(&mut self) {
        self.needs_full_redraw = true;
    }

    /// Adopt a new logical screen size (e.g. after a rotation)
    pub fn set_screen_size(&mut self, width: u16, height: u16) {
        self.screen_width = width;
        self.screen_height = height;
        self.width = self.width.min(width);
        self.x = centered_origin(width, self.width);
    }

    /// Clear the screen and draw the title bar with three placeholder rows
    ///
    /// The block is centred on both axes.
    pub fn draw_frame<D: DisplayDriver + ?Sized>(
        &mut self,
        display: &mut D,
        title: &str,
    ) -> Result<(), DisplayError> {
        display.set_color(Rgb::BACKGROUND);
        display.fill_rect(
            0,
            0,
            u32::from(self.screen_width),
            u32::from(self.screen_height),
        )?;

        let total = BLOCK_HEIGHT.min(self.screen_height);
        self.y = centered_origin(self.screen_height, total);
        self.x = centered_origin(self.screen_width, self.width);

        fill_round_rect(
            display,
            self.x,
            self.y,
            u32::from(self.width),
            u32::from(TITLE_HEIGHT),
            CARD_RADIUS,
            Rgb::CARD,
        )?;
        print_at(display, title, self.x + 10, self.y + 12, Rgb::TEXT, Font::Big)?;

        let [prev, current, next] = self.row_tops();
        self.draw_row(display, prev, ROW_PLACEHOLDER, true)?;
        self.draw_row(display, current, ROW_PLACEHOLDER, false)?;
        self.draw_row(display, next, ROW_PLACEHOLDER, true)?;

        self.needs_full_redraw = false;
        Ok(())
    }

    /// Draw the rows around the cursor with the current field's value
    pub fn render<D: DisplayDriver + ?Sized>(
        &self,
        display: &mut D,
        state: &ConfigState,
    ) -> Result<(), DisplayError> {
        let [prev, current, next] = self.row_tops();
        self.draw_row(display, prev, self.cursor.prev().name(), true)?;
        self.draw_current_row(
            display,
            current,
            self.cursor.name(),
            self.value_for(state, self.cursor),
        )?;
        self.draw_row(display, next, self.cursor.next().name(), true)
    }

    /// Per-frame entry point
    ///
    /// Draws the frame if one is pending. Outside edit mode the buttons are
    /// not read. Otherwise at most one debounced button event is applied and
    /// the rows are redrawn; returns whether an event was accepted.
    pub fn tick<D: DisplayDriver + ?Sized>(
        &mut self,
        display: &mut D,
        state: &mut ConfigState,
        edit_mode: bool,
    ) -> Result<bool, DisplayError> {
        if self.needs_full_redraw {
            let title = self.title.clone();
            self.draw_frame(display, &title)?;
            self.render(display, state)?;
        }

        if !edit_mode {
            return Ok(false);
        }

        let Some(button) = self.buttons.poll(self.clock.now_ms()) else {
            return Ok(false);
        };
        trace!("menu: {}", button);

        match button {
            Button::Up => self.cursor = self.cursor.prev(),
            Button::Down => self.cursor = self.cursor.next(),
            Button::Left => self.apply(state, Step::Decrement),
            Button::Right => self.apply(state, Step::Increment),
        }

        self.render(display, state)?;
        Ok(true)
    }

    /// Value label for `item`, or a placeholder
    pub fn value_for(&self, state: &ConfigState, item: ConfigItem) -> &'a str {
        let label = match item {
            ConfigItem::Band if !state.mode.band_selectable() => return NOT_APPLICABLE,
            ConfigItem::Band => self.labels.bands.get(state.band),
            ConfigItem::Channel => self.labels.chans.get(state.channel),
            ConfigItem::Record => self.labels.rec.get(state.record),
            ConfigItem::Bypass => self.labels.bypass.get(state.bypass),
        };
        label.unwrap_or(PLACEHOLDER)
    }

    fn apply(&mut self, state: &mut ConfigState, step: Step) {
        match self.cursor {
            ConfigItem::Band => {
                if !state.mode.band_selectable() {
                    return;
                }
                if let Some(band) = step_index(&self.labels.bands, state.band, step) {
                    state.band = band;
                    debug!("menu: band {}", band);
                }
            }
            ConfigItem::Channel => {
                if let Some(channel) = step_index(&self.labels.chans, state.channel, step) {
                    state.channel = channel;
                    debug!("menu: channel {}", channel);
                }
            }
            ConfigItem::Record => {
                if let Some(record) = step_index(&self.labels.rec, state.record, step) {
                    state.record = record;
                    debug!("menu: record {}", record);
                    self.observer.record_changed(record);
                }
            }
            ConfigItem::Bypass => {
                if let Some(bypass) = step_index(&self.labels.bypass, state.bypass, step) {
                    state.bypass = bypass;
                    debug!("menu: bypass {}", bypass);
                    self.observer.bypass_changed(bypass);
                }
            }
        }
    }

    /// Top edges of the previous, current and next rows
    fn row_tops(&self) -> [i32; 3] {
        let first = self.y + i32::from(TITLE_HEIGHT + TITLE_SPACING);
        let pitch = i32::from(ROW_HEIGHT + ROW_GAP);
        [first, first + pitch, first + 2 * pitch]
    }

    fn draw_row<D: DisplayDriver + ?Sized>(
        &self,
        display: &mut D,
        y: i32,
        text: &str,
        dim: bool,
    ) -> Result<(), DisplayError> {
        fill_round_rect(
            display,
            self.x,
            y,
            u32::from(self.width),
            u32::from(ROW_HEIGHT),
            CARD_RADIUS,
            Rgb::CARD,
        )?;
        let color = if dim { Rgb::DIM } else { Rgb::TEXT };
        print_at(display, text, self.x + 10, y + 14, color, Font::Small)
    }

    fn draw_current_row<D: DisplayDriver + ?Sized>(
        &self,
        display: &mut D,
        y: i32,
        text: &str,
        value: &str,
    ) -> Result<(), DisplayError> {
        self.draw_row(display, y, text, false)?;

        let (pill_x, pill_width) = self.pill_span();
        fill_round_rect(
            display,
            pill_x,
            y + 6,
            pill_width,
            u32::from(ROW_HEIGHT - 12),
            PILL_RADIUS,
            Rgb::BLACK,
        )?;
        print_at(display, value, pill_x + 10, y + 14, Rgb::OK, Font::Small)
    }

    /// Left edge and width of the value pill, kept inside the block
    fn pill_span(&self) -> (i32, u32) {
        let right = self.x + i32::from(self.width);
        let x = (right - PILL_INSET).max(self.x);
        (x, PILL_WIDTH.min((right - x) as u32))
    }
}

fn print_at<D: DisplayDriver + ?Sized>(
    display: &mut D,
    text: &str,
    x: i32,
    y: i32,
    color: Rgb,
    font: Font,
) -> Result<(), DisplayError> {
    display.set_font(font);
    display.set_color(color);
    display.set_background(Background::Transparent);
    display.print(text, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::buttons::DEFAULT_DEBOUNCE_MS;
    use crate::menu::observer::Callbacks;
    use crate::menu::state::VrxMode;
    use crate::menu::testing::Levels;
    use core::cell::Cell;
    use vrxpanel_display::mock::{DrawOp, RecordingDisplay};
    use vrxpanel_hal::mock::{MockClock, MockPin};
    use vrxpanel_hal::Pull;

    const BANDS: [&str; 7] = ["A", "B", "E", "F", "R", "L", "X"];
    const CHANS: [&str; 8] = ["CH1", "CH2", "CH3", "CH4", "CH5", "CH6", "CH7", "CH8"];
    const REC: [&str; 2] = ["STOP", "REC"];
    const BYPASS: [&str; 3] = ["OFF", "ON", "AUTO"];

    fn tables() -> LabelTables<'static> {
        LabelTables {
            bands: LabelTable::new(&BANDS),
            chans: LabelTable::new(&CHANS),
            rec: LabelTable::new(&REC),
            bypass: LabelTable::new(&BYPASS),
        }
    }

    fn menu<'l>(
        display: &RecordingDisplay,
        levels: &'l Levels,
        clock: &'l MockClock,
        labels: LabelTables<'static>,
    ) -> ConfigMenu<'static, MockPin<'l>, &'l MockClock> {
        ConfigMenu::new(
            display,
            levels.pins(),
            clock,
            labels,
            DEFAULT_ORIGIN_Y,
            DEFAULT_BLOCK_WIDTH,
        )
    }

    /// Hold `button` for one tick after the debounce window
    fn press<O: ConfigObserver>(
        menu: &mut ConfigMenu<'static, MockPin<'_>, &MockClock, O>,
        display: &mut RecordingDisplay,
        levels: &Levels,
        clock: &MockClock,
        state: &mut ConfigState,
        button: Button,
    ) -> bool {
        clock.advance(u64::from(DEFAULT_DEBOUNCE_MS));
        levels.press(button);
        let accepted = menu.tick(display, state, true).unwrap();
        levels.release(button);
        accepted
    }

    /// Colour of the most recent print of `text`
    fn print_color(display: &RecordingDisplay, text: &str) -> Option<Rgb> {
        display.ops().iter().rev().find_map(|op| match op {
            DrawOp::Print { text: t, color, .. } if t.as_str() == text => Some(*color),
            _ => None,
        })
    }

    #[test]
    fn test_new_configures_pull_ups() {
        let display = RecordingDisplay::new(480, 320);
        let (levels, clock) = (Levels::released(), MockClock::new(0));
        let menu = menu(&display, &levels, &clock, tables());
        let pins = menu.buttons().pins();
        assert_eq!(pins.up.pull(), Pull::Up);
        assert_eq!(pins.down.pull(), Pull::Up);
        assert_eq!(pins.left.pull(), Pull::Up);
        assert_eq!(pins.right.pull(), Pull::Up);
    }

    #[test]
    fn test_first_tick_draws_frame_and_rows() {
        let mut display = RecordingDisplay::new(480, 320);
        let (levels, clock) = (Levels::released(), MockClock::new(0));
        let mut menu = menu(&display, &levels, &clock, tables());
        let mut state = ConfigState::default();

        assert!(!menu.tick(&mut display, &mut state, false).unwrap());
        assert!(!menu.needs_full_redraw());

        assert_eq!(
            display.ops()[0],
            DrawOp::FillRect {
                x: 0,
                y: 0,
                width: 480,
                height: 320,
                color: Rgb::BACKGROUND
            }
        );
        assert!(display.find_print(DEFAULT_MENU_TITLE).is_some());
        assert_eq!(display.prints().filter(|t| *t == "...").count(), 3);
        assert_eq!(print_color(&display, "V_BYPASS"), Some(Rgb::DIM));
        assert_eq!(print_color(&display, "VIDEO BAND"), Some(Rgb::TEXT));
        assert_eq!(print_color(&display, "CHANNEL"), Some(Rgb::DIM));
        assert_eq!(print_color(&display, "A"), Some(Rgb::OK));

        display.clear_ops();
        assert!(!menu.tick(&mut display, &mut state, false).unwrap());
        assert!(display.ops().is_empty());
    }

    #[test]
    fn test_frame_centred() {
        let mut display = RecordingDisplay::new(480, 320);
        let (levels, clock) = (Levels::released(), MockClock::new(0));
        let mut menu = menu(&display, &levels, &clock, tables());
        menu.draw_frame(&mut display, "SETUP").unwrap();

        match display.find_print("SETUP") {
            Some(DrawOp::Print { x, y, font, .. }) => {
                assert_eq!((*x, *y), (20 + 10, 52 + 12));
                assert_eq!(*font, Font::Big);
            }
            other => panic!("title not printed: {:?}", other),
        }
    }

    #[test]
    fn test_block_clamped_to_narrow_screen() {
        let mut display = RecordingDisplay::new(320, 480);
        let (levels, clock) = (Levels::released(), MockClock::new(0));
        let mut menu = menu(&display, &levels, &clock, tables());
        menu.draw_frame(&mut display, "SETUP").unwrap();

        assert!(display.ops().iter().all(|op| match op {
            DrawOp::FillRect { x, width, .. } => *x >= 0 && *x + *width as i32 <= 320,
            _ => true,
        }));
    }

    #[test]
    fn test_frozen_outside_edit_mode() {
        let mut display = RecordingDisplay::new(480, 320);
        let (levels, clock) = (Levels::released(), MockClock::new(1000));
        let mut menu = menu(&display, &levels, &clock, tables());
        let mut state = ConfigState::default();

        levels.press(Button::Down);
        assert!(!menu.tick(&mut display, &mut state, false).unwrap());
        assert_eq!(menu.cursor(), ConfigItem::Band);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut display = RecordingDisplay::new(480, 320);
        let (levels, clock) = (Levels::released(), MockClock::new(0));
        let mut menu = menu(&display, &levels, &clock, tables());
        let mut state = ConfigState::default();

        for _ in 0..4 {
            assert!(press(&mut menu, &mut display, &levels, &clock, &mut state, Button::Down));
        }
        assert_eq!(menu.cursor(), ConfigItem::Band);

        press(&mut menu, &mut display, &levels, &clock, &mut state, Button::Up);
        assert_eq!(menu.cursor(), ConfigItem::Bypass);
    }

    #[test]
    fn test_debounce_window() {
        let mut display = RecordingDisplay::new(480, 320);
        let (levels, clock) = (Levels::released(), MockClock::new(0));
        let mut menu = menu(&display, &levels, &clock, tables());
        let mut state = ConfigState::default();

        levels.press(Button::Down);
        assert!(menu.tick(&mut display, &mut state, true).unwrap());
        clock.set(119);
        assert!(!menu.tick(&mut display, &mut state, true).unwrap());
        assert_eq!(menu.cursor(), ConfigItem::Channel);

        clock.set(120);
        assert!(menu.tick(&mut display, &mut state, true).unwrap());
        assert_eq!(menu.cursor(), ConfigItem::Record);
    }

    #[test]
    fn test_band_locked_in_1g2() {
        let mut display = RecordingDisplay::new(480, 320);
        let (levels, clock) = (Levels::released(), MockClock::new(0));
        let mut menu = menu(&display, &levels, &clock, tables());
        let mut state = ConfigState {
            mode: VrxMode::Band1G2,
            band: 2,
            ..ConfigState::default()
        };

        for button in [Button::Right, Button::Left, Button::Left, Button::Right] {
            assert!(press(&mut menu, &mut display, &levels, &clock, &mut state, button));
        }
        assert_eq!(state.band, 2);
        assert_eq!(print_color(&display, "N/A"), Some(Rgb::OK));
    }

    #[test]
    fn test_band_edits_in_5g8() {
        let mut display = RecordingDisplay::new(480, 320);
        let (levels, clock) = (Levels::released(), MockClock::new(0));
        let mut menu = menu(&display, &levels, &clock, tables());
        let mut state = ConfigState::default();

        press(&mut menu, &mut display, &levels, &clock, &mut state, Button::Right);
        assert_eq!(state.band, 1);
        assert!(display.find_print("B").is_some());
    }

    #[test]
    fn test_channel_saturates() {
        let mut display = RecordingDisplay::new(480, 320);
        let (levels, clock) = (Levels::released(), MockClock::new(0));
        let mut menu = menu(&display, &levels, &clock, tables());
        let mut state = ConfigState {
            channel: 7,
            ..ConfigState::default()
        };

        press(&mut menu, &mut display, &levels, &clock, &mut state, Button::Down);
        for _ in 0..5 {
            press(&mut menu, &mut display, &levels, &clock, &mut state, Button::Right);
            assert_eq!(state.channel, 7);
        }

        state.channel = 0;
        press(&mut menu, &mut display, &levels, &clock, &mut state, Button::Left);
        assert_eq!(state.channel, 0);
    }

    #[test]
    fn test_out_of_range_value_saturates() {
        let mut display = RecordingDisplay::new(480, 320);
        let (levels, clock) = (Levels::released(), MockClock::new(0));
        let mut menu = menu(&display, &levels, &clock, tables());
        let mut state = ConfigState {
            channel: 42,
            ..ConfigState::default()
        };

        press(&mut menu, &mut display, &levels, &clock, &mut state, Button::Down);
        assert_eq!(print_color(&display, "CH8"), Some(Rgb::OK));

        press(&mut menu, &mut display, &levels, &clock, &mut state, Button::Left);
        assert_eq!(state.channel, 6);
    }

    #[test]
    fn test_observer_called_on_change_only() {
        let mut display = RecordingDisplay::new(480, 320);
        let (levels, clock) = (Levels::released(), MockClock::new(0));
        let records = Cell::new(0u8);
        let last_record = Cell::new(None);
        let last_bypass = Cell::new(None);
        let mut menu = menu(&display, &levels, &clock, tables()).with_observer(Callbacks::new(
            |v| {
                records.set(records.get() + 1);
                last_record.set(Some(v));
            },
            |v| last_bypass.set(Some(v)),
        ));
        let mut state = ConfigState::default();

        press(&mut menu, &mut display, &levels, &clock, &mut state, Button::Up);
        press(&mut menu, &mut display, &levels, &clock, &mut state, Button::Right);
        assert_eq!(state.bypass, 1);
        assert_eq!(last_bypass.get(), Some(1));

        press(&mut menu, &mut display, &levels, &clock, &mut state, Button::Up);
        press(&mut menu, &mut display, &levels, &clock, &mut state, Button::Right);
        press(&mut menu, &mut display, &levels, &clock, &mut state, Button::Right);
        assert_eq!(state.record, 1);
        assert_eq!(records.get(), 1);
        assert_eq!(last_record.get(), Some(1));

        press(&mut menu, &mut display, &levels, &clock, &mut state, Button::Left);
        assert_eq!(state.record, 0);
        assert_eq!(records.get(), 2);
        assert_eq!(last_record.get(), Some(0));
    }

    #[test]
    fn test_absent_tables_show_placeholder() {
        let mut display = RecordingDisplay::new(480, 320);
        let (levels, clock) = (Levels::released(), MockClock::new(0));
        let mut menu = menu(&display, &levels, &clock, LabelTables::default());
        let mut state = ConfigState::default();

        menu.tick(&mut display, &mut state, false).unwrap();
        assert_eq!(print_color(&display, "--"), Some(Rgb::OK));

        press(&mut menu, &mut display, &levels, &clock, &mut state, Button::Down);
        for button in [Button::Right, Button::Left] {
            press(&mut menu, &mut display, &levels, &clock, &mut state, button);
        }
        assert_eq!(state.channel, 0);
    }

    #[test]
    fn test_reset_cursor_redraws_frame() {
        let mut display = RecordingDisplay::new(480, 320);
        let (levels, clock) = (Levels::released(), MockClock::new(0));
        let mut menu = menu(&display, &levels, &clock, tables()).with_title("SETUP");
        let mut state = ConfigState::default();

        press(&mut menu, &mut display, &levels, &clock, &mut state, Button::Down);
        menu.reset_cursor();
        assert_eq!(menu.cursor(), ConfigItem::Band);

        display.clear_ops();
        menu.tick(&mut display, &mut state, false).unwrap();
        assert!(display.find_print("SETUP").is_some());
        assert_eq!(print_color(&display, "VIDEO BAND"), Some(Rgb::TEXT));
    }

    #[test]
    fn test_set_screen_size_recentres() {
        let mut display = RecordingDisplay::new(480, 320);
        let (levels, clock) = (Levels::released(), MockClock::new(0));
        let mut menu = menu(&display, &levels, &clock, tables());

        display.resize(320, 480);
        menu.set_screen_size(320, 480);
        menu.draw_frame(&mut display, "SETUP").unwrap();

        match display.find_print("SETUP") {
            Some(DrawOp::Print { x, y, .. }) => assert_eq!((*x, *y), (10, 132 + 12)),
            other => panic!("title not printed: {:?}", other),
        }
    }

    #[test]
    fn test_value_pill_stays_inside_narrow_block() {
        let mut display = RecordingDisplay::new(480, 320);
        let (levels, clock) = (Levels::released(), MockClock::new(0));
        let mut menu = ConfigMenu::new(&display, levels.pins(), &clock, tables(), 64, 100);
        menu.draw_frame(&mut display, "SETUP").unwrap();
        display.clear_ops();
        menu.render(&mut display, &ConfigState::default()).unwrap();

        // 100 px block centred on 480 px spans x = 190..290
        let inside = |left: i32, right: i32| left >= 190 && right <= 290;
        assert!(display.ops().iter().all(|op| match op {
            DrawOp::FillRect { x, width, .. } => inside(*x, *x + *width as i32),
            DrawOp::FillCircle { cx, r, .. } => inside(*cx - *r as i32, *cx + *r as i32),
            _ => true,
        }));
        match display.find_print("A") {
            Some(DrawOp::Print { x, .. }) => assert_eq!(*x, 200),
            other => panic!("value not printed: {:?}", other),
        }
    }

    #[test]
    fn test_value_pill_position_in_default_block() {
        let display = RecordingDisplay::new(480, 320);
        let (levels, clock) = (Levels::released(), MockClock::new(0));
        let menu = menu(&display, &levels, &clock, tables());
        // block spans 20..460
        assert_eq!(menu.pill_span(), (280, 160));
    }

    #[test]
    fn test_step_index() {
        let table = LabelTable::new(&BYPASS);
        assert_eq!(step_index(&table, 0, Step::Increment), Some(1));
        assert_eq!(step_index(&table, 2, Step::Increment), None);
        assert_eq!(step_index(&table, 0, Step::Decrement), None);
        assert_eq!(step_index(&table, 9, Step::Decrement), Some(1));
        assert_eq!(step_index(&LabelTable::absent(), 0, Step::Increment), None);
    }
}
