//! Sprite-sheet push button.
//!
//! Every visual state is composited once, label included, when the button
//! is created. After that the button only tracks which state it is in and
//! blits the matching surface.

use cairn_render::{Filter, Rgba, Surface, SurfaceFactory};

use super::core::{Widget, WidgetBase};
use crate::assets::{AssetLoader, AssetResult, Font};
use crate::error::{UiError, UiResult};
use crate::input::{MouseEvent, MouseMoveEvent};
use crate::segmented::{self, to_offset};
use crate::style::StyleRegistry;

/// Visual state of a button; the value indexes its surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    /// Idle.
    #[default]
    Default = 0,
    /// Held down.
    Pressed = 1,
    /// Latched on.
    Toggled = 2,
    /// Latched on and held down.
    PressedToggled = 3,
}

impl ButtonState {
    /// All states in surface order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Pressed, Self::Toggled, Self::PressedToggled];

    /// Surface index for this state.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the state stored at surface `index`, if it has a name.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Default),
            1 => Some(Self::Pressed),
            2 => Some(Self::Toggled),
            3 => Some(Self::PressedToggled),
            _ => None,
        }
    }

    /// Returns true for the held-down states.
    #[must_use]
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::Pressed | Self::PressedToggled)
    }

    /// Label displacement baked into this state's surface.
    ///
    /// Held-down states push the label 2px left and 2px down.
    #[must_use]
    pub const fn label_offset(self) -> (i32, i32) {
        if self.is_pressed() {
            (-2, 2)
        } else {
            (0, 0)
        }
    }
}

/// A clickable button with a baked-in label.
#[derive(Debug)]
pub struct Button<S: Surface> {
    base: WidgetBase,
    label: String,
    style: String,
    width: u32,
    height: u32,
    state: ButtonState,
    surfaces: Vec<S>,
}

impl<S: Surface> Button<S> {
    /// Color every label is drawn in.
    pub const LABEL_COLOR: Rgba = Rgba::rgb(100, 100, 100);

    /// Builds a button labelled `text` in the style registered as `style`.
    ///
    /// Loads the style's sprite sheet and font, then composites one surface
    /// per visual state the sheet holds. The button comes back visible, in
    /// [`ButtonState::Default`].
    ///
    /// # Errors
    ///
    /// Any failure aborts construction: unknown style, missing or broken
    /// assets, a sheet too short for one state, or a failed allocation,
    /// composite or label draw.
    pub fn create<L, F>(
        text: &str,
        style: &str,
        styles: &StyleRegistry,
        assets: &L,
        renderer: &F,
    ) -> UiResult<Self>
    where
        L: AssetLoader<S>,
        F: SurfaceFactory<Surface = S>,
    {
        let config = styles.resolve(style)?;

        let animation = assets
            .load_animation(&config.animation, &config.palette)
            .map_err(|source| UiError::ResourceLoad {
                resource: config.animation.clone(),
                source,
            })?;

        let (width, height) =
            segmented::grid_size::<S, _>(&animation, config.segments_x, config.segments_y)?;

        let mut font = assets
            .load_font(config.font)
            .map_err(|source| UiError::ResourceLoad {
                resource: config.font.to_string(),
                source,
            })?;

        let (text_x, text_y) =
            label_origin((width, height), font.text_metrics(text), config.text_offset)
                .ok_or_else(|| {
                    UiError::InvalidConfig(format!("style {style}: label position overflows"))
                })?;

        let surface_count = segmented::state_count::<S, _>(&animation, config)?;
        let mut surfaces = Vec::with_capacity(surface_count);

        for state in 0..surface_count {
            let mut surface = renderer
                .new_surface(width, height, Filter::Nearest)
                .map_err(|source| UiError::SurfaceAllocation {
                    width,
                    height,
                    source,
                })?;

            segmented::render_segmented(
                &animation,
                config.segments_x,
                config.segments_y,
                state,
                &mut surface,
            )
            .map_err(|source| UiError::Composite { state, source })?;

            font.set_color(Self::LABEL_COLOR);

            let (dx, dy) = ButtonState::from_index(state).map_or((0, 0), ButtonState::label_offset);
            let (x, y) = text_x
                .checked_add(dx)
                .zip(text_y.checked_add(dy))
                .ok_or_else(|| {
                    UiError::InvalidConfig(format!("style {style}: label position overflows"))
                })?;
            draw_label(&font, text, x, y, &mut surface)
                .map_err(|source| UiError::TextDraw { state, source })?;

            surfaces.push(surface);
        }

        let mut base = WidgetBase::new();
        base.set_visible(true);

        tracing::debug!(
            style,
            label = text,
            width,
            height,
            states = surface_count,
            "built button"
        );

        Ok(Self {
            base,
            label: text.to_string(),
            style: style.to_string(),
            width,
            height,
            state: ButtonState::Default,
            surfaces,
        })
    }

    /// Mouse button pressed over the button. Consumes the event.
    ///
    /// Handlers ignore [`WidgetBase::is_enabled`]; skipping disabled
    /// widgets is the dispatcher's job.
    pub fn on_mouse_button_down(&mut self, _event: &MouseEvent) -> bool {
        self.transition(ButtonState::Pressed);
        false
    }

    /// Mouse button released over the button. Consumes the event.
    pub fn on_mouse_button_up(&mut self, _event: &MouseEvent) -> bool {
        self.transition(ButtonState::Default);
        false
    }

    /// Pointer left the button. Consumes the event.
    pub fn on_mouse_leave(&mut self, _event: &MouseMoveEvent) -> bool {
        self.transition(ButtonState::Default);
        false
    }

    /// Forces a state.
    ///
    /// The input handlers only ever produce `Default` and `Pressed`; this is
    /// the hook toggle behaviour outside the button uses to latch it.
    pub fn set_state(&mut self, state: ButtonState) {
        self.transition(state);
    }

    fn transition(&mut self, next: ButtonState) {
        if self.state != next {
            tracing::trace!(label = %self.label, from = ?self.state, to = ?next, "button state");
        }
        self.state = next;
    }

    /// Blits the current state's surface onto `target`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::StateOutOfRange`] when the sheet had no frames for
    /// the current state, or [`UiError::Render`] if the blit fails.
    pub fn render(&self, target: &mut S) -> UiResult<()> {
        let index = self.state.index();
        let surface = self.surfaces.get(index).ok_or(UiError::StateOutOfRange {
            state: index,
            surfaces: self.surfaces.len(),
        })?;
        target.render(surface)?;
        Ok(())
    }

    /// Returns the `(width, height)` footprint.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Number of pre-rendered visual states.
    #[must_use]
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Returns the pre-rendered surface for `state`.
    #[must_use]
    pub fn surface(&self, state: ButtonState) -> Option<&S> {
        self.surfaces.get(state.index())
    }

    /// Returns the label text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the style name the button was built from.
    #[must_use]
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Returns the shared widget state.
    #[must_use]
    pub fn base(&self) -> &WidgetBase {
        &self.base
    }

    /// Returns mutable access to the shared widget state.
    pub fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

/// Top-left corner of a label of size `text` centered in `size`, moved down
/// by `text_offset`. `None` if the position does not fit in an `i32`.
fn label_origin(size: (u32, u32), text: (u32, u32), text_offset: i32) -> Option<(i32, i32)> {
    let x = to_offset(size.0 / 2).checked_sub(to_offset(text.0 / 2))?;
    let y = to_offset(size.1 / 2)
        .checked_sub(to_offset(text.1 / 2))?
        .checked_add(text_offset)?;
    Some((x, y))
}

/// Draws `text` at `(x, y)`; the translation is popped whatever the outcome.
fn draw_label<S, T>(font: &T, text: &str, x: i32, y: i32, surface: &mut S) -> AssetResult<()>
where
    S: Surface,
    T: Font<S>,
{
    let mut at = surface.translate(x, y);
    font.render_text(text, &mut at)
}

impl<S: Surface> Widget<S> for Button<S> {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn handle_mouse_down(&mut self, event: &MouseEvent) -> bool {
        self.on_mouse_button_down(event)
    }

    fn handle_mouse_up(&mut self, event: &MouseEvent) -> bool {
        self.on_mouse_button_up(event)
    }

    fn handle_mouse_leave(&mut self, event: &MouseMoveEvent) -> bool {
        self.on_mouse_leave(event)
    }

    fn render(&self, target: &mut S) -> UiResult<()> {
        Button::render(self, target)
    }

    fn size(&self) -> (u32, u32) {
        Button::size(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{Animation, AssetError};
    use crate::input::MouseButton;
    use crate::software::{BlockFont, IndexedFrame, Palette, SoftwareAssets, SpriteSheet};
    use crate::style::{ButtonStyleConfig, FontStyle};
    use cairn_render::{PixelSurface, SoftwareRenderer};

    const SHEET: &str = "/ui/plain.dc6";
    const PAL: &str = "/pal/units.dat";

    fn click() -> MouseEvent {
        MouseEvent::new(4, 4, MouseButton::Left)
    }

    /// A 1x1 style whose sheet holds `frames` 10x6 frames, frame `i` in index `i + 1`.
    fn plain(frames: u8) -> (StyleRegistry, SoftwareAssets) {
        let styles = StyleRegistry::new()
            .with_style("plain", ButtonStyleConfig::new(SHEET, FontStyle::Font16).with_palette(PAL))
            .unwrap();
        let sheet = SpriteSheet::new((0..frames).map(|i| IndexedFrame::solid(10, 6, i + 1)).collect());
        let assets = SoftwareAssets::new()
            .with_sheet(SHEET, sheet)
            .with_palette(PAL, Palette::default())
            .with_font(FontStyle::Font16, BlockFont::new(2, 2));
        (styles, assets)
    }

    /// 4x4 frames; frame 0 draws white, every later frame fails to draw.
    struct TornAnimation;

    impl Animation<PixelSurface> for TornAnimation {
        fn frame_count(&self) -> usize {
            2
        }

        fn frame_size(&self, _index: usize) -> AssetResult<(u32, u32)> {
            Ok((4, 4))
        }

        fn render_frame(&self, index: usize, target: &mut PixelSurface) -> AssetResult<()> {
            if index > 0 {
                return Err(AssetError::Decode {
                    path: "torn.dc6".to_string(),
                    reason: format!("frame {index} truncated"),
                });
            }
            target.fill_rect(0, 0, 4, 4, Rgba::WHITE);
            Ok(())
        }
    }

    struct TornAssets;

    impl AssetLoader<PixelSurface> for TornAssets {
        type Animation = TornAnimation;
        type Font = BlockFont;

        fn load_animation(&self, _path: &str, _palette: &str) -> AssetResult<TornAnimation> {
            Ok(TornAnimation)
        }

        fn load_font(&self, _style: FontStyle) -> AssetResult<BlockFont> {
            Ok(BlockFont::new(2, 2))
        }
    }

    fn build(frames: u8, text: &str) -> Button<PixelSurface> {
        let (styles, assets) = plain(frames);
        Button::create(text, "plain", &styles, &assets, &SoftwareRenderer::new()).unwrap()
    }

    #[test]
    fn test_state_indices() {
        for (i, state) in ButtonState::ALL.into_iter().enumerate() {
            assert_eq!(state.index(), i);
            assert_eq!(ButtonState::from_index(i), Some(state));
        }
        assert_eq!(ButtonState::from_index(4), None);
        assert_eq!(ButtonState::Pressed.label_offset(), (-2, 2));
        assert_eq!(ButtonState::PressedToggled.label_offset(), (-2, 2));
        assert_eq!(ButtonState::Toggled.label_offset(), (0, 0));
    }

    #[test]
    fn test_fresh_button() {
        let button = build(4, "GO");

        assert_eq!(button.size(), (10, 6));
        assert_eq!(button.surface_count(), 4);
        assert_eq!(button.state(), ButtonState::Default);
        assert!(button.base().is_visible());
        assert_eq!(button.label(), "GO");
        assert_eq!(button.style(), "plain");
    }

    #[test]
    fn test_transitions() {
        let mut button = build(2, "GO");

        assert!(!button.on_mouse_button_down(&click()));
        assert_eq!(button.state(), ButtonState::Pressed);

        assert!(!button.on_mouse_leave(&MouseMoveEvent::new(40, 40)));
        assert_eq!(button.state(), ButtonState::Default);

        button.on_mouse_button_down(&click());
        assert!(!button.on_mouse_button_up(&click()));
        assert_eq!(button.state(), ButtonState::Default);

        assert!(!button.on_mouse_button_up(&click()));
        assert_eq!(button.state(), ButtonState::Default);
    }

    #[test]
    fn test_render_selects_state_surface() {
        let mut button = build(4, "");
        let mut screen = SoftwareRenderer::new().new_surface(10, 6, Filter::Nearest).unwrap();

        button.render(&mut screen).unwrap();
        assert_eq!(screen.pixel(0, 0), Some(Rgba::rgb(1, 1, 1)));

        button.set_state(ButtonState::Toggled);
        button.render(&mut screen).unwrap();
        assert_eq!(screen.pixel(0, 0), Some(Rgba::rgb(3, 3, 3)));
    }

    #[test]
    fn test_render_state_out_of_range() {
        let mut button = build(2, "GO");
        let mut screen = SoftwareRenderer::new().new_surface(10, 6, Filter::Nearest).unwrap();

        button.set_state(ButtonState::PressedToggled);

        assert_eq!(
            button.render(&mut screen),
            Err(UiError::StateOutOfRange { state: 3, surfaces: 2 })
        );
    }

    #[test]
    fn test_label_draw_failure_releases_translation() {
        let font = BlockFont::new(2, 2);
        let mut surface = SoftwareRenderer::new().new_surface(8, 8, Filter::Nearest).unwrap();

        let result = draw_label(&font, "bad\u{7}", 3, 3, &mut surface);

        assert!(result.is_err());
        assert_eq!(surface.translation_depth(), 0);
    }

    #[test]
    fn test_control_character_label_fails_construction() {
        let (styles, assets) = plain(2);
        let result: UiResult<Button<PixelSurface>> =
            Button::create("A\nB", "plain", &styles, &assets, &SoftwareRenderer::new());

        assert!(matches!(result, Err(UiError::TextDraw { state: 0, .. })));
    }

    #[test]
    fn test_dispatch_through_widget_trait() {
        let mut widgets: Vec<Box<dyn Widget<PixelSurface>>> = vec![Box::new(build(2, "GO"))];

        for widget in &mut widgets {
            assert!(!widget.handle_mouse_down(&click()));
            assert_eq!(widget.size(), (10, 6));
        }

        let mut screen = SoftwareRenderer::new().new_surface(10, 6, Filter::Nearest).unwrap();
        widgets[0].render(&mut screen).unwrap();
        assert_eq!(screen.pixel(9, 5), Some(Rgba::rgb(2, 2, 2)));
    }

    #[test]
    fn test_label_origin() {
        assert_eq!(label_origin((10, 6), (4, 2), 0), Some((3, 2)));
        assert_eq!(label_origin((10, 6), (4, 2), -5), Some((3, -3)));
        assert_eq!(label_origin((10, 6), (30, 2), 0), Some((-10, 2)));
        assert_eq!(label_origin((10, 6), (4, 2), i32::MAX), None);
        assert_eq!(label_origin((u32::MAX, u32::MAX), (0, 0), 1), None);
    }

    #[test]
    fn test_huge_text_offset_never_reaches_construction() {
        let (_, assets) = plain(2);
        let styles = StyleRegistry::from_toml_str(&format!(
            "[styles.plain]\nanimation = \"{SHEET}\"\npalette = \"{PAL}\"\nfont = \"font16\"\ntext_offset = 2147483647\n"
        ));

        assert!(matches!(styles, Err(UiError::InvalidConfig(_))));

        let styles = StyleRegistry::new()
            .with_style(
                "plain",
                ButtonStyleConfig::new(SHEET, FontStyle::Font16)
                    .with_palette(PAL)
                    .with_text_offset(ButtonStyleConfig::MAX_TEXT_OFFSET),
            )
            .unwrap();
        let button: UiResult<Button<PixelSurface>> =
            Button::create("OK", "plain", &styles, &assets, &SoftwareRenderer::new());
        assert!(button.is_ok());
    }

    #[test]
    fn test_composite_failure_aborts_construction() {
        let styles = StyleRegistry::new()
            .with_style("torn", ButtonStyleConfig::new("/ui/torn.dc6", FontStyle::Font16))
            .unwrap();

        let result: UiResult<Button<PixelSurface>> =
            Button::create("GO", "torn", &styles, &TornAssets, &SoftwareRenderer::new());

        assert!(matches!(
            result,
            Err(UiError::Composite { state: 1, source: AssetError::Decode { .. } })
        ));
    }

    #[test]
    fn test_composite_failure_releases_translation() {
        let mut surface = SoftwareRenderer::new().new_surface(8, 4, Filter::Nearest).unwrap();

        let result = segmented::render_segmented(&TornAnimation, 2, 1, 0, &mut surface);

        assert!(result.is_err());
        assert_eq!(surface.translation_depth(), 0);
        assert_eq!(surface.pixel(0, 0), Some(Rgba::WHITE));
        assert_eq!(surface.pixel(4, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_disabled_flag_is_left_to_the_dispatcher() {
        let mut button = build(2, "GO");
        button.base_mut().set_enabled(false);

        assert!(!button.on_mouse_button_down(&click()));
        assert_eq!(button.state(), ButtonState::Pressed);
        assert!(!button.base().is_enabled());
    }
}
