//! Section exit and entry effects for the content area.

use ratatui::layout::Rect;

use folio_engine::{EffectStage, SectionEffect, SectionEffectKind};

/// Rows a fading section rises through.
const FADE_UP_ROWS: u16 = 2;
/// Rows a sliding section rises through.
const SLIDE_UP_ROWS: u16 = 6;
/// Columns a section slides in from.
const SLIDE_LEFT_COLUMNS: u16 = 12;
/// Growth of a scaling section as it leaves.
const SCALE_EXIT_GROWTH: f32 = 0.1;

/// Apply a section effect to transform the content rectangle.
///
/// The result always stays inside `viewport`.
#[must_use]
pub fn apply_section_effect(effect: &SectionEffect, base: Rect, viewport: Rect) -> Rect {
    let kind = effect.kind();
    let progress = effect.progress();
    let rect = match effect.stage() {
        EffectStage::Enter => enter_rect(kind, ease_out_cubic(progress), base, viewport),
        EffectStage::Exit => exit_rect(kind, ease_in_cubic(progress), base, viewport),
    };
    rect.intersection(viewport)
}

/// `t` runs from 0 (displaced) to 1 (settled on `base`).
fn enter_rect(kind: SectionEffectKind, t: f32, base: Rect, viewport: Rect) -> Rect {
    match kind {
        SectionEffectKind::FadeUp => rise(base, viewport, t, FADE_UP_ROWS),
        SectionEffectKind::SlideUp => rise(base, viewport, t, SLIDE_UP_ROWS),
        SectionEffectKind::SlideLeft => {
            let viewport_right = viewport.x.saturating_add(viewport.width);
            let offset = ((1.0 - t) * f32::from(SLIDE_LEFT_COLUMNS)).round() as u16;
            let x = base.x.saturating_add(offset).min(viewport_right);
            let width = base.width.min(viewport_right.saturating_sub(x));
            Rect { x, width, ..base }
        }
        SectionEffectKind::Scale => scale_rect(base, viewport, 0.8 + 0.2 * t),
        SectionEffectKind::Fold => fold(base, t),
    }
}

/// `t` runs from 0 (on `base`) to 1 (gone).
fn exit_rect(kind: SectionEffectKind, t: f32, base: Rect, viewport: Rect) -> Rect {
    match kind {
        SectionEffectKind::FadeUp => lift(base, viewport, t, FADE_UP_ROWS),
        SectionEffectKind::SlideUp => lift(base, viewport, t, SLIDE_UP_ROWS),
        SectionEffectKind::SlideLeft => {
            let offset = (t * f32::from(SLIDE_LEFT_COLUMNS)).round() as u16;
            let room = base.x.saturating_sub(viewport.x);
            Rect {
                x: base.x - offset.min(room),
                width: base.width.saturating_sub(offset).max(1),
                ..base
            }
        }
        SectionEffectKind::Scale => scale_rect(base, viewport, 1.0 + SCALE_EXIT_GROWTH * t),
        SectionEffectKind::Fold => fold(base, 1.0 - t),
    }
}

/// Whether content should be drawn dimmed.
#[must_use]
pub fn is_faded(effect: &SectionEffect) -> bool {
    match effect.stage() {
        EffectStage::Enter => {
            matches!(
                effect.kind(),
                SectionEffectKind::FadeUp | SectionEffectKind::Scale
            ) && effect.progress() < 0.4
        }
        // Every section fades on the way out.
        EffectStage::Exit => effect.progress() >= 0.6,
    }
}

fn rise(base: Rect, viewport: Rect, t: f32, rows: u16) -> Rect {
    let viewport_bottom = viewport.y.saturating_add(viewport.height);
    let base_bottom = base.y.saturating_add(base.height);
    let max_offset = viewport_bottom.saturating_sub(base.y);
    let offset = rows.min(max_offset);
    let y_offset = ((1.0 - t) * f32::from(offset)).round() as u16;
    let y = base.y.saturating_add(y_offset);
    Rect {
        y,
        height: base_bottom.min(viewport_bottom).saturating_sub(y),
        ..base
    }
}

/// Moves the top edge up by `rows * t`, within the room `viewport` leaves,
/// and shortens the rect by the rest.
fn lift(base: Rect, viewport: Rect, t: f32, rows: u16) -> Rect {
    let offset = (t * f32::from(rows)).round() as u16;
    let room = base.y.saturating_sub(viewport.y);
    let shift = offset.min(room);
    Rect {
        y: base.y - shift,
        height: base.height.saturating_sub(offset - shift).max(1),
        ..base
    }
}

fn fold(base: Rect, t: f32) -> Rect {
    let height = (f32::from(base.height) * t).round() as u16;
    Rect {
        height: height.clamp(1, base.height.max(1)),
        ..base
    }
}

/// Scale around the center of `base`. Growth is limited to `viewport`.
fn scale_rect(base: Rect, viewport: Rect, scale: f32) -> Rect {
    let width = ((f32::from(base.width) * scale).round() as u16)
        .max(1)
        .min(viewport.width);
    let height = ((f32::from(base.height) * scale).round() as u16)
        .max(1)
        .min(viewport.height);
    let center_x = base.x + base.width / 2;
    let center_y = base.y + base.height / 2;
    let x = center_x
        .saturating_sub(width / 2)
        .clamp(viewport.x, viewport.right().saturating_sub(width));
    let y = center_y
        .saturating_sub(height / 2)
        .clamp(viewport.y, viewport.bottom().saturating_sub(height));
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn ease_in_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
