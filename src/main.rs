// What you SEE:
// • Left: the reference canvas (a rectangle in the model color).
// • Middle: the drawing canvas (the same rectangle in the user color).
// • Right: the result (blue = matched pixel, red = missed pixel).
// • Below: similarity, counts, tolerance and both colors.
// Keys: Q/A W/S E/D model R/G/B, U/J I/K O/L user R/G/B,
//       Up/Down tolerance (Shift = x10), Backspace reset, ESC quits.

use color_match::draw::{Control, Drawer, blit_rgba, draw_outline, draw_text_5x7, fill_rect};
use color_match::error::Error;
use color_match::report::Report;
use color_match::scene::Scene;
use color_match::session::{Evaluation, Session, Settings};
use color_match::types::{FrameBuffer, pack_rgb};
use log::info;

const GAP: usize = 16; // space around and between panels
const HUD_HEIGHT: usize = 48;
const PAGE: u32 = 0x00_FF_FF_FF; // canvas background (transparent pixels)
const BACKDROP: u32 = 0x00_2B_2B_2B;
const OUTLINE: u32 = 0x00_80_80_80;
const TEXT: u32 = 0x00_FF_FF_FF;

fn main() -> Result<(), Error> {
    env_logger::init();

    /* --- Configuration: defaults plus optional environment overrides --- */
    let mut session = Session::new(Scene::default(), Settings::from_env());
    let (cw, ch) = (session.scene.width as usize, session.scene.height as usize);
    info!(
        "start: model {} user {} tolerance {:.1}",
        session.settings.model_color.to_hex(),
        session.settings.user_color.to_hex(),
        session.settings.tolerance
    );

    /* --- Window: three panels in a row with the HUD underneath --- */
    let width = 3 * cw + 4 * GAP;
    let height = ch + 2 * GAP + HUD_HEIGHT;
    let mut drawer = Drawer::new("Color Match", width, height)?;
    let mut screen = FrameBuffer::new(width, height, BACKDROP);

    // Recompute only when a control changed; the first frame always computes.
    let mut dirty = true;

    while drawer.is_open() && !drawer.esc_pressed() {
        for control in drawer.controls() {
            apply(&mut session, control);
            dirty = true;
        }

        if dirty {
            let eval = session.evaluate()?;
            let report = Report::new(&eval.comparison.counts);
            info!("{report}");
            render(&mut screen, &session, &eval, &report);
            dirty = false;
        }

        drawer.present(&screen)?;
    }

    Ok(())
}

fn apply(session: &mut Session, control: Control) {
    match control {
        Control::Model(channel, delta) => session.settings.nudge_model(channel, delta),
        Control::User(channel, delta) => session.settings.nudge_user(channel, delta),
        Control::Tolerance(delta) => session.settings.nudge_tolerance(delta),
        Control::Reset => session.reset(),
    }
}

/// Redraw panels and HUD from one evaluation.
fn render(screen: &mut FrameBuffer, session: &Session, eval: &Evaluation, report: &Report) {
    screen.clear(BACKDROP);

    let (cw, ch) = (session.scene.width as i32, session.scene.height as i32);
    let panels = [&eval.reference, &eval.drawing, &eval.comparison.result];
    for (i, img) in panels.into_iter().enumerate() {
        let x = GAP as i32 + i as i32 * (cw + GAP as i32);
        let y = GAP as i32;
        draw_outline(screen, x, y, cw, ch, OUTLINE);
        blit_rgba(screen, img, x, y, PAGE);
    }

    let settings = &session.settings;
    let hud_y = ch + 2 * GAP as i32;
    draw_text_5x7(screen, GAP as i32, hud_y, &report.to_string(), TEXT);

    let line2 = format!(
        "TOL: {:.1}  MODEL {}  USER {}",
        settings.tolerance,
        settings.model_color.to_hex(),
        settings.user_color.to_hex()
    );
    draw_text_5x7(screen, GAP as i32, hud_y + 12, &line2, TEXT);

    // Color swatches after the second line, like the picker previews.
    let swatch_x = GAP as i32 + 6 * line2.len() as i32 + 8;
    let m = settings.model_color;
    let u = settings.user_color;
    fill_rect(screen, swatch_x, hud_y + 11, 9, 9, pack_rgb(m.r, m.g, m.b));
    fill_rect(screen, swatch_x + 14, hud_y + 11, 9, 9, pack_rgb(u.r, u.g, u.b));

    draw_text_5x7(
        screen,
        GAP as i32,
        hud_y + 24,
        "QA WS ED MODEL RGB | UJ IK OL USER RGB | UP/DOWN TOL | BACKSPACE RESET",
        OUTLINE,
    );
}
