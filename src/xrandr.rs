//! Render an arrangement as an `xrandr` command line.
//!
//! Only the text is produced here; running it is up to the caller.

use crate::display::Display;
use crate::layout::Selection;

/// Build the `xrandr` invocation that applies the desired state of
/// `displays`.
///
/// Every display is addressed: active ones get `--mode`, `--rate` and
/// `--pos` (plus `--primary` for the selected primary), the rest get
/// `--off`.  With `dpi` set, `--dpi` carries the selection's DPI.
pub fn render_cmd(displays: &[Display], selection: &Selection, dpi: bool) -> String {
    let mut cmd = String::from("xrandr");
    if dpi {
        cmd.push_str(&format!(" --dpi {}", selection.dpi));
    }
    for (i, display) in displays.iter().enumerate() {
        cmd.push_str(&format!(" --output {}", display.name()));
        match (display.desired_active(), display.desired_mode(), display.desired_pos()) {
            (true, Some(mode), Some(pos)) => {
                cmd.push_str(&format!(
                    " --mode {}x{} --rate {} --pos {}x{}",
                    mode.width, mode.height, mode.refresh, pos.x, pos.y
                ));
                if selection.primary == Some(i) {
                    cmd.push_str(" --primary");
                }
            }
            _ => cmd.push_str(" --off"),
        }
    }
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplayState;
    use crate::layout::{activate_displays, ltr_displays};
    use crate::mode::Mode;
    use crate::traits::AllowAll;

    fn connected(name: &str, mode: Mode) -> Display {
        Display::new(name, DisplayState::Connected, vec![mode], None, None, None, None).unwrap()
    }

    fn displays() -> Vec<Display> {
        vec![
            connected("DP-1", Mode::new(2560, 1440, 144)),
            connected("HDMI-1", Mode::new(1920, 1080, 60)),
            Display::new("VGA-1", DisplayState::Disconnected, vec![], None, None, None, None)
                .unwrap(),
        ]
    }

    #[test]
    fn renders_active_and_off_outputs() {
        let mut ds = displays();
        let sel = activate_displays(&mut ds, "HDMI-1", &AllowAll).unwrap();
        ltr_displays(&mut ds).unwrap();
        assert_eq!(
            render_cmd(&ds, &sel, true),
            "xrandr --dpi 96 \
             --output DP-1 --mode 2560x1440 --rate 144 --pos 0x0 \
             --output HDMI-1 --mode 1920x1080 --rate 60 --pos 2560x0 --primary \
             --output VGA-1 --off"
        );
    }

    #[test]
    fn omits_dpi_when_disabled() {
        let ds = displays();
        let cmd = render_cmd(&ds, &Selection::default(), false);
        assert_eq!(
            cmd,
            "xrandr --output DP-1 --off --output HDMI-1 --off --output VGA-1 --off"
        );
    }
}
