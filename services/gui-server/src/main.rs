use gui_server::fonts::Ascii5x7;
use gui_server::testing::test_pattern;

/// Without a preview window nothing closes the panel, so the demo stops on its own.
#[cfg(not(all(feature = "hosted", any(windows, unix))))]
const HEADLESS_FRAMES: u32 = 120;

fn main() {
    env_logger::init();
    log::info!("my PID is {}", std::process::id());

    let (gfx, rx) = gui_server::connect();
    let demo = std::thread::spawn(move || {
        let mut frame = 0u32;
        loop {
            #[cfg(not(all(feature = "hosted", any(windows, unix))))]
            if frame >= HEADLESS_FRAMES * 3 {
                break;
            }
            match test_pattern(&gfx, frame) {
                Ok(true) => frame = frame.wrapping_add(3),
                Ok(false) => {
                    log::info!("display closed");
                    break;
                }
                Err(e) => {
                    log::error!("demo stopped: {}", e);
                    break;
                }
            }
        }
        gfx.quit().ok();
    });

    // the preview window has to live on the main thread on some hosts
    #[cfg(all(feature = "hosted", any(windows, unix)))]
    let display = gui_server::backend::HostedDisplay::new();
    #[cfg(not(all(feature = "hosted", any(windows, unix))))]
    let display = lcd_gui::FrameBuffer565::new(gui_server::platform::WIDTH, gui_server::platform::HEIGHT);

    gui_server::serve(display, Ascii5x7, rx);
    if demo.join().is_err() {
        log::error!("demo thread panicked");
    }
}
