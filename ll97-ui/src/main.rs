use gpui::{App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions};
use tracing::{error, info};

use ll97_ui::components::{AppWindow, WindowPreferences};
use ll97_ui::{gui, logging};

fn main() {
    logging::init_default_logging();

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(|cx: &mut App| {
            gui::setup_app(cx);

            let preferences = WindowPreferences::default();
            let bounds = Bounds::centered(None, preferences.size, cx);
            let options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("LL97 Calculator".into()),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let opened = cx.open_window(options, |window, cx| {
                let content = gui::build_main_content(window, cx);
                cx.new(|cx| {
                    let mut app_window = AppWindow::new(cx);
                    app_window.set_content(content);
                    app_window
                })
            });

            match opened {
                Ok(_) => info!("main window opened"),
                Err(error) => {
                    error!(%error, "failed to open main window");
                    cx.quit();
                }
            }
        });
}
