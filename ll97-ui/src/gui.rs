use gpui::{
    AnyElement, App, AppContext, Context, InteractiveElement, IntoElement, KeyBinding, Menu,
    MenuItem, ParentElement, Styled, Window,
};
use gpui_component::{h_flex, v_flex};

use crate::components::{CalculatorForm, make_button};
use crate::{Quit, quit};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "LL97 Calculator".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Builds the primary window content.
///
/// Returns a closure suitable for passing to `AppWindow::set_content`,
/// producing the calculator form and its submit/reset row on each render
/// frame.
pub fn build_main_content(
    window: &mut Window,
    app_cx: &mut App,
) -> impl Fn() -> AnyElement + 'static {
    let form = app_cx.new(|form_cx: &mut Context<CalculatorForm>| {
        CalculatorForm::new(window, form_cx)
    });

    move || {
        v_flex()
            .size_full()
            .p_5()
            .gap_4()
            .child(form.clone())
            .child(
                h_flex()
                    .id("form-actions")
                    .p_1()
                    .gap_4()
                    .items_center()
                    .justify_center()
                    .child({
                        let form_handle = form.clone();
                        make_button("submit", "Submit", move |_, _, cx: &mut App| {
                            form_handle.update(cx, |form, form_cx| form.submit(form_cx));
                        })
                    })
                    .child({
                        let form_handle = form.clone();
                        make_button("reset", "Reset", move |_, window, cx: &mut App| {
                            form_handle.update(cx, |form, form_cx| form.reset(window, form_cx));
                        })
                    }),
            )
            .into_any_element()
    }
}
