use yew::prelude::*;
use shared::workflow::Theme;

pub struct UseThemeResult {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

/// Light/dark switch, mirrored as a class on the document root
#[hook]
pub fn use_theme() -> UseThemeResult {
    let theme = use_state(Theme::default);

    use_effect_with(*theme, |theme| {
        apply_root_class(*theme);
        || ()
    });

    let toggle = {
        let theme = theme.clone();
        use_callback(*theme, move |_, current: &Theme| {
            theme.set(current.toggled());
        })
    };

    UseThemeResult {
        theme: *theme,
        toggle,
    }
}

fn apply_root_class(theme: Theme) {
    let Some(root) = gloo::utils::document().document_element() else {
        return;
    };

    let classes = root.class_list();
    let _ = classes.remove_2(Theme::Light.class_name(), Theme::Dark.class_name());
    let _ = classes.add_1(theme.class_name());
}
