#![allow(non_snake_case)]
//! The About Me screen.
//!
//! `Header` is a pure function of the controller; `HeaderUiElement` owns the
//! controller in saveable state and wires the callbacks.

use aboutme_core::prelude::*;
use aboutme_ui::*;

use crate::nickname::NicknameRevealController;
use crate::strings;

pub const TITLE: &str = "About Me";
pub const NICKNAME_LABEL: &str = "What is your Nickname?";
pub const DONE: &str = "Done";
pub const STAR_DESCRIPTION: &str = "Star";

/// Saved-state key of the nickname controller.
pub const NICKNAME_STATE_KEY: &str = "about_me.nickname";

/// Root composable with the bundled resources in the locale provided by the
/// runner (`en` when none is).
pub fn app(s: &mut Scheduler) -> View {
    root(s, strings::bundled(), current_locale())
}

/// Root composable for `locale`, for handing to a runner.
pub fn app_for_locale(locale: Locale) -> impl FnMut(&mut Scheduler) -> View {
    let resources = strings::bundled();
    move |s| root(s, resources.clone(), locale.clone())
}

pub fn root(_s: &mut Scheduler, resources: Resources, locale: Locale) -> View {
    with_resources(resources, locale, || {
        AboutMeTheme(|| {
            Surface(
                Modifier::new().fill_max_size().background(theme().background),
                MainLayout(&string_resource(StringRes::Name)),
            )
        })
    })
}

pub fn AboutMeTheme(content: impl FnOnce() -> View) -> View {
    with_theme(Theme::default(), || {
        with_typography(Typography::default(), || with_shapes(Shapes::default(), content))
    })
}

pub fn MainLayout(name: &str) -> View {
    Scaffold(
        TopAppBar(
            Text(TITLE),
            Modifier::new()
                .background(Color::GREEN)
                .clip_rounded(shapes().medium),
        ),
        |inner_padding| {
            Column(Modifier::new().padding_values(PaddingValues {
                left: 8.0,
                right: 8.0,
                top: inner_padding.top,
                bottom: inner_padding.bottom,
            }))
            .child((
                HeaderUiElement(name, Modifier::new()),
                ScrollableContent(Modifier::new()),
            ))
        },
    )
}

pub fn HeaderUiElement(name: &str, modifier: Modifier) -> View {
    let controller = remember_saveable(NICKNAME_STATE_KEY, NicknameRevealController::new);
    let current = controller.get();
    Header(
        name,
        &current,
        modifier,
        {
            let controller = controller.clone();
            move |text| controller.update(|c| c.set_nickname(text))
        },
        move || {
            controller.update(|c| {
                c.confirm();
            })
        },
    )
}

/// Name heading, the nickname field or label, the confirm button and the
/// star. The field is only present while editing.
pub fn Header(
    name: &str,
    controller: &NicknameRevealController,
    modifier: Modifier,
    on_change: impl Fn(String) + 'static,
    on_confirm: impl Fn() + 'static,
) -> View {
    let revealed = controller.is_revealed();
    let t = typography();
    Column(modifier.fill_max_width())
        .arrangement(Arrangement::Top)
        .alignment(Alignment::CenterHorizontally)
        .child((
            Text(name)
                .size(t.headline_large)
                .align(TextAlign::Center)
                .modifier(Modifier::new().fill_max_width().padding_top(8.0)),
            (!revealed).then(|| {
                TextField(
                    controller.nickname(),
                    NICKNAME_LABEL,
                    Modifier::new().fill_max_width(),
                    on_change,
                )
                .color(Color::BLACK)
            }),
            AnimatedVisibility(revealed, || {
                Text(controller.nickname())
                    .size(t.headline_medium)
                    .align(TextAlign::Center)
                    .modifier(Modifier::new().fill_max_width().padding_top(8.0))
            }),
            Button(DONE, on_confirm)
                .size(t.body_medium)
                .align(TextAlign::Center)
                .modifier(Modifier::new().padding_top(8.0)),
            Image(
                painter_resource(DrawableRes::BaselineStarBorder24),
                Some(STAR_DESCRIPTION),
                Modifier::new().size(48.0, 48.0).padding_top(8.0),
            ),
        ))
}

pub fn ScrollableContent(modifier: Modifier) -> View {
    LazyColumn(modifier.clone().fill_max_width(), |list| {
        list.item(|| {
            Text(string_resource(StringRes::Bio))
                .size(typography().body_medium)
                .modifier(modifier.fill_max_width())
        })
    })
    .arrangement(Arrangement::Top)
    .alignment(Alignment::CenterHorizontally)
}

/// Design-time rendering with a placeholder name.
pub fn AboutMePreview() -> View {
    with_resources(strings::bundled(), Locale::default(), || {
        AboutMeTheme(|| {
            Surface(
                Modifier::new().fill_max_size().background(theme().background),
                MainLayout("Test Name"),
            )
        })
    })
}
