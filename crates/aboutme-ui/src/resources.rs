//! Static string and drawable resources, looked up by id.
//!
//! Strings are stored per locale tag. A lookup in a locale that lacks the
//! string falls back to the table's default locale. There is no plural or
//! format handling.

use std::collections::HashMap;
use std::rc::Rc;

use aboutme_core::error::{Error, Result};
use aboutme_core::{local, with_local};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringRes {
    Name,
    Bio,
}

impl StringRes {
    pub fn id(self) -> &'static str {
        match self {
            StringRes::Name => "name",
            StringRes::Bio => "bio",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawableRes {
    BaselineStarBorder24,
}

impl DrawableRes {
    pub fn id(self) -> &'static str {
        match self {
            DrawableRes::BaselineStarBorder24 => "baseline_star_border_24",
        }
    }
}

/// BCP 47-ish language tag, compared verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locale(pub String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Locale(tag.into())
    }

    /// The bare language, e.g. `de` for `de-AT`.
    pub fn language(&self) -> &str {
        self.0.split(['-', '_']).next().unwrap_or(&self.0)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::new("en")
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Default)]
struct Tables {
    default_locale: Locale,
    strings: HashMap<(Locale, StringRes), String>,
    drawables: HashMap<DrawableRes, String>,
}

/// Cheaply cloneable resource table.
#[derive(Clone, Debug, Default)]
pub struct Resources {
    inner: Rc<Tables>,
}

impl Resources {
    pub fn builder(default_locale: Locale) -> ResourcesBuilder {
        ResourcesBuilder {
            tables: Tables {
                default_locale,
                ..Tables::default()
            },
        }
    }

    pub fn default_locale(&self) -> &Locale {
        &self.inner.default_locale
    }

    /// Exact tag first, then its bare language, then the default locale.
    pub fn string(&self, id: StringRes, locale: &Locale) -> Result<&str> {
        let t = &self.inner;
        let lang = Locale::new(locale.language());
        [locale, &lang, &t.default_locale]
            .into_iter()
            .find_map(|l| t.strings.get(&(l.clone(), id)))
            .map(String::as_str)
            .ok_or_else(|| Error::MissingString {
                id: id.id().to_string(),
                locale: locale.to_string(),
            })
    }

    pub fn drawable(&self, id: DrawableRes) -> Result<&str> {
        self.inner
            .drawables
            .get(&id)
            .map(String::as_str)
            .ok_or_else(|| Error::MissingDrawable(id.id().to_string()))
    }
}

pub struct ResourcesBuilder {
    tables: Tables,
}

impl ResourcesBuilder {
    pub fn string(mut self, locale: Locale, id: StringRes, value: impl Into<String>) -> Self {
        self.tables.strings.insert((locale, id), value.into());
        self
    }

    pub fn drawable(mut self, id: DrawableRes, asset: impl Into<String>) -> Self {
        self.tables.drawables.insert(id, asset.into());
        self
    }

    pub fn build(self) -> Resources {
        Resources {
            inner: Rc::new(self.tables),
        }
    }
}

/// Provides `resources` and the active `locale` to everything composed in `f`.
pub fn with_resources<R>(resources: Resources, locale: Locale, f: impl FnOnce() -> R) -> R {
    with_local(resources, || with_local(locale, f))
}

pub fn current_locale() -> Locale {
    local::<Locale>()
}

pub fn try_string_resource(id: StringRes) -> Result<String> {
    local::<Resources>()
        .string(id, &current_locale())
        .map(str::to_string)
}

/// Resolved string for `id`. A missing string is logged and rendered as its
/// id so the screen still composes.
pub fn string_resource(id: StringRes) -> String {
    try_string_resource(id).unwrap_or_else(|e| {
        log::error!("{e}");
        id.id().to_string()
    })
}

/// Asset name for `id`, with the same fallback as `string_resource`.
pub fn painter_resource(id: DrawableRes) -> String {
    local::<Resources>()
        .drawable(id)
        .map(str::to_string)
        .unwrap_or_else(|e| {
            log::error!("{e}");
            id.id().to_string()
        })
}
